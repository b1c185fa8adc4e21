//! Report rendering for the kbsync binary
//!
//! A [`SyncReport`] is rendered either as human-readable lines (the default
//! for interactive use and CI logs) or as a single JSON object (`--json`)
//! for downstream tooling.

use kbsync_sync::engine::SyncReport;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders the end-of-run report in the selected format.
///
/// Rendering is purely informational: errors listed here have already been
/// logged as they happened and never affect the exit status.
pub fn render_report(format: OutputFormat, report: &SyncReport) {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Human => render_human(report),
    }
}

fn render_json(report: &SyncReport) {
    let json = serde_json::json!({
        "created": report.created,
        "updated": report.updated,
        "skipped": report.skipped,
        "errors": report.errors,
        "duration_ms": report.duration_ms,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&json).unwrap_or_default()
    );
}

fn render_human(report: &SyncReport) {
    let duration_display = if report.duration_ms >= 1000 {
        format!("{:.1}s", report.duration_ms as f64 / 1000.0)
    } else {
        format!("{}ms", report.duration_ms)
    };

    if report.pushed() == 0 && report.errors.is_empty() {
        success("Nothing to sync");
    } else {
        success(&format!("Sync completed in {}", duration_display));
    }

    if report.created > 0 {
        info(&format!(
            "Created: {} document{}",
            report.created,
            plural(report.created as usize)
        ));
    }
    if report.updated > 0 {
        info(&format!(
            "Updated: {} document{}",
            report.updated,
            plural(report.updated as usize)
        ));
    }
    if report.skipped > 0 {
        info(&format!(
            "Skipped: {} missing file{}",
            report.skipped,
            plural(report.skipped as usize)
        ));
    }

    if !report.errors.is_empty() {
        error(&format!(
            "{} error{} occurred:",
            report.errors.len(),
            plural(report.errors.len())
        ));
        for err in &report.errors {
            info(&format!("- {}", err));
        }
    }
}

fn success(message: &str) {
    println!("\u{2713} {}", message);
}

fn error(message: &str) {
    eprintln!("\u{2717} Error: {}", message);
}

fn info(message: &str) {
    println!("  {}", message);
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
