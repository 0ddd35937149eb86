use std::path::Path;

use tracing::info;

use crate::errors::CrosscheckError;
use crate::models::Report;

/// Render a report as plain text, pages separated by a form feed.
pub fn render_text(report: &Report) -> String {
    report
        .pages
        .iter()
        .map(|page| {
            page.lines
                .iter()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\u{0C}\n")
}

/// Write the rendered report to disk.
pub fn write_report(path: &Path, report: &Report) -> Result<(), CrosscheckError> {
    std::fs::write(path, render_text(report))?;
    info!(path = %path.display(), pages = report.pages.len(), "Report written");
    Ok(())
}
