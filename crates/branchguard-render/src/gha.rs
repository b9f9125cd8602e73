use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format: `::{level}::{message}` — policy findings carry no file location,
/// so the annotation attaches to the run rather than a line.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let message = escape_data(&format!("[{}:{}] {}", f.check_id, f.code, f.message));
        out.push(format!("::{}::{}", level, message));
    }

    out
}

/// Render the rule-set trace as `::notice::` lines.
pub fn render_github_notices(report: &RenderableReport) -> Vec<String> {
    report
        .data
        .rules_checked
        .iter()
        .map(|note| format!("::notice::{}", escape_data(note)))
        .collect()
}

/// Workflow command data escaping, per the Actions toolkit.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
