//! Render use cases: markdown and GitHub annotations from in-memory reports.

use branchguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    branchguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    branchguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

pub fn render_notices(report: &RenderableReport) -> Vec<String> {
    branchguard_render::render_github_notices(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchguard_render::{
        RenderableData, RenderableFinding, RenderableSeverity, RenderableVerdictStatus,
    };

    fn sample_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![
                RenderableFinding {
                    severity: RenderableSeverity::Error,
                    check_id: "branch.naming".to_string(),
                    code: "unknown_prefix".to_string(),
                    message: "bad".to_string(),
                    help: None,
                    url: None,
                },
                RenderableFinding {
                    severity: RenderableSeverity::Info,
                    check_id: "branch.naming".to_string(),
                    code: "info".to_string(),
                    message: "ok".to_string(),
                    help: None,
                    url: None,
                },
            ],
            data: RenderableData {
                event: "push".to_string(),
                head_branch: "randomstuff".to_string(),
                base_branch: None,
                rules_checked: vec!["Validating prefixes of branch.".to_string()],
                findings_total: 2,
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let annotations = render_annotations(&sample_report(), 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        assert!(!render_markdown(&sample_report()).is_empty());
    }

    #[test]
    fn render_notices_smoke() {
        assert_eq!(render_notices(&sample_report()).len(), 1);
    }
}
