use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Branchguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Event: `{}`\n- Head branch: `{}`\n",
        verdict, report.data.event, report.data.head_branch
    ));
    if let Some(base) = &report.data.base_branch {
        out.push_str(&format!("- Base branch: `{}`\n", base));
    }
    out.push('\n');

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}` - {}\n",
            sev, f.check_id, f.code, f.message
        ));

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding};

    fn data(base: Option<&str>) -> RenderableData {
        RenderableData {
            event: if base.is_some() { "pull_request" } else { "push" }.to_string(),
            head_branch: "hotfix/123".to_string(),
            base_branch: base.map(str::to_string),
            rules_checked: Vec::new(),
            findings_total: 0,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: data(None),
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Branchguard report

        - Verdict: **PASS**
        - Event: `push`
        - Head branch: `hotfix/123`

        No findings.
        ");
    }

    #[test]
    fn renders_findings_with_help() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: "pr.into_develop".to_string(),
                code: "denied_into_develop".to_string(),
                message: "Pull request from hotfix/123 to develop denied. Reason: Invalid branch prefix. Allowed prefixes: feature/, align/".to_string(),
                help: Some("Hotfixes target main.".to_string()),
                url: None,
            }],
            data: RenderableData {
                findings_total: 1,
                ..data(Some("develop"))
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("- Verdict: **FAIL**"));
        assert!(md.contains("- Base branch: `develop`"));
        assert!(md.contains("[ERROR] `pr.into_develop` / `denied_into_develop`"));
        assert!(md.contains("  - help: Hotfixes target main."));
    }
}
