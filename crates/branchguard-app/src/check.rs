//! The `check` use case: evaluate policy and produce a report.

use anyhow::Context;
use branchguard_event::build_change_model;
use branchguard_settings::{Overrides, ResolvedConfig};
use branchguard_types::{ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Triggering event name (`push`, `pull_request`, ...).
    pub event_name: &'a str,
    /// Raw event payload JSON.
    pub event_payload: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, type the event, evaluate policy, produce a report.
///
/// Event-boundary failures propagate as [`branchguard_event::EventError`]
/// inside the `anyhow` chain so the caller can classify them.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        branchguard_settings::BranchguardConfigV1::default()
    } else {
        branchguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = branchguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model = build_change_model(input.event_name, input.event_payload)?;

    let domain_report = branchguard_domain::evaluate(&model, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "branchguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchguard_event::EventError;
    use branchguard_types::{Verdict, ids};

    fn check(event_name: &str, payload: &str, config: &str) -> anyhow::Result<CheckOutput> {
        run_check(CheckInput {
            event_name,
            event_payload: payload,
            config_text: config,
            overrides: Overrides::default(),
        })
    }

    #[test]
    fn push_of_feature_branch_passes_with_defaults() {
        let out = check("push", r#"{"ref":"refs/heads/feature/login"}"#, "").unwrap();
        assert_eq!(out.report.verdict, Verdict::Pass);
        assert_eq!(out.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(out.report.data.head_branch, "feature/login");
    }

    #[test]
    fn violation_surfaces_in_the_report() {
        let payload = r#"{"pull_request":{"head":{"ref":"hotfix/123"},"base":{"ref":"develop"}}}"#;
        let out = check("pull_request", payload, "").unwrap();
        assert_eq!(out.report.verdict, Verdict::Fail);
        assert_eq!(out.report.findings.len(), 1);
        assert_eq!(out.report.findings[0].check_id, ids::RULE_PR_INTO_DEVELOP);
    }

    #[test]
    fn config_text_reshapes_the_policy() {
        let out = check(
            "push",
            r#"{"ref":"refs/heads/feat/login"}"#,
            "[prefixes]\nfeature = \"feat/\"\n",
        )
        .unwrap();
        assert_eq!(out.report.verdict, Verdict::Pass);
        assert_eq!(out.resolved_config.effective.feature_prefix, "feat/");
    }

    #[test]
    fn unsupported_event_is_downcastable() {
        let err = check("workflow_dispatch", "{}", "").unwrap_err();
        let event_err = err.downcast_ref::<EventError>().expect("EventError");
        assert_eq!(event_err.to_string(), "Unsupported event: workflow_dispatch");
    }

    #[test]
    fn invalid_config_fails_before_the_event_is_parsed() {
        let err = check("push", r#"{"ref":"refs/heads/x"}"#, "profile = 3").unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
