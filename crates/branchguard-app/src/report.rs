//! Report helpers: serialization, error reports, renderable conversion.

use anyhow::Context;
use branchguard_event::EventError;
use branchguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use branchguard_types::{
    BranchguardData, Finding, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

/// Exit code for a verdict: policy failures are 2, everything else 0.
/// (Runtime errors exit 1; the CLI owns that path.)
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    serde_json::from_str(text).context("parse report JSON")
}

/// Report for a fault below the policy layer (IO, config, bugs).
pub fn runtime_error_report(event_name: &str, message: &str) -> ReportEnvelope {
    failure_report(
        event_name,
        ids::CHECK_TOOL_RUNTIME,
        ids::CODE_RUNTIME_ERROR,
        message,
    )
}

/// Report for a rejected event: unsupported kind or malformed payload.
pub fn event_error_report(event_name: &str, err: &EventError) -> ReportEnvelope {
    failure_report(
        event_name,
        ids::CHECK_EVENT_PAYLOAD,
        err.code(),
        &err.to_string(),
    )
}

fn failure_report(event_name: &str, check_id: &str, code: &str, message: &str) -> ReportEnvelope {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "branchguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: check_id.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            help: None,
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: BranchguardData {
            event: event_name.to_string(),
            // No branch was extracted; the failure happened before that.
            head_branch: String::new(),
            base_branch: None,
            profile: String::new(),
            rules_checked: Vec::new(),
            findings_total: 1,
        },
    }
}

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                severity: match f.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                check_id: f.check_id.clone(),
                code: f.code.clone(),
                message: f.message.clone(),
                help: f.help.clone(),
                url: f.url.clone(),
            })
            .collect(),
        data: RenderableData {
            event: report.data.event.clone(),
            head_branch: report.data.head_branch.clone(),
            base_branch: report.data.base_branch.clone(),
            rules_checked: report.data.rules_checked.clone(),
            findings_total: report.data.findings_total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_the_ci_contract() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }

    #[test]
    fn reports_round_trip_through_json() {
        let report = runtime_error_report("push", "boom");
        let text = serialize_report(&report).unwrap();
        let parsed = parse_report_json(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn event_error_report_keeps_the_message_verbatim() {
        let err = EventError::Unsupported("workflow_dispatch".to_string());
        let report = event_error_report("workflow_dispatch", &err);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings[0].check_id, ids::CHECK_EVENT_PAYLOAD);
        assert_eq!(report.findings[0].code, ids::CODE_UNSUPPORTED_EVENT);
        assert_eq!(
            report.findings[0].message,
            "Unsupported event: workflow_dispatch"
        );
    }
}
