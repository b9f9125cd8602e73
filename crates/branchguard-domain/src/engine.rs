use crate::checks;
use crate::fingerprint::fingerprint_for_finding;
use crate::model::ChangeModel;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use branchguard_types::{BranchguardData, Finding, Severity, Verdict};

/// Evaluate the branching policy for one change.
///
/// A single pure, terminating pass: the tree is walked once, the first
/// violated rule produces the only finding, and the same inputs always
/// produce the same report.
pub fn evaluate(model: &ChangeModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut notes: Vec<String> = Vec::new();

    let mut findings: Vec<Finding> = Vec::new();
    if let Some(finding) = checks::run_tree(model, cfg, &mut notes) {
        findings.push(finding);
    }

    for f in &mut findings {
        f.fingerprint = Some(fingerprint_for_finding(
            &f.check_id,
            &f.code,
            &model.head_branch,
            model.base_branch.as_deref(),
        ));
    }

    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    let data = BranchguardData {
        event: model.trigger.as_str().to_string(),
        head_branch: model.head_branch.clone(),
        base_branch: model.base_branch.clone(),
        profile: cfg.profile.clone(),
        rules_checked: notes,
        findings_total: findings.len() as u32,
    };

    DomainReport {
        verdict,
        findings,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RulePolicy;
    use crate::test_support::{gitflow_config, pr, push};
    use branchguard_types::ids;

    #[test]
    fn push_of_prefixed_branch_passes() {
        let report = evaluate(&push("feature/login"), &gitflow_config());
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn push_of_unprefixed_branch_fails() {
        let report = evaluate(&push("randomstuff"), &gitflow_config());
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings.len(), 1);
        let f = &report.findings[0];
        assert_eq!(f.check_id, ids::RULE_BRANCH_NAMING);
        assert_eq!(
            f.message,
            "Branch randomstuff is not valid. Did not match any of the allowed prefixes: feature/, hotfix/, align/"
        );
    }

    #[test]
    fn push_of_main_or_develop_passes() {
        let cfg = gitflow_config();
        assert_eq!(evaluate(&push("main"), &cfg).verdict, Verdict::Pass);
        assert_eq!(evaluate(&push("develop"), &cfg).verdict, Verdict::Pass);
    }

    #[test]
    fn hotfix_into_develop_is_denied() {
        let report = evaluate(&pr("hotfix/123", "develop"), &gitflow_config());
        assert_eq!(report.verdict, Verdict::Fail);
        let f = &report.findings[0];
        assert_eq!(f.check_id, ids::RULE_PR_INTO_DEVELOP);
        assert_eq!(
            f.message,
            "Pull request from hotfix/123 to develop denied. Reason: Invalid branch prefix. Allowed prefixes: feature/, align/"
        );
    }

    #[test]
    fn hotfix_into_main_passes() {
        let report = evaluate(&pr("hotfix/123", "main"), &gitflow_config());
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn feature_into_main_is_denied() {
        let report = evaluate(&pr("feature/x", "main"), &gitflow_config());
        assert_eq!(report.verdict, Verdict::Fail);
        let f = &report.findings[0];
        assert_eq!(f.check_id, ids::RULE_PR_INTO_MAIN);
        assert_eq!(
            f.message,
            "Pull request from feature/x to main denied. Reason: Invalid branch prefix. Allowed prefixes: hotfix/"
        );
    }

    #[test]
    fn develop_must_target_main() {
        let cfg = gitflow_config();

        let denied = evaluate(&pr("develop", "feature/x"), &cfg);
        assert_eq!(denied.verdict, Verdict::Fail);
        assert_eq!(denied.findings[0].check_id, ids::RULE_PR_DEVELOP_HEAD);
        assert_eq!(
            denied.findings[0].message,
            "Pull request from develop is only allowed with main as base branch."
        );

        let allowed = evaluate(&pr("develop", "main"), &cfg);
        assert_eq!(allowed.verdict, Verdict::Pass);
    }

    #[test]
    fn unknown_base_passes_after_prefix_check() {
        let report = evaluate(&pr("feature/x", "release/1.2"), &gitflow_config());
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn findings_carry_fingerprints() {
        let report = evaluate(&pr("hotfix/123", "develop"), &gitflow_config());
        let fp = report.findings[0].fingerprint.as_deref().unwrap();
        assert_eq!(fp.len(), 64);
    }

    #[test]
    fn rule_set_trace_is_recorded_in_order() {
        let report = evaluate(&pr("hotfix/123", "develop"), &gitflow_config());
        assert_eq!(
            report.data.rules_checked,
            vec![
                "Validating prefixes of branch. Allowed prefixes: feature/, hotfix/, align/",
                "Validating rules for base branch: develop",
            ]
        );
    }

    #[test]
    fn downgraded_rule_reports_warn_verdict() {
        let mut cfg = gitflow_config();
        cfg.rules.insert(
            ids::RULE_BRANCH_NAMING.to_string(),
            RulePolicy {
                severity: Severity::Warning,
            },
        );

        let report = evaluate(&push("randomstuff"), &cfg);
        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(report.counts.warning, 1);
    }

    #[test]
    fn verdict_warn_becomes_fail_when_fail_on_warning() {
        let mut cfg = gitflow_config();
        cfg.fail_on = FailOn::Warning;
        cfg.rules.insert(
            ids::RULE_BRANCH_NAMING.to_string(),
            RulePolicy {
                severity: Severity::Warning,
            },
        );

        let report = evaluate(&push("randomstuff"), &cfg);
        assert_eq!(report.verdict, Verdict::Fail);
    }
}
