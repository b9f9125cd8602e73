use branchguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use branchguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything repo-specific belongs in `branchguard.toml`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "advisory" => advisory_profile(),
        // default
        _ => gitflow_profile(),
    }
}

fn gitflow_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "gitflow".to_string(),
        fail_on: FailOn::Error,
        main_branch: "main".to_string(),
        develop_branch: "develop".to_string(),
        feature_prefix: "feature/".to_string(),
        hotfix_prefix: "hotfix/".to_string(),
        align_prefix: "align/".to_string(),
        rules: default_rules(Severity::Error),
    }
}

fn advisory_profile() -> EffectiveConfig {
    // Report-only mode: every rule still runs, but nothing blocks the pipeline.
    EffectiveConfig {
        profile: "advisory".to_string(),
        fail_on: FailOn::Error,
        main_branch: "main".to_string(),
        develop_branch: "develop".to_string(),
        feature_prefix: "feature/".to_string(),
        hotfix_prefix: "hotfix/".to_string(),
        align_prefix: "align/".to_string(),
        rules: default_rules(Severity::Warning),
    }
}

fn default_rules(default_severity: Severity) -> BTreeMap<String, RulePolicy> {
    let mut m = BTreeMap::new();

    for id in [
        ids::RULE_BRANCH_NAMING,
        ids::RULE_PR_INTO_DEVELOP,
        ids::RULE_PR_INTO_MAIN,
        ids::RULE_PR_DEVELOP_HEAD,
    ] {
        m.insert(
            id.to_string(),
            RulePolicy {
                severity: default_severity,
            },
        );
    }

    m
}
