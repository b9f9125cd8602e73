//! Shared builders for domain tests.

use crate::model::{ChangeModel, Trigger};
use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use branchguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// The stock gitflow policy used throughout the tests:
/// `main`/`develop` branches, `feature/`/`hotfix/`/`align/` prefixes, all rules error.
pub fn gitflow_config() -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    for id in [
        ids::RULE_BRANCH_NAMING,
        ids::RULE_PR_INTO_DEVELOP,
        ids::RULE_PR_INTO_MAIN,
        ids::RULE_PR_DEVELOP_HEAD,
    ] {
        rules.insert(
            id.to_string(),
            RulePolicy {
                severity: Severity::Error,
            },
        );
    }

    EffectiveConfig {
        profile: "gitflow".to_string(),
        fail_on: FailOn::Error,
        main_branch: "main".to_string(),
        develop_branch: "develop".to_string(),
        feature_prefix: "feature/".to_string(),
        hotfix_prefix: "hotfix/".to_string(),
        align_prefix: "align/".to_string(),
        rules,
    }
}

pub fn push(head: &str) -> ChangeModel {
    ChangeModel {
        trigger: Trigger::Push,
        head_branch: head.to_string(),
        base_branch: None,
    }
}

pub fn pr(head: &str, base: &str) -> ChangeModel {
    ChangeModel {
        trigger: Trigger::PullRequest,
        head_branch: head.to_string(),
        base_branch: Some(base.to_string()),
    }
}
