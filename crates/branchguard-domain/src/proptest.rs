//! Property-based tests for the policy engine.
//!
//! These pin the load-bearing properties of the decision tree:
//! - the main branch is always in policy
//! - develop as head is only allowed toward main
//! - unprefixed branches never pass
//! - evaluation is idempotent

use crate::engine::evaluate;
use crate::model::{ChangeModel, Trigger};
use crate::test_support::{gitflow_config, pr, push};
use branchguard_types::Verdict;
use proptest::prelude::*;

/// Strategy for plausible branch names, including slashes and dots.
fn arb_branch_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9/_.-]{0,29}").unwrap()
}

/// Branch names that are neither configured branch nor carry a known prefix.
fn arb_unprefixed_name() -> impl Strategy<Value = String> {
    arb_branch_name().prop_filter("must not match the gitflow config", |name| {
        name != "main"
            && name != "develop"
            && !name.starts_with("feature/")
            && !name.starts_with("hotfix/")
            && !name.starts_with("align/")
    })
}

proptest! {
    #[test]
    fn main_head_always_passes(base in prop::option::of(arb_branch_name())) {
        let model = ChangeModel {
            trigger: if base.is_some() { Trigger::PullRequest } else { Trigger::Push },
            head_branch: "main".to_string(),
            base_branch: base,
        };
        let report = evaluate(&model, &gitflow_config());
        prop_assert_eq!(report.verdict, Verdict::Pass);
        prop_assert!(report.findings.is_empty());
    }

    #[test]
    fn develop_head_requires_main_base(base in arb_branch_name()) {
        let report = evaluate(&pr("develop", &base), &gitflow_config());
        if base == "main" {
            prop_assert_eq!(report.verdict, Verdict::Pass);
        } else {
            prop_assert_eq!(report.verdict, Verdict::Fail);
            prop_assert_eq!(report.findings.len(), 1);
        }
    }

    #[test]
    fn unprefixed_push_always_fails(head in arb_unprefixed_name()) {
        let report = evaluate(&push(&head), &gitflow_config());
        prop_assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn prefixed_push_always_passes(suffix in "[a-zA-Z0-9_-]{1,20}", prefix in prop::sample::select(vec!["feature/", "hotfix/", "align/"])) {
        let report = evaluate(&push(&format!("{prefix}{suffix}")), &gitflow_config());
        prop_assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn evaluation_is_idempotent(
        head in arb_branch_name(),
        base in prop::option::of(arb_branch_name()),
    ) {
        let model = ChangeModel {
            trigger: if base.is_some() { Trigger::PullRequest } else { Trigger::Push },
            head_branch: head,
            base_branch: base,
        };
        let cfg = gitflow_config();
        let first = evaluate(&model, &cfg);
        let second = evaluate(&model, &cfg);
        prop_assert_eq!(first.verdict, second.verdict);
        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.data, second.data);
    }
}
