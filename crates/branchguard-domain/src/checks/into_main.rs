use crate::model::ChangeModel;
use crate::policy::EffectiveConfig;
use branchguard_types::{Finding, ids};
use serde_json::json;

pub fn run(
    model: &ChangeModel,
    cfg: &EffectiveConfig,
    notes: &mut Vec<String>,
) -> Option<Finding> {
    notes.push(format!(
        "Validating rules for base branch: {}",
        cfg.main_branch
    ));

    // The tree only reaches this rule for heads that are not the develop
    // branch, so the hotfix prefix is the one remaining way in.
    let head = model.head_branch.as_str();
    if head.starts_with(&cfg.hotfix_prefix) {
        return None;
    }

    Some(Finding {
        severity: cfg.rule_severity(ids::RULE_PR_INTO_MAIN),
        check_id: ids::RULE_PR_INTO_MAIN.to_string(),
        code: ids::CODE_DENIED_INTO_MAIN.to_string(),
        message: format!(
            "Pull request from {} to {} denied. Reason: Invalid branch prefix. Allowed prefixes: {}",
            head, cfg.main_branch, cfg.hotfix_prefix
        ),
        help: Some(format!(
            "Merge into {} first, or use a {} branch for changes that must ship directly.",
            cfg.develop_branch, cfg.hotfix_prefix
        )),
        url: None,
        fingerprint: None,
        data: json!({
            "head_branch": head,
            "base_branch": cfg.main_branch,
            "allowed_prefixes": [cfg.hotfix_prefix],
        }),
    })
}
