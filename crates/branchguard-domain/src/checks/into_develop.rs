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
        cfg.develop_branch
    ));

    let head = model.head_branch.as_str();
    if head.starts_with(&cfg.feature_prefix) || head.starts_with(&cfg.align_prefix) {
        return None;
    }

    Some(Finding {
        severity: cfg.rule_severity(ids::RULE_PR_INTO_DEVELOP),
        check_id: ids::RULE_PR_INTO_DEVELOP.to_string(),
        code: ids::CODE_DENIED_INTO_DEVELOP.to_string(),
        message: format!(
            "Pull request from {} to {} denied. Reason: Invalid branch prefix. Allowed prefixes: {}, {}",
            head, cfg.develop_branch, cfg.feature_prefix, cfg.align_prefix
        ),
        help: Some(format!(
            "Hotfixes target {}; open pull requests into {} from {} or {} branches.",
            cfg.main_branch, cfg.develop_branch, cfg.feature_prefix, cfg.align_prefix
        )),
        url: None,
        fingerprint: None,
        data: json!({
            "head_branch": head,
            "base_branch": cfg.develop_branch,
            "allowed_prefixes": [cfg.feature_prefix, cfg.align_prefix],
        }),
    })
}
