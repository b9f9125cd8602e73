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
        "Validating prefixes of branch. Allowed prefixes: {}, {}, {}",
        cfg.feature_prefix, cfg.hotfix_prefix, cfg.align_prefix
    ));

    let head = model.head_branch.as_str();
    if head.starts_with(&cfg.feature_prefix)
        || head.starts_with(&cfg.hotfix_prefix)
        || head.starts_with(&cfg.align_prefix)
    {
        return None;
    }

    Some(Finding {
        severity: cfg.rule_severity(ids::RULE_BRANCH_NAMING),
        check_id: ids::RULE_BRANCH_NAMING.to_string(),
        code: ids::CODE_UNKNOWN_PREFIX.to_string(),
        message: format!(
            "Branch {} is not valid. Did not match any of the allowed prefixes: {}, {}, {}",
            head, cfg.feature_prefix, cfg.hotfix_prefix, cfg.align_prefix
        ),
        help: Some("Rename the branch so it starts with an allowed prefix.".to_string()),
        url: None,
        fingerprint: None,
        data: json!({
            "head_branch": head,
            "allowed_prefixes": [cfg.feature_prefix, cfg.hotfix_prefix, cfg.align_prefix],
        }),
    })
}
