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
        "Validating rules for using {} as head branch.",
        cfg.develop_branch
    ));

    // Pushes have no base; the rule only constrains pull requests.
    let base = model.base_branch.as_deref()?;
    if base == cfg.main_branch {
        return None;
    }

    Some(Finding {
        severity: cfg.rule_severity(ids::RULE_PR_DEVELOP_HEAD),
        check_id: ids::RULE_PR_DEVELOP_HEAD.to_string(),
        code: ids::CODE_DEVELOP_MUST_TARGET_MAIN.to_string(),
        message: format!(
            "Pull request from {} is only allowed with {} as base branch.",
            model.head_branch, cfg.main_branch
        ),
        help: Some(format!(
            "Change the pull request's base branch to {}.",
            cfg.main_branch
        )),
        url: None,
        fingerprint: None,
        data: json!({
            "head_branch": model.head_branch,
            "base_branch": base,
            "required_base": cfg.main_branch,
        }),
    })
}
