//! The branching-model decision tree.
//!
//! Fixed order, first violated rule wins; at most one finding per evaluation.
//! `notes` collects which rule sets were consulted, in order. Advisory only.

use crate::model::ChangeModel;
use crate::policy::EffectiveConfig;
use branchguard_types::Finding;

mod develop_head;
mod into_develop;
mod into_main;
mod naming;

pub fn run_tree(
    model: &ChangeModel,
    cfg: &EffectiveConfig,
    notes: &mut Vec<String>,
) -> Option<Finding> {
    let head = model.head_branch.as_str();

    // The main branch itself is always in policy, whatever it targets.
    if head == cfg.main_branch {
        return None;
    }

    // Develop as head is a pull-request-only rule; a push of develop passes.
    if head == cfg.develop_branch {
        return develop_head::run(model, cfg, notes);
    }

    // Everything else must carry a known prefix before direction is considered.
    if let Some(finding) = naming::run(model, cfg, notes) {
        return Some(finding);
    }

    match model.base_branch.as_deref() {
        Some(base) if base == cfg.develop_branch => into_develop::run(model, cfg, notes),
        Some(base) if base == cfg.main_branch => into_main::run(model, cfg, notes),
        // No base (push), or a base outside the branching model: nothing more to enforce.
        _ => None,
    }
}
