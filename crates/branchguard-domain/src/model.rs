/// What kind of event produced the change under evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Push,
    PullRequest,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::Push => "push",
            Trigger::PullRequest => "pull_request",
        }
    }
}

/// The change under evaluation, reduced to what the policy needs.
///
/// Branch names are opaque strings: the engine compares them case-sensitively,
/// by exact match or literal prefix only. Nothing here is normalized.
#[derive(Clone, Debug)]
pub struct ChangeModel {
    pub trigger: Trigger,

    /// Branch carrying the proposed changes (already stripped of `refs/heads/`).
    pub head_branch: String,

    /// Branch a pull request targets; `None` for pushes.
    pub base_branch: Option<String>,
}
