//! Typed models for the webhook payload fields branchguard reads.
//!
//! Deliberately partial: only the fields the policy needs are declared, and
//! unknown fields are ignored, so payload growth upstream never breaks parsing.

use serde::Deserialize;

/// `push` event payload. The reference is the full ref string (`refs/heads/...`).
#[derive(Clone, Debug, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

/// `pull_request` event payload.
#[derive(Clone, Debug, Deserialize)]
pub struct PullRequestPayload {
    pub pull_request: PullRequestRefs,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PullRequestRefs {
    pub head: GitRef,
    pub base: GitRef,
}

/// A git reference as it appears inside a pull request payload: a bare branch
/// name, no `refs/heads/` prefix.
#[derive(Clone, Debug, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub name: String,
}
