use crate::error::EventError;
use crate::payload::{PullRequestPayload, PushPayload};
use branchguard_domain::model::{ChangeModel, Trigger};

pub const EVENT_PUSH: &str = "push";
pub const EVENT_PULL_REQUEST: &str = "pull_request";

/// A triggering event, typed per kind and validated at the boundary.
#[derive(Clone, Debug)]
pub enum Event {
    Push(PushPayload),
    PullRequest(PullRequestPayload),
}

/// Parse `(event name, payload JSON)` into a typed [`Event`].
///
/// Fails fast: an unknown event name never reaches payload parsing, and a
/// payload missing the expected fields is rejected here rather than producing
/// undefined branch names downstream.
pub fn parse_event(event_name: &str, payload_json: &str) -> Result<Event, EventError> {
    match event_name {
        EVENT_PUSH => {
            let payload: PushPayload =
                serde_json::from_str(payload_json).map_err(|source| EventError::Malformed {
                    event: EVENT_PUSH.to_string(),
                    source,
                })?;
            Ok(Event::Push(payload))
        }
        EVENT_PULL_REQUEST => {
            let payload: PullRequestPayload =
                serde_json::from_str(payload_json).map_err(|source| EventError::Malformed {
                    event: EVENT_PULL_REQUEST.to_string(),
                    source,
                })?;
            Ok(Event::PullRequest(payload))
        }
        other => Err(EventError::Unsupported(other.to_string())),
    }
}

impl Event {
    /// The branch carrying the proposed changes.
    ///
    /// For pushes this is the pushed reference with one leading `refs/heads/`
    /// stripped; a reference without that prefix is passed through unchanged
    /// (tags are not rewritten into something that looks like a branch).
    pub fn head_branch(&self) -> &str {
        match self {
            Event::Push(p) => p.git_ref.strip_prefix("refs/heads/").unwrap_or(&p.git_ref),
            Event::PullRequest(p) => &p.pull_request.head.name,
        }
    }

    /// The branch a pull request targets. Undefined for pushes.
    pub fn base_branch(&self) -> Option<&str> {
        match self {
            Event::Push(_) => None,
            Event::PullRequest(p) => Some(&p.pull_request.base.name),
        }
    }

    pub fn trigger(&self) -> Trigger {
        match self {
            Event::Push(_) => Trigger::Push,
            Event::PullRequest(_) => Trigger::PullRequest,
        }
    }
}

/// Build the change model consumed by the policy engine.
pub fn build_change_model(event_name: &str, payload_json: &str) -> Result<ChangeModel, EventError> {
    let event = parse_event(event_name, payload_json)?;
    Ok(ChangeModel {
        trigger: event.trigger(),
        head_branch: event.head_branch().to_string(),
        base_branch: event.base_branch().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_strips_one_leading_ref_segment() {
        let event = parse_event("push", r#"{"ref":"refs/heads/feature/login"}"#).unwrap();
        assert_eq!(event.head_branch(), "feature/login");
        assert_eq!(event.base_branch(), None);
    }

    #[test]
    fn push_leaves_other_refs_untouched() {
        let event = parse_event("push", r#"{"ref":"refs/tags/v1.0.0"}"#).unwrap();
        assert_eq!(event.head_branch(), "refs/tags/v1.0.0");

        // Only the leading occurrence is stripped.
        let event = parse_event("push", r#"{"ref":"refs/heads/refs/heads/x"}"#).unwrap();
        assert_eq!(event.head_branch(), "refs/heads/x");
    }

    #[test]
    fn pull_request_exposes_head_and_base() {
        let json = r#"{"pull_request":{"head":{"ref":"hotfix/123"},"base":{"ref":"main"}}}"#;
        let event = parse_event("pull_request", json).unwrap();
        assert_eq!(event.head_branch(), "hotfix/123");
        assert_eq!(event.base_branch(), Some("main"));
    }

    #[test]
    fn unsupported_event_is_rejected_with_its_name() {
        let err = parse_event("workflow_dispatch", "{}").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported event: workflow_dispatch");
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let err = parse_event("pull_request", r#"{"pull_request":{}}"#).unwrap_err();
        assert!(matches!(err, EventError::Malformed { .. }));

        let err = parse_event("push", "not json").unwrap_err();
        assert!(matches!(err, EventError::Malformed { .. }));
    }

    #[test]
    fn change_model_carries_trigger_and_branches() {
        let model = build_change_model("push", r#"{"ref":"refs/heads/develop"}"#).unwrap();
        assert_eq!(model.trigger, Trigger::Push);
        assert_eq!(model.head_branch, "develop");
        assert_eq!(model.base_branch, None);
    }
}
