use branchguard_types::ids;
use thiserror::Error;

/// Failures at the event boundary.
///
/// Both variants are fatal to the evaluation: there is no partial result to
/// salvage from an event we cannot type.
#[derive(Debug, Error)]
pub enum EventError {
    /// The event kind is neither `push` nor `pull_request`.
    #[error("Unsupported event: {0}")]
    Unsupported(String),

    /// The payload did not match the typed shape for its event kind.
    #[error("malformed {event} payload: {source}")]
    Malformed {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EventError {
    /// Stable finding code for this error, used in runtime-error reports.
    pub fn code(&self) -> &'static str {
        match self {
            EventError::Unsupported(_) => ids::CODE_UNSUPPORTED_EVENT,
            EventError::Malformed { .. } => ids::CODE_MALFORMED_PAYLOAD,
        }
    }
}
