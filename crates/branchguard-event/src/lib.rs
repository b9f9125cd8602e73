//! Event adapters: parse the triggering CI event into a typed model.
//!
//! This crate owns the untrusted boundary: the raw webhook payload JSON. Payloads are
//! deserialized into per-kind typed models and validated here, so the policy engine
//! downstream never sees a dynamic shape. No filesystem IO; the caller (typically the
//! CLI) reads the payload file and passes its text in.

#![forbid(unsafe_code)]

mod error;
mod event;
mod payload;

pub use error::EventError;
pub use event::{Event, build_change_model, parse_event};
pub use payload::{GitRef, PullRequestPayload, PullRequestRefs, PushPayload};

/// Fuzz-friendly API for testing parsing robustness.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as an event payload for the given event name.
    ///
    /// Returns `Ok(...)` for a supported event name with a well-formed payload,
    /// `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_payload(event_name: &str, text: &str) -> Result<(), EventError> {
        let _ = parse_event(event_name, text)?;
        Ok(())
    }
}
