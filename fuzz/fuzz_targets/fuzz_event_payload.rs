//! Fuzz target for event payload parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_event_payload
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Payload files are UTF-8 JSON
    if let Ok(text) = std::str::from_utf8(data) {
        // Both supported event kinds - should never panic
        let _ = branchguard_event::fuzz::parse_payload("push", text);
        let _ = branchguard_event::fuzz::parse_payload("pull_request", text);

        // Arbitrary event names take the unsupported path - should never panic
        let _ = branchguard_event::fuzz::parse_payload(text, "{}");
    }
});
