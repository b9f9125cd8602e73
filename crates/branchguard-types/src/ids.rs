//! Stable identifiers for rules and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_BRANCH_NAMING: &str = "branch.naming";
pub const RULE_PR_INTO_DEVELOP: &str = "pr.into_develop";
pub const RULE_PR_INTO_MAIN: &str = "pr.into_main";
pub const RULE_PR_DEVELOP_HEAD: &str = "pr.develop_head";

// Codes: branch.naming
pub const CODE_UNKNOWN_PREFIX: &str = "unknown_prefix";

// Codes: pr.into_develop
pub const CODE_DENIED_INTO_DEVELOP: &str = "denied_into_develop";

// Codes: pr.into_main
pub const CODE_DENIED_INTO_MAIN: &str = "denied_into_main";

// Codes: pr.develop_head
pub const CODE_DEVELOP_MUST_TARGET_MAIN: &str = "develop_must_target_main";

// Event boundary
pub const CHECK_EVENT_PAYLOAD: &str = "event.payload";
pub const CODE_UNSUPPORTED_EVENT: &str = "unsupported_event";
pub const CODE_MALFORMED_PAYLOAD: &str = "malformed_payload";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
