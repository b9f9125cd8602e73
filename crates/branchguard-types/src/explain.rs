//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A situation that would trigger a finding.
    pub before: &'static str,
    /// A situation that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_BRANCH_NAMING => Some(explain_branch_naming()),
        ids::RULE_PR_INTO_DEVELOP => Some(explain_pr_into_develop()),
        ids::RULE_PR_INTO_MAIN => Some(explain_pr_into_main()),
        ids::RULE_PR_DEVELOP_HEAD => Some(explain_pr_develop_head()),

        // Codes
        ids::CODE_UNKNOWN_PREFIX => Some(explain_unknown_prefix()),
        ids::CODE_DENIED_INTO_DEVELOP => Some(explain_denied_into_develop()),
        ids::CODE_DENIED_INTO_MAIN => Some(explain_denied_into_main()),
        ids::CODE_DEVELOP_MUST_TARGET_MAIN => Some(explain_develop_must_target_main()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::RULE_BRANCH_NAMING,
        ids::RULE_PR_INTO_DEVELOP,
        ids::RULE_PR_INTO_MAIN,
        ids::RULE_PR_DEVELOP_HEAD,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_UNKNOWN_PREFIX,
        ids::CODE_DENIED_INTO_DEVELOP,
        ids::CODE_DENIED_INTO_MAIN,
        ids::CODE_DEVELOP_MUST_TARGET_MAIN,
    ]
}

// --- Rule-level explanations ---

fn explain_branch_naming() -> Explanation {
    Explanation {
        title: "Branch Naming",
        description: "\
Requires every working branch to start with one of the configured prefixes
(feature, hotfix, align). Only the configured main and develop branches are
exempt.

Consistent prefixes keep the branch list navigable and let the direction
rules decide where a branch may be merged.",
        remediation: "\
Rename the branch so it starts with an allowed prefix:
- `feature/` for regular development work
- `hotfix/` for fixes that must reach the main branch directly
- `align/` for branches that re-align long-running work with develop",
        examples: ExamplePair {
            before: "git switch -c quickfix-login",
            after: "git switch -c feature/quickfix-login",
        },
    }
}

fn explain_pr_into_develop() -> Explanation {
    Explanation {
        title: "Pull Requests Into Develop",
        description: "\
Pull requests targeting the develop branch may only come from feature or
align branches. Hotfix branches bypass develop and merge into main, so a
hotfix heading into develop usually signals a mistargeted pull request.",
        remediation: "\
Retarget the pull request, or rename the branch:
- hotfixes merge into the main branch, not develop
- regular work merges into develop from a `feature/` or `align/` branch",
        examples: ExamplePair {
            before: "PR: hotfix/checkout-crash -> develop",
            after: "PR: hotfix/checkout-crash -> main",
        },
    }
}

fn explain_pr_into_main() -> Explanation {
    Explanation {
        title: "Pull Requests Into Main",
        description: "\
Pull requests targeting the main branch may only come from the develop
branch (a release) or from a hotfix branch. Feature work reaches main
through develop, never directly.",
        remediation: "\
Retarget the pull request at the develop branch, or use a `hotfix/` branch
if the change must ship immediately.",
        examples: ExamplePair {
            before: "PR: feature/new-dashboard -> main",
            after: "PR: feature/new-dashboard -> develop",
        },
    }
}

fn explain_pr_develop_head() -> Explanation {
    Explanation {
        title: "Develop As Head Branch",
        description: "\
When the develop branch itself is the head of a pull request, the only
allowed target is the main branch: that is the release flow. Develop merging
anywhere else would push unreleased work into an unrelated branch.",
        remediation: "\
Retarget the pull request at the main branch, or branch off develop and open
the pull request from that branch instead.",
        examples: ExamplePair {
            before: "PR: develop -> feature/experiment",
            after: "PR: develop -> main",
        },
    }
}

// --- Code-level explanations ---

fn explain_unknown_prefix() -> Explanation {
    Explanation {
        title: "Unknown Branch Prefix",
        description: "\
The head branch does not start with any of the configured prefixes and is
not the main or develop branch.",
        remediation: "\
Recreate or rename the branch with one of the allowed prefixes and push
again.",
        examples: ExamplePair {
            before: "refs/heads/randomstuff",
            after: "refs/heads/feature/randomstuff",
        },
    }
}

fn explain_denied_into_develop() -> Explanation {
    Explanation {
        title: "Denied Into Develop",
        description: "\
A pull request into the develop branch came from a branch whose prefix is
not allowed there (typically a hotfix branch).",
        remediation: "\
Hotfixes target the main branch. For everything else, open the pull request
from a `feature/` or `align/` branch.",
        examples: ExamplePair {
            before: "PR: hotfix/123 -> develop",
            after: "PR: hotfix/123 -> main",
        },
    }
}

fn explain_denied_into_main() -> Explanation {
    Explanation {
        title: "Denied Into Main",
        description: "\
A pull request into the main branch came from a branch that is neither the
develop branch nor a hotfix branch.",
        remediation: "\
Merge the branch into develop first; develop is released to main. Only
`hotfix/` branches may target main directly.",
        examples: ExamplePair {
            before: "PR: feature/x -> main",
            after: "PR: develop -> main",
        },
    }
}

fn explain_develop_must_target_main() -> Explanation {
    Explanation {
        title: "Develop Must Target Main",
        description: "\
A pull request whose head is the develop branch targeted something other
than the main branch.",
        remediation: "\
Change the pull request's base branch to the main branch.",
        examples: ExamplePair {
            before: "PR: develop -> feature/x",
            after: "PR: develop -> main",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_rule_id_and_code() {
        assert!(lookup_explanation(ids::RULE_BRANCH_NAMING).is_some());
        assert!(lookup_explanation(ids::CODE_UNKNOWN_PREFIX).is_some());
        assert!(lookup_explanation("no.such.rule").is_none());
    }

    #[test]
    fn registry_covers_all_ids() {
        for id in all_check_ids() {
            assert!(lookup_explanation(id).is_some(), "missing explanation: {id}");
        }
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "missing explanation: {code}"
            );
        }
    }
}
