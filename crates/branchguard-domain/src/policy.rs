use branchguard_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Per-rule knobs. Rules cannot be disabled: the decision tree is fixed, and a
/// hole in it would silently change what the remaining rules mean. Severity is
/// the supported relaxation (e.g. report-only during a branching-model migration).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub severity: Severity,
}

/// The resolved policy the engine runs against.
///
/// All five naming values are required and validated by the settings layer:
/// non-empty, and `main_branch != develop_branch`.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,

    pub main_branch: String,
    pub develop_branch: String,
    pub feature_prefix: String,
    pub hotfix_prefix: String,
    pub align_prefix: String,

    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    /// Severity a violated rule reports at. Unconfigured rules report as errors.
    pub fn rule_severity(&self, rule_id: &str) -> Severity {
        self.rules
            .get(rule_id)
            .map(|r| r.severity)
            .unwrap_or(Severity::Error)
    }
}
