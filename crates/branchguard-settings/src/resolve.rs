use crate::{model::BranchguardConfigV1, presets};
use anyhow::Context;
use branchguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use branchguard_types::{Severity, explain};

/// Invocation-level overrides (CLI flags, which also bind the action inputs).
/// These win over both the config file and the profile preset.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub main_branch: Option<String>,
    pub develop_branch: Option<String>,
    pub feature_prefix: Option<String>,
    pub hotfix_prefix: Option<String>,
    pub align_prefix: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: BranchguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "gitflow".to_string());

    let mut effective = presets::preset(&profile);

    // Config file values over the preset.
    if let Some(branches) = &cfg.branches {
        if let Some(main) = &branches.main {
            effective.main_branch = main.clone();
        }
        if let Some(develop) = &branches.develop {
            effective.develop_branch = develop.clone();
        }
    }
    if let Some(prefixes) = &cfg.prefixes {
        if let Some(feature) = &prefixes.feature {
            effective.feature_prefix = feature.clone();
        }
        if let Some(hotfix) = &prefixes.hotfix {
            effective.hotfix_prefix = hotfix.clone();
        }
        if let Some(align) = &prefixes.align {
            effective.align_prefix = align.clone();
        }
    }

    // Per-rule overrides. Unknown rule ids are rejected rather than silently
    // ignored: a typo here would otherwise look like a configured relaxation.
    for (rule_id, rc) in cfg.rules.iter() {
        if !explain::all_check_ids().contains(&rule_id.as_str()) {
            anyhow::bail!("unknown rule id in config: {rule_id}");
        }
        if let Some(sev) = rc.severity.as_deref() {
            let entry = effective
                .rules
                .entry(rule_id.clone())
                .or_insert(RulePolicy {
                    severity: Severity::Error,
                });
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    // Invocation overrides win last.
    if let Some(main) = overrides.main_branch {
        effective.main_branch = main;
    }
    if let Some(develop) = overrides.develop_branch {
        effective.develop_branch = develop;
    }
    if let Some(feature) = overrides.feature_prefix {
        effective.feature_prefix = feature;
    }
    if let Some(hotfix) = overrides.hotfix_prefix {
        effective.hotfix_prefix = hotfix;
    }
    if let Some(align) = overrides.align_prefix {
        effective.align_prefix = align;
    }

    validate(&effective)?;

    Ok(ResolvedConfig { effective })
}

/// The engine assumes all five values are present and distinct where it
/// matters; emptiness is a configuration error, not a wildcard.
fn validate(effective: &EffectiveConfig) -> anyhow::Result<()> {
    let required = [
        ("branches.main", &effective.main_branch),
        ("branches.develop", &effective.develop_branch),
        ("prefixes.feature", &effective.feature_prefix),
        ("prefixes.hotfix", &effective.hotfix_prefix),
        ("prefixes.align", &effective.align_prefix),
    ];
    for (name, value) in required {
        if value.is_empty() {
            anyhow::bail!("{name} must not be empty");
        }
    }

    if effective.main_branch == effective.develop_branch {
        anyhow::bail!(
            "branches.main and branches.develop must differ (both are {:?})",
            effective.main_branch
        );
    }

    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use branchguard_types::ids;

    #[test]
    fn defaults_resolve_to_gitflow() {
        let resolved =
            resolve_config(BranchguardConfigV1::default(), Overrides::default()).unwrap();
        let eff = resolved.effective;
        assert_eq!(eff.profile, "gitflow");
        assert_eq!(eff.main_branch, "main");
        assert_eq!(eff.develop_branch, "develop");
        assert_eq!(eff.feature_prefix, "feature/");
        assert_eq!(eff.hotfix_prefix, "hotfix/");
        assert_eq!(eff.align_prefix, "align/");
        assert_eq!(eff.rule_severity(ids::RULE_BRANCH_NAMING), Severity::Error);
    }

    #[test]
    fn config_file_values_override_the_preset() {
        let cfg = parse_config_toml(
            r#"
profile = "gitflow"

[branches]
main = "master"

[prefixes]
feature = "feat/"

[rules."branch.naming"]
severity = "warning"
"#,
        )
        .unwrap();

        let eff = resolve_config(cfg, Overrides::default()).unwrap().effective;
        assert_eq!(eff.main_branch, "master");
        assert_eq!(eff.develop_branch, "develop");
        assert_eq!(eff.feature_prefix, "feat/");
        assert_eq!(
            eff.rule_severity(ids::RULE_BRANCH_NAMING),
            Severity::Warning
        );
        assert_eq!(eff.rule_severity(ids::RULE_PR_INTO_MAIN), Severity::Error);
    }

    #[test]
    fn invocation_overrides_win_over_the_file() {
        let cfg = parse_config_toml("[branches]\nmain = \"master\"\n").unwrap();
        let overrides = Overrides {
            main_branch: Some("trunk".to_string()),
            ..Overrides::default()
        };
        let eff = resolve_config(cfg, overrides).unwrap().effective;
        assert_eq!(eff.main_branch, "trunk");
    }

    #[test]
    fn advisory_profile_downgrades_every_rule() {
        let overrides = Overrides {
            profile: Some("advisory".to_string()),
            ..Overrides::default()
        };
        let eff = resolve_config(BranchguardConfigV1::default(), overrides)
            .unwrap()
            .effective;
        for id in explain::all_check_ids() {
            assert_eq!(eff.rule_severity(id), Severity::Warning);
        }
    }

    #[test]
    fn empty_values_are_rejected() {
        let overrides = Overrides {
            feature_prefix: Some(String::new()),
            ..Overrides::default()
        };
        let err = resolve_config(BranchguardConfigV1::default(), overrides).unwrap_err();
        assert!(err.to_string().contains("prefixes.feature"));
    }

    #[test]
    fn identical_main_and_develop_are_rejected() {
        let overrides = Overrides {
            develop_branch: Some("main".to_string()),
            ..Overrides::default()
        };
        assert!(resolve_config(BranchguardConfigV1::default(), overrides).is_err());
    }

    #[test]
    fn unknown_rule_id_is_rejected() {
        let cfg = parse_config_toml("[rules.\"branch.nameing\"]\nseverity = \"warning\"\n").unwrap();
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown rule id"));
    }

    #[test]
    fn invalid_severity_is_rejected() {
        let cfg = parse_config_toml("[rules.\"branch.naming\"]\nseverity = \"fatal\"\n").unwrap();
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }
}
