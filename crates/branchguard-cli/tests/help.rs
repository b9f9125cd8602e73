use assert_cmd::Command;

/// Helper to get a Command for the branchguard binary.
#[allow(deprecated)]
fn branchguard_cmd() -> Command {
    Command::cargo_bin("branchguard").unwrap()
}

#[test]
fn help_works() {
    branchguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_requires_an_event() {
    branchguard_cmd()
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("GITHUB_EVENT_PATH")
        .arg("check")
        .assert()
        .failure();
}

#[test]
fn explain_prints_remediation() {
    branchguard_cmd()
        .arg("explain")
        .arg("branch.naming")
        .assert()
        .success()
        .stdout(predicates::str::contains("Remediation"));
}

#[test]
fn explain_unknown_identifier_fails() {
    branchguard_cmd()
        .arg("explain")
        .arg("not.a.rule")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Unknown rule id or code"));
}
