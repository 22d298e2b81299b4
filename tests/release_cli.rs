//! End-to-end tests of the release binary surface.

use assert_cmd::Command;
use predicates::prelude::*;

fn release_cmd() -> Command {
    Command::cargo_bin("unity-release").expect("binary builds")
}

#[test]
fn help_lists_flags_from_all_three_records() {
    release_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--create-tag"))
        .stdout(predicate::str::contains("--upload-release"))
        .stdout(predicate::str::contains("--no-draft"))
        .stdout(predicate::str::contains("--generate-notes"))
        .stdout(predicate::str::contains("--unityPath"))
        .stdout(predicate::str::contains("--batchmode"));
}

#[test]
fn unknown_flags_are_rejected() {
    release_cmd().arg("--definitely-not-an-option").assert().failure();
}

#[test]
fn malformed_tag_fails_with_version_error() {
    release_cmd()
        .args(["--dry-run", "--tag", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version"));
}

#[test]
fn dry_run_pipeline_succeeds_and_creates_nothing() {
    let temp = tempfile::tempdir().unwrap();

    release_cmd()
        .current_dir(temp.path())
        .args(["--dry-run", "--compile", "--create-tag", "--upload-release"])
        .assert()
        .success();

    // Dry-run must not create the dist dir or the archive.
    assert!(!temp.path().join("dist").exists());
    assert!(!temp.path().join("release.zip").exists());
}

#[test]
fn dry_run_logs_intended_commands() {
    let temp = tempfile::tempdir().unwrap();

    release_cmd()
        .current_dir(temp.path())
        .args(["--dry-run", "--create-tag", "--log", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("git tag v0.1.0"))
        .stderr(predicate::str::contains("git push origin v0.1.0"));
}

#[test]
fn unavailable_gh_cli_aborts_before_publishing() {
    let temp = tempfile::tempdir().unwrap();

    // With an empty PATH the `gh auth status` check cannot spawn, so setup
    // fails with the tool-unavailable error and no later stage runs.
    release_cmd()
        .current_dir(temp.path())
        .env("PATH", "")
        .args(["--upload-release", "--tag", "v1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("https://cli.github.com/"));

    assert!(!temp.path().join("release.zip").exists());
}

#[test]
fn dry_run_respects_an_explicit_tag() {
    let temp = tempfile::tempdir().unwrap();

    release_cmd()
        .current_dir(temp.path())
        .args(["--dry-run", "--create-tag", "--tag", "v3.2.1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("git tag v3.2.1"));
}
