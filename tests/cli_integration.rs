//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts are avoided by passing every field on the command
//! line and supplying the master password through `PASSVAULT_PASSWORD`.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const MASTER: &str = "MasterPw1!";

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Helper: a command bound to `dir` that unlocks with the test password.
fn unlocked(dir: &TempDir) -> Command {
    let mut cmd = passvault();
    cmd.arg("--data-dir")
        .arg(dir.path())
        .env("PASSVAULT_PASSWORD", MASTER)
        .env_remove("PASSVAULT_DIR");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Master-password protected credential vault",
        ))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("passwd"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();
    let output = unlocked(&tmp)
        .args(["generate", "--length", "32"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim().chars().count(), 32);
}

#[test]
fn generate_with_every_group_disabled_fails() {
    let tmp = TempDir::new().unwrap();
    unlocked(&tmp)
        .args([
            "generate",
            "--no-uppercase",
            "--no-lowercase",
            "--no-digits",
            "--no-symbols",
        ])
        .assert()
        .failure();
}

#[test]
fn status_reports_not_set_up() {
    let tmp = TempDir::new().unwrap();

    unlocked(&tmp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not set up"));
}

#[test]
fn list_before_init_fails() {
    let tmp = TempDir::new().unwrap();

    unlocked(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("passvault init"));
}

#[test]
fn init_add_list_delete_flow() {
    let tmp = TempDir::new().unwrap();

    unlocked(&tmp).arg("init").assert().success();
    assert!(tmp.path().join("master.config").exists());

    unlocked(&tmp)
        .args(["add", "github", "alice", "p@ss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry #1 added"));
    assert!(tmp.path().join("passwords.enc").exists());

    unlocked(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("p@ss").not());

    unlocked(&tmp)
        .args(["list", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p@ss"));

    unlocked(&tmp)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry #1"));

    unlocked(&tmp)
        .args(["delete", "1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn init_twice_fails() {
    let tmp = TempDir::new().unwrap();

    unlocked(&tmp).arg("init").assert().success();
    unlocked(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already set up"));
}

#[test]
fn wrong_master_password_is_rejected() {
    let tmp = TempDir::new().unwrap();
    unlocked(&tmp).arg("init").assert().success();

    unlocked(&tmp)
        .env("PASSVAULT_PASSWORD", "not-the-password")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong master password"));
}

#[test]
fn passwd_refuses_password_from_environment() {
    let tmp = TempDir::new().unwrap();
    unlocked(&tmp).arg("init").assert().success();
    let record = std::fs::read(tmp.path().join("master.config")).unwrap();

    unlocked(&tmp)
        .arg("passwd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PASSVAULT_PASSWORD"));

    assert_eq!(
        std::fs::read(tmp.path().join("master.config")).unwrap(),
        record
    );
    unlocked(&tmp).arg("list").assert().success();
}

#[test]
fn completions_for_unknown_shell_fails() {
    passvault()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}
