//! Exit-code and error-message contract tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn startfast() -> Command {
    Command::cargo_bin("startfast").unwrap()
}

#[test]
fn crud_without_database_exits_2_with_reason() {
    let temp = TempDir::new().unwrap();
    startfast()
        .current_dir(temp.path())
        .args(["new", "shop", "--type", "crud", "--database", "none", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("persistence"));

    assert!(!temp.path().join("shop").exists(), "nothing may be written");
}

#[test]
fn bad_python_version_exits_2() {
    let temp = TempDir::new().unwrap();
    startfast()
        .current_dir(temp.path())
        .args(["new", "svc", "--python-version", "three.eleven", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("python-version"));
}

#[test]
fn python_2_exits_2() {
    let temp = TempDir::new().unwrap();
    startfast()
        .current_dir(temp.path())
        .args(["new", "svc", "--python-version", "2.7", "--yes"])
        .assert()
        .code(2);
}

#[test]
fn unknown_database_value_is_a_clap_error() {
    startfast()
        .args(["new", "svc", "--database", "oracle", "--yes"])
        .assert()
        .code(2);
}

#[test]
fn reserved_project_name_exits_2() {
    let temp = TempDir::new().unwrap();
    startfast()
        .current_dir(temp.path())
        .args(["new", "app", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn path_separator_in_name_exits_2() {
    let temp = TempDir::new().unwrap();
    startfast()
        .current_dir(temp.path())
        .args(["new", "nested/name", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("separator"));
}

#[test]
fn destination_conflict_exits_2_and_suggests_force() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("taken")).unwrap();
    std::fs::write(temp.path().join("taken/file"), "x").unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "taken", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn errors_also_fail_the_plan_command() {
    startfast()
        .args(["plan", "shop", "--type", "crud", "--database", "none"])
        .assert()
        .code(2);
}

#[test]
fn unreadable_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "not [valid toml").unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["--config"])
        .arg(&config)
        .args(["plan", "svc"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("parse"));
}
