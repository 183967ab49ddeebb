//! Integration tests for the startfast binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn startfast() -> Command {
    Command::cargo_bin("startfast").unwrap()
}

#[test]
fn help_flag_shows_commands() {
    startfast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("startfast"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn version_flag_matches_cargo() {
    startfast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_lists_generation_options() {
    startfast()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("--auth"))
        .stdout(predicate::str::contains("--python-version"))
        .stdout(predicate::str::contains("--no-docker"));
}

#[test]
fn new_generates_the_default_project() {
    let temp = TempDir::new().unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "simple-api", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let root = temp.path().join("simple-api");
    assert!(root.join("app/main.py").exists());
    assert!(root.join("app/db/session.py").exists(), "sqlite connector");
    assert!(!root.join("app/core/security.py").exists(), "no auth module");
    assert!(root.join("Dockerfile").exists());
    assert!(root.join("docker-compose.yml").exists());
    assert!(root.join("tests/test_api.py").exists());
    assert!(root.join("README.md").exists());

    let main = fs::read_to_string(root.join("app/main.py")).unwrap();
    assert!(main.contains("FastAPI"));
    assert!(!main.contains("{{"), "unrendered placeholder");

    let requirements = fs::read_to_string(root.join("requirements.txt")).unwrap();
    assert!(requirements.contains("fastapi"));
    assert!(requirements.contains("aiosqlite"));
}

#[test]
fn new_with_path_places_the_project() {
    let temp = TempDir::new().unwrap();
    let parent = temp.path().join("workspace");
    fs::create_dir(&parent).unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "svc", "--path", "workspace", "--yes", "-q"])
        .assert()
        .success();

    assert!(parent.join("svc/app/main.py").exists());
    assert!(!temp.path().join("svc").exists());
}

#[test]
fn sync_flag_generates_the_sync_variant() {
    let temp = TempDir::new().unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "legacy-svc", "--sync", "--yes", "-q"])
        .assert()
        .success();

    let main = fs::read_to_string(temp.path().join("legacy-svc/app/main.py")).unwrap();
    assert!(!main.contains("async def root"));

    let session = fs::read_to_string(temp.path().join("legacy-svc/app/db/session.py")).unwrap();
    assert!(session.contains("sessionmaker"));
    assert!(!session.contains("async_sessionmaker"));
}

#[test]
fn no_docker_subtracts_the_docker_subtree() {
    let temp = TempDir::new().unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "lean-svc", "--no-docker", "--yes", "-q"])
        .assert()
        .success();

    let root = temp.path().join("lean-svc");
    assert!(!root.join("Dockerfile").exists());
    assert!(!root.join("docker-compose.yml").exists());
    assert!(!root.join("scripts").exists());
    assert!(root.join("app/main.py").exists(), "baseline survives");
}

#[test]
fn jwt_over_postgres_generates_auth_scaffolding() {
    let temp = TempDir::new().unwrap();

    startfast()
        .current_dir(temp.path())
        .args([
            "new",
            "shop",
            "--type",
            "crud",
            "--database",
            "postgresql",
            "--auth",
            "jwt",
            "--yes",
            "-q",
        ])
        .assert()
        .success();

    let root = temp.path().join("shop");
    assert!(root.join("app/core/security.py").exists());
    assert!(root.join("app/api/v1/auth.py").exists());
    assert!(root.join("app/models/auth.py").exists());
    assert!(root.join("app/services/item_service.py").exists());

    let compose = fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("postgres:16-alpine"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "ghost", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("ghost").exists());
}

#[test]
fn existing_non_empty_destination_is_refused() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("taken");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("precious.txt"), "keep me").unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "taken", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Nothing was written into the refused destination.
    assert_eq!(fs::read_dir(&existing).unwrap().count(), 1);
    assert_eq!(
        fs::read_to_string(existing.join("precious.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn force_overwrites_a_non_empty_destination() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("taken");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("unrelated.txt"), "left alone").unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["new", "taken", "--force", "--yes", "-q"])
        .assert()
        .success();

    assert!(existing.join("app/main.py").exists());
    // Paths not in the plan are left untouched.
    assert_eq!(
        fs::read_to_string(existing.join("unrelated.txt")).unwrap(),
        "left alone"
    );
}

#[test]
fn plan_list_format_prints_paths() {
    startfast()
        .args(["plan", "preview", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app/main.py"))
        .stdout(predicate::str::contains("requirements.txt"));
}

#[test]
fn plan_json_format_is_parseable() {
    let output = startfast()
        .args(["plan", "preview", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert!(rows.iter().any(|r| r["path"] == "app/main.py"));
    assert!(rows.iter().all(|r| r["kind"].is_string()));
}

#[test]
fn plan_is_deterministic_across_runs() {
    let run = || {
        let output = startfast()
            .args([
                "plan",
                "preview",
                "--database",
                "mongodb",
                "--celery",
                "--format",
                "list",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn plan_substitutes_database_into_connector_path() {
    startfast()
        .args(["plan", "preview", "--database", "mongodb", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app/db/mongodb_client.py"));
}

#[test]
fn quiet_new_prints_nothing_on_stdout() {
    let temp = TempDir::new().unwrap();

    startfast()
        .current_dir(temp.path())
        .args(["-q", "new", "silent-svc", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn shell_completions_are_generated() {
    startfast()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("startfast"));
}

#[test]
fn template_override_directory_is_honoured() {
    let temp = TempDir::new().unwrap();
    let overrides = temp.path().join("templates/docs");
    fs::create_dir_all(&overrides).unwrap();
    fs::write(
        overrides.join("readme.tmpl"),
        "# {{PROJECT_NAME}} (custom readme)\n",
    )
    .unwrap();

    startfast()
        .current_dir(temp.path())
        .env("STARTFAST_TEMPLATES_DIR", temp.path().join("templates"))
        .args(["new", "branded", "--yes", "-q"])
        .assert()
        .success();

    let readme = fs::read_to_string(temp.path().join("branded/README.md")).unwrap();
    assert_eq!(readme, "# branded (custom readme)\n");
}
