//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run from a directory outside the workspace so dotenvy finds no `.env`.
/// An explicitly empty `DATABASE_URL` also wins over any `.env` it might
/// find, and counts as unset.
fn reverb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reverb").unwrap();
    cmd.env("DATABASE_URL", "").current_dir(dir.path());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    reverb(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    reverb(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--ephemeral"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let dir = TempDir::new().unwrap();
    reverb(&dir)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or missing database URL"))
        .stderr(predicate::str::contains("DATABASE_URL is not set."));
}

#[test]
fn test_migrate_with_malformed_url_fails() {
    let dir = TempDir::new().unwrap();
    reverb(&dir)
        .args(["migrate", "--database-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or missing database URL"));
}

#[test]
fn test_env_file_in_working_directory_is_loaded() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "DATABASE_URL=\"not a url\"\n").unwrap();

    // No explicit DATABASE_URL here, so the .env value is picked up
    Command::cargo_bin("reverb")
        .unwrap()
        .env_remove("DATABASE_URL")
        .current_dir(dir.path())
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or missing database URL"))
        .stderr(predicate::str::contains("DATABASE_URL is not set.").not());
}

#[test]
fn test_serve_rejects_migrate_with_ephemeral() {
    let dir = TempDir::new().unwrap();
    reverb(&dir)
        .args(["serve", "--migrate", "--ephemeral"])
        .assert()
        .failure();
}
