//! CLI binary integration tests using assert_cmd
//!
//! These tests invoke the actual binary and verify command-line behavior.
//! None of them reach a network: they exercise argument validation and
//! configuration errors, which are checked before any request goes out.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jira-export"));
    // Keep ambient credentials out of the test environment
    cmd.env_remove("JIRA_BASE_URL").env_remove("JIRA_TOKEN");
    cmd
}

#[test]
fn test_cli_requires_base_url_and_token() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--base-url"))
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn test_cli_help_documents_the_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--jql"))
        .stdout(predicate::str::contains("JIRA_BASE_URL"))
        .stdout(predicate::str::contains("JIRA_TOKEN"))
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn test_cli_rejects_oversized_page_before_any_request() {
    let temp = tempfile::TempDir::new().unwrap();
    cmd()
        .current_dir(temp.path())
        .args(["-u", "https://jira.example.com", "-t", "secret"])
        .args(["--page-size", "2000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page size"));
}

#[test]
fn test_cli_rejects_invalid_base_url() {
    let temp = tempfile::TempDir::new().unwrap();
    cmd()
        .current_dir(temp.path())
        .args(["-u", "not a url", "-t", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base URL"));
}

#[test]
fn test_cli_reads_credentials_from_environment() {
    let temp = tempfile::TempDir::new().unwrap();
    // Credentials come from the environment; the invalid URL still fails
    // before any request, proving both env vars were picked up.
    cmd()
        .current_dir(temp.path())
        .env("JIRA_BASE_URL", "not a url")
        .env("JIRA_TOKEN", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base URL"));
}
