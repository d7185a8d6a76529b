//! End-to-end tests for the updatable CLI
//!
//! These tests verify:
//! - Text report layout for a requirements file
//! - JSON output schema
//! - Exit codes for partial failures and fatal errors

use assert_cmd::cargo::cargo_bin_cmd;
use mockito::{Mock, ServerGuard};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

/// Create a requirements file in a fresh temp directory
fn requirements_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("requirements.txt");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

fn serve(server: &mut ServerGuard, path: &str, status: usize, body: String) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Registry with package3 (major updates) and package4 (pre-releases)
fn registry() -> (ServerGuard, Vec<Mock>) {
    let mut server = mockito::Server::new();
    let mocks = vec![
        serve(&mut server, "/pypi/package3/json", 200, fixture("pypi-package3.json")),
        serve(
            &mut server,
            "/pypi/package3/1.0.0/json",
            200,
            fixture("pypi-package3-1.0.0.json"),
        ),
        serve(&mut server, "/pypi/package4/json", 200, fixture("pypi-package4.json")),
        serve(
            &mut server,
            "/pypi/package4/1.1.0/json",
            404,
            r#"{"message": "Not Found"}"#.to_string(),
        ),
    ];
    (server, mocks)
}

fn updatable(server: &ServerGuard, requirements: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("updatable");
    cmd.env_remove("RUST_LOG")
        .arg("--index-url")
        .arg(format!("{}/pypi", server.url()))
        .arg("--file")
        .arg(requirements)
        .arg("--no-color")
        .arg("--quiet");
    cmd
}

#[test]
fn test_text_report() {
    let (server, _mocks) = registry();
    let (_dir, path) = requirements_file("package3==1.0.0\n# comment\npackage4==1.1.0\n");

    let expected = "\
package3 (1.0.0) - License: GPL-2.0
  Major releases:
  -- 3.0.0 on 2015-09-29 23:34:21 - License: GPL-2.0
  -- 2.0.0 on 2013-11-29 23:34:21 - License: GPL-2.0
___
";

    updatable(&server, &path)
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn test_text_report_with_pre_releases() {
    let (server, _mocks) = registry();
    let (_dir, path) = requirements_file("package4==1.1.0\n");

    updatable(&server, &path)
        .arg("--pre-releases")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("package4 (1.1.0) - License: \n"))
        .stdout(predicate::str::contains("  Pre releases:\n"))
        .stdout(predicate::str::contains(
            "  -- 2.0.0rc1 on 2016-03-10 10:00:00 - License: \n",
        ))
        .stdout(predicate::str::contains("  -- 2.0.0b1 on unknown - License: \n"));
}

#[test]
fn test_pre_releases_explicitly_disabled() {
    let (server, _mocks) = registry();
    let (_dir, path) = requirements_file("package4==1.1.0\n");

    updatable(&server, &path)
        .args(["--pre-releases", "no"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_json_output() {
    let (server, _mocks) = registry();
    let (_dir, path) = requirements_file("package3==1.0.0\npackage4==1.1.0\n");

    let output = updatable(&server, &path).arg("--json").output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["package"], "package3");
    assert_eq!(entries[0]["newer_releases"], 2);
    assert_eq!(entries[0]["latest_release_license"], "MIT");
    assert_eq!(entries[0]["major_updates"][0]["version"], "3.0.0");
    assert_eq!(entries[1]["package"], "package4");
    assert_eq!(entries[1]["pre_releases"], 3);
    assert_eq!(entries[1]["current_release"], "");
}

#[test]
fn test_partial_failure_exit_code() {
    let (server, _mocks) = registry();
    let (_dir, path) = requirements_file(
        "package3==1.0.0\nweird==latest\nhuge==18446744073709551615\n",
    );

    updatable(&server, &path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("package3 (1.0.0)"))
        .stderr(predicate::str::contains("weird (latest) - Error: invalid version 'latest'"))
        .stderr(predicate::str::contains(
            "huge (18446744073709551615) - Error: invalid version",
        ));
}

#[test]
fn test_registry_server_error_is_not_a_failure() {
    let (server, _mocks) = registry();
    // Unmatched paths answer 501 on mockito
    let (_dir, path) = requirements_file("package3==1.0.0\nbroken==1.0.0\n");

    updatable(&server, &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("package3 (1.0.0)"))
        .stderr(predicate::str::contains("Error").not());
}

#[test]
fn test_missing_requirements_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    cargo_bin_cmd!("updatable")
        .arg("--file")
        .arg(&path)
        .arg("--quiet")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read requirements file"));
}

#[test]
fn test_invalid_pre_releases_value() {
    cargo_bin_cmd!("updatable")
        .args(["--pre-releases", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid boolean value 'maybe'"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("updatable")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
