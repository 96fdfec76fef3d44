//! Error handling integration tests for lcp CLI.
//!
//! These tests verify proper error handling behaviors:
//! - Missing configuration is rejected before touching the filesystem
//! - Copy failures report both roots and exit non-zero

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_targets_is_invalid_parameter() {
    let cwd = TempDir::new().unwrap();

    cargo_bin_cmd!("lcp")
        .current_dir(cwd.path())
        .env_remove("source_target")
        .env_remove("dist_target")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid parameter"));

    // nothing was created anywhere near the working directory
    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_environment_targets_is_invalid_parameter() {
    let cwd = TempDir::new().unwrap();

    cargo_bin_cmd!("lcp")
        .current_dir(cwd.path())
        .env("source_target", "")
        .env("dist_target", "")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid parameter"));

    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_source_with_destination_fails_in_copy() {
    let fx = TestFixture::new();

    cargo_bin_cmd!("lcp")
        .current_dir(fx.root.path())
        .env("source_target", "")
        .env("dist_target", fx.dst())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid parameter").not())
        .stderr(predicate::str::contains("metadata_read"));

    assert!(!fx.dst().exists());
}

#[test]
fn test_missing_source_fails() {
    let fx = TestFixture::new();
    let missing = fx.root.path().join("missing");

    cargo_bin_cmd!("lcp")
        .arg(&missing)
        .arg(fx.dst())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read metadata"))
        .stderr(predicate::str::contains("missing"))
        .stderr(predicate::str::contains("metadata_read"));

    assert!(!fx.dst().exists());
}

#[test]
fn test_missing_destination_parent_fails() {
    let fx = TestFixture::new();
    fx.write("file", "x");
    let dst = fx.root.path().join("no/such/dir");

    cargo_bin_cmd!("lcp")
        .arg(fx.src())
        .arg(&dst)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to create directory"));
}

#[test]
fn test_existing_symlink_at_destination_fails() {
    let fx = TestFixture::new();
    std::os::unix::fs::symlink("target", fx.src().join("link")).unwrap();
    fs::create_dir(fx.dst()).unwrap();
    std::os::unix::fs::symlink("target", fx.dst().join("link")).unwrap();

    cargo_bin_cmd!("lcp")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create symlink"));
}

#[test]
fn test_only_source_configured_fails_in_copy() {
    let fx = TestFixture::new();

    cargo_bin_cmd!("lcp")
        .env_remove("dist_target")
        .arg(fx.src())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid parameter").not());
}
