//! Basic functionality integration tests for lcp CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, identity};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::PathBuf;

#[test]
fn test_copy_with_positional_arguments() {
    let fx = TestFixture::new();
    fx.write("file1.txt", "content1");
    fx.write("subdir/nested/file2.txt", "content2");

    let mut cmd = cargo_bin_cmd!("lcp");
    cmd.env_remove("source_target")
        .env_remove("dist_target")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success()
        .stderr(predicate::str::contains("copy finish"));

    fx.assert_file_content(&fx.dst().join("file1.txt"), "content1");
    fx.assert_file_content(&fx.dst().join("subdir/nested/file2.txt"), "content2");
}

#[test]
fn test_copy_with_environment_variables() {
    let fx = TestFixture::new();
    fx.write("data.bin", "payload");

    let mut cmd = cargo_bin_cmd!("lcp");
    cmd.env("source_target", fx.src())
        .env("dist_target", fx.dst())
        .assert()
        .success()
        .stderr(predicate::str::contains("copy finish"))
        .stderr(predicate::str::contains("source_target"))
        .stderr(predicate::str::contains("dist_target"));

    fx.assert_file_content(&fx.dst().join("data.bin"), "payload");
}

#[test]
fn test_hardlinks_and_symlinks_scenario() {
    let fx = TestFixture::new();
    fx.write("a/file1", "shared");
    fs::hard_link(fx.src().join("a/file1"), fx.src().join("a/file2")).unwrap();
    fs::create_dir(fx.src().join("b")).unwrap();
    symlink("a/file1", fx.src().join("c")).unwrap();

    let mut cmd = cargo_bin_cmd!("lcp");
    cmd.arg(fx.src()).arg(fx.dst()).assert().success();

    let dst = fx.dst();
    assert_eq!(identity(&dst.join("a/file1")), identity(&dst.join("a/file2")));
    assert!(dst.join("b").is_dir());
    assert!(
        fs::symlink_metadata(dst.join("c"))
            .unwrap()
            .file_type()
            .is_symlink()
    );
    assert_eq!(fs::read_link(dst.join("c")).unwrap(), PathBuf::from("a/file1"));
}

#[test]
fn test_rerun_into_existing_destination_succeeds() {
    let fx = TestFixture::new();
    fx.write("dir/file", "x");

    cargo_bin_cmd!("lcp")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success();
    cargo_bin_cmd!("lcp")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success();

    fx.assert_file_content(&fx.dst().join("dir/file"), "x");
}

#[test]
fn test_json_log_format() {
    let fx = TestFixture::new();
    fx.write("file", "x");

    cargo_bin_cmd!("lcp")
        .arg("--log-format")
        .arg("json")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"copy finish\""));
}

#[test]
fn test_quiet_suppresses_success_report() {
    let fx = TestFixture::new();
    fx.write("file", "x");

    cargo_bin_cmd!("lcp")
        .arg("-q")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_created_entries() {
    let fx = TestFixture::new();
    fx.write("file", "x");

    cargo_bin_cmd!("lcp")
        .arg("-v")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success()
        .stderr(predicate::str::contains("hardlinked"));
}
