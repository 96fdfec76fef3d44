//! Timestamp preservation integration tests for lcp CLI.
//!
//! Writing into a directory bumps its mtime; these tests verify directories
//! end up with the source's times anyway.

use crate::common::{TestFixture, mkfifo};
use assert_cmd::cargo::cargo_bin_cmd;
use filetime::FileTime;
use std::fs;

fn mtime(path: &std::path::Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::symlink_metadata(path).unwrap())
}

/// Only `dir/` with one file: `dir` keeps its original mtime.
#[test]
fn test_directory_mtime_survives_child_creation() {
    let fx = TestFixture::new();
    fx.write("dir/file", "x");
    let original = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_times(fx.src().join("dir"), original, original).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    assert_eq!(mtime(&fx.dst().join("dir")), original);
}

#[test]
fn test_nested_directory_times() {
    let fx = TestFixture::new();
    fx.write("a/b/c/leaf", "x");
    fx.write("a/sibling", "y");
    let times = [
        ("a", FileTime::from_unix_time(1_100_000_000, 0)),
        ("a/b", FileTime::from_unix_time(1_200_000_000, 0)),
        ("a/b/c", FileTime::from_unix_time(1_300_000_000, 0)),
    ];
    for (dir, time) in times {
        filetime::set_file_times(fx.src().join(dir), time, time).unwrap();
    }
    let root_time = FileTime::from_unix_time(1_400_000_000, 0);
    filetime::set_file_times(fx.src(), root_time, root_time).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    for (dir, time) in times {
        assert_eq!(mtime(&fx.dst().join(dir)), time, "mtime mismatch for {dir}");
    }
    assert_eq!(mtime(&fx.dst()), root_time);
}

#[test]
fn test_fifo_times_preserved() {
    let fx = TestFixture::new();
    mkfifo(&fx.src().join("pipe"), 0o600);
    let time = FileTime::from_unix_time(1_500_000_000, 42);
    filetime::set_symlink_file_times(fx.src().join("pipe"), time, time).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    assert_eq!(mtime(&fx.dst().join("pipe")), time);
}

#[test]
fn test_no_times_skips_directory_pass() {
    let fx = TestFixture::new();
    fx.write("dir/file", "x");
    let original = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_times(fx.src().join("dir"), original, original).unwrap();

    cargo_bin_cmd!("lcp")
        .arg("--no-times")
        .arg(fx.src())
        .arg(fx.dst())
        .assert()
        .success();

    assert_ne!(mtime(&fx.dst().join("dir")), original);
}
