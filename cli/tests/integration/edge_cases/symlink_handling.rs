//! Symlink handling integration tests for lcp CLI.
//!
//! Symlinks are recreated verbatim and never followed, whatever they point at.

use crate::common::TestFixture;
use assert_cmd::cargo::cargo_bin_cmd;
use filetime::FileTime;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::PathBuf;

#[test]
fn test_dangling_symlink_copied() {
    let fx = TestFixture::new();
    symlink("does/not/exist", fx.src().join("dangling")).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    assert_eq!(
        fs::read_link(fx.dst().join("dangling")).unwrap(),
        PathBuf::from("does/not/exist")
    );
}

#[test]
fn test_absolute_and_escaping_targets_kept_verbatim() {
    let fx = TestFixture::new();
    symlink("/etc/hostname", fx.src().join("abs")).unwrap();
    symlink("../../outside", fx.src().join("up")).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    assert_eq!(
        fs::read_link(fx.dst().join("abs")).unwrap(),
        PathBuf::from("/etc/hostname")
    );
    assert_eq!(
        fs::read_link(fx.dst().join("up")).unwrap(),
        PathBuf::from("../../outside")
    );
}

#[test]
fn test_symlink_to_directory_not_descended() {
    let fx = TestFixture::new();
    fx.write("real/inner.txt", "inner");
    symlink("real", fx.src().join("alias")).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    let alias = fs::symlink_metadata(fx.dst().join("alias")).unwrap();
    assert!(alias.file_type().is_symlink());
    assert!(fx.dst().join("real/inner.txt").exists());
}

#[test]
fn test_symlink_times_preserved_without_touching_target() {
    let fx = TestFixture::new();
    fx.write("target", "t");
    symlink("target", fx.src().join("link")).unwrap();
    let link_time = FileTime::from_unix_time(1_234_567_890, 0);
    filetime::set_symlink_file_times(fx.src().join("link"), link_time, link_time).unwrap();

    cargo_bin_cmd!("lcp").arg(fx.src()).arg(fx.dst()).assert().success();

    let meta = fs::symlink_metadata(fx.dst().join("link")).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&meta), link_time);
}
