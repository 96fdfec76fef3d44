//! Per-entry creation of the destination tree.
//!
//! Regular files are never copied byte by byte: the destination is a hardlink
//! to the source inode, which makes content, ownership, mode and times
//! identical by construction. Every other type is recreated and then receives
//! the source's metadata.

use super::CopyStats;
use super::dir_times::DeferredDirTimes;
use super::preserve::{
    copy_ownership, copy_permissions, copy_xattr, set_times_nofollow, source_times,
};
use super::walk::{EntryKind, SourceEntry};
use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::utils::node::{mkfifo, mknod};
use std::collections::HashMap;
use std::fs::{self, DirBuilder, Metadata};
use std::io;
use std::os::unix::fs::{DirBuilderExt, MetadataExt, symlink};
use std::path::{Path, PathBuf};

/// Identity of an on-disk object: `(st_dev, st_ino)`.
///
/// Two source paths with the same identity are hardlinks of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FileIdentity {
    dev: u64,
    ino: u64,
}

impl FileIdentity {
    pub(crate) fn of(meta: &Metadata) -> Self {
        Self {
            dev: meta.dev(),
            ino: meta.ino(),
        }
    }
}

/// Check for an existing destination without following a final symlink,
/// matching what `link(2)` will trip over.
#[inline]
fn dst_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// State of one copy: where the tree goes, which inodes already have a
/// destination path, and which directories still need their times.
pub(crate) struct Materializer<'a> {
    dst_root: &'a Path,
    options: &'a CopyOptions,
    in_user_namespace: bool,
    copied_files: HashMap<FileIdentity, PathBuf>,
    dir_times: DeferredDirTimes,
    stats: CopyStats,
}

impl<'a> Materializer<'a> {
    pub(crate) fn new(dst_root: &'a Path, options: &'a CopyOptions) -> Self {
        Self {
            dst_root,
            options,
            in_user_namespace: options.in_user_namespace(),
            copied_files: HashMap::new(),
            dir_times: DeferredDirTimes::default(),
            stats: CopyStats::default(),
        }
    }

    fn destination(&self, entry: &SourceEntry) -> PathBuf {
        if entry.relative.as_os_str().is_empty() {
            self.dst_root.to_path_buf()
        } else {
            self.dst_root.join(&entry.relative)
        }
    }

    /// Create the destination counterpart of `entry` and copy its metadata.
    pub(crate) fn materialize(&mut self, entry: &SourceEntry) -> Result<()> {
        let dst = self.destination(entry);

        match entry.kind {
            EntryKind::Regular => return self.link_regular(entry, &dst),
            EntryKind::Directory => self.create_dir(entry, &dst)?,
            EntryKind::Symlink => {
                let target = fs::read_link(&entry.path).map_err(|e| Error::metadata(&entry.path, e))?;
                symlink(&target, &dst).map_err(|e| Error::create("create symlink", &dst, e))?;
                self.stats.symlinks_created += 1;
            }
            // Sockets cannot be recreated as live endpoints; a FIFO keeps the node
            EntryKind::Fifo | EntryKind::Socket => {
                mkfifo(&dst, entry.metadata.mode()).map_err(|e| Error::create("create fifo", &dst, e))?;
                self.stats.fifos_created += 1;
            }
            EntryKind::Device => {
                if self.in_user_namespace {
                    self.options.warn(&format!(
                        "Skipping device node {} inside a user namespace",
                        entry.path.display()
                    ));
                    self.stats.devices_skipped += 1;
                    return Ok(());
                }
                mknod(&dst, entry.metadata.mode(), entry.metadata.rdev())
                    .map_err(|e| Error::create("create device node", &dst, e))?;
                self.stats.devices_created += 1;
            }
            EntryKind::Other(mode) => {
                return Err(Error::UnknownFileType {
                    path: entry.path.clone(),
                    mode,
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(src = %entry.path.display(), dst = %dst.display(), kind = ?entry.kind, "created");

        self.copy_metadata(entry, &dst)
    }

    /// Hardlink a regular file into place.
    ///
    /// The first destination path of an inode links to the source; later
    /// paths of the same inode link to that first destination path. An
    /// existing destination is left untouched so a rerun succeeds.
    fn link_regular(&mut self, entry: &SourceEntry, dst: &Path) -> Result<()> {
        let id = FileIdentity::of(&entry.metadata);

        if let Some(first) = self.copied_files.get(&id) {
            if dst_exists(dst) {
                self.stats.files_skipped += 1;
            } else {
                fs::hard_link(first, dst).map_err(|e| Error::create("hardlink", dst, e))?;
                self.stats.hardlinks_deduplicated += 1;
                #[cfg(feature = "tracing")]
                tracing::debug!(first = %first.display(), dst = %dst.display(), "hardlinked to earlier copy");
            }
            return Ok(());
        }

        if dst_exists(dst) {
            self.stats.files_skipped += 1;
        } else {
            fs::hard_link(&entry.path, dst).map_err(|e| Error::create("hardlink", dst, e))?;
            self.stats.files_linked += 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(src = %entry.path.display(), dst = %dst.display(), "hardlinked");
        }
        self.copied_files.insert(id, dst.to_path_buf());
        Ok(())
    }

    fn create_dir(&mut self, entry: &SourceEntry, dst: &Path) -> Result<()> {
        let mode = if self.options.preserve_permissions {
            entry.metadata.mode() & 0o7777
        } else {
            0o777
        };
        match DirBuilder::new().mode(mode).create(dst)
        {
            Ok(()) => self.stats.dirs_created += 1,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => self.stats.dirs_existing += 1,
            Err(e) => return Err(Error::create("create directory", dst, e)),
        }
        Ok(())
    }

    /// Ownership, extended attribute, permissions, then timestamps.
    fn copy_metadata(&mut self, entry: &SourceEntry, dst: &Path) -> Result<()> {
        let options = self.options;
        let is_symlink = entry.kind == EntryKind::Symlink;

        if options.preserve_ownership {
            copy_ownership(&entry.metadata, dst)?;
        }
        if options.preserve_xattr {
            copy_xattr(&entry.path, dst, &options.xattr_name)?;
        }
        // symlink modes are not settable, chmod would hit the target
        if options.preserve_permissions && !is_symlink {
            copy_permissions(&entry.metadata, dst)?;
        }

        if options.preserve_timestamps {
            let (atime, mtime) = source_times(&entry.metadata);
            match entry.kind {
                EntryKind::Directory => self.dir_times.push(dst.to_path_buf(), atime, mtime),
                _ => set_times_nofollow(dst, atime, mtime)?,
            }
        }
        Ok(())
    }

    /// Run the deferred directory timestamp pass and return the counters.
    pub(crate) fn finish(self) -> Result<CopyStats> {
        self.dir_times.apply()?;
        Ok(self.stats)
    }
}
