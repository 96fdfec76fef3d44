//! Source tree traversal.
//!
//! The walker visits every entry under a root exactly once, depth first, with
//! siblings in lexical order. A directory is handed to the visitor before its
//! children are listed, so the visitor can create the destination directory
//! before anything is placed inside it. Symlinks are reported, never followed.

use crate::error::{Error, Result};
use std::fs::{self, FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::{Path, PathBuf};

/// File type of a source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    /// Block or character device
    Device,
    /// Anything else, with the raw `st_mode`
    Other(u32),
}

impl EntryKind {
    pub(crate) fn from_metadata(meta: &Metadata) -> Self {
        Self::classify(meta.file_type(), meta.mode())
    }

    fn classify(ft: FileType, mode: u32) -> Self {
        // Check symlink FIRST so nothing downstream mistakes it for its target
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::Regular
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else if ft.is_block_device() || ft.is_char_device() {
            Self::Device
        } else {
            Self::Other(mode)
        }
    }
}

/// One visited node of the source tree.
#[derive(Debug)]
pub(crate) struct SourceEntry {
    /// Full source path
    pub path: PathBuf,
    /// Path relative to the walk root; empty for the root itself
    pub relative: PathBuf,
    pub kind: EntryKind,
    /// `lstat` result
    pub metadata: Metadata,
}

/// Walk `root`, calling `visit` for every entry.
///
/// The first error, from the walk itself or returned by `visit`, stops the
/// walk and is returned.
pub(crate) fn walk_tree<F>(root: &Path, visit: &mut F) -> Result<()>
where
    F: FnMut(&SourceEntry) -> Result<()>,
{
    walk_entry(root, PathBuf::new(), visit)
}

fn walk_entry<F>(path: &Path, relative: PathBuf, visit: &mut F) -> Result<()>
where
    F: FnMut(&SourceEntry) -> Result<()>,
{
    let metadata = fs::symlink_metadata(path).map_err(|e| Error::metadata(path, e))?;
    let entry = SourceEntry {
        path: path.to_path_buf(),
        relative,
        kind: EntryKind::from_metadata(&metadata),
        metadata,
    };

    visit(&entry)?;

    if entry.kind != EntryKind::Directory {
        return Ok(());
    }

    for name in sorted_names(path)? {
        let child = path.join(&name);
        let child_relative = entry.relative.join(&name);
        walk_entry(&child, child_relative, visit)?;
    }

    Ok(())
}

/// Names in `dir`, sorted byte-wise.
fn sorted_names(dir: &Path) -> Result<Vec<std::ffi::OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::metadata(dir, e))? {
        let entry = entry.map_err(|e| Error::metadata(dir, e))?;
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}
