//! Deferred directory timestamps.
//!
//! Creating anything inside a directory bumps its mtime, so directory times
//! can only be restored once the whole tree is written. Records are kept on a
//! stack and applied most recently discovered first.

use super::preserve::set_times_nofollow;
use crate::error::Result;
use filetime::FileTime;
use std::path::PathBuf;

/// Source times captured for one destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirTimestampRecord {
    pub path: PathBuf,
    pub accessed: FileTime,
    pub modified: FileTime,
}

/// LIFO list of directories awaiting their timestamps.
#[derive(Debug, Default)]
pub(crate) struct DeferredDirTimes {
    stack: Vec<DirTimestampRecord>,
}

impl DeferredDirTimes {
    pub(crate) fn push(&mut self, path: PathBuf, accessed: FileTime, modified: FileTime) {
        self.stack.push(DirTimestampRecord {
            path,
            accessed,
            modified,
        });
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    /// Records in the order they will be applied.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> impl Iterator<Item = &DirTimestampRecord> {
        self.stack.iter().rev()
    }

    /// Apply every record, newest first, without following symlinks.
    ///
    /// Stops at the first failure; directories already restored keep their
    /// times.
    pub(crate) fn apply(self) -> Result<()> {
        for record in self.stack.into_iter().rev() {
            set_times_nofollow(&record.path, record.accessed, record.modified)?;
        }
        Ok(())
    }
}
