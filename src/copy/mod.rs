//! Core copy operation.
//!
//! A copy is a single sequential walk of the source tree. Each visited entry
//! is materialized at the destination before the walk descends further, and
//! once the walk completes the recorded directory timestamps are applied.

mod dir_times;
mod materialize;
mod preserve;
mod walk;

use crate::error::Result;
use crate::options::CopyOptions;
use materialize::Materializer;
use std::path::Path;
use std::time::{Duration, Instant};
use walk::{SourceEntry, walk_tree};

/// Statistics from a copy operation.
///
/// Returned by [`copy_dir`] to provide information about what was created.
///
/// # Example
///
/// ```no_run
/// use linkcopy::{copy_dir, CopyOptions};
/// use std::path::Path;
///
/// let stats = copy_dir(Path::new("src"), Path::new("dst"), &CopyOptions::default())?;
/// println!("Linked {} files, created {} directories", stats.files_linked, stats.dirs_created);
/// # Ok::<(), linkcopy::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files hardlinked from the source
    pub files_linked: u64,
    /// Regular files hardlinked to an earlier destination path of the same inode
    pub hardlinks_deduplicated: u64,
    /// Regular files whose destination already existed
    pub files_skipped: u64,
    /// Directories created
    pub dirs_created: u64,
    /// Directories that already existed at the destination
    pub dirs_existing: u64,
    /// Symlinks recreated
    pub symlinks_created: u64,
    /// FIFOs created (including those standing in for sockets)
    pub fifos_created: u64,
    /// Device nodes created
    pub devices_created: u64,
    /// Device nodes skipped because the process runs in a user namespace
    pub devices_skipped: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

/// Copy the tree rooted at `src` to `dst`, preserving hardlinks, special
/// files and metadata.
///
/// `dst` itself is created if missing (its parent must exist) and receives
/// the metadata of `src`. Regular files are hardlinked rather than copied, so
/// `src` and `dst` must live on the same filesystem.
///
/// A directory receives its permission bits as soon as it is created, before
/// its children. Without `CAP_DAC_OVERRIDE`, a source directory whose mode
/// denies the owner write access (e.g. `0o555`) therefore fails the copy at
/// its first child. Pass [`CopyOptions::without_permissions`] to copy such
/// trees as an unprivileged user.
///
/// # Arguments
///
/// * `src` - Source root
/// * `dst` - Destination root
/// * `options` - Copy options
///
/// # Errors
///
/// The first failure aborts the copy; entries created so far stay in place.
///
/// - An entry cannot be `lstat`ed or listed ([`Error::Metadata`])
/// - An entry has an unsupported type ([`Error::UnknownFileType`])
/// - A destination entry cannot be created ([`Error::Create`])
/// - Ownership, the extended attribute, permissions or times cannot be
///   applied ([`Error::Preserve`])
///
/// [`Error::Metadata`]: crate::Error::Metadata
/// [`Error::UnknownFileType`]: crate::Error::UnknownFileType
/// [`Error::Create`]: crate::Error::Create
/// [`Error::Preserve`]: crate::Error::Preserve
pub fn copy_dir(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start_time = Instant::now();

    let mut materializer = Materializer::new(dst, options);
    walk_tree(src, &mut |entry: &SourceEntry| materializer.materialize(entry))?;

    // Directories last: every write above has bumped some directory mtime
    let mut stats = materializer.finish()?;
    stats.duration = start_time.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(?stats, "tree copy complete");

    Ok(stats)
}

// =============================================================================
// Tests
// =============================================================================
