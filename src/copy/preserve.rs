//! Metadata copying onto freshly created destination entries.
//!
//! Order matters: `lchown` clears setuid/setgid bits and file capabilities,
//! so ownership goes first, then the extended attribute, then permissions.
//! Timestamps come last because every other step bumps ctime only, while the
//! caller decides when directory times may be applied.

use crate::error::{Error, Result};
use filetime::{FileTime, set_symlink_file_times};
use std::fs::{self, Metadata};
use std::os::unix::fs::{MetadataExt, PermissionsExt, lchown};
use std::path::Path;

/// Set `dst` owner and group to those of the source, without following
/// symlinks.
pub(crate) fn copy_ownership(src_meta: &Metadata, dst: &Path) -> Result<()> {
    lchown(dst, Some(src_meta.uid()), Some(src_meta.gid()))
        .map_err(|e| Error::preserve("ownership", dst, e))
}

/// Copy the extended attribute `name` from `src` to `dst` if the source has
/// it. Neither path is dereferenced.
///
/// Returns whether the attribute was present.
pub(crate) fn copy_xattr(src: &Path, dst: &Path, name: &str) -> Result<bool> {
    let value = xattr::get(src, name).map_err(|e| Error::preserve("extended attribute", src, e))?;
    match value {
        Some(value) => {
            xattr::set(dst, name, &value)
                .map_err(|e| Error::preserve("extended attribute", dst, e))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Copy permission bits, including setuid/setgid/sticky. Follows symlinks, so
/// never call it for one.
pub(crate) fn copy_permissions(src_meta: &Metadata, dst: &Path) -> Result<()> {
    let permissions = fs::Permissions::from_mode(src_meta.mode() & 0o7777);
    fs::set_permissions(dst, permissions).map_err(|e| Error::preserve("permissions", dst, e))
}

/// Access and modification time of a source entry.
pub(crate) fn source_times(src_meta: &Metadata) -> (FileTime, FileTime) {
    (
        FileTime::from_last_access_time(src_meta),
        FileTime::from_last_modification_time(src_meta),
    )
}

/// Apply timestamps to `dst` itself without opening it.
///
/// A symlink gets its own times set. FIFOs and device nodes are never
/// opened, so an unconnected pipe cannot block the copy.
pub(crate) fn set_times_nofollow(dst: &Path, atime: FileTime, mtime: FileTime) -> Result<()> {
    set_symlink_file_times(dst, atime, mtime).map_err(|e| Error::preserve("timestamps", dst, e))
}
