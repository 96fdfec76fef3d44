//! Special file creation.
//!
//! `std` can create regular files, directories and symlinks but not FIFOs or
//! device nodes, so these go straight to libc.

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

fn path_to_c(path: &Path) -> io::Result<CString> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains interior NUL"))
}

/// Create a FIFO at `path`. Only the permission bits of `mode` are used.
pub(crate) fn mkfifo(path: &Path, mode: u32) -> io::Result<()> {
    let c_path = path_to_c(path)?;
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    let result = unsafe { libc::mkfifo(c_path.as_ptr(), (mode & 0o7777) as libc::mode_t) };
    if result == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Create a block or character device node.
///
/// `mode` carries the file type bits as well as the permissions, exactly as
/// returned in `st_mode`; `device` is the raw `st_rdev`.
pub(crate) fn mknod(path: &Path, mode: u32, device: u64) -> io::Result<()> {
    let c_path = path_to_c(path)?;
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    let result = unsafe {
        libc::mknod(
            c_path.as_ptr(),
            mode as libc::mode_t,
            device as libc::dev_t,
        )
    };
    if result == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}
