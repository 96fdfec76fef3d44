//! User namespace detection.
//!
//! A process in the initial user namespace sees the identity mapping
//! `0 0 4294967295` in `/proc/self/uid_map`. Anything else means it runs in
//! a nested namespace, where `mknod` of device nodes is refused by the kernel.

use std::fs;
use std::sync::OnceLock;

const UID_MAP: &str = "/proc/self/uid_map";

/// Returns true if the current process runs inside a user namespace.
///
/// Probed once per process. A missing `uid_map` (non-Linux, or a kernel
/// without user namespaces) counts as the initial namespace.
pub(crate) fn in_user_namespace() -> bool {
    static IN_USERNS: OnceLock<bool> = OnceLock::new();
    *IN_USERNS.get_or_init(|| match fs::read_to_string(UID_MAP) {
        Ok(map) => !is_initial_uid_map(&map),
        Err(_) => false,
    })
}

/// Whether `map` is the full identity mapping of the initial namespace.
fn is_initial_uid_map(map: &str) -> bool {
    let mut lines = map.lines().filter(|line| !line.trim().is_empty());
    let Some(line) = lines.next() else {
        // an empty map belongs to a namespace whose mapping was never written
        return false;
    };
    if lines.next().is_some() {
        return false;
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields == ["0", "0", "4294967295"]
}
