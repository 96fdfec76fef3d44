//! # linkcopy
//!
//! Faithful recursive copy of a directory tree on a POSIX filesystem.
//!
//! ## Core Features
//!
//! - **Hardlink preserving**: Files sharing an inode in the source share one inode in the copy
//! - **No data copy**: Regular files are hardlinked from the source, so content is identical by construction
//! - **Special files**: Symlinks, FIFOs, sockets (as FIFOs) and device nodes are recreated
//! - **Ownership and mode**: uid/gid and permission bits, including setuid/setgid/sticky
//! - **File capabilities**: The `security.capability` extended attribute is carried over
//! - **Timestamps**: atime/mtime for every entry, with directories restored after their contents are written
//! - **User namespace aware**: Device nodes are skipped where the kernel would refuse them
//! - **Rerunnable**: Existing directories and files at the destination are accepted
//!
//! ## Quick Start with Builder API
//!
//! ```no_run
//! use linkcopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("/var/lib/app/rootfs", "/var/lib/app/rootfs.copy").run()?;
//! println!("Linked {} files ({} extra links)", stats.files_linked, stats.hardlinks_deduplicated);
//! # Ok::<(), linkcopy::Error>(())
//! ```
//!
//! ## Environment-driven runs
//!
//! ```no_run
//! use linkcopy::{CopyOptions, Targets, run};
//! use std::path::Path;
//!
//! let targets = Targets::from_env(); // source_target / dist_target
//! let reporter = |src: &Path, dst: &Path, outcome: &linkcopy::Result<linkcopy::CopyStats>| {
//!     match outcome {
//!         Ok(_) => println!("copy finish: {} -> {}", src.display(), dst.display()),
//!         Err(e) => eprintln!("{} -> {}: {}", src.display(), dst.display(), e),
//!     }
//! };
//! let _ = run(&targets, &CopyOptions::default(), &reporter);
//! ```
//!
//! ## Ordering Guarantees
//!
//! The walk is strictly sequential and depth first:
//!
//! - A directory is created before anything inside it
//! - The first path of an inode is linked before any later path of the same inode
//! - Directory timestamps are applied only after the whole tree is written,
//!   deepest and most recently discovered directories first
//!
//! Any failure aborts the copy immediately. Nothing is rolled back.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(unix))]
compile_error!("linkcopy relies on POSIX file types and only builds on Unix");

mod builder;
mod copy;
mod error;
mod options;
mod report;
mod targets;
mod utils;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, copy_dir};
pub use error::{Error, ErrorCode, Result};
pub use options::{CopyOptions, DEFAULT_XATTR};
pub use report::{Reporter, run};
pub use targets::{DIST_TARGET_ENV, SOURCE_TARGET_ENV, Targets};
