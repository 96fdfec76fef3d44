//! Builder API for ergonomic copying operations.
//!
//! The builder pattern provides a fluent interface for configuring and executing
//! copy operations. This is often more convenient than manually constructing
//! [`CopyOptions`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use linkcopy::CopyBuilder;
//!
//! // Faithful copy with every preservation step enabled
//! let stats = CopyBuilder::new("rootfs", "rootfs.snapshot").run()?;
//! println!("Linked {} files", stats.files_linked);
//! # Ok::<(), linkcopy::Error>(())
//! ```
//!
//! ## Unprivileged Copy
//!
//! ```no_run
//! use linkcopy::CopyBuilder;
//!
//! // Keep the caller as owner and never attempt device nodes
//! let stats = CopyBuilder::new("src", "dst")
//!     .no_ownership()
//!     .user_namespace(true)
//!     .run()?;
//! # Ok::<(), linkcopy::Error>(())
//! ```

use crate::copy::{CopyStats, copy_dir};
use crate::error::Result;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing copy operations.
///
/// # Example
///
/// ```no_run
/// use linkcopy::CopyBuilder;
///
/// let stats = CopyBuilder::new("/var/lib/images/base", "/var/lib/images/layer1")
///     .xattr("security.capability")
///     .run()?;
/// # Ok::<(), linkcopy::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination roots.
    ///
    /// Uses default options (everything preserved, user namespace detected).
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Do not change ownership of created entries.
    #[must_use]
    pub fn no_ownership(mut self) -> Self {
        self.options = self.options.without_ownership();
        self
    }

    /// Do not copy the extended attribute.
    #[must_use]
    pub fn no_xattr(mut self) -> Self {
        self.options = self.options.without_xattr();
        self
    }

    /// Copy the named extended attribute instead of `security.capability`.
    #[must_use]
    pub fn xattr(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_xattr_name(name);
        self
    }

    /// Do not preserve permission bits.
    #[must_use]
    pub fn no_permissions(mut self) -> Self {
        self.options = self.options.without_permissions();
        self
    }

    /// Do not preserve access and modification times.
    ///
    /// This also skips the directory timestamp pass.
    #[must_use]
    pub fn no_timestamps(mut self) -> Self {
        self.options = self.options.without_timestamps();
        self
    }

    /// Force the user namespace decision.
    ///
    /// `true` skips device nodes, `false` always attempts `mknod`.
    #[must_use]
    pub fn user_namespace(mut self, in_user_namespace: bool) -> Self {
        self.options = self.options.with_user_namespace(in_user_namespace);
        self
    }

    /// Set a warning handler callback.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use linkcopy::CopyBuilder;
    ///
    /// let stats = CopyBuilder::new("src", "dst")
    ///     .on_warning(|msg| eprintln!("Warning: {}", msg))
    ///     .run()?;
    /// # Ok::<(), linkcopy::Error>(())
    /// ```
    #[must_use]
    pub fn on_warning(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_warn_handler(handler);
        self
    }

    /// Get the current options (for inspection).
    #[must_use]
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// See [`copy_dir`] for the possible errors.
    pub fn run(self) -> Result<CopyStats> {
        copy_dir(&self.src, &self.dst, &self.options)
    }
}
