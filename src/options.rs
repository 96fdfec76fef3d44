//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for switching individual metadata
//! preservation steps on or off.
//!
//! # Example
//!
//! ```
//! use linkcopy::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .without_ownership()
//!     .with_user_namespace(true);
//! ```

/// Extended attribute copied by default.
///
/// File capabilities live here; losing them silently breaks binaries such as
/// `ping` that rely on them instead of setuid.
pub const DEFAULT_XATTR: &str = "security.capability";

/// Options for copy operations.
///
/// Use [`Default::default()`] to get a faithful copy, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `preserve_ownership` | `true` | `lchown` to the source uid/gid |
/// | `preserve_xattr` | `true` | Copy `xattr_name` when present |
/// | `xattr_name` | `security.capability` | The single attribute copied |
/// | `preserve_permissions` | `true` | Copy permission bits |
/// | `preserve_timestamps` | `true` | Copy atime/mtime, directories last |
/// | `user_namespace` | `None` | Detect from `/proc/self/uid_map` |
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct CopyOptions {
    /// Whether to copy uid/gid onto created entries (default: true)
    ///
    /// Changing ownership to anything but the caller's own ids needs
    /// `CAP_CHOWN`.
    pub preserve_ownership: bool,

    /// Whether to copy the extended attribute named by `xattr_name`
    /// (default: true)
    pub preserve_xattr: bool,

    /// Name of the extended attribute to copy (default: `security.capability`)
    pub xattr_name: String,

    /// Whether to preserve permission bits (default: true)
    ///
    /// Symlink permission bits are never touched.
    pub preserve_permissions: bool,

    /// Whether to preserve access and modification times (default: true)
    ///
    /// Directory times are applied after the whole tree is written.
    pub preserve_timestamps: bool,

    /// Override user namespace detection (default: None = detect)
    ///
    /// Inside a user namespace device nodes cannot be created, so they are
    /// skipped instead of failing the copy.
    pub user_namespace: Option<bool>,

    /// Callback for warnings (optional)
    ///
    /// If not set and `tracing` feature is enabled, warnings are logged via tracing.
    /// Otherwise, warnings are silently ignored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            preserve_ownership: true,
            preserve_xattr: true,
            xattr_name: DEFAULT_XATTR.to_owned(),
            preserve_permissions: true,
            preserve_timestamps: true,
            user_namespace: None,
            warn_handler: None,
        }
    }
}

impl CopyOptions {
    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Copy a different extended attribute instead of `security.capability`
    #[must_use]
    pub fn with_xattr_name(mut self, name: impl Into<String>) -> Self {
        self.xattr_name = name.into();
        self
    }

    /// Force the user namespace decision instead of probing the kernel
    #[must_use]
    pub fn with_user_namespace(mut self, in_user_namespace: bool) -> Self {
        self.user_namespace = Some(in_user_namespace);
        self
    }

    /// Leave destination entries owned by the calling user
    #[must_use]
    pub fn without_ownership(mut self) -> Self {
        self.preserve_ownership = false;
        self
    }

    /// Do not copy the extended attribute
    #[must_use]
    pub fn without_xattr(mut self) -> Self {
        self.preserve_xattr = false;
        self
    }

    /// Disable permission preservation
    ///
    /// Directories are still created with the source mode, filtered by the
    /// process umask.
    #[must_use]
    pub fn without_permissions(mut self) -> Self {
        self.preserve_permissions = false;
        self
    }

    /// Disable timestamp preservation
    #[must_use]
    pub fn without_timestamps(mut self) -> Self {
        self.preserve_timestamps = false;
        self
    }

    /// Whether device nodes must be skipped for this copy.
    pub(crate) fn in_user_namespace(&self) -> bool {
        self.user_namespace
            .unwrap_or_else(crate::utils::userns::in_user_namespace)
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}
