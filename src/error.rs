//! Error types for linkcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during a tree copy, the [`ErrorCode`] classification used
//! by front ends, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Configuration | [`Error::InvalidParameter`] |
//! | Walk | [`Error::Metadata`], [`Error::UnknownFileType`] |
//! | Creation | [`Error::Create`] |
//! | Metadata copy | [`Error::Preserve`] |
//!
//! Every error aborts the copy. Entries materialized before the failure are
//! left in place.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for linkcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during copy operations.
///
/// All errors include relevant path information to aid debugging.
/// Use the [`std::error::Error`] trait methods to access underlying
/// causes where applicable.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Neither a source nor a destination root was configured
    #[error("invalid parameter: source_target={source_target:?} dist_target={dist_target:?}")]
    InvalidParameter {
        /// Configured source root (possibly empty)
        source_target: PathBuf,
        /// Configured destination root (possibly empty)
        dist_target: PathBuf,
    },

    /// Metadata of a source entry could not be read
    #[error("failed to read metadata of {path}: {source}")]
    Metadata {
        /// Source path being inspected
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source entry is not a regular file, directory, symlink, FIFO, socket
    /// or device node
    #[error("unknown file type ({mode:#o}) for {path}")]
    UnknownFileType {
        /// Offending source path
        path: PathBuf,
        /// Raw `st_mode` of the entry
        mode: u32,
    },

    /// Creating a destination entry failed
    #[error("failed to {action} {path}: {source}")]
    Create {
        /// What was being created (`"hardlink"`, `"create directory"`, ...)
        action: &'static str,
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Copying ownership, the extended attribute, permissions or timestamps
    /// onto a destination entry failed
    #[error("failed to preserve {what} on {path}: {source}")]
    Preserve {
        /// Which piece of metadata was being copied
        what: &'static str,
        /// Destination (or, for attribute reads, source) path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn metadata(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Create {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn preserve(what: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Preserve {
            what,
            path: path.into(),
            source,
        }
    }

    /// Stable classification of this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidParameter { .. } => ErrorCode::InvalidInput,
            Self::Metadata { .. } => ErrorCode::MetadataRead,
            Self::UnknownFileType { .. } => ErrorCode::UnsupportedType,
            Self::Create { .. } => ErrorCode::CreateFailed,
            Self::Preserve { .. } => ErrorCode::PreserveFailed,
        }
    }
}

/// Machine-readable error classification.
///
/// Front ends use this to pick exit codes and to prefix messages, e.g.
/// `error[create_failed]: ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Configuration rejected before any filesystem access
    InvalidInput,
    /// `lstat` or directory listing failed
    MetadataRead,
    /// Entry of a type that cannot be recreated
    UnsupportedType,
    /// A destination entry could not be created
    CreateFailed,
    /// Metadata could not be copied to a destination entry
    PreserveFailed,
}

impl ErrorCode {
    /// Snake-case name of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::MetadataRead => "metadata_read",
            Self::UnsupportedType => "unsupported_type",
            Self::CreateFailed => "create_failed",
            Self::PreserveFailed => "preserve_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
