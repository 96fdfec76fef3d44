//! Source and destination roots as configuration values.
//!
//! Front ends usually receive both roots from the environment
//! (`source_target` / `dist_target`). An empty value means "not configured".

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable holding the source root.
pub const SOURCE_TARGET_ENV: &str = "source_target";

/// Environment variable holding the destination root.
pub const DIST_TARGET_ENV: &str = "dist_target";

/// The two roots of a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    /// Source root
    pub source: PathBuf,
    /// Destination root
    pub dist: PathBuf,
}

impl Targets {
    /// Create targets from two paths.
    pub fn new(source: impl Into<PathBuf>, dist: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dist: dist.into(),
        }
    }

    /// Read both roots from `source_target` and `dist_target`.
    ///
    /// Unset variables yield empty paths.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            source: env::var_os(SOURCE_TARGET_ENV).map(PathBuf::from).unwrap_or_default(),
            dist: env::var_os(DIST_TARGET_ENV).map(PathBuf::from).unwrap_or_default(),
        }
    }

    /// Reject targets where neither root is configured.
    ///
    /// A single missing root is not rejected here; the copy itself fails on
    /// the empty path.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when both paths are empty.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() && self.dist.as_os_str().is_empty() {
            return Err(Error::InvalidParameter {
                source_target: self.source.clone(),
                dist_target: self.dist.clone(),
            });
        }
        Ok(())
    }
}
