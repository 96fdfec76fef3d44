//! Outcome reporting.
//!
//! The copy itself never logs its final result. Callers hand [`run`] a
//! [`Reporter`], which receives exactly one outcome per invocation, whether
//! the targets were rejected, the copy failed, or it finished.

use crate::copy::{CopyStats, copy_dir};
use crate::error::Result;
use crate::options::CopyOptions;
use crate::targets::Targets;
use std::path::Path;

/// Receives the terminal outcome of a copy.
pub trait Reporter {
    /// Called once with both roots and the result.
    fn report(&self, source: &Path, dist: &Path, outcome: &Result<CopyStats>);
}

impl<F> Reporter for F
where
    F: Fn(&Path, &Path, &Result<CopyStats>),
{
    fn report(&self, source: &Path, dist: &Path, outcome: &Result<CopyStats>) {
        self(source, dist, outcome);
    }
}

/// Validate `targets`, copy, and report the outcome.
///
/// Invalid targets are reported without touching the filesystem.
///
/// # Errors
///
/// Returns the same error that was reported.
pub fn run<R>(targets: &Targets, options: &CopyOptions, reporter: &R) -> Result<CopyStats>
where
    R: Reporter + ?Sized,
{
    let outcome = targets
        .validate()
        .and_then(|()| copy_dir(&targets.source, &targets.dist, options));
    reporter.report(&targets.source, &targets.dist, &outcome);
    outcome
}
