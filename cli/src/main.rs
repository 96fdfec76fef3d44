//! lcp - Link Copy
//!
//! A faithful directory tree copy command powered by linkcopy.

mod logging;

use clap::{Parser, ValueEnum};
use linkcopy::{
    CopyOptions, CopyStats, DIST_TARGET_ENV, Error as LinkcopyError, ErrorCode, Reporter,
    SOURCE_TARGET_ENV, Targets,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// lcp - Faithful tree copy
///
/// Copy a directory tree preserving hardlinks, symlinks, FIFOs, device nodes,
/// ownership, permissions, file capabilities and timestamps. Regular files
/// are hardlinked, so SOURCE and DEST must be on the same filesystem.
///
/// Usage:
///   lcp SOURCE DEST
///   source_target=SOURCE dist_target=DEST lcp
#[derive(Parser, Debug)]
#[command(name = "lcp", version, about, long_about = None)]
struct Args {
    /// Source directory
    #[arg(env = SOURCE_TARGET_ENV)]
    source: Option<OsString>,

    /// Destination directory (its parent must exist)
    #[arg(env = DIST_TARGET_ENV)]
    dest: Option<OsString>,

    /// Do not change ownership of created entries
    #[arg(long)]
    no_owner: bool,

    /// Do not copy the extended attribute
    #[arg(long)]
    no_xattr: bool,

    /// Extended attribute to copy
    #[arg(long, value_name = "NAME", default_value = linkcopy::DEFAULT_XATTR)]
    xattr: String,

    /// Do not preserve permission bits
    #[arg(long)]
    no_perms: bool,

    /// Do not preserve timestamps
    #[arg(long)]
    no_times: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,

    /// Verbose output (one line per created entry)
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    #[error("{source}")]
    Copy { source: LinkcopyError },
}

impl CliError {
    fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Logging { .. } => None,
            Self::Copy { source } => Some(source.code()),
        }
    }
}

fn exit_code_for(code: Option<ErrorCode>) -> i32 {
    match code {
        Some(ErrorCode::InvalidInput) => 2,
        _ => 1,
    }
}

/// Reports the single outcome of a run as a tracing event.
struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, source: &Path, dist: &Path, outcome: &linkcopy::Result<CopyStats>) {
        match outcome {
            Ok(stats) => tracing::info!(
                source_target = %source.display(),
                dist_target = %dist.display(),
                files_linked = stats.files_linked,
                hardlinks = stats.hardlinks_deduplicated,
                dirs = stats.dirs_created,
                symlinks = stats.symlinks_created,
                fifos = stats.fifos_created,
                devices = stats.devices_created,
                devices_skipped = stats.devices_skipped,
                elapsed_ms = elapsed_ms(stats.duration),
                "copy finish"
            ),
            Err(LinkcopyError::InvalidParameter { .. }) => {
                tracing::error!(
                    source_target = %source.display(),
                    dist_target = %dist.display(),
                    "invalid parameter"
                );
            }
            Err(error) => {
                tracing::error!(
                    source_target = %source.display(),
                    dist_target = %dist.display(),
                    code = %error.code(),
                    "{}",
                    error
                );
            }
        }
    }
}

fn elapsed_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn main() {
    if let Err(error) = run() {
        if let CliError::Logging { .. } = error {
            eprintln!("error: {}", error);
        }
        std::process::exit(exit_code_for(error.code()));
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    logging::init(args.log_format == LogFormat::Json, log_level(&args))
        .map_err(|message| CliError::Logging { message })?;

    let targets = targets(&args);
    let options = build_options(&args);

    linkcopy::run(&targets, &options, &LogReporter)
        .map(|_| ())
        .map_err(|source| CliError::Copy { source })
}

/// Empty values are kept so the library reports them as unconfigured.
fn targets(args: &Args) -> Targets {
    let path = |value: &Option<OsString>| value.clone().map(PathBuf::from).unwrap_or_default();
    Targets::new(path(&args.source), path(&args.dest))
}

fn log_level(args: &Args) -> tracing::Level {
    if args.quiet {
        tracing::Level::ERROR
    } else if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn build_options(args: &Args) -> CopyOptions {
    let mut options = CopyOptions::default().with_xattr_name(args.xattr.clone());
    if args.no_owner {
        options = options.without_ownership();
    }
    if args.no_xattr {
        options = options.without_xattr();
    }
    if args.no_perms {
        options = options.without_permissions();
    }
    if args.no_times {
        options = options.without_timestamps();
    }
    options
}
