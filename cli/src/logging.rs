//! Tracing initialization.
//!
//! Logs go to stderr as human-readable text or JSON lines. The level comes
//! from the command line; `RUST_LOG` directives, when set, take precedence.

use chrono::Local;
use std::fmt as stdfmt;
use std::io::{self, IsTerminal};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local wall-clock timestamp (YYYY-MM-DD HH:MM:SS)
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(json: bool, level: Level) -> Result<(), String> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime)
        .with_target(false)
        .with_writer(io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_ansi(io::stderr().is_terminal()).try_init()
    };
    result.map_err(|e| e.to_string())
}
