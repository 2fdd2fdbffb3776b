use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// With a log file, everything at `info` and above (or whatever `RUST_LOG`
/// asks for) goes there without color codes. Without one, interactive runs
/// install nothing because the terminal belongs to the UI, and one-shot
/// commands log warnings to stderr.
pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter_or("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter_or("warn"))
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
