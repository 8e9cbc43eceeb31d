//! Logging init: append to a file under the XDG state dir, or fall back to stderr.

use anyhow::{anyhow, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,navmark_core=debug,navmark=debug";

const LOG_FILE_NAME: &str = "navmark.log";

/// Log sink handed out per event: the shared file, or stderr when the file
/// handle cannot be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SharedLogFile(fs::File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Default log directory: `~/.local/state/navmark`.
pub fn default_log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navmark")?;
    Ok(xdg_dirs.get_state_home().join("navmark"))
}

/// Initialize structured logging to `navmark.log` inside `log_dir`.
///
/// Returns Err when the directory or file cannot be opened (or a subscriber is
/// already installed) so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging_in(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let log_file_path = log_dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    tracing::info!("navmark logging initialized at {}", log_file_path.display());
    Ok(log_file_path)
}

/// Initialize structured logging under [`default_log_dir`].
pub fn init_logging() -> Result<PathBuf> {
    init_logging_in(&default_log_dir()?)
}

/// Initialize logging to stderr only (no file).
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
