use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "JOT_LOG";

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// CLI commands log to stderr
    Stderr,
    /// The TUI owns the terminal, so it appends to a file instead
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global tracing subscriber. Calling it twice is harmless.
pub fn init_logging(target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(env_filter())
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init();
                }
                Err(e) => {
                    eprintln!("warning: could not open log file {}: {}", path.display(), e);
                }
            }
        }
    }
}
