//! Logging - tracing subscriber setup
//!
//! Console output always; a daily rolling file in the data directory when
//! enabled. `RUST_LOG` takes precedence over the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::config::LogConfig;
use crate::helpers::get_or_create_data_dir;

/// Build the filter: `RUST_LOG` if set and valid, the configured level otherwise
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole process.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = if config.file {
        match get_or_create_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Log directory unavailable, logging to console only: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
