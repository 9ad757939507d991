// src/log.rs
//
// Debug log lives next to the working directory in `.store/debug.log`.
// Level comes from RUST_LOG, `info` when unset.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Install the global subscriber. Keep the guard alive until exit or the
/// tail of the log is lost.
pub fn init() -> Option<WorkerGuard> {
    if fs::create_dir_all(LOG_DIR).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
        .try_init();

    installed.ok().map(|_| guard)
}
