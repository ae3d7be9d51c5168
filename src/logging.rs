#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from the `ARMADA_LOG` environment
/// variable. Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var("ARMADA_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
