//! Backend for the `log` crate: every record becomes one line on standard error.

use core::fmt::Write as _;
use std::boxed::Box;
use std::sync::Mutex;

use embedded_io::Write as _;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::options::{Level, Options};
use crate::scratch::ScratchBuf;
use crate::sink::DEFAULT_LINE_CAPACITY;
use crate::stderr::{stderr_logger_with, StderrLogger};

/// `log::Log` implementation writing `level=.. target=.. msg=..` lines
pub struct LogBridge {
    logger: Mutex<StderrLogger>,
    min_level: Level,
}

impl LogBridge {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            logger: Mutex::new(stderr_logger_with(options)),
            min_level: options.min_level,
        }
    }
}

fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

fn filter_of(level: Level) -> LevelFilter {
    match level {
        Level::Debug => LevelFilter::Trace,
        Level::Info => LevelFilter::Info,
        Level::Warn => LevelFilter::Warn,
        Level::Error => LevelFilter::Error,
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        level_of(metadata.level()) >= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Longer messages are cut off
        let mut message = ScratchBuf::<DEFAULT_LINE_CAPACITY>::new();
        let _ = message.write_fmt(*record.args());

        let Ok(mut logger) = self.logger.lock() else {
            return;
        };
        let _ = logger.emit(level_of(record.level()), |line| {
            line.field_str("target", record.target())
                .message(message.as_bytes());
        });
    }

    fn flush(&self) {
        if let Ok(mut logger) = self.logger.lock() {
            let _ = logger.writer_mut().flush();
        }
    }
}

/// Installs a `LogBridge` as the global logger and sets the max level
/// from `options.min_level`.
///
/// # Errors
///
/// Returns `SetLoggerError` if a global logger is already installed.
pub fn init(options: Options) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(options)))?;
    log::set_max_level(filter_of(options.min_level));
    Ok(())
}
