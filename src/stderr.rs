use std::io::Stderr;

use embedded_io_adapters::std::FromStd;

use crate::options::Options;
use crate::sink::Logger;

/// Logger writing to the process' standard error
pub type StderrLogger = Logger<FromStd<Stderr>>;

#[must_use]
pub fn stderr_logger() -> StderrLogger {
    stderr_logger_with(Options::default())
}

#[must_use]
pub fn stderr_logger_with(options: Options) -> StderrLogger {
    Logger::with_options(FromStd::new(std::io::stderr()), options)
}
