use embedded_io::{Error as _, Write};

use crate::arg::Arg;
use crate::error::{EncodeError, LogError};
use crate::line::LineBuilder;
use crate::options::{Level, Options};

/// Default line capacity in bytes, terminator included
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// Builds lines on the stack and hands them to a sink writer.
///
/// Each line is at most `N` bytes including the newline and the terminator;
/// the terminator itself is never sent to the sink.
#[derive(Debug)]
pub struct Logger<W: Write, const N: usize = DEFAULT_LINE_CAPACITY> {
    writer: W,
    options: Options,
}

impl<W: Write> Logger<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, Options::default())
    }

    pub fn with_options(writer: W, options: Options) -> Self {
        Self::bounded(writer, options)
    }
}

impl<W: Write, const N: usize> Logger<W, N> {
    /// Creates a logger with a line capacity other than the default,
    /// as in `Logger::<_, 256>::bounded(writer, options)`.
    pub fn bounded(writer: W, options: Options) -> Self {
        Self { writer, options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.options.min_level
    }

    /// Builds a line from `fmt` and `args`, writes it to the sink and flushes.
    ///
    /// Returns the number of bytes sent to the sink; `0` when `level` is
    /// below `min_level`.
    ///
    /// # Errors
    ///
    /// - `LogError::Encode(EncodeError::OutOfSpace { .. })` if the line was
    ///   truncated. The truncated line has been written and flushed.
    /// - `LogError::Encode(EncodeError::BufferTooSmall { .. })` if `N` is 2 or less.
    /// - `LogError::Sink` if writing or flushing fails.
    ///
    /// # Panics
    ///
    /// See [`LineBuilder::format`].
    pub fn log(&mut self, level: Level, fmt: &str, args: &[Arg<'_>]) -> Result<usize, LogError> {
        self.emit(level, |line| {
            line.format(fmt, args);
        })
    }

    /// Builds a line with a custom closure and sends it like [`Logger::log`].
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn emit<F>(&mut self, level: Level, fill: F) -> Result<usize, LogError>
    where
        F: FnOnce(&mut LineBuilder<'_>),
    {
        if !self.enabled(level) {
            return Ok(0);
        }

        let mut buf = [0u8; N];
        let mut line = LineBuilder::with_options(&mut buf, &self.options)?;
        if self.options.level_field {
            line.field_str("level", level.as_str());
        }
        fill(&mut line);

        let status = line.finish();
        let len = match status {
            Ok(len) | Err(EncodeError::OutOfSpace { written: len }) => len,
            Err(e) => return Err(e.into()),
        };

        self.writer
            .write_all(&buf[..len])
            .map_err(|e| LogError::Sink(e.kind()))?;
        self.writer.flush().map_err(|e| LogError::Sink(e.kind()))?;

        status.map_err(LogError::from)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn debug(&mut self, fmt: &str, args: &[Arg<'_>]) -> Result<usize, LogError> {
        self.log(Level::Debug, fmt, args)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn info(&mut self, fmt: &str, args: &[Arg<'_>]) -> Result<usize, LogError> {
        self.log(Level::Info, fmt, args)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn warn(&mut self, fmt: &str, args: &[Arg<'_>]) -> Result<usize, LogError> {
        self.log(Level::Warn, fmt, args)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn error(&mut self, fmt: &str, args: &[Arg<'_>]) -> Result<usize, LogError> {
        self.log(Level::Error, fmt, args)
    }
}
