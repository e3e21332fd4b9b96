use thiserror::Error;

/// Statuses reported by the escaper, the quoted-string appender and the line builder
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum EncodeError {
    /// Destination capacity ran out before all content was written
    #[error("Out of space: only {written} bytes were written")]
    OutOfSpace {
        /// Number of bytes committed to the destination before stopping
        written: usize,
    },
    /// Line buffer cannot hold the newline and the terminator byte
    #[error("Buffer too small: requires at least {required} bytes, got {provided}")]
    BufferTooSmall {
        /// Minimum buffer size required
        required: usize,
        /// Actual buffer size provided
        provided: usize,
    },
}

impl EncodeError {
    /// Bytes committed before the error; zero for `BufferTooSmall`.
    #[must_use]
    pub fn written(&self) -> usize {
        match self {
            EncodeError::OutOfSpace { written } => *written,
            EncodeError::BufferTooSmall { .. } => 0,
        }
    }

    /// Shifts the byte count of `OutOfSpace` by the bytes already written
    /// in front of the failing step.
    pub(crate) fn after(self, preceding: usize) -> Self {
        match self {
            EncodeError::OutOfSpace { written } => EncodeError::OutOfSpace {
                written: written + preceding,
            },
            other => other,
        }
    }
}

/// Malformed format string. Positions are byte offsets into the format string.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormatError {
    /// Only whitespace remains
    #[error("End of input at position {position}")]
    EndOfInput { position: usize },
    /// A space appeared inside a key
    #[error("Unexpected char {found:?} at position {position}")]
    UnexpectedChar { position: usize, found: char },
    /// Input ended before the `=` closing a key
    #[error("Unterminated key at position {position}")]
    UnterminatedKey { position: usize },
    /// `=` directly after the skipped whitespace
    #[error("Empty key at position {position}")]
    EmptyKey { position: usize },
    /// Nothing between `=` and the next space
    #[error("Empty type tag at position {position}")]
    EmptyType { position: usize },
    /// Type tag outside of `s`, `d`, `p`, `*s`
    #[error("Unknown type tag at position {position}")]
    UnknownType { position: usize },
}

/// Errors of a `Logger` call
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogError {
    /// The line was built with a non-success status
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The sink rejected the write or the flush
    #[error("Sink error: {0:?}")]
    Sink(embedded_io::ErrorKind),
}
