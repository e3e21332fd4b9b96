#![no_std]

//! `kvline`: bounded logfmt-style log lines in client-provided buffers.
//!
//! A compact format string such as `"user=s id=d request done"` describes
//! `key=tag` pairs followed by free text. Arguments are matched to the tags
//! left to right and the result is one line:
//!
//! ```text
//! user=alice id=42 msg="request done"
//! ```
//!
//! The encoder never writes past the buffer it is given and never allocates.
//! When the buffer is too small, the line is cut at a clean boundary, still
//! ends with a newline and a NUL byte, and the call reports
//! `EncodeError::OutOfSpace` with the exact length written.
//!
//! This crate is `no_std` compatible. The `std` feature adds a standard-error
//! logger, the `log` feature a backend for the `log` crate.
//!
//! # Format Mini-Language
//!
//! | tag  | argument            | rendering                           |
//! |------|---------------------|-------------------------------------|
//! | `s`  | `Arg::Str`          | escaped, quoted if it has `" "`/`"` |
//! | `d`  | `Arg::Int`          | decimal                             |
//! | `p`  | `Arg::Pointer`      | `0x` and zero-padded lowercase hex  |
//! | `*s` | `Arg::Bytes`        | escaped, quoted if it has `" "`/`"` |
//!
//! Bytes outside printable ASCII are written as `\xHH`, one escape per byte,
//! so invalid UTF-8 survives unchanged in meaning:
//!
//! ```
//! # use kvline::{build_line, Arg};
//! let mut buffer = [0u8; 32];
//! let len = build_line(&mut buffer, "key=s foo", &[Arg::Str("\u{2203}y")]).unwrap();
//! assert_eq!(&buffer[..len], b"key=\\xE2\\x88\\x83y msg=foo\n");
//! assert_eq!(buffer[len], 0);
//! ```
//!
//! # Truncation
//!
//! A quoted value that runs out of space is left without its closing quote,
//! so a reader can tell it was cut:
//!
//! ```
//! # use kvline::{build_line, Arg, EncodeError};
//! let mut buffer = [0u8; 32];
//! let result = build_line(&mut buffer, "key=s hello world", &[Arg::Str("some_value")]);
//! assert_eq!(result, Err(EncodeError::OutOfSpace { written: 31 }));
//! assert_eq!(&buffer[..31], b"key=some_value msg=\"hello worl\n");
//! ```
//!
//! # Builder Interface
//!
//! `LineBuilder` writes the same lines without a format string:
//!
//! ```
//! # use kvline::LineBuilder;
//! let mut buffer = [0u8; 64];
//! let len = LineBuilder::new(&mut buffer)
//!     .unwrap()
//!     .field_str("color", "green")
//!     .field_int("count", -3)
//!     .message(b"ready")
//!     .finish()
//!     .unwrap();
//! assert_eq!(&buffer[..len], b"color=green count=-3 msg=ready\n");
//! ```
//!
//! # Logger
//!
//! `Logger` sends finished lines to any `embedded_io::Write` sink:
//!
//! ```
//! # use kvline::{kv_log, Level, Logger};
//! let mut sink = [0u8; 64];
//! let mut logger = Logger::new(&mut sink[..]);
//! let len = kv_log!(logger, Level::Info, "port=d listening", 8080).unwrap();
//! drop(logger);
//! assert_eq!(&sink[..len], b"level=info port=8080 msg=listening\n");
//! ```

#[cfg(feature = "std")]
extern crate std;

mod arg;
mod error;
mod escape;
mod format;
mod line;
mod macros;
mod options;
mod quote;
mod scratch;
mod sink;

#[cfg(feature = "log")]
mod bridge;
#[cfg(feature = "std")]
mod stderr;

pub use arg::Arg;
pub use error::{EncodeError, FormatError, LogError};
pub use escape::{escape, escape_with};
pub use format::{
    tokenize_key, tokenize_value_type, validate_format, FormatTokens, Token, ValueType,
};
pub use line::{build_line, build_line_with, LineBuilder};
pub use options::{Level, Options, QuoteEscape};
pub use quote::{append_quoted, append_quoted_with, needs_quotes};
pub use sink::{Logger, DEFAULT_LINE_CAPACITY};

#[cfg(feature = "log")]
pub use bridge::{init, LogBridge};
#[cfg(feature = "std")]
pub use stderr::{stderr_logger, stderr_logger_with, StderrLogger};
