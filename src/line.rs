use core::fmt::{self, Write as _};
use core::mem::size_of;

use crate::arg::Arg;
use crate::error::EncodeError;
use crate::format::FormatTokens;
use crate::options::{Options, QuoteEscape};
use crate::quote::{append_quoted_with, needs_quotes};
use crate::scratch::ScratchBuf;

const TERMINATOR: &[u8; 2] = b"\n\0";
const MESSAGE_KEY: &[u8] = b"msg";
const POINTER_WIDTH: usize = 2 + 2 * size_of::<usize>();
// Longest rendering is `i64::MIN`, 20 bytes
const NUMBER_SCRATCH: usize = 24;

/// Writes one `key=value key=value msg="..."` line into a client-provided buffer.
///
/// The last two bytes of the buffer are kept for the newline and a NUL
/// terminator, written by [`LineBuilder::finish`]. Once a value runs out of
/// space the builder is truncated: all further writes are ignored and
/// `finish` reports `EncodeError::OutOfSpace`. A key or message key that
/// does not fit is dropped without stopping the line, but `finish` still
/// reports `OutOfSpace`.
#[derive(Debug)]
pub struct LineBuilder<'a> {
    buf: &'a mut [u8],
    pos: usize,
    limit: usize,
    quote_escape: QuoteEscape,
    truncated: bool,
    dropped: bool,
}

impl<'a> LineBuilder<'a> {
    /// Creates a builder with default options.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::BufferTooSmall` if `buf` has 2 bytes or fewer.
    pub fn new(buf: &'a mut [u8]) -> Result<Self, EncodeError> {
        Self::with_options(buf, &Options::default())
    }

    /// Creates a builder.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::BufferTooSmall` if `buf` has 2 bytes or fewer.
    pub fn with_options(buf: &'a mut [u8], options: &Options) -> Result<Self, EncodeError> {
        if buf.len() <= TERMINATOR.len() {
            return Err(EncodeError::BufferTooSmall {
                required: TERMINATOR.len() + 1,
                provided: buf.len(),
            });
        }
        let limit = buf.len() - TERMINATOR.len();
        Ok(Self {
            buf,
            pos: 0,
            limit,
            quote_escape: options.quote_escape,
            truncated: false,
            dropped: false,
        })
    }

    /// Bytes written so far, not counting the newline
    #[must_use]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Bytes left for content
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    /// Whether any content was cut or dropped
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated || self.dropped
    }

    fn free(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..self.limit]
    }

    fn commit(&mut self, result: Result<usize, EncodeError>) {
        match result {
            Ok(written) => self.pos += written,
            Err(e) => {
                self.pos += e.written();
                self.truncated = true;
            }
        }
    }

    /// Writes `key=` if it fits entirely
    fn write_key(&mut self, key: &[u8]) -> bool {
        let Some(slot) = self.free().get_mut(..=key.len()) else {
            return false;
        };
        let (name, eq) = slot.split_at_mut(key.len());
        name.copy_from_slice(key);
        eq[0] = b'=';
        self.pos += key.len() + 1;
        true
    }

    fn write_value(&mut self, value: Arg<'_>) -> Result<usize, EncodeError> {
        let quote_escape = self.quote_escape;
        let dst = self.free();
        match value {
            Arg::Str(text) => append_text(dst, text.as_bytes(), quote_escape),
            Arg::Bytes(bytes) => append_text(dst, bytes, quote_escape),
            Arg::Int(number) => write_whole(dst, format_args!("{number}")),
            Arg::Pointer(address) => write_whole(
                dst,
                format_args!("{address:#0width$x}", width = POINTER_WIDTH),
            ),
        }
    }

    /// Appends a `key=value` pair followed by a separating space.
    ///
    /// The key is written verbatim and must not contain spaces or `=`.
    /// A key that does not fit is dropped together with its value and later
    /// fields are still tried. Older encoders wrote the value without its
    /// key here. A value that does not fit truncates the line.
    pub fn field(&mut self, key: &[u8], value: Arg<'_>) -> &mut Self {
        debug_assert!(!key.is_empty() && !key.contains(&b' ') && !key.contains(&b'='));
        if self.truncated {
            return self;
        }
        if !self.write_key(key) {
            self.dropped = true;
            return self;
        }
        let result = self.write_value(value);
        self.commit(result);
        if !self.truncated {
            if let Some(separator) = self.free().first_mut() {
                *separator = b' ';
                self.pos += 1;
            }
        }
        self
    }

    pub fn field_str(&mut self, key: &str, value: &str) -> &mut Self {
        self.field(key.as_bytes(), Arg::Str(value))
    }

    pub fn field_int(&mut self, key: &str, value: i64) -> &mut Self {
        self.field(key.as_bytes(), Arg::Int(value))
    }

    pub fn field_pointer(&mut self, key: &str, address: usize) -> &mut Self {
        self.field(key.as_bytes(), Arg::Pointer(address))
    }

    pub fn field_bytes(&mut self, key: &str, value: &[u8]) -> &mut Self {
        self.field(key.as_bytes(), Arg::Bytes(value))
    }

    /// Appends `msg=<text>`. Empty text writes nothing; text that does not
    /// fit truncates the line.
    pub fn message(&mut self, text: &[u8]) -> &mut Self {
        if self.truncated || text.is_empty() {
            return self;
        }
        if !self.write_key(MESSAGE_KEY) {
            self.truncated = true;
            return self;
        }
        let quote_escape = self.quote_escape;
        let result = append_text(self.free(), text, quote_escape);
        self.commit(result);
        self
    }

    /// Writes the fields described by `fmt`, consuming one `args` entry per
    /// token, then the trailing free text as `msg`.
    ///
    /// # Panics
    ///
    /// Panics if `fmt` has an empty or unknown type tag, if `args` runs out,
    /// or if an argument does not match its tag. Surplus arguments are ignored.
    pub fn format(&mut self, fmt: &str, args: &[Arg<'_>]) -> &mut Self {
        let mut tokens = FormatTokens::new(fmt);
        let mut args = args.iter();
        for token in &mut tokens {
            let token = match token {
                Ok(token) => token,
                Err(e) => panic!("Malformed log format {fmt:?}: {e}"),
            };
            let key = core::str::from_utf8(token.key).unwrap_or_default();
            let tag = token.value_type.tag();
            let Some(&arg) = args.next() else {
                panic!("Missing argument for `{key}={tag}` in {fmt:?}");
            };
            assert!(
                arg.value_type() == token.value_type,
                "Argument {arg:?} does not match `{key}={tag}` in {fmt:?}"
            );
            self.field(token.key, arg);
            if self.truncated {
                return self;
            }
        }
        if let Some(text) = tokens.message() {
            self.message(text);
        }
        self
    }

    /// Writes the newline and the terminator into the reserved bytes.
    ///
    /// Returns the line length including the newline, excluding the terminator.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::OutOfSpace` if content was cut or dropped;
    /// `written` is the length of the terminated partial line.
    pub fn finish(&mut self) -> Result<usize, EncodeError> {
        let end = self.pos;
        self.buf[end..end + TERMINATOR.len()].copy_from_slice(TERMINATOR);
        let len = end + 1;
        if self.is_truncated() {
            Err(EncodeError::OutOfSpace { written: len })
        } else {
            Ok(len)
        }
    }
}

/// Appends a text value, reporting `OutOfSpace` when an unquoted value is
/// cut to fit or a quoted value gets no room at all
fn append_text(
    dst: &mut [u8],
    text: &[u8],
    quote_escape: QuoteEscape,
) -> Result<usize, EncodeError> {
    let written = append_quoted_with(dst, text, quote_escape)?;
    let cut = if needs_quotes(text) {
        dst.is_empty()
    } else {
        text.len() > dst.len()
    };
    if cut {
        Err(EncodeError::OutOfSpace { written })
    } else {
        Ok(written)
    }
}

/// Writes the rendering of `args` only if all of it fits
fn write_whole(dst: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize, EncodeError> {
    let mut scratch = ScratchBuf::<NUMBER_SCRATCH>::new();
    if scratch.write_fmt(args).is_err() {
        return Err(EncodeError::OutOfSpace { written: 0 });
    }
    let rendered = scratch.as_bytes();
    let slot = dst
        .get_mut(..rendered.len())
        .ok_or(EncodeError::OutOfSpace { written: 0 })?;
    slot.copy_from_slice(rendered);
    Ok(rendered.len())
}

/// Builds a line described by `fmt` and `args` into `dst` with default options.
///
/// On return `dst` holds the line followed by `\n` and a NUL byte.
///
/// # Errors
///
/// - `EncodeError::BufferTooSmall` if `dst` has 2 bytes or fewer; nothing is written.
/// - `EncodeError::OutOfSpace` if content was truncated; the partial line is
///   still terminated and `written` is its length.
///
/// # Panics
///
/// See [`LineBuilder::format`].
pub fn build_line(dst: &mut [u8], fmt: &str, args: &[Arg<'_>]) -> Result<usize, EncodeError> {
    build_line_with(dst, fmt, args, &Options::default())
}

/// Same as [`build_line`] with explicit options.
///
/// # Errors
///
/// See [`build_line`].
///
/// # Panics
///
/// See [`LineBuilder::format`].
pub fn build_line_with(
    dst: &mut [u8],
    fmt: &str,
    args: &[Arg<'_>],
    options: &Options,
) -> Result<usize, EncodeError> {
    LineBuilder::with_options(dst, options)?
        .format(fmt, args)
        .finish()
}
