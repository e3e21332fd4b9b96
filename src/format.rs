//! Tokenizer for the `key=tag key=tag free text` format mini-language.
//!
//! Tokens are `key=tag` pairs separated by single spaces. Tags are `s`
//! (text), `d` (signed integer), `p` (pointer) and `*s` (byte buffer).
//! Whatever follows the last token is a free-text message.
//!
//! The tokenizer borrows the format string and keeps no state between calls.

use crate::error::FormatError;

/// Value kind declared by a type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `s`
    Str,
    /// `d`
    Int,
    /// `p`
    Pointer,
    /// `*s`
    Bytes,
}

impl ValueType {
    #[must_use]
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"s" => Some(ValueType::Str),
            b"d" => Some(ValueType::Int),
            b"p" => Some(ValueType::Pointer),
            b"*s" => Some(ValueType::Bytes),
            _ => None,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ValueType::Str => "s",
            ValueType::Int => "d",
            ValueType::Pointer => "p",
            ValueType::Bytes => "*s",
        }
    }
}

/// One `key=tag` pair of a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'f> {
    pub key: &'f [u8],
    pub value_type: ValueType,
}

/// Reads a key starting at `fmt`, skipping leading spaces and tabs.
///
/// Returns the key and the position just after its `=`.
///
/// # Errors
///
/// - `EndOfInput` if nothing but spaces and tabs remains
/// - `EmptyKey` if `=` follows the skipped whitespace
/// - `UnexpectedChar` if a space comes before `=`
/// - `UnterminatedKey` if the input ends before `=`
pub fn tokenize_key(fmt: &[u8]) -> Result<(&[u8], usize), FormatError> {
    let start = fmt
        .iter()
        .position(|&c| c != b' ' && c != b'\t')
        .ok_or(FormatError::EndOfInput {
            position: fmt.len(),
        })?;

    for (offset, &c) in fmt[start..].iter().enumerate() {
        let position = start + offset;
        match c {
            b' ' => {
                return Err(FormatError::UnexpectedChar {
                    position,
                    found: ' ',
                })
            }
            b'=' if offset == 0 => return Err(FormatError::EmptyKey { position }),
            b'=' => return Ok((&fmt[start..position], position + 1)),
            _ => {}
        }
    }
    Err(FormatError::UnterminatedKey {
        position: fmt.len(),
    })
}

/// Reads a type tag at the very start of `fmt`. The tag ends at the next
/// space or at the end of input.
///
/// Returns the tag and the position just after it.
///
/// # Errors
///
/// Returns `EmptyType` if `fmt` is empty or starts with a space.
pub fn tokenize_value_type(fmt: &[u8]) -> Result<(&[u8], usize), FormatError> {
    let end = fmt.iter().position(|&c| c == b' ').unwrap_or(fmt.len());
    if end == 0 {
        return Err(FormatError::EmptyType { position: 0 });
    }
    Ok((&fmt[..end], end))
}

/// Iterator over the tokens of a format string.
///
/// Iteration ends at the first key that does not tokenize; the rest of the
/// string is then available through [`FormatTokens::message`]. Tag errors
/// are yielded as `Err` and end the iteration too.
#[derive(Debug, Clone)]
pub struct FormatTokens<'f> {
    fmt: &'f [u8],
    pos: usize,
    done: bool,
}

impl<'f> FormatTokens<'f> {
    #[must_use]
    pub fn new(fmt: &'f str) -> Self {
        Self::from_bytes(fmt.as_bytes())
    }

    #[must_use]
    pub fn from_bytes(fmt: &'f [u8]) -> Self {
        Self {
            fmt,
            pos: 0,
            done: false,
        }
    }

    /// Byte offset of the first unconsumed byte
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Free text after the last token, leading spaces stripped.
    /// `None` if nothing remains.
    #[must_use]
    pub fn message(&self) -> Option<&'f [u8]> {
        let rest = self.fmt.get(self.pos..).unwrap_or_default();
        let start = rest.iter().position(|&c| c != b' ')?;
        Some(&rest[start..])
    }

    fn next_token(&mut self) -> Option<Result<Token<'f>, FormatError>> {
        let rest = self.fmt.get(self.pos..)?;
        let (key, after_key) = tokenize_key(rest).ok()?;
        let value_start = self.pos + after_key;

        let tagged = self.fmt.get(value_start..).unwrap_or_default();
        let (tag, after_tag) = match tokenize_value_type(tagged) {
            Ok(found) => found,
            Err(_) => {
                return Some(Err(FormatError::EmptyType {
                    position: value_start,
                }))
            }
        };
        let Some(value_type) = ValueType::from_tag(tag) else {
            return Some(Err(FormatError::UnknownType {
                position: value_start,
            }));
        };

        self.pos = value_start + after_tag;
        Some(Ok(Token { key, value_type }))
    }
}

impl<'f> Iterator for FormatTokens<'f> {
    type Item = Result<Token<'f>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_token();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

/// Checks a format string and returns the number of arguments it consumes.
///
/// # Errors
///
/// Returns the first tag error of the format string.
pub fn validate_format(fmt: &str) -> Result<usize, FormatError> {
    let mut count = 0;
    for token in FormatTokens::new(fmt) {
        token?;
        count += 1;
    }
    Ok(count)
}
