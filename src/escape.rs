//! Byte-wise escaping of arbitrary data into printable ASCII.
//!
//! Every input byte maps to one escape unit:
//!
//! | input                       | output            |
//! |-----------------------------|-------------------|
//! | `\`                         | `\\`              |
//! | tab                         | `\t`              |
//! | newline                     | `\n`              |
//! | `"` (when quotes escaped)   | see `QuoteEscape` |
//! | `0x20..=0x7E`               | the byte itself   |
//! | anything else               | `\xHH`            |
//!
//! Multi-byte UTF-8 sequences are not decoded; each of their bytes becomes
//! its own `\xHH` unit. A unit is written whole or not at all.

use crate::error::EncodeError;
use crate::options::QuoteEscape;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Escaped form of a single input byte
#[derive(Debug, Clone, Copy)]
struct EscapeUnit {
    bytes: [u8; 4],
    len: usize,
}

impl EscapeUnit {
    fn short(first: u8, second: u8) -> Self {
        Self {
            bytes: [first, second, 0, 0],
            len: 2,
        }
    }

    fn for_byte(byte: u8, quote: Option<QuoteEscape>) -> Self {
        match (byte, quote) {
            (b'\\', _) => Self::short(b'\\', b'\\'),
            (b'\t', _) => Self::short(b'\\', b't'),
            (b'\n', _) => Self::short(b'\\', b'n'),
            (b'"', Some(quote)) => {
                let [first, second] = quote.marker();
                Self::short(first, second)
            }
            (0x20..=0x7E, _) => Self {
                bytes: [byte, 0, 0, 0],
                len: 1,
            },
            _ => Self {
                bytes: [
                    b'\\',
                    b'x',
                    HEX_DIGITS[usize::from(byte >> 4)],
                    HEX_DIGITS[usize::from(byte & 0x0F)],
                ],
                len: 4,
            },
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Escapes `src` into `dst`, using the whole of `dst` as capacity.
///
/// With `escape_doublequote`, `"` is written as `\"`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `EncodeError::OutOfSpace` if the next escape unit does not fit.
/// `written` then counts the complete units already in `dst`; no partial
/// unit is ever written.
pub fn escape(dst: &mut [u8], src: &[u8], escape_doublequote: bool) -> Result<usize, EncodeError> {
    escape_with(dst, src, escape_doublequote.then_some(QuoteEscape::Backslash))
}

/// Escapes `src` into `dst`. `quote` selects how `"` is escaped; `None`
/// leaves it as is.
///
/// # Errors
///
/// Same as [`escape`].
pub fn escape_with(
    dst: &mut [u8],
    src: &[u8],
    quote: Option<QuoteEscape>,
) -> Result<usize, EncodeError> {
    let mut written = 0;
    for &byte in src {
        let unit = EscapeUnit::for_byte(byte, quote);
        let unit = unit.as_bytes();
        let Some(slot) = dst.get_mut(written..written + unit.len()) else {
            return Err(EncodeError::OutOfSpace { written });
        };
        slot.copy_from_slice(unit);
        written += unit.len();
    }
    Ok(written)
}
