use crate::error::EncodeError;
use crate::escape::escape_with;
use crate::options::QuoteEscape;

/// Whether `value` has to be wrapped in double quotes.
///
/// Scans up to the first NUL byte for a space or a `"`.
#[must_use]
pub fn needs_quotes(value: &[u8]) -> bool {
    value
        .iter()
        .take_while(|&&byte| byte != 0)
        .any(|&byte| byte == b' ' || byte == b'"')
}

/// Appends `value` to `dst`, escaped and quoted if needed. Quotes inside
/// a quoted value are escaped as `\"`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// See [`append_quoted_with`].
pub fn append_quoted(dst: &mut [u8], value: &[u8]) -> Result<usize, EncodeError> {
    append_quoted_with(dst, value, QuoteEscape::default())
}

/// Appends `value` to `dst` using `quote_escape` for quotes inside a quoted value.
///
/// - Empty `dst`: nothing is written, `Ok(0)`.
/// - Unquoted value: at most `dst.len()` input bytes are escaped.
/// - Quoted value: the closing quote is written only when the whole
///   interior fits, so a truncated quoted value stays unterminated.
///
/// # Errors
///
/// Returns `EncodeError::OutOfSpace` with the exact number of bytes written
/// if the opening quote, the interior, or the closing quote does not fit.
pub fn append_quoted_with(
    dst: &mut [u8],
    value: &[u8],
    quote_escape: QuoteEscape,
) -> Result<usize, EncodeError> {
    if dst.is_empty() {
        return Ok(0);
    }

    if !needs_quotes(value) {
        let value = value.get(..dst.len()).unwrap_or(value);
        return escape_with(dst, value, None);
    }

    let Some((opening, interior)) = dst.split_first_mut() else {
        return Ok(0);
    };
    *opening = b'"';

    let end = 1 + escape_with(interior, value, Some(quote_escape)).map_err(|e| e.after(1))?;
    match dst.get_mut(end) {
        Some(closing) => {
            *closing = b'"';
            Ok(end + 1)
        }
        None => Err(EncodeError::OutOfSpace { written: end }),
    }
}
