use crate::{PointerError, PointerErrorKind};
use alloc::{borrow::Cow, format, string::String, vec::Vec};

const ENCODED_TILDE: &[u8] = b"~0";
const ENCODED_SLASH: &[u8] = b"~1";

const ENC_PREFIX: u8 = b'~';
const TILDE_ENC: u8 = b'0';
const SLASH_ENC: u8 = b'1';

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Encode                                    ║
║                                   ¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Escapes a single token per RFC 6901: `'~'` becomes `"~0"` and `'/'`
/// becomes `"~1"`. Every other character is passed through unchanged.
///
/// If the token contains neither character, the input is returned borrowed and
/// nothing is allocated.
///
/// # Examples
///
/// ```
/// # use std::borrow::Cow;
/// # use jsonpointer::encode_token;
/// assert_eq!(encode_token("/foo/~bar"), "~1foo~1~0bar");
/// assert!(matches!(encode_token("foo"), Cow::Borrowed("foo")));
/// ```
pub fn encode_token(token: &str) -> Cow<'_, str> {
    let Some(i) = token.bytes().position(|b| b == b'/' || b == ENC_PREFIX) else {
        return Cow::Borrowed(token);
    };
    let input = token.as_bytes();
    // only the suffix starting at the first reserved character needs to be
    // scanned; the output is at least one byte longer than the input
    let mut bytes = Vec::with_capacity(input.len() + 1);
    bytes.extend_from_slice(&input[..i]);
    for &b in &input[i..] {
        match b {
            b'/' => bytes.extend_from_slice(ENCODED_SLASH),
            ENC_PREFIX => bytes.extend_from_slice(ENCODED_TILDE),
            other => bytes.push(other),
        }
    }
    // SAFETY: we started from a valid UTF-8 sequence of bytes, and only
    // replaced some ASCII characters with two other ASCII characters, so the
    // output is guaranteed valid UTF-8.
    Cow::Owned(unsafe { String::from_utf8_unchecked(bytes) })
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Decode                                    ║
║                                   ¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Reverses [`encode_token`]: `"~0"` becomes `'~'` and `"~1"` becomes `'/'`.
///
/// If the token contains no `'~'`, the input is returned borrowed and nothing
/// is allocated. A `'/'` in the input is not an error; it is only meaningful
/// as a separator at the pointer level.
///
/// # Examples
///
/// ```
/// # use jsonpointer::decode_token;
/// assert_eq!(decode_token("~1foo~1~0bar").unwrap(), "/foo/~bar");
/// let err = decode_token("abc~9").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid escape sequence in \"abc~9\"");
/// ```
///
/// ## Errors
/// Returns a [`PointerError`] of kind [`PointerErrorKind::InvalidEscape`] if a
/// `'~'` is followed by anything other than `'0'` or `'1'`, or of kind
/// [`PointerErrorKind::IncompleteEscape`] if the token ends with a lone `'~'`.
pub fn decode_token(raw: &str) -> Result<Cow<'_, str>, PointerError> {
    let Some(i) = raw.bytes().position(|b| b == ENC_PREFIX) else {
        return Ok(Cow::Borrowed(raw));
    };
    let input = raw.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    bytes.extend_from_slice(&input[..i]);
    let mut iter = input.iter().copied().enumerate().skip(i);
    while let Some((offset, b)) = iter.next() {
        if b != ENC_PREFIX {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some((_, TILDE_ENC)) => bytes.push(b'~'),
            Some((_, SLASH_ENC)) => bytes.push(b'/'),
            Some(_) => return Err(invalid_escape(raw, offset)),
            None => return Err(incomplete_escape(raw, offset)),
        }
    }
    // SAFETY: we start from a valid String and only swap two-byte ASCII
    // sequences for single ASCII bytes; any non-ASCII sequence is copied
    // whole, since a '~' can never occur inside a multi-byte character.
    Ok(Cow::Owned(unsafe { String::from_utf8_unchecked(bytes) }))
}

fn invalid_escape(raw: &str, offset: usize) -> PointerError {
    // the escape spans the '~' and the full character following it
    let len = raw[offset + 1..]
        .chars()
        .next()
        .map_or(1, |c| 1 + c.len_utf8());
    PointerError::new(
        PointerErrorKind::InvalidEscape,
        format!("Invalid escape sequence in \"{raw}\""),
    )
    .with_subject(raw, Some((offset, len)))
}

fn incomplete_escape(raw: &str, offset: usize) -> PointerError {
    PointerError::new(PointerErrorKind::IncompleteEscape, "Incomplete escape sequence")
        .with_subject(raw, Some((offset, 1)))
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tests                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/
