//! Conversion between the string form of a JSON Pointer and its decoded
//! tokens.

use crate::{decode_token, encode_token, PointerError, PointerErrorKind};
use alloc::{format, string::String, vec::Vec};

/// Parses an RFC 6901 pointer string into its decoded tokens.
///
/// The empty string is the root and yields no tokens. Every other input must
/// start with `'/'`; the remainder is split on each `'/'`, so a trailing
/// slash yields a trailing empty token.
///
/// ## Example
/// ```rust
/// # use jsonpointer::parse;
/// assert_eq!(parse("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse("/a~1b/").unwrap(), vec!["a/b".to_string(), String::new()]);
/// assert!(parse("abc").is_err());
/// ```
///
/// ## Errors
/// Returns a [`PointerError`] of kind [`PointerErrorKind::MalformedPointer`] if
/// the input does not start with `'/'`, or if one of its tokens is not a valid
/// escape sequence. In the latter case the codec's error is the cause.
pub fn parse(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        log::trace!("rejected json pointer without leading slash: {pointer:?}");
        let len = pointer.chars().next().map_or(0, char::len_utf8);
        return Err(PointerError::new(
            PointerErrorKind::MalformedPointer,
            format!("Illegal JSON Pointer - \"{pointer}\""),
        )
        .with_subject(pointer, Some((0, len))));
    };
    let mut tokens = Vec::new();
    // offset of the current segment within `pointer`
    let mut offset = 1;
    for segment in rest.split('/') {
        match decode_token(segment) {
            Ok(token) => tokens.push(token.into_owned()),
            Err(err) => {
                log::trace!("rejected json pointer {pointer:?}: {err}");
                let span = err.span().map(|(o, len)| (offset + o, len));
                return Err(PointerError::new(
                    PointerErrorKind::MalformedPointer,
                    format!("Illegal token in JSON Pointer - \"{pointer}\""),
                )
                .with_subject(pointer, span)
                .caused_by(err));
            }
        }
        offset += segment.len() + 1;
    }
    Ok(tokens)
}

/// Renders the first `n` tokens as an RFC 6901 pointer string, escaping each
/// token with [`encode_token`].
///
/// `serialize(tokens, tokens.len())` is the canonical form of the whole
/// pointer; `serialize(tokens, 0)` is the root, `""`.
///
/// ## Example
/// ```rust
/// # use jsonpointer::serialize;
/// let tokens = ["a/b", "m~n", "c"];
/// assert_eq!(serialize(&tokens, 3), "/a~1b/m~0n/c");
/// assert_eq!(serialize(&tokens, 1), "/a~1b");
/// assert_eq!(serialize(&tokens, 0), "");
/// ```
///
/// # Panics
/// Panics if `n` is greater than `tokens.len()`.
pub fn serialize<T: AsRef<str>>(tokens: &[T], n: usize) -> String {
    let mut out = String::new();
    for token in &tokens[..n] {
        out.push('/');
        out.push_str(&encode_token(token.as_ref()));
    }
    out
}
