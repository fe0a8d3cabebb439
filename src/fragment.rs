//! URI fragment identifier representation of a JSON Pointer (RFC 6901 §6).
//!
//! On top of the `~0`/`~1` escaping, every token is encoded as UTF-8 and each
//! byte outside of the unreserved set `A-Z a-z 0-9 - _ . ~` is
//! percent-encoded with uppercase hex digits.

use crate::{encode_token, Pointer, PointerError, PointerErrorKind};
use std::{fmt, string::FromUtf8Error};

/// Renders `pointer` as a URI fragment identifier (without the leading `'#'`).
///
/// ## Example
/// ```rust
/// use jsonpointer::{Pointer, to_uri_fragment};
///
/// let ptr = Pointer::from_tokens(["e^f", "a/b", "c d"]);
/// assert_eq!(to_uri_fragment(&ptr), "/e%5Ef/a~1b/c%20d");
/// ```
pub fn to_uri_fragment(pointer: &Pointer) -> String {
    let mut out = String::new();
    for token in pointer.tokens() {
        out.push('/');
        out.push_str(&urlencoding::encode(&encode_token(token)));
    }
    out
}

/// Parses a URI fragment identifier (without the leading `'#'`) into a
/// [`Pointer`].
///
/// ## Example
/// ```rust
/// use jsonpointer::{Pointer, from_uri_fragment};
///
/// let ptr = from_uri_fragment("/e%5Ef/%E2%82%AC").unwrap();
/// assert_eq!(ptr, Pointer::from_tokens(["e^f", "€"]));
/// ```
///
/// ## Errors
/// Returns a [`PointerError`] of kind [`PointerErrorKind::MalformedFragment`],
/// with a [`FragmentError`] as its cause, if a `'%'` is not followed by two hex
/// digits or the decoded bytes are not valid UTF-8. Errors from parsing the
/// decoded pointer string are returned as is.
pub fn from_uri_fragment(fragment: &str) -> Result<Pointer, PointerError> {
    validate_percent_encoding(fragment).map_err(|err| illegal_fragment(fragment, err))?;
    let decoded = urlencoding::decode(fragment)
        .map_err(|err| illegal_fragment(fragment, FragmentError::InvalidUtf8(err)))?;
    Pointer::parse(&decoded)
}

// `urlencoding::decode` passes malformed escapes through verbatim, so they are
// rejected up front
fn validate_percent_encoding(fragment: &str) -> Result<(), FragmentError> {
    let bytes = fragment.as_bytes();
    for (offset, &b) in bytes.iter().enumerate() {
        if b != b'%' {
            continue;
        }
        let digits = bytes.get(offset + 1..offset + 3);
        if !digits.is_some_and(|d| d.iter().all(u8::is_ascii_hexdigit)) {
            return Err(FragmentError::InvalidPercentEncoding { offset });
        }
    }
    Ok(())
}

fn illegal_fragment(fragment: &str, cause: FragmentError) -> PointerError {
    log::trace!("rejected uri fragment {fragment:?}: {cause}");
    let span = match cause {
        FragmentError::InvalidPercentEncoding { offset } => {
            let len = fragment[offset..]
                .char_indices()
                .take(3)
                .last()
                .map_or(1, |(i, c)| i + c.len_utf8());
            Some((offset, len))
        }
        FragmentError::InvalidUtf8(_) => None,
    };
    PointerError::new(
        PointerErrorKind::MalformedFragment,
        format!("Illegal URI fragment - \"{fragment}\""),
    )
    .with_subject(fragment, span)
    .caused_by(cause)
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                FragmentError                                 ║
║                               ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                                ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// The byte-level reason a URI fragment could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    /// A `'%'` was not followed by two hexadecimal digits.
    InvalidPercentEncoding {
        /// Byte offset of the offending `'%'` within the fragment.
        offset: usize,
    },
    /// The percent-decoded bytes are not valid UTF-8.
    InvalidUtf8(FromUtf8Error),
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPercentEncoding { offset } => write!(
                f,
                "'%' at offset {offset} is not followed by two hexadecimal digits"
            ),
            Self::InvalidUtf8(_) => write!(f, "percent-decoded bytes are not valid UTF-8"),
        }
    }
}

impl std::error::Error for FragmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(source) => Some(source),
            Self::InvalidPercentEncoding { .. } => None,
        }
    }
}

#[cfg(feature = "miette")]
impl miette::Diagnostic for FragmentError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(PointerErrorKind::MalformedFragment.code()))
    }
}
