//! The error type shared by every fallible operation in this crate.

use crate::Pointer;
use alloc::{string::String, sync::Arc};
use core::fmt;

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                               PointerErrorKind                               ║
║                              ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                              ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// The category of a [`PointerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PointerErrorKind {
    /// A non-empty pointer string did not start with `'/'`, or one of its
    /// tokens contained a malformed escape sequence.
    MalformedPointer,
    /// A token contained `'~'` followed by something other than `'0'` or
    /// `'1'`.
    InvalidEscape,
    /// A token ended with a lone `'~'`.
    IncompleteEscape,
    /// A negative array index was supplied.
    NegativeIndex,
    /// `truncate` was asked for a length outside of `0..=depth`.
    IllegalTruncate,
    /// `parent` was called on the root pointer.
    ParentOfRoot,
    /// A URI fragment was not valid percent-encoded UTF-8.
    MalformedFragment,
    /// Raised through [`Pointer::error`] by code outside of this crate.
    Custom,
}

impl PointerErrorKind {
    /// A short, stable identifier for this kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedPointer => "jsonpointer::malformed_pointer",
            Self::InvalidEscape => "jsonpointer::invalid_escape",
            Self::IncompleteEscape => "jsonpointer::incomplete_escape",
            Self::NegativeIndex => "jsonpointer::negative_index",
            Self::IllegalTruncate => "jsonpointer::illegal_truncate",
            Self::ParentOfRoot => "jsonpointer::parent_of_root",
            Self::MalformedFragment => "jsonpointer::malformed_fragment",
            Self::Custom => "jsonpointer::custom",
        }
    }

    #[cfg(feature = "miette")]
    fn help(&self) -> Option<&'static str> {
        match self {
            Self::MalformedPointer => {
                Some("a non-empty json pointer must start with a slash ('/')")
            }
            Self::InvalidEscape | Self::IncompleteEscape => {
                Some("'~' must be followed by '0' or '1'")
            }
            Self::NegativeIndex => Some("array indices must be zero or greater"),
            Self::IllegalTruncate => Some("the length must be between 0 and the depth"),
            Self::ParentOfRoot => Some("check `is_root` before calling `parent`"),
            Self::MalformedFragment => {
                Some("'%' must be followed by two hex digits and decode to UTF-8")
            }
            Self::Custom => None,
        }
    }
}

impl fmt::Display for PointerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                 PointerError                                 ║
║                                ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                               ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that a pointer could not be parsed, decoded or navigated.
///
/// Besides its message, the error may carry the [`Pointer`] that was the
/// receiver of the failed operation (its *context*) and the lower-level error
/// that caused it. When a context is present the error renders as
/// `"<message>, at <pointer>"`.
///
/// ## Example
/// ```rust
/// use jsonpointer::Pointer;
///
/// let ptr = Pointer::parse("/a/b").unwrap();
/// let err = ptr.truncate(3).unwrap_err();
/// assert_eq!(err.to_string(), "Illegal truncate (3), at /a/b");
/// assert_eq!(err.context(), Some(&ptr));
/// ```
#[derive(Debug, Clone)]
pub struct PointerError {
    kind: PointerErrorKind,
    message: String,
    context: Option<Pointer>,
    cause: Option<Arc<dyn core::error::Error + Send + Sync>>,
    // the text the error was raised against, with the byte span at fault
    subject: Option<String>,
    span: Option<(usize, usize)>,
}

impl PointerError {
    pub(crate) fn new(kind: PointerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
            cause: None,
            subject: None,
            span: None,
        }
    }

    pub(crate) fn at(mut self, context: &Pointer) -> Self {
        self.context = Some(context.clone());
        self
    }

    pub(crate) fn caused_by(mut self, cause: impl core::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub(crate) fn with_subject(mut self, subject: &str, span: Option<(usize, usize)>) -> Self {
        self.subject = Some(subject.into());
        self.span = span;
        self
    }

    /// The category of this error.
    pub fn kind(&self) -> PointerErrorKind {
        self.kind
    }

    /// The human-readable message, without the `", at <pointer>"` suffix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The pointer which was the receiver of the failed operation, if any.
    pub fn context(&self) -> Option<&Pointer> {
        self.context.as_ref()
    }

    /// The lower-level error which caused this one, if any.
    ///
    /// This is the same value returned by [`core::error::Error::source`].
    pub fn cause(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// The string the error was raised against, for parse and decode errors.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Byte offset within [`Self::subject`] of the first offending character.
    ///
    /// ```text
    /// "/foo/invalid~tilde/invalid"
    ///              ↑
    ///             12
    /// ```
    /// ```
    /// # use jsonpointer::Pointer;
    /// let err = Pointer::parse("/foo/invalid~tilde/invalid").unwrap_err();
    /// assert_eq!(err.offset(), Some(12));
    /// ```
    pub fn offset(&self) -> Option<usize> {
        self.span.map(|(offset, _)| offset)
    }

    pub(crate) fn span(&self) -> Option<(usize, usize)> {
        self.span
    }
}

impl fmt::Display for PointerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}, at {context}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl core::error::Error for PointerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

#[cfg(feature = "miette")]
impl miette::Diagnostic for PointerError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.subject.as_ref().map(|s| s as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let (offset, len) = self.span?;
        self.subject.as_ref()?;
        Some(Box::new(core::iter::once(miette::LabeledSpan::new(
            Some(self.message.clone()),
            offset,
            len,
        ))))
    }
}
