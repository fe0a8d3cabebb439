#[cfg(test)]
mod pointer_test;

use crate::{parse, serialize, PointerError, PointerErrorKind, Tokens};
use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use core::{
    fmt,
    iter::FusedIterator,
    ops::{Add, Index},
    str::FromStr,
};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Pointer                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A JSON Pointer is a sequence of zero or more reference tokens, each
/// identifying a property name or array index within a JSON document.
///
/// A `Pointer` stores its tokens decoded (e.g. `"a/b"`, not `"a~1b"`) and is
/// immutable: every navigation method returns a new value. Clones are cheap,
/// as the tokens are shared behind an [`Arc`].
///
/// See [RFC 6901 for more
/// information](https://datatracker.ietf.org/doc/html/rfc6901).
///
/// ## Example
/// ```rust
/// use jsonpointer::Pointer;
///
/// let ptr = Pointer::parse("/foo/a~1b").unwrap();
/// assert_eq!(ptr.depth(), 2);
/// assert_eq!(ptr.current(), Some("a/b"));
///
/// let child = ptr.child("baz");
/// assert_eq!(child.to_string(), "/foo/a~1b/baz");
/// assert_eq!(child.parent().unwrap(), ptr);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pointer {
    // `None` is the root; never `Some` of an empty slice
    tokens: Option<Arc<[String]>>,
}

impl Pointer {
    /// The root pointer, `""`, which refers to the whole document.
    pub const ROOT: Pointer = Pointer { tokens: None };

    /// Returns the root pointer.
    ///
    /// alias for [`Self::ROOT`]
    pub const fn root() -> Self {
        Self::ROOT
    }

    /// Parses an RFC 6901 encoded pointer string.
    ///
    /// ## Errors
    /// Returns a [`PointerError`] if the string is non-empty and does not start
    /// with `'/'`, or if a token contains an invalid escape sequence.
    pub fn parse(s: &str) -> Result<Self, PointerError> {
        parse(s).map(Self::from_vec)
    }

    /// Creates a pointer from decoded tokens.
    ///
    /// The tokens are used as is: `"a/b"` is a single token containing a
    /// slash. An empty sequence yields [`Self::ROOT`].
    ///
    /// ## Example
    /// ```rust
    /// use jsonpointer::Pointer;
    ///
    /// let ptr = Pointer::from_tokens(["foo", "a/b"]);
    /// assert_eq!(ptr.to_string(), "/foo/a~1b");
    /// assert!(Pointer::from_tokens(Vec::<String>::new()).is_root());
    /// ```
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_vec(tokens.into_iter().map(Into::into).collect())
    }

    fn from_vec(tokens: Vec<String>) -> Self {
        if tokens.is_empty() {
            Self::ROOT
        } else {
            Self {
                tokens: Some(tokens.into()),
            }
        }
    }

    /// Parses a URI fragment identifier (without the leading `'#'`).
    ///
    /// alias for [`crate::from_uri_fragment`]
    ///
    /// ## Errors
    /// See [`crate::from_uri_fragment`].
    #[cfg(feature = "std")]
    pub fn from_uri_fragment(fragment: &str) -> Result<Self, PointerError> {
        crate::from_uri_fragment(fragment)
    }

    /// Returns `true` if both pointers share the same token storage, or are
    /// both the root.
    ///
    /// Navigation methods which return one of their operands unchanged
    /// (such as joining with the root) preserve this identity.
    pub fn ptr_eq(a: &Pointer, b: &Pointer) -> bool {
        match (&a.tokens, &b.tokens) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns the number of tokens in the `Pointer`.
    pub fn depth(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the `Pointer` has no tokens, i.e. equals `""`.
    pub fn is_root(&self) -> bool {
        self.tokens.is_none()
    }

    /// Returns the last token, or `None` for the root.
    pub fn current(&self) -> Option<&str> {
        self.as_slice().last().map(String::as_str)
    }

    /// Returns the token at `index`, or `None` if it is out of bounds.
    ///
    /// Indexing with `ptr[index]` is the panicking equivalent.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).map(String::as_str)
    }

    /// Returns an iterator over the decoded tokens.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self.as_slice().iter())
    }

    /// Borrows the decoded tokens.
    pub fn as_slice(&self) -> &[String] {
        self.tokens.as_deref().unwrap_or(&[])
    }

    /// Returns an owned copy of the decoded tokens.
    pub fn to_vec(&self) -> Vec<String> {
        self.as_slice().to_vec()
    }

    /// Returns an owned copy of the decoded tokens as a boxed slice.
    pub fn to_boxed_slice(&self) -> Box<[String]> {
        self.as_slice().into()
    }

    /// Returns `true` if the tokens of `prefix` are a prefix of this
    /// pointer's tokens. Every pointer starts with the root and with itself.
    pub fn starts_with(&self, prefix: &Pointer) -> bool {
        self.as_slice().starts_with(prefix.as_slice())
    }

    /// Returns a new `Pointer` with `name` appended as its last token.
    ///
    /// `name` is a decoded token; it is escaped only when the pointer is
    /// rendered.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let tokens = self.as_slice();
        let mut next = Vec::with_capacity(tokens.len() + 1);
        next.extend_from_slice(tokens);
        next.push(name.into());
        Self::from_vec(next)
    }

    /// Returns a new `Pointer` with the array index `index` appended.
    ///
    /// ## Example
    /// ```rust
    /// use jsonpointer::Pointer;
    ///
    /// let ptr = Pointer::parse("/foo").unwrap();
    /// assert_eq!(ptr.child_index(3).unwrap().to_string(), "/foo/3");
    /// let err = ptr.child_index(-1).unwrap_err();
    /// assert_eq!(err.to_string(), "JSON Pointer index -1 must not be negative, at /foo");
    /// ```
    ///
    /// ## Errors
    /// Returns a [`PointerError`] of kind [`PointerErrorKind::NegativeIndex`]
    /// if `index` is negative.
    pub fn child_index(&self, index: isize) -> Result<Self, PointerError> {
        self.check_index(index)?;
        Ok(self.child(index.to_string()))
    }

    /// Returns the concatenation of this pointer's tokens followed by
    /// `other`'s.
    ///
    /// If either operand is the root, the other one is returned unchanged
    /// (see [`Self::ptr_eq`]).
    pub fn join(&self, other: &Pointer) -> Self {
        if self.is_root() {
            return other.clone();
        }
        if other.is_root() {
            return self.clone();
        }
        let mut tokens = Vec::with_capacity(self.depth() + other.depth());
        tokens.extend_from_slice(self.as_slice());
        tokens.extend_from_slice(other.as_slice());
        Self::from_vec(tokens)
    }

    /// Returns a new `Pointer` without the last token.
    ///
    /// ## Errors
    /// Returns a [`PointerError`] of kind [`PointerErrorKind::ParentOfRoot`] if
    /// this is the root.
    pub fn parent(&self) -> Result<Self, PointerError> {
        match self.depth() {
            0 => Err(PointerError::new(
                PointerErrorKind::ParentOfRoot,
                "Can't get parent of root JSON Pointer",
            )
            .at(&Self::ROOT)),
            depth => Ok(self.prefix(depth - 1)),
        }
    }

    /// Returns a new `Pointer` with `name` prepended as its first token.
    pub fn with_parent(&self, name: impl Into<String>) -> Self {
        let tokens = self.as_slice();
        let mut next = Vec::with_capacity(tokens.len() + 1);
        next.push(name.into());
        next.extend_from_slice(tokens);
        Self::from_vec(next)
    }

    /// Returns a new `Pointer` with the array index `index` prepended.
    ///
    /// ## Errors
    /// Returns a [`PointerError`] of kind [`PointerErrorKind::NegativeIndex`]
    /// if `index` is negative.
    pub fn with_parent_index(&self, index: isize) -> Result<Self, PointerError> {
        self.check_index(index)?;
        Ok(self.with_parent(index.to_string()))
    }

    /// Returns the concatenation of `parent`'s tokens followed by this
    /// pointer's.
    ///
    /// If either operand is the root, the other one is returned unchanged.
    pub fn with_parent_pointer(&self, parent: &Pointer) -> Self {
        parent.join(self)
    }

    /// Returns a `Pointer` made of the first `len` tokens.
    ///
    /// Truncating to the current depth returns this pointer unchanged, and
    /// truncating to `0` returns [`Self::ROOT`].
    ///
    /// ## Example
    /// ```rust
    /// use jsonpointer::Pointer;
    ///
    /// let ptr = Pointer::parse("/abc/def/ghi").unwrap();
    /// assert_eq!(ptr.truncate(2).unwrap().to_string(), "/abc/def");
    /// assert!(ptr.truncate(4).is_err());
    /// assert!(ptr.truncate(-1).is_err());
    /// ```
    ///
    /// ## Errors
    /// Returns a [`PointerError`] of kind [`PointerErrorKind::IllegalTruncate`]
    /// if `len` is negative or greater than the depth.
    pub fn truncate(&self, len: isize) -> Result<Self, PointerError> {
        match usize::try_from(len) {
            Ok(n) if n <= self.depth() => Ok(self.prefix(n)),
            _ => Err(PointerError::new(
                PointerErrorKind::IllegalTruncate,
                format!("Illegal truncate ({len})"),
            )
            .at(self)),
        }
    }

    /// Returns an iterator over this pointer and each of its ancestors, ending
    /// with the root.
    ///
    /// ## Example
    /// ```rust
    /// use jsonpointer::Pointer;
    ///
    /// let ptr = Pointer::parse("/a/b").unwrap();
    /// let all: Vec<String> = ptr.ancestors().map(|p| p.to_string()).collect();
    /// assert_eq!(all, ["/a/b", "/a", ""]);
    /// ```
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            pointer: self,
            next: Some(self.depth()),
        }
    }

    /// Renders the first `len` tokens as an RFC 6901 string.
    ///
    /// # Panics
    /// Panics if `len` is greater than the depth.
    pub fn to_prefix_string(&self, len: usize) -> String {
        serialize(self.as_slice(), len)
    }

    /// Renders this pointer as a URI fragment identifier (without the leading
    /// `'#'`).
    ///
    /// alias for [`crate::to_uri_fragment`]
    #[cfg(feature = "std")]
    pub fn to_uri_fragment(&self) -> String {
        crate::to_uri_fragment(self)
    }

    /// Creates a [`PointerError`] with the given message and this pointer as
    /// its context, for reporting failures which occur "at" this location.
    ///
    /// ## Example
    /// ```rust
    /// use jsonpointer::Pointer;
    ///
    /// let ptr = Pointer::parse("/foo/0").unwrap();
    /// let err = ptr.error("value is not an array");
    /// assert_eq!(err.to_string(), "value is not an array, at /foo/0");
    /// ```
    pub fn error(&self, message: impl Into<String>) -> PointerError {
        PointerError::new(PointerErrorKind::Custom, message).at(self)
    }

    // `len` must not exceed the depth
    fn prefix(&self, len: usize) -> Self {
        if len == self.depth() {
            self.clone()
        } else if len == 0 {
            Self::ROOT
        } else {
            Self::from_vec(self.as_slice()[..len].to_vec())
        }
    }

    fn check_index(&self, index: isize) -> Result<(), PointerError> {
        if index < 0 {
            return Err(PointerError::new(
                PointerErrorKind::NegativeIndex,
                format!("JSON Pointer index {index} must not be negative"),
            )
            .at(self));
        }
        Ok(())
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self.as_slice(), self.depth()))
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

impl FromStr for Pointer {
    type Err = PointerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Pointer {
    type Error = PointerError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vec<String>> for Pointer {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_vec(tokens)
    }
}

impl<T: AsRef<str>> From<&[T]> for Pointer {
    fn from(tokens: &[T]) -> Self {
        Self::from_tokens(tokens.iter().map(AsRef::as_ref))
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Pointer {
    fn from(tokens: [T; N]) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<T: Into<String>> FromIterator<T> for Pointer {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl<'a> IntoIterator for &'a Pointer {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

impl AsRef<[String]> for Pointer {
    fn as_ref(&self) -> &[String] {
        self.as_slice()
    }
}

impl Index<usize> for Pointer {
    type Output = str;
    fn index(&self, index: usize) -> &Self::Output {
        self.as_slice()[index].as_str()
    }
}

impl PartialEq<str> for Pointer {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Pointer {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<Pointer> for str {
    fn eq(&self, other: &Pointer) -> bool {
        other == self
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                     Add                                      ║
║                                    ¯¯¯¯¯                                     ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

// `ptr + rhs` is shorthand for `child`/`join`. Indices are `usize` here, so
// they can never be negative.
macro_rules! impl_add {
    ($($rhs:ty => $f:expr),* $(,)?) => {
        $(
            impl Add<$rhs> for &Pointer {
                type Output = Pointer;
                fn add(self, rhs: $rhs) -> Pointer {
                    ($f)(self, rhs)
                }
            }
            impl Add<$rhs> for Pointer {
                type Output = Pointer;
                fn add(self, rhs: $rhs) -> Pointer {
                    ($f)(&self, rhs)
                }
            }
        )*
    };
}

impl_add! {
    &str => |ptr: &Pointer, rhs: &str| ptr.child(rhs),
    String => |ptr: &Pointer, rhs: String| ptr.child(rhs),
    usize => |ptr: &Pointer, rhs: usize| ptr.child(rhs.to_string()),
    &Pointer => |ptr: &Pointer, rhs: &Pointer| ptr.join(rhs),
    Pointer => |ptr: &Pointer, rhs: Pointer| ptr.join(&rhs),
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  Ancestors                                   ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An iterator over a [`Pointer`] and its ancestors, from the pointer itself
/// up to the root.
#[derive(Debug, Clone)]
pub struct Ancestors<'p> {
    pointer: &'p Pointer,
    next: Option<usize>,
}

impl Iterator for Ancestors<'_> {
    type Item = Pointer;
    fn next(&mut self) -> Option<Self::Item> {
        let len = self.next?;
        self.next = len.checked_sub(1);
        Some(self.pointer.prefix(len))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |len| len + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ancestors<'_> {}
impl FusedIterator for Ancestors<'_> {}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Serde                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(feature = "serde")]
impl serde::Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Pointer::parse(&s).map_err(D::Error::custom)
    }
}
