#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod error;
pub use error::{PointerError, PointerErrorKind};
mod token;
pub use token::{decode_token, encode_token};
mod parse;
pub use parse::{parse, serialize};
#[cfg(feature = "std")]
mod fragment;
#[cfg(feature = "std")]
pub use fragment::{from_uri_fragment, to_uri_fragment, FragmentError};
mod tokens;
pub use tokens::Tokens;
mod pointer;
pub use pointer::{Ancestors, Pointer};

#[cfg(test)]
mod arbitrary;
