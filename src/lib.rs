#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/ringdeque/0.1.0")]

//! A double-ended queue on a growable ring buffer.
//!
//! [`CircularDeque`] supports amortized O(1) insertion and removal at both
//! ends, O(1) indexing, and bulk concatenation of whole deques.
//!
//! # Examples
//! ```
//! use ringdeque::{CircularDeque, DequeError};
//!
//! let mut deque = CircularDeque::from([2, 3]);
//! deque.push_front(1);
//! deque.push_back(4);
//! assert_eq!(deque, [1, 2, 3, 4]);
//!
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.at(-1), Err(DequeError::IndexOutOfRange));
//! assert_eq!(deque.to_string(), "[2 3 4]");
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt::{self, Display, Formatter};

pub mod deque;
mod storage;

pub use crate::deque::CircularDeque;

/// The error type for fallible deque operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DequeError {
    /// An element was requested from, or removed from, an empty deque.
    Empty,
    /// An index was negative, or not less than the length of the deque.
    IndexOutOfRange,
}

impl Display for DequeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DequeError::Empty => f.write_str("deque is empty"),
            DequeError::IndexOutOfRange => f.write_str("index out of range"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for DequeError {}

/// Shorthand for `core::result::Result<T, DequeError>`.
pub type Result<T> = core::result::Result<T, DequeError>;
