//! The error type shared by every container.

use std::collections::TryReserveError;

use thiserror::Error;

/// Every way a container operation can be refused. A refused operation leaves the container
/// exactly as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A bit or element index at or past the end of the container.
    #[error("index out of range: {index} >= {len}")]
    OutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The number of valid indices.
        len: usize,
    },
    /// Growing the backing storage failed.
    #[error("out of memory")]
    OutOfMemory(#[from] TryReserveError),
    /// The request is well formed but not allowed, e.g. inserting a duplicate into a `Tree`.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Shorthand for results of container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A refused `insert` or `add`. Carries the element back so the caller keeps ownership of
/// what it tried to store.
///
/// # Examples
///
/// ```
/// use containers::{callback::natural, Error, Tree};
///
/// let mut tree = Tree::new();
/// tree.insert(Box::new(1), natural).unwrap();
///
/// let refused = tree.insert(Box::new(1), natural).unwrap_err();
/// assert!(matches!(refused.error(), Error::InvalidOperation(_)));
/// assert_eq!(*refused.into_inner(), 1);
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{error}")]
pub struct Refused<T> {
    #[source]
    error: Error,
    elem: T,
}

impl<T> Refused<T> {
    pub(crate) fn new(error: Error, elem: T) -> Self {
        Self { error, elem }
    }

    /// Why the element was refused.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// The element that wasn't stored.
    pub fn into_inner(self) -> T {
        self.elem
    }
}

impl<T> From<Refused<T>> for Error {
    fn from(refused: Refused<T>) -> Self {
        refused.error
    }
}
