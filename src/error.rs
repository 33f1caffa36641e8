//! Error types for [`SortedSet`](crate::SortedSet) operations.
//!
//! Positional access and value lookup are the only queries that can fail.
//! Each failure has its own small error type so callers can match on
//! exactly what went wrong, and [`SortedSetError`] unifies them for code
//! that prefers a single error type.

/// Represents an out-of-range positional access.
///
/// Raised by [`SortedSet::get`](crate::SortedSet::get) when `index` is not
/// within `-length..length`.
///
/// # Examples
///
/// ```rust
/// use cset::IndexError;
///
/// let error = IndexError { index: 5, length: 5 };
/// assert_eq!(
///     format!("{error}"),
///     "index 5 out of range for sorted set of length 5"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The requested index, as given by the caller (possibly negative).
    pub index: isize,
    /// The length of the set at the time of the access.
    pub length: usize,
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for sorted set of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexError {}

/// Represents a lookup of a value that is not in the set.
///
/// Raised by [`SortedSet::index_of`](crate::SortedSet::index_of).
///
/// # Examples
///
/// ```rust
/// use cset::NotFoundError;
///
/// assert_eq!(format!("{}", NotFoundError), "value not found in sorted set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundError;

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "value not found in sorted set")
    }
}

impl std::error::Error for NotFoundError {}

/// Represents a vector that was claimed to be strictly ascending but is not.
///
/// Raised by [`SortedSet::try_from_sorted_vec`](crate::SortedSet::try_from_sorted_vec).
/// `position` is the index of the first element that is not strictly
/// greater than its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingError {
    /// Index of the first out-of-order or duplicate element.
    pub position: usize,
}

impl std::fmt::Display for OrderingError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "element at position {} is not strictly greater than its predecessor",
            self.position
        )
    }
}

impl std::error::Error for OrderingError {}

/// Represents any error produced by this crate.
///
/// # Examples
///
/// ```rust
/// use cset::{IndexError, SortedSetError};
///
/// let error: SortedSetError = IndexError { index: -4, length: 3 }.into();
/// assert!(matches!(error, SortedSetError::Index(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedSetError {
    /// Positional access out of range.
    Index(IndexError),
    /// Value lookup failed.
    NotFound(NotFoundError),
    /// Pre-sorted input violated the strict ordering invariant.
    Ordering(OrderingError),
    /// A slice was requested with a step of zero.
    ZeroStep,
}

impl std::fmt::Display for SortedSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(error) => write!(formatter, "{error}"),
            Self::NotFound(error) => write!(formatter, "{error}"),
            Self::Ordering(error) => write!(formatter, "{error}"),
            Self::ZeroStep => write!(formatter, "slice step cannot be zero"),
        }
    }
}

impl std::error::Error for SortedSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Index(error) => Some(error),
            Self::NotFound(error) => Some(error),
            Self::Ordering(error) => Some(error),
            Self::ZeroStep => None,
        }
    }
}

impl From<IndexError> for SortedSetError {
    fn from(error: IndexError) -> Self {
        Self::Index(error)
    }
}

impl From<NotFoundError> for SortedSetError {
    fn from(error: NotFoundError) -> Self {
        Self::NotFound(error)
    }
}

impl From<OrderingError> for SortedSetError {
    fn from(error: OrderingError) -> Self {
        Self::Ordering(error)
    }
}
