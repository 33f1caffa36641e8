//! # cset
//!
//! An immutable sorted set for Rust: a duplicate-free collection whose
//! iteration order is its sort order.
//!
//! ## Overview
//!
//! [`SortedSet`] is built once from any iterable of `Ord` elements and never
//! changes afterwards. Every algebraic operation returns a new set. Because
//! the storage is sorted, lookups use binary search and the set operations
//! run as linear merges.
//!
//! - **Container**: membership in O(log n), including borrowed forms
//! - **Sequence**: signed indexing, Python-style slicing, `index_of`, `count`
//! - **Set algebra**: union, intersection, difference, symmetric difference
//!   and the subset relations, as methods and as operators
//! - **Comparison**: equality, subset ordering through `PartialOrd`, hashing
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Semigroup`, `Monoid`, `Foldable` instances
//! - `protocol` (default): capability traits shared with `Vec`
//! - `serde`: Serialization support
//! - `rayon`: Parallel iteration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use cset::SortedSet;
//!
//! let primes = SortedSet::from([7, 3, 5, 2, 3]);
//! assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
//! assert!(primes.contains(&5));
//! assert_eq!(primes.get(-1), Ok(&7));
//!
//! let odds = SortedSet::from([1, 3, 5, 7, 9]);
//! assert_eq!(&primes - &odds, SortedSet::from([2]));
//! assert!(SortedSet::from([3, 5]) < primes);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the set, its errors and the enabled trait families.
///
/// # Usage
///
/// ```rust
/// use cset::prelude::*;
///
/// let set: SortedSet<u8> = [3, 1].into_iter().collect();
/// assert_eq!(set.index_of(&3), Ok(1));
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::{Slice, SortedSet};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "protocol")]
    pub use crate::protocol::*;
}

pub mod error;
mod sorted_set;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "protocol")]
pub mod protocol;

pub use error::{IndexError, NotFoundError, OrderingError, SortedSetError};
pub use sorted_set::{Slice, SortedSet, SortedSetIntoIterator, SortedSetIterator};
