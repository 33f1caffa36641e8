//! Type class traits the sorted set participates in.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types via GATs
//! - [`Semigroup`]: Associative binary operations (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! [`SortedSet`](crate::SortedSet) is a monoid under union with the empty
//! set as identity, and folds in ascending order.
//!
//! # Examples
//!
//! ```rust
//! use cset::SortedSet;
//! use cset::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let evens = SortedSet::from([2, 4]);
//! let odds = SortedSet::from([1, 3]);
//! assert_eq!(evens.combine_ref(&odds), SortedSet::from([1, 2, 3, 4]));
//!
//! let total = SortedSet::combine_all([evens, odds]).fold_left(0, |sum, element| sum + element);
//! assert_eq!(total, 10);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
