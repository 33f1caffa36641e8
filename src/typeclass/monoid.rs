//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! **Left identity**: `Self::empty().combine(a) == a`
//!
//! **Right identity**: `a.combine(Self::empty()) == a`

use super::Semigroup;

/// A type class for semigroups that have an identity element.
///
/// For a [`SortedSet`](crate::SortedSet) the identity is the empty set.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
/// use cset::typeclass::{Monoid, Semigroup};
///
/// let set = SortedSet::from([1, 2]);
/// assert_eq!(SortedSet::empty().combine(set.clone()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    /// use cset::typeclass::Monoid;
    ///
    /// let sets = vec![SortedSet::from([1, 2]), SortedSet::from([2, 3])];
    /// assert_eq!(SortedSet::combine_all(sets), SortedSet::from([1, 2, 3]));
    ///
    /// let none: Vec<SortedSet<i32>> = vec![];
    /// assert!(SortedSet::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
