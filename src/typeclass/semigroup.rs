//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is a set together with an associative binary operation.
//! For a [`SortedSet`](crate::SortedSet) the operation is union.
//!
//! # Laws
//!
//! **Associativity**: for all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

/// A type class for types that have an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
/// use cset::typeclass::Semigroup;
///
/// let a = SortedSet::from([1, 2]);
/// let b = SortedSet::from([2, 3]);
/// assert_eq!(a.combine(b), SortedSet::from([1, 2, 3]));
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    /// use cset::typeclass::Semigroup;
    ///
    /// let sets = vec![SortedSet::from([3]), SortedSet::from([1]), SortedSet::from([2])];
    /// assert_eq!(SortedSet::reduce_all(sets), Some(SortedSet::from([1, 2, 3])));
    ///
    /// let none: Vec<SortedSet<i32>> = vec![];
    /// assert_eq!(SortedSet::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
