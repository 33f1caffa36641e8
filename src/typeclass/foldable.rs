//! Foldable type class - folding structures into summary values.
//!
//! `Foldable` abstracts over data structures that can be reduced to a
//! single value by combining their elements in order. For a
//! [`SortedSet`](crate::SortedSet), "in order" means ascending.

use super::{Monoid, TypeConstructor};

/// A type class for structures that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
/// use cset::typeclass::Foldable;
///
/// let set = SortedSet::from([3, 1, 2]);
/// let digits = set.fold_left(String::new(), |accumulator, element| {
///     format!("{accumulator}{element}")
/// });
/// assert_eq!(digits, "123");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    /// use cset::typeclass::Foldable;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// let descending = set.fold_right(Vec::new(), |element, mut accumulator| {
    ///     accumulator.push(element);
    ///     accumulator
    /// });
    /// assert_eq!(descending, vec![3, 2, 1]);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    /// use cset::typeclass::Foldable;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// let parities: SortedSet<i32> = set.fold_map(|element| SortedSet::singleton(element % 2));
    /// assert_eq!(parities, SortedSet::from([0, 1]));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies the predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |all, element| all && predicate(&element))
    }
}

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Vec<A> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_fold_right_walks_backwards() {
        let digits = vec![1, 2, 3].fold_right(String::new(), |element, accumulator| {
            format!("{accumulator}{element}")
        });
        assert_eq!(digits, "321");
    }

    #[rstest]
    fn vec_find_returns_first_match() {
        assert_eq!(vec![1, 4, 6].find(|element| element % 2 == 0), Some(4));
        assert_eq!(vec![1, 3].find(|element| element % 2 == 0), None);
    }

    #[rstest]
    fn vec_exists_and_for_all() {
        let values = vec![2, 4, 6];
        assert!(values.exists(|element| *element == 4));
        assert!(values.for_all(|element| element % 2 == 0));
        assert!(!values.for_all(|element| *element > 2));
    }
}
