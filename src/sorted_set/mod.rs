//! Immutable sorted set backed by a strictly ascending vector.
//!
//! This module provides [`SortedSet`], a collection of unique, totally
//! ordered elements that is built once and never mutated afterwards.
//!
//! # Overview
//!
//! `SortedSet` stores its elements in a sorted, deduplicated `Vec` wrapped
//! in an `Arc`:
//! - Construction drains the input once, sorts it and removes duplicates
//! - Membership and position lookups use binary search
//! - Set algebra walks two sorted slices in lockstep
//! - Cloning a set shares its storage
//!
//! # Immutability
//!
//! Every operation that conceptually changes membership (`union`,
//! `difference`, `slice`, ...) returns a new set. The receiver is never
//! modified, so a set may be shared freely between readers.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity    |
//! |------------------------|---------------|
//! | construction           | O(n log n)    |
//! | `contains`             | O(log n)      |
//! | `index_of` / `count`   | O(log n)      |
//! | `get`                  | O(1)          |
//! | `len` / `is_empty`     | O(1)          |
//! | `slice`                | O(k)          |
//! | set-to-set algebra     | O(n + m)      |
//! | algebra with iterables | O(m log m + n)|
//!
//! # Examples
//!
//! ```rust
//! use cset::SortedSet;
//!
//! let set = SortedSet::from([7, 8, 3, 1, 3]);
//! assert_eq!(set.to_vec(), vec![1, 3, 7, 8]);
//! assert!(set.contains(&7));
//! assert_eq!(set.get(-1), Ok(&8));
//!
//! let other = SortedSet::from([3, 4]);
//! assert_eq!(&set & &other, SortedSet::from([3]));
//! assert_eq!(format!("{set:?}"), "SortedSet([1, 3, 7, 8])");
//! ```

mod algebra;
mod ops;
#[cfg(feature = "protocol")]
mod protocol;
#[cfg(feature = "rayon")]
mod parallel;
#[cfg(feature = "serde")]
mod serialization;
mod slice;
#[cfg(feature = "typeclass")]
mod typeclass;

use std::any::Any;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Bound, Index, RangeBounds};
use std::sync::Arc;

use crate::error::{IndexError, NotFoundError, OrderingError, SortedSetError};

pub use slice::Slice;

/// Message for the debug assertion guarding adopted vectors.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires strictly increasing elements (sorted + deduplicated)";

/// An immutable, ordered, duplicate-free collection.
///
/// Elements are kept in ascending order under their [`Ord`]
/// implementation. Iteration order equals sort order.
///
/// # Type Parameters
///
/// * `T` - The element type. Construction and queries need `Ord`; set
///   algebra and slicing additionally need `Clone`.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
///
/// let set: SortedSet<i32> = [5, 7, 2, 2, 6].into_iter().collect();
/// let elements: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(elements, vec![2, 5, 6, 7]);
/// ```
pub struct SortedSet<T> {
    items: Arc<Vec<T>>,
}

impl<T> SortedSet<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(format!("{set:?}"), "SortedSet()");
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }

    /// Adopts an already sorted, deduplicated vector without checking it.
    #[inline]
    fn from_sorted_unchecked(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a strictly ascending slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([3, 1, 2]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Each call produces a fresh iterator; the set itself is unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([5, 7, 2, 6]);
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&5));
    /// assert_eq!(iterator.next(), Some(&6));
    /// assert_eq!(iterator.next(), Some(&7));
    /// assert_eq!(iterator.next(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedSetIterator<'_, T> {
        SortedSetIterator {
            inner: self.items.iter(),
        }
    }

    /// Returns an iterator over the elements in descending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([4, 5, 6]);
    /// let descending: Vec<&i32> = set.iter_rev().collect();
    /// assert_eq!(descending, vec![&6, &5, &4]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_rev(&self) -> std::iter::Rev<SortedSetIterator<'_, T>> {
        self.iter().rev()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the element at `index`.
    ///
    /// Negative indices count from the end: `-1` is the largest element and
    /// `-len` the smallest.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len` or `index < -len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 4, 9, 13, 15]);
    /// assert_eq!(set.get(0), Ok(&1));
    /// assert_eq!(set.get(-1), Ok(&15));
    /// assert_eq!(set.get(-5), Ok(&1));
    /// assert!(set.get(5).is_err());
    /// assert!(set.get(-6).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, IndexError> {
        let length = self.len();
        let position = if index < 0 {
            length.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok()
        };

        position
            .and_then(|position| self.items.get(position))
            .ok_or(IndexError { index, length })
    }

    /// Compares this set with a value of any type.
    ///
    /// Returns `true` only if `other` is a `SortedSet<T>` with the same
    /// elements. Any other type, including a `Vec<T>` holding the same
    /// elements, compares unequal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([4, 5, 6]);
    /// assert!(set.eq_any(&SortedSet::from([6, 5, 4])));
    /// assert!(!set.eq_any(&vec![4, 5, 6]));
    /// ```
    #[must_use]
    pub fn eq_any(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.items == other.items)
    }

    /// Negation of [`eq_any`](Self::eq_any).
    #[must_use]
    pub fn ne_any(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        !self.eq_any(other)
    }
}

impl<T: Ord> SortedSet<T> {
    /// Creates a set containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_sorted_unchecked(vec![element])
    }

    /// Adopts a vector that is already sorted in strictly ascending order.
    ///
    /// This skips the sort and deduplication of ordinary construction.
    ///
    /// In debug builds the precondition is validated with `debug_assert!`.
    /// In release builds, invalid input yields a set whose lookups give
    /// unspecified (but memory-safe) answers. Use
    /// [`try_from_sorted_vec`](Self::try_from_sorted_vec) when the input is
    /// not trusted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![2, 4, 6, 8]);
    /// assert_eq!(set.len(), 4);
    /// ```
    #[must_use]
    pub fn from_sorted_vec(items: Vec<T>) -> Self {
        debug_assert!(
            algebra::first_unordered_position(&items).is_none(),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self::from_sorted_unchecked(items)
    }

    /// Adopts a vector after checking that it is strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError`] naming the first element that is not
    /// strictly greater than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::{OrderingError, SortedSet};
    ///
    /// assert!(SortedSet::try_from_sorted_vec(vec![1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     SortedSet::try_from_sorted_vec(vec![1, 3, 2]),
    ///     Err(OrderingError { position: 2 })
    /// );
    /// ```
    pub fn try_from_sorted_vec(items: Vec<T>) -> Result<Self, OrderingError> {
        match algebra::first_unordered_position(&items) {
            Some(position) => Err(OrderingError { position }),
            None => Ok(Self::from_sorted_unchecked(items)),
        }
    }

    fn from_unsorted_vec(mut items: Vec<T>) -> Self {
        // Stable sort so that dedup keeps the first occurrence of equal elements.
        items.sort();
        items.dedup();
        Self::from_sorted_unchecked(items)
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Supports borrowed forms of the element type, so a
    /// `SortedSet<String>` can be queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([6, 7, 4, 5]);
    /// assert!(set.contains(&6));
    /// assert!(!set.contains(&8));
    ///
    /// let words = SortedSet::from(["pear".to_string(), "fig".to_string()]);
    /// assert!(words.contains("fig"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).is_ok()
    }

    /// Returns the position of `element` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::{NotFoundError, SortedSet};
    ///
    /// let set = SortedSet::from([4, 5, 6]);
    /// assert_eq!(set.index_of(&5), Ok(1));
    /// assert_eq!(set.index_of(&8), Err(NotFoundError));
    /// ```
    pub fn index_of<Q>(&self, element: &Q) -> Result<usize, NotFoundError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).map_err(|_| NotFoundError)
    }

    /// Returns the number of occurrences of `element`: `1` or `0`.
    ///
    /// Duplicates cannot exist, so this never exceeds one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 5, 6, 7]);
    /// assert_eq!(set.count(&5), 1);
    /// assert_eq!(set.count(&2), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn count<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        usize::from(self.contains(element))
    }

    /// Returns an iterator over the elements within `range`, ascending.
    ///
    /// Both ends are located by binary search. A range whose start lies
    /// after its end yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 4, 9, 13, 15]);
    /// let middle: Vec<&i32> = set.range(4..=13).collect();
    /// assert_eq!(middle, vec![&4, &9, &13]);
    /// ```
    #[must_use]
    pub fn range<Q, R>(&self, range: R) -> SortedSetIterator<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        let start = match range.start_bound() {
            Bound::Included(bound) => self.items.partition_point(|item| item.borrow() < bound),
            Bound::Excluded(bound) => self.items.partition_point(|item| item.borrow() <= bound),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(bound) => self.items.partition_point(|item| item.borrow() <= bound),
            Bound::Excluded(bound) => self.items.partition_point(|item| item.borrow() < bound),
            Bound::Unbounded => self.len(),
        };

        SortedSetIterator {
            inner: self.items[start..end.max(start)].iter(),
        }
    }

    #[inline]
    fn search<Q>(&self, element: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items
            .binary_search_by(|item| item.borrow().cmp(element))
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    /// Returns a sorted `Vec` containing clones of all elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.as_ref().clone()
    }

    /// Returns a new set built from the elements selected by `slice`.
    ///
    /// Follows Python slice semantics: negative bounds count from the end,
    /// out-of-range bounds are clamped, and bounds that select nothing give
    /// an empty set. A negative step selects elements walking backwards;
    /// the result is still an ascending set.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::ZeroStep`] if the step is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::{Slice, SortedSet};
    ///
    /// let set = SortedSet::from([1, 4, 9, 13, 15]);
    /// assert_eq!(set.slice(Slice::range(2, 4))?, SortedSet::from([9, 13]));
    /// assert_eq!(set.slice(Slice::ending_at(3))?, SortedSet::from([1, 4, 9]));
    /// assert_eq!(set.slice(Slice::full())?, set);
    /// # Ok::<(), cset::SortedSetError>(())
    /// ```
    pub fn slice<S>(&self, slice: S) -> Result<Self, SortedSetError>
    where
        S: Into<Slice>,
    {
        let resolved = slice.into().resolve(self.len())?;
        let mut items: Vec<T> = resolved
            .positions()
            .filter_map(|position| self.items.get(position).cloned())
            .collect();

        if resolved.is_descending() {
            items.reverse();
        }
        Ok(Self::from_sorted_vec(items))
    }

    /// Returns the union of this set and `other`.
    ///
    /// `other` may be any finite iterable whose items borrow as `T`: another
    /// set (by value or reference), a `Vec`, an array, an iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.union([2, 3, 4]), SortedSet::from([1, 2, 3, 4]));
    /// assert_eq!(set.union(&SortedSet::from([0])), SortedSet::from([0, 1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.union_set(&Self::collect_operand(other))
    }

    /// Returns the elements present in both this set and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.intersection(vec![2, 3, 4]), SortedSet::from([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.intersection_set(&Self::collect_operand(other))
    }

    /// Returns the elements of this set that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.difference([2, 3, 4]), SortedSet::from([1]));
    /// ```
    #[must_use]
    pub fn difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.difference_set(&Self::collect_operand(other))
    }

    /// Returns the elements in exactly one of this set and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.symmetric_difference([2, 3, 4]), SortedSet::from([1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.symmetric_difference_set(&Self::collect_operand(other))
    }

    /// Returns `true` if every element of this set is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2]);
    /// assert!(set.is_subset([1, 2, 3]));
    /// assert!(set.is_subset([1, 2]));
    /// assert!(!set.is_subset([1]));
    /// ```
    #[must_use]
    pub fn is_subset<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        algebra::is_subset_slices(self.as_slice(), Self::collect_operand(other).as_slice())
    }

    /// Returns `true` if every element of `other` is in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert!(set.is_superset([1, 2]));
    /// assert!(!set.is_superset([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn is_superset<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        algebra::is_subset_slices(Self::collect_operand(other).as_slice(), self.as_slice())
    }

    /// Returns `true` if this set and `other` have no element in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert!(set.is_disjoint([4, 5, 6]));
    /// assert!(!set.is_disjoint([3, 4, 5]));
    /// ```
    #[must_use]
    pub fn is_disjoint<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        algebra::is_disjoint_slices(self.as_slice(), Self::collect_operand(other).as_slice())
    }

    /// Builds a new set from the elements of this set followed by `other`.
    ///
    /// Construction deduplicates and sorts, so this is equivalent to
    /// [`union`](Self::union).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.concatenate([3, 4, 5]), SortedSet::from([1, 2, 3, 4, 5]));
    /// ```
    #[must_use]
    pub fn concatenate<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.iter()
            .cloned()
            .chain(other.into_iter().map(|element| element.borrow().clone()))
            .collect()
    }

    /// Repeats the set `count` times.
    ///
    /// Since duplicates cannot exist, any positive count returns an equal
    /// set and any count of zero or less returns the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cset::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.repeat(100), set);
    /// assert!(set.repeat(0).is_empty());
    /// assert!(set.repeat(-3).is_empty());
    /// ```
    #[must_use]
    pub fn repeat(&self, count: isize) -> Self {
        if count >= 1 {
            self.clone()
        } else {
            Self::new()
        }
    }

    fn collect_operand<I>(other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .map(|element| element.borrow().clone())
            .collect()
    }

    pub(crate) fn union_set(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::from_sorted_unchecked(algebra::union_slices(self.as_slice(), other.as_slice()))
    }

    pub(crate) fn intersection_set(&self, other: &Self) -> Self {
        Self::from_sorted_unchecked(algebra::intersection_slices(
            self.as_slice(),
            other.as_slice(),
        ))
    }

    pub(crate) fn difference_set(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self::from_sorted_unchecked(algebra::difference_slices(self.as_slice(), other.as_slice()))
    }

    pub(crate) fn symmetric_difference_set(&self, other: &Self) -> Self {
        Self::from_sorted_unchecked(algebra::symmetric_difference_slices(
            self.as_slice(),
            other.as_slice(),
        ))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`SortedSet`], ascending.
#[derive(Clone)]
pub struct SortedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedSetIterator<'_, T> {}

/// An owning iterator over the elements of a [`SortedSet`], ascending.
///
/// Elements are moved out when the set was the sole owner of its storage
/// and cloned otherwise.
pub struct SortedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for SortedSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for SortedSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_unsorted_vec(items)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_unsorted_vec(Vec::from(items))
    }
}

impl<T: Ord + Clone> From<&[T]> for SortedSet<T> {
    fn from(items: &[T]) -> Self {
        Self::from_unsorted_vec(items.to_vec())
    }
}

impl<T: Clone> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedSetIntoIterator {
            inner: Arc::unwrap_or_clone(self.items).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = SortedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for SortedSet<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`SortedSet::get`] for a checked,
    /// negative-aware lookup.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

/// Sets are partially ordered by inclusion.
///
/// `a < b` means `a` is a proper subset of `b`, `a <= b` a subset,
/// `a > b` a proper superset and `a >= b` a superset. Two sets where
/// neither contains the other are incomparable, so all four operators
/// return `false`.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
///
/// let small = SortedSet::from([1, 2]);
/// let large = SortedSet::from([1, 2, 3]);
/// let other = SortedSet::from([4]);
///
/// assert!(small < large);
/// assert!(large >= small);
/// assert!(!(small < other) && !(small >= other));
/// ```
impl<T: Ord> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let left = self.as_slice();
        let right = other.as_slice();
        match self.len().cmp(&other.len()) {
            Ordering::Equal => (left == right).then_some(Ordering::Equal),
            Ordering::Less => algebra::is_subset_slices(left, right).then_some(Ordering::Less),
            Ordering::Greater => {
                algebra::is_subset_slices(right, left).then_some(Ordering::Greater)
            }
        }
    }
}

impl<T: Hash> Hash for SortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

/// Renders the set as `SortedSet([e1, e2, ...])`, or `SortedSet()` when empty.
impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("SortedSet()");
        }
        formatter.write_str("SortedSet(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SortedSet<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
