//! Capability traits for ordered collections.
//!
//! Each trait names one capability a collection can offer, so generic
//! code can ask for exactly what it needs:
//!
//! - [`Container`]: membership testing
//! - [`Length`]: a known number of elements
//! - [`Sequence`]: positional access, search and reverse iteration
//! - [`SetAlgebra`]: union, intersection, difference and the subset relations
//!
//! [`SortedSet`](crate::SortedSet) implements all four. `Vec<T>`
//! implements the first three, which lets the same generic code run over
//! either collection.
//!
//! # Examples
//!
//! ```rust
//! use cset::SortedSet;
//! use cset::protocol::{Container, Length, Sequence};
//!
//! fn describe<S>(collection: &S) -> (usize, bool)
//! where
//!     S: Sequence<Element = i32> + Container<i32>,
//! {
//!     (Length::len(collection), Container::contains(collection, &4))
//! }
//!
//! assert_eq!(describe(&SortedSet::from([4, 4, 1])), (2, true));
//! assert_eq!(describe(&vec![4, 4, 1]), (3, true));
//! ```

use crate::error::{IndexError, NotFoundError};

/// A collection that can report whether it holds a value.
pub trait Container<Q: ?Sized> {
    /// Returns `true` if `element` is a member of the collection.
    fn contains(&self, element: &Q) -> bool;
}

/// A collection with a known number of elements.
pub trait Length {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An indexable collection with a stable element order.
///
/// Indices are signed. Negative values count from the end, so `-1` names
/// the last element.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
/// use cset::protocol::Sequence;
///
/// let set = SortedSet::from([9, 1, 4]);
/// assert_eq!(Sequence::get(&set, -1), Ok(&9));
/// assert_eq!(Sequence::count(&set, &4), 1);
/// assert_eq!(set.reversed().collect::<Vec<_>>(), vec![&9, &4, &1]);
/// ```
pub trait Sequence: Length {
    /// The element type.
    type Element;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len` or `index < -len`.
    fn get(&self, index: isize) -> Result<&Self::Element, IndexError>;

    /// Returns the position of the first occurrence of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the element is absent.
    fn index_of(&self, element: &Self::Element) -> Result<usize, NotFoundError>;

    /// Returns the number of occurrences of `element`.
    fn count(&self, element: &Self::Element) -> usize;

    /// Iterates over the elements from last to first.
    fn reversed(&self) -> impl Iterator<Item = &Self::Element>;
}

/// Set-theoretic operations between two collections.
///
/// Results are new values; neither operand is modified.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
/// use cset::protocol::SetAlgebra;
///
/// fn overlap<S: SetAlgebra>(left: &S, right: &S) -> S::Output {
///     SetAlgebra::intersection(left, right)
/// }
///
/// let left = SortedSet::from([1, 2, 3]);
/// let right = SortedSet::from([2, 3, 4]);
/// assert_eq!(overlap(&left, &right), SortedSet::from([2, 3]));
/// ```
pub trait SetAlgebra<Rhs: ?Sized = Self> {
    /// The type produced by the combining operations.
    type Output;

    /// Elements in either operand.
    fn union(&self, other: &Rhs) -> Self::Output;

    /// Elements in both operands.
    fn intersection(&self, other: &Rhs) -> Self::Output;

    /// Elements in `self` but not in `other`.
    fn difference(&self, other: &Rhs) -> Self::Output;

    /// Elements in exactly one operand.
    fn symmetric_difference(&self, other: &Rhs) -> Self::Output;

    /// Returns `true` if every element of `self` is in `other`.
    fn is_subset(&self, other: &Rhs) -> bool;

    /// Returns `true` if every element of `other` is in `self`.
    fn is_superset(&self, other: &Rhs) -> bool;

    /// Returns `true` if the operands share no element.
    fn is_disjoint(&self, other: &Rhs) -> bool;
}

// =============================================================================
// Vec
// =============================================================================

impl<T: PartialEq> Container<T> for Vec<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: PartialEq> Sequence for Vec<T> {
    type Element = T;

    fn get(&self, index: isize) -> Result<&T, IndexError> {
        let length = Self::len(self);
        let position = if index < 0 {
            length.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok()
        };

        position
            .and_then(|position| self.as_slice().get(position))
            .ok_or(IndexError { index, length })
    }

    fn index_of(&self, element: &T) -> Result<usize, NotFoundError> {
        self.iter()
            .position(|candidate| candidate == element)
            .ok_or(NotFoundError)
    }

    fn count(&self, element: &T) -> usize {
        self.iter().filter(|candidate| *candidate == element).count()
    }

    fn reversed(&self) -> impl Iterator<Item = &T> {
        self.iter().rev()
    }
}
