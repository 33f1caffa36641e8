//! Capability trait impls for [`SortedSet`].

use std::borrow::Borrow;

use super::SortedSet;
use crate::error::{IndexError, NotFoundError};
use crate::protocol::{Container, Length, SetAlgebra, Sequence};

impl<T, Q> Container<Q> for SortedSet<T>
where
    T: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains(&self, element: &Q) -> bool {
        Self::contains(self, element)
    }
}

impl<T> Length for SortedSet<T> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: Ord> Sequence for SortedSet<T> {
    type Element = T;

    #[inline]
    fn get(&self, index: isize) -> Result<&T, IndexError> {
        Self::get(self, index)
    }

    #[inline]
    fn index_of(&self, element: &T) -> Result<usize, NotFoundError> {
        Self::index_of(self, element)
    }

    #[inline]
    fn count(&self, element: &T) -> usize {
        Self::count(self, element)
    }

    fn reversed(&self) -> impl Iterator<Item = &T> {
        self.iter_rev()
    }
}

impl<T: Ord + Clone> SetAlgebra for SortedSet<T> {
    type Output = Self;

    fn union(&self, other: &Self) -> Self {
        self.union_set(other)
    }

    fn intersection(&self, other: &Self) -> Self {
        self.intersection_set(other)
    }

    fn difference(&self, other: &Self) -> Self {
        self.difference_set(other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        self.symmetric_difference_set(other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn is_superset(&self, other: &Self) -> bool {
        Self::is_superset(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Self::is_disjoint(self, other)
    }
}
