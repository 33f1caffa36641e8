//! Type class instances for [`SortedSet`].

use super::SortedSet;
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

impl<T> TypeConstructor for SortedSet<T> {
    type Inner = T;
    type WithType<B> = SortedSet<B>;
}

impl<T: Ord + Clone> Semigroup for SortedSet<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.union_set(&other)
    }

    #[inline]
    fn combine_ref(&self, other: &Self) -> Self {
        self.union_set(other)
    }
}

impl<T: Ord + Clone> Monoid for SortedSet<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Foldable for SortedSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
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

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }
}
