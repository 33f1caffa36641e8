//! Rayon parallel iteration over [`SortedSet`].
//!
//! Elements live in one contiguous slice, so parallel iteration splits the
//! slice directly. Both iterators are indexed, so `collect` keeps the
//! ascending order; only the order in which side effects such as
//! `for_each` closures run is unspecified.

use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use super::SortedSet;

impl<'a, T: Sync + 'a> IntoParallelIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.as_slice().into_par_iter()
    }
}

impl<T: Clone + Send> IntoParallelIterator for SortedSet<T> {
    type Item = T;
    type Iter = rayon::vec::IntoIter<T>;

    fn into_par_iter(self) -> Self::Iter {
        std::sync::Arc::unwrap_or_clone(self.items).into_par_iter()
    }
}

impl<T: Ord + Send> FromParallelIterator<T> for SortedSet<T> {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        let mut items: Vec<T> = par_iter.into_par_iter().collect();
        items.par_sort();
        items.dedup();
        Self::from_sorted_vec(items)
    }
}
