//! Python-style `start:stop:step` slice descriptors.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::SortedSetError;

/// A `start:stop:step` slice over a [`SortedSet`](crate::SortedSet).
///
/// Every component is optional. Negative `start`/`stop` count from the
/// end, out-of-range bounds are clamped, and a negative `step` walks
/// backwards. A step of zero is the only invalid descriptor.
///
/// # Examples
///
/// ```rust
/// use cset::{Slice, SortedSet};
///
/// let set = SortedSet::from([1, 4, 9, 13, 15]);
///
/// assert_eq!(set.slice(Slice::range(2, 4)).unwrap(), SortedSet::from([9, 13]));
/// assert_eq!(set.slice(Slice::ending_at(-2)).unwrap(), SortedSet::from([1, 4, 9]));
/// assert_eq!(set.slice(Slice::full().with_step(2)).unwrap(), SortedSet::from([1, 9, 15]));
/// assert!(set.slice(Slice::starting_at(10)).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
}

impl Slice {
    /// Creates a slice from all three optional components.
    #[inline]
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// `[:]`
    #[inline]
    #[must_use]
    pub const fn full() -> Self {
        Self::new(None, None, None)
    }

    /// `[start:stop]`
    #[inline]
    #[must_use]
    pub const fn range(start: isize, stop: isize) -> Self {
        Self::new(Some(start), Some(stop), None)
    }

    /// `[start:]`
    #[inline]
    #[must_use]
    pub const fn starting_at(start: isize) -> Self {
        Self::new(Some(start), None, None)
    }

    /// `[:stop]`
    #[inline]
    #[must_use]
    pub const fn ending_at(stop: isize) -> Self {
        Self::new(None, Some(stop), None)
    }

    /// Returns this slice with its step replaced.
    #[inline]
    #[must_use]
    pub const fn with_step(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolves the slice against a sequence of `length` elements.
    ///
    /// Mirrors the clamping rules of Python's `slice.indices`.
    pub(super) fn resolve(&self, length: usize) -> Result<ResolvedSlice, SortedSetError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SortedSetError::ZeroStep);
        }

        let length = isize::try_from(length).unwrap_or(isize::MAX);
        let (lower, upper) = if step < 0 {
            (-1, length - 1)
        } else {
            (0, length)
        };

        let clamp = |bound: isize| {
            if bound < 0 {
                bound.saturating_add(length).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self
            .stop
            .map_or(if step < 0 { lower } else { upper }, clamp);

        Ok(ResolvedSlice { start, stop, step })
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::range(range.start, range.end)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::starting_at(range.start)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::ending_at(range.end)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// A slice with clamped, non-optional bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ResolvedSlice {
    start: isize,
    stop: isize,
    step: isize,
}

impl ResolvedSlice {
    #[inline]
    pub(super) const fn is_descending(&self) -> bool {
        self.step < 0
    }

    /// Positions selected by the slice, in walk order.
    pub(super) fn positions(self) -> impl Iterator<Item = usize> {
        let Self { start, stop, step } = self;
        std::iter::successors(Some(start), move |position| position.checked_add(step))
            .take_while(move |position| {
                if step > 0 {
                    *position < stop
                } else {
                    *position > stop
                }
            })
            .filter_map(|position| usize::try_from(position).ok())
    }
}
