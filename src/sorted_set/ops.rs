//! Operator overloads for [`SortedSet`].
//!
//! | Operator | Meaning              |
//! |----------|----------------------|
//! | `a \| b` | union                |
//! | `a & b`  | intersection         |
//! | `a - b`  | difference           |
//! | `a ^ b`  | symmetric difference |
//! | `a + b`  | concatenation        |
//! | `a * n`  | repetition           |
//!
//! Binary set operators are implemented for owned sets and for references,
//! so `&a | &b` leaves both operands usable.

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use super::SortedSet;

macro_rules! impl_set_operator {
    ($operator:ident, $method:ident, $kernel:ident) => {
        impl<T: Ord + Clone> $operator<&SortedSet<T>> for &SortedSet<T> {
            type Output = SortedSet<T>;

            #[inline]
            fn $method(self, other: &SortedSet<T>) -> SortedSet<T> {
                self.$kernel(other)
            }
        }

        impl<T: Ord + Clone> $operator for SortedSet<T> {
            type Output = Self;

            #[inline]
            fn $method(self, other: Self) -> Self {
                self.$kernel(&other)
            }
        }
    };
}

impl_set_operator!(BitOr, bitor, union_set);
impl_set_operator!(BitAnd, bitand, intersection_set);
impl_set_operator!(Sub, sub, difference_set);
impl_set_operator!(BitXor, bitxor, symmetric_difference_set);
// Concatenation rebuilds from the chained elements, which for two sets is their union.
impl_set_operator!(Add, add, union_set);

impl<T: Ord + Clone> Mul<isize> for &SortedSet<T> {
    type Output = SortedSet<T>;

    #[inline]
    fn mul(self, count: isize) -> SortedSet<T> {
        self.repeat(count)
    }
}

impl<T: Ord + Clone> Mul<isize> for SortedSet<T> {
    type Output = Self;

    #[inline]
    fn mul(self, count: isize) -> Self {
        if count >= 1 { self } else { Self::new() }
    }
}

impl<T: Ord + Clone> Mul<&SortedSet<T>> for isize {
    type Output = SortedSet<T>;

    #[inline]
    fn mul(self, set: &SortedSet<T>) -> SortedSet<T> {
        set * self
    }
}

impl<T: Ord + Clone> Mul<SortedSet<T>> for isize {
    type Output = SortedSet<T>;

    #[inline]
    fn mul(self, set: SortedSet<T>) -> SortedSet<T> {
        set * self
    }
}
