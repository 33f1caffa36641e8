//! Linear-time set kernels over strictly ascending slices.
//!
//! Every function here requires both inputs to be sorted in strictly
//! ascending order (no duplicates) and produces output that satisfies the
//! same invariant. The kernels use an index-based two-pointer walk with a
//! disjoint fast path: when the ranges of the two slices do not overlap,
//! the comparison loop is skipped entirely.

use std::cmp::Ordering;

/// Returns `true` if every element of `left` is less than every element of
/// `right`. Empty slices are trivially disjoint from anything.
#[inline]
fn strictly_before<T: Ord>(left: &[T], right: &[T]) -> bool {
    match (left.last(), right.first()) {
        (Some(last), Some(first)) => last < first,
        _ => true,
    }
}

#[inline]
fn ranges_disjoint<T: Ord>(left: &[T], right: &[T]) -> bool {
    strictly_before(left, right) || strictly_before(right, left)
}

/// Merges two slices into their union.
///
/// # Complexity
///
/// O(n + m). Disjoint inputs are concatenated with two `extend_from_slice`
/// calls and no per-element comparison.
pub(super) fn union_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());

    if strictly_before(left, right) {
        result.extend_from_slice(left);
        result.extend_from_slice(right);
        return result;
    }
    if strictly_before(right, left) {
        result.extend_from_slice(right);
        result.extend_from_slice(left);
        return result;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Elements of `left` that are also in `right`.
pub(super) fn intersection_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result
}

/// Elements of `left` that are not in `right`.
pub(super) fn difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result
}

/// Elements in exactly one of `left` and `right`.
pub(super) fn symmetric_difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return union_slices(left, right);
    }

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Returns `true` if every element of `left` appears in `right`.
pub(super) fn is_subset_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if left.len() > right.len() {
        return false;
    }

    let mut right_index = 0;
    for element in left {
        // `right` is ascending, so anything smaller than `element` can be skipped for good.
        while right_index < right.len() && right[right_index] < *element {
            right_index += 1;
        }
        if right_index == right.len() || right[right_index] != *element {
            return false;
        }
        right_index += 1;
    }
    true
}

/// Returns `true` if `left` and `right` share no element.
pub(super) fn is_disjoint_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if ranges_disjoint(left, right) {
        return true;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => return false,
        }
    }
    true
}

/// Returns the index of the first element that is not strictly greater than
/// its predecessor, or `None` when the slice is strictly ascending.
pub(super) fn first_unordered_position<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|window| window[0] >= window[1])
        .map(|position| position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::overlapping(&[1, 3, 5], &[2, 3, 4], &[1, 2, 3, 4, 5])]
    #[case::disjoint_left_first(&[1, 2], &[5, 6], &[1, 2, 5, 6])]
    #[case::disjoint_right_first(&[5, 6], &[1, 2], &[1, 2, 5, 6])]
    #[case::left_empty(&[], &[1, 2], &[1, 2])]
    #[case::both_empty(&[], &[], &[])]
    fn union_slices_merges(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        assert_eq!(union_slices(left, right), expected);
    }

    #[rstest]
    #[case::overlapping(&[1, 2, 3], &[2, 3, 4], &[2, 3])]
    #[case::disjoint(&[1, 2], &[3, 4], &[])]
    #[case::interleaved(&[1, 3, 5, 7], &[2, 4, 6, 8], &[])]
    #[case::empty(&[], &[1], &[])]
    fn intersection_slices_keeps_shared(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(intersection_slices(left, right), expected);
    }

    #[rstest]
    #[case::overlapping(&[1, 2, 3], &[2, 3, 4], &[1])]
    #[case::disjoint(&[1, 2], &[3, 4], &[1, 2])]
    #[case::tail_remains(&[1, 5, 9], &[5], &[1, 9])]
    #[case::right_empty(&[1, 2], &[], &[1, 2])]
    fn difference_slices_removes_right(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(difference_slices(left, right), expected);
    }

    #[rstest]
    #[case::overlapping(&[1, 2, 3], &[2, 3, 4], &[1, 4])]
    #[case::disjoint(&[3, 4], &[1, 2], &[1, 2, 3, 4])]
    #[case::identical(&[1, 2], &[1, 2], &[])]
    fn symmetric_difference_slices_keeps_exclusive(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(symmetric_difference_slices(left, right), expected);
    }

    #[rstest]
    #[case::proper(&[1, 2], &[1, 2, 3], true)]
    #[case::equal(&[1, 2, 3], &[1, 2, 3], true)]
    #[case::larger(&[1, 2, 3], &[1, 2], false)]
    #[case::gap(&[1, 4], &[1, 2, 3], false)]
    #[case::empty(&[], &[1], true)]
    fn is_subset_slices_checks_containment(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: bool,
    ) {
        assert_eq!(is_subset_slices(left, right), expected);
    }

    #[rstest]
    #[case::disjoint(&[1, 2, 3], &[4, 5, 6], true)]
    #[case::interleaved(&[1, 3], &[2, 4], true)]
    #[case::touching(&[1, 2, 3], &[3, 4, 5], false)]
    fn is_disjoint_slices_detects_overlap(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: bool,
    ) {
        assert_eq!(is_disjoint_slices(left, right), expected);
    }

    #[rstest]
    #[case::sorted(&[1, 2, 3], None)]
    #[case::duplicate(&[1, 2, 2, 3], Some(2))]
    #[case::descending(&[3, 1], Some(1))]
    #[case::empty(&[], None)]
    fn first_unordered_position_finds_violation(
        #[case] slice: &[i32],
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(first_unordered_position(slice), expected);
    }
}
