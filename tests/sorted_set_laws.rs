//! Property-based tests for SortedSet laws.
//!
//! These tests verify that SortedSet keeps its ordering invariant and
//! satisfies the algebraic properties expected of a set.

use cset::{Slice, SortedSet};
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..40)
}

// =============================================================================
// Ordering Invariant
// Description: Elements are strictly ascending after any construction
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_is_strictly_ascending(items in elements()) {
        let set = SortedSet::from(items);
        prop_assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #[test]
    fn prop_construction_is_idempotent(items in elements()) {
        let set = SortedSet::from(items);
        let rebuilt: SortedSet<i32> = set.iter().copied().collect();
        prop_assert_eq!(rebuilt, set);
    }
}

proptest! {
    #[test]
    fn prop_algebra_results_stay_ordered(left in elements(), right in elements()) {
        let left = SortedSet::from(left);
        let right = SortedSet::from(right);

        for result in [&left | &right, &left & &right, &left - &right, &left ^ &right] {
            prop_assert!(result.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

// =============================================================================
// Membership Law
// Description: x is contained exactly when it occurred in the input
// =============================================================================

proptest! {
    #[test]
    fn prop_membership_matches_input(items in elements(), probe in -60..60_i32) {
        let set = SortedSet::from(items.clone());
        prop_assert_eq!(set.contains(&probe), items.contains(&probe));
        prop_assert_eq!(set.count(&probe), usize::from(items.contains(&probe)));
    }
}

// =============================================================================
// Indexing Round-Trip
// Description: get(i) and get(i - n) agree, index_of inverts get
// =============================================================================

proptest! {
    #[test]
    fn prop_negative_index_mirrors_positive(items in elements()) {
        let set = SortedSet::from(items);
        let length = isize::try_from(set.len()).unwrap();

        for index in 0..length {
            prop_assert_eq!(set.get(index), set.get(index - length));
            let element = set.get(index).unwrap();
            prop_assert_eq!(set.index_of(element), Ok(usize::try_from(index).unwrap()));
        }
        prop_assert!(set.get(length).is_err());
        prop_assert!(set.get(-length - 1).is_err());
    }
}

// =============================================================================
// Slice Well-Formedness
// Description: Every slice is a sorted subset of the original
// =============================================================================

proptest! {
    #[test]
    fn prop_slice_is_subset(
        items in elements(),
        start in prop::option::of(-60..60_isize),
        stop in prop::option::of(-60..60_isize),
        step in prop::option::of(prop_oneof![-5..0_isize, 1..6_isize])
    ) {
        let set = SortedSet::from(items);
        let sliced = set.slice(Slice::new(start, stop, step)).unwrap();

        prop_assert!(sliced.is_subset(&set));
        prop_assert!(sliced.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #[test]
    fn prop_unit_step_slice_matches_vec_slice(
        items in elements(),
        start in 0..45_usize,
        stop in 0..45_usize
    ) {
        let set = SortedSet::from(items);
        let length = set.len();
        let (lower, upper) = (start.min(length), stop.min(length));
        let expected: Vec<i32> = if lower < upper {
            set.as_slice()[lower..upper].to_vec()
        } else {
            Vec::new()
        };

        let sliced = set
            .slice(Slice::range(
                isize::try_from(start).unwrap(),
                isize::try_from(stop).unwrap(),
            ))
            .unwrap();
        prop_assert_eq!(sliced.to_vec(), expected);
    }
}

// =============================================================================
// Union Laws
// Description: Union is commutative and associative
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(left in elements(), right in elements()) {
        let left = SortedSet::from(left);
        let right = SortedSet::from(right);
        prop_assert_eq!(&left | &right, &right | &left);
    }
}

proptest! {
    #[test]
    fn prop_union_associativity_law(a in elements(), b in elements(), c in elements()) {
        let a = SortedSet::from(a);
        let b = SortedSet::from(b);
        let c = SortedSet::from(c);
        prop_assert_eq!(&(&a | &b) | &c, &a | &(&b | &c));
    }
}

// =============================================================================
// Distributivity Law
// Description: A ∩ (B ∪ C) = (A ∩ B) ∪ (A ∩ C)
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_distributes_over_union(a in elements(), b in elements(), c in elements()) {
        let a = SortedSet::from(a);
        let b = SortedSet::from(b);
        let c = SortedSet::from(c);
        prop_assert_eq!(&a & &(&b | &c), &(&a & &b) | &(&a & &c));
    }
}

// =============================================================================
// Self-Cancellation Laws
// Description: A - A and A ^ A are empty
// =============================================================================

proptest! {
    #[test]
    fn prop_self_cancellation(items in elements()) {
        let set = SortedSet::from(items);
        prop_assert!((&set - &set).is_empty());
        prop_assert!((&set ^ &set).is_empty());
    }
}

// =============================================================================
// Symmetric Difference Law
// Description: A ^ B = (A - B) ∪ (B - A)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_definition(left in elements(), right in elements()) {
        let left = SortedSet::from(left);
        let right = SortedSet::from(right);
        prop_assert_eq!(&left ^ &right, &(&left - &right) | &(&right - &left));
    }
}

// =============================================================================
// Subset Laws
// Description: A ⊆ A ∪ B, and ordering agrees with the subset relation
// =============================================================================

proptest! {
    #[test]
    fn prop_operand_is_subset_of_union(left in elements(), right in elements()) {
        let left = SortedSet::from(left);
        let right = SortedSet::from(right);
        let union = &left | &right;

        prop_assert!(left.is_subset(&union));
        prop_assert!(union.is_superset(&left));
        prop_assert!(left <= union);
    }
}

proptest! {
    #[test]
    fn prop_disjoint_iff_empty_intersection(left in elements(), right in elements()) {
        let left = SortedSet::from(left);
        let right = SortedSet::from(right);
        prop_assert_eq!(left.is_disjoint(&right), (&left & &right).is_empty());
    }
}

// =============================================================================
// Repetition Law
// Description: s * n equals s for n >= 1 and is empty for n <= 0
// =============================================================================

proptest! {
    #[test]
    fn prop_repetition_law(items in elements(), count in -5..5_isize) {
        let set = SortedSet::from(items);
        let repeated = &set * count;
        if count >= 1 {
            prop_assert_eq!(repeated, set);
        } else {
            prop_assert!(repeated.is_empty());
        }
    }
}

// =============================================================================
// Textual Form
// Description: Debug renders the ascending, deduplicated elements
// =============================================================================

proptest! {
    #[test]
    fn prop_debug_lists_sorted_elements(items in elements()) {
        let set = SortedSet::from(items.clone());
        let mut expected = items;
        expected.sort_unstable();
        expected.dedup();

        let rendered = format!("{set:?}");
        if expected.is_empty() {
            prop_assert_eq!(rendered, "SortedSet()");
        } else {
            prop_assert_eq!(rendered, format!("SortedSet({expected:?})"));
        }
    }
}
