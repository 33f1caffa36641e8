#![cfg(feature = "serde")]

//! Integration tests for serde support in cset.

use cset::SortedSet;
use rstest::rstest;

#[rstest]
fn test_sorted_set_json_roundtrip() {
    let set = SortedSet::from([9, 4, 6]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[4,6,9]");

    let restored: SortedSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_sorted_set_deserializes_unsorted_input() {
    let restored: SortedSet<i32> = serde_json::from_str("[3, 1, 3, 2]").unwrap();
    assert_eq!(restored.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_empty_sorted_set_roundtrip() {
    let set: SortedSet<String> = SortedSet::new();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[]");

    let restored: SortedSet<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_string_sorted_set_roundtrip() {
    let set = SortedSet::from(["pear".to_string(), "fig".to_string()]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["fig","pear"]"#);

    let restored: SortedSet<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_sorted_set_rejects_non_sequence() {
    let result: Result<SortedSet<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}
