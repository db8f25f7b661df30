//! Integration tests for Set.
//!
//! These tests check that every insertion path preserves uniqueness and
//! that read-only operations behave exactly like a Sequence.

#![cfg(all(feature = "set", feature = "helpers"))]

use enumerable::prelude::*;
use rstest::rstest;

#[rstest]
fn test_set_from_duplicates_keeps_first_occurrence_order() {
    let set = Set::from(vec![1, 2, 3, 4, 1, 3, 5, 6, 2]);
    assert_eq!(set.unwrap(), &[1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_set_collect_from_iterator() {
    let set: Set<char> = "mississippi".chars().collect();
    assert_eq!(set.unwrap(), &['m', 'i', 's', 'p']);
}

#[rstest]
fn test_set_from_sequence() {
    let sequence = Sequence::from(vec!["x", "y", "x"]);
    let set = Set::from(sequence);
    assert_eq!(set.into_inner(), vec!["x", "y"]);
}

#[rstest]
fn test_set_extend_drops_duplicates() {
    let mut set = Set::from([1, 2]);
    set.extend(vec![2, 3, 3, 1, 4]);
    assert_eq!(set.unwrap(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_set_append_from_set() {
    let mut set = Set::from([1, 2, 3]);
    set.append(&Set::from([3, 4]));
    assert_eq!(set.unwrap(), &[1, 2, 3, 4]);
}

#[rstest]
#[case(1, 2, false, &[1, 2, 3])]
#[case(1, 4, true, &[1, 4, 3])]
#[case(0, 1, false, &[1, 2, 3])]
#[case(7, 9, false, &[1, 2, 3])]
fn test_set_replace(
    #[case] index: usize,
    #[case] value: i32,
    #[case] accepted: bool,
    #[case] expected: &[i32],
) {
    let mut set = Set::from([1, 2, 3]);
    assert_eq!(set.replace(index, value), accepted);
    assert_eq!(set.unwrap(), expected);
}

#[rstest]
fn test_set_queries_match_sequence() {
    let values = vec![5, 1, 4, 2, 3];
    let set = Set::from(values.clone());
    let sequence = Sequence::from(values);

    assert_eq!(set.len(), sequence.len());
    assert_eq!(set.count(|value, _| *value > 2), sequence.count(|value, _| *value > 2));
    assert_eq!(set.first(|value, _| *value < 3), sequence.first(|value, _| *value < 3));
    assert_eq!(set.aggregate(|left, right| left + right), 15);
    assert_eq!(set.sort(ascending).unwrap(), sequence.sort(ascending).unwrap());
}

#[rstest]
fn test_set_into_sequence_allows_duplicates_again() {
    let set = Set::from([1, 2]);
    let mut sequence = set.into_sequence();
    sequence.push(1);
    assert_eq!(sequence.unwrap(), &[1, 2, 1]);
}
