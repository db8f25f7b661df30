//! Ordered, mutable, duplicate-permitting container.
//!
//! This module provides [`Sequence`], the realization of [`Enumerable`]
//! backed by one contiguous `Vec`.
//!
//! # Ownership
//!
//! A `Sequence` owns its buffer. Derive operations (`filter`, `sort`,
//! `shuffle`) and the elements returned by `splice` always live in a freshly
//! allocated buffer, so mutating either side afterwards never affects the
//! other.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity         |
//! |----------------------------|--------------------|
//! | `len`, `at`, `push`, `pop` | O(1) (amortized)   |
//! | `replace`                  | O(1)               |
//! | `each`, `any`, `count`     | O(n)               |
//! | `filter`, `append`         | O(n)               |
//! | `splice`                   | O(n)               |
//! | `sort`                     | O(n log n)         |
//! | `shuffle`                  | O(n^2) moves       |
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let mut sequence = Sequence::from(vec![1, 2]);
//! sequence.push(3);
//! assert_eq!(sequence.pop(), Some(3));
//! assert_eq!(sequence.at(0), Some(&1));
//! assert_eq!(sequence.at(5), None);
//! assert!(sequence.replace(1, 20));
//! assert_eq!(sequence.unwrap(), &[1, 20]);
//! ```

use super::support::{gather, shuffled, sorted_indices};
use super::Enumerable;
use crate::error::{EnumerableError, Result};
use rand::Rng;
use std::fmt;

/// An ordered, mutable sequence of elements.
///
/// Indices always cover `[0, len)` without gaps.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let sequence: Sequence<i32> = (1..=5).collect();
/// let doubled: Vec<i32> = sequence.iter().map(|value| value * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

/// Owning iterator over a [`Sequence`].
pub type SequenceIntoIterator<T> = std::vec::IntoIter<T>;

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty sequence able to hold `capacity` elements without
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a sequence of `length` elements where element `i` is
    /// `generator(i)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let squares = Sequence::generate(4, |index| index * index);
    /// assert_eq!(squares.unwrap(), &[0, 1, 4, 9]);
    /// ```
    pub fn generate<F>(length: usize, generator: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            elements: (0..length).map(generator).collect(),
        }
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the backing store for direct mutation.
    #[inline]
    pub const fn unwrap_mut(&mut self) -> &mut Vec<T> {
        &mut self.elements
    }

    /// Consumes the sequence, returning its backing store.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> Sequence<T> {
    /// [`filter`](Enumerable::filter) with a predicate that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::InvalidArgument`] if `predicate` is `None`.
    /// No element is visited in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert!(sequence.try_filter(None::<fn(&i32, usize) -> bool>).is_err());
    /// let odd = sequence.try_filter(Some(|value: &i32, _: usize| value % 2 == 1)).unwrap();
    /// assert_eq!(odd.unwrap(), &[1, 3]);
    /// ```
    pub fn try_filter<P>(&self, predicate: Option<P>) -> Result<Self>
    where
        P: FnMut(&T, usize) -> bool,
    {
        let predicate = predicate.ok_or(EnumerableError::missing_callable("predicate"))?;
        Ok(self.filter(predicate))
    }

    /// [`sort`](Enumerable::sort) with a comparator that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::InvalidArgument`] if `less` is `None`.
    pub fn try_sort<F>(&self, less: Option<F>) -> Result<Self>
    where
        F: FnMut(&T, &T, usize) -> bool,
    {
        let less = less.ok_or(EnumerableError::missing_callable("less"))?;
        Ok(self.sort(less))
    }
}

impl<T> Enumerable<T> for Sequence<T> {
    type Derived = Self;

    #[inline]
    fn unwrap(&self) -> &[T] {
        &self.elements
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(*value, *index))
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        T: Clone,
        R: Rng + ?Sized,
    {
        Self::from(shuffled(&self.elements, rng))
    }

    fn sort<F>(&self, mut less: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T, usize) -> bool,
    {
        let order = sorted_indices(&self.elements, &mut less);
        Self::from(gather(&self.elements, &order))
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    fn append<E>(&mut self, other: &E)
    where
        T: Clone,
        E: Enumerable<T>,
    {
        self.elements.extend_from_slice(other.unwrap());
    }

    #[inline]
    fn flush(&mut self) {
        self.elements.clear();
    }

    fn splice(&mut self, index: usize, count: usize) -> Result<Self> {
        let length = self.elements.len();
        match index.checked_add(count) {
            Some(end) if end <= length => Ok(self.elements.drain(index..end).collect()),
            _ => {
                log::debug!("rejected splice of {count} elements at {index} (length {length})");
                Err(EnumerableError::OutOfRange {
                    index,
                    count,
                    length,
                })
            }
        }
    }

    fn replace(&mut self, index: usize, value: T) -> bool {
        let Some(slot) = self.elements.get_mut(index) else {
            return false;
        };
        *slot = value;
        true
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::RandomSource;
    use rstest::rstest;
    use std::collections::HashMap;

    fn one_to_ten() -> Sequence<i32> {
        (1..=10).collect()
    }

    #[rstest]
    fn test_wrap_keeps_elements() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.unwrap(), &[1, 2, 3]);
        assert_eq!(sequence.len(), 3);
        assert!(!sequence.is_empty());
    }

    #[rstest]
    fn test_each_visits_in_order() {
        let sequence = Sequence::from(vec!["1", "2", "3"]);
        let mut visited = HashMap::new();
        sequence.each(|value, index| {
            visited.insert(index, *value);
        });
        assert_eq!(visited, HashMap::from([(0, "1"), (1, "2"), (2, "3")]));
    }

    #[rstest]
    fn test_filter() {
        let sequence = one_to_ten();
        let even = sequence.filter(|value, _| value % 2 == 0);
        assert_eq!(even.unwrap(), &[2, 4, 6, 8, 10]);
        assert_eq!(sequence, one_to_ten());
    }

    #[rstest]
    fn test_filter_receives_index() {
        let sequence = Sequence::from(vec!['a', 'b', 'c', 'd']);
        let odd_positions = sequence.filter(|_, index| index % 2 == 1);
        assert_eq!(odd_positions.unwrap(), &['b', 'd']);
    }

    #[rstest]
    fn test_try_filter_rejects_absent_predicate() {
        let sequence = one_to_ten();
        let result = sequence.try_filter(None::<fn(&i32, usize) -> bool>);
        assert_eq!(result, Err(EnumerableError::missing_callable("predicate")));
    }

    #[rstest]
    fn test_try_sort_rejects_absent_comparator() {
        let sequence = one_to_ten();
        let result = sequence.try_sort(None::<fn(&i32, &i32, usize) -> bool>);
        assert_eq!(result, Err(EnumerableError::missing_callable("less")));
    }

    #[rstest]
    #[case(4, true)]
    #[case(20, false)]
    fn test_any(#[case] target: i32, #[case] expected: bool) {
        assert_eq!(one_to_ten().any(|value, _| *value == target), expected);
    }

    #[rstest]
    fn test_any_short_circuits() {
        let mut calls = 0;
        one_to_ten().any(|value, _| {
            calls += 1;
            *value == 3
        });
        assert_eq!(calls, 3);
    }

    #[rstest]
    #[case(11, true)]
    #[case(10, false)]
    fn test_all(#[case] bound: i32, #[case] expected: bool) {
        assert_eq!(one_to_ten().all(|value, _| *value < bound), expected);
    }

    #[rstest]
    #[case(0, true)]
    #[case(10, false)]
    fn test_none(#[case] bound: i32, #[case] expected: bool) {
        assert_eq!(one_to_ten().none(|value, _| *value < bound), expected);
    }

    #[rstest]
    fn test_quantifiers_on_empty() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(!empty.any(|_, _| true));
        assert!(empty.all(|_, _| false));
        assert!(empty.none(|_, _| true));
    }

    #[rstest]
    fn test_first() {
        let sequence = one_to_ten();
        assert_eq!(sequence.first(|value, _| value % 4 == 0), Some((&4, 3)));
        assert_eq!(sequence.first(|value, _| *value > 10), None);
        assert_eq!(sequence.position(|value, _| *value == 7), Some(6));
    }

    #[rstest]
    fn test_count() {
        let sequence = one_to_ten();
        assert_eq!(sequence.count(|value, _| *value < 7), 6);
        assert_eq!(
            sequence.count(|value, index| usize::try_from(*value) == Ok(index)),
            0
        );
    }

    #[rstest]
    fn test_shuffle_seeded_is_reproducible() {
        let sequence = one_to_ten();
        assert_eq!(
            sequence.shuffle(RandomSource::Seeded(1)),
            sequence.shuffle(RandomSource::Seeded(1))
        );
        assert_eq!(sequence, one_to_ten());
    }

    #[rstest]
    fn test_shuffle_keeps_elements() {
        let shuffled = one_to_ten().shuffle(RandomSource::System);
        assert_eq!(shuffled.len(), 10);
        assert_eq!(shuffled.sort(|p, q, _| p < q), one_to_ten());
    }

    #[rstest]
    fn test_shuffle_empty() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(empty.shuffle(RandomSource::System).is_empty());
    }

    #[rstest]
    fn test_sort_restores_shuffled() {
        let shuffled = one_to_ten().shuffle(RandomSource::Seeded(7));
        let sorted = shuffled.sort(|p, q, _| p < q);
        assert_eq!(sorted, one_to_ten());
    }

    #[rstest]
    fn test_sort_descending() {
        let sorted = one_to_ten().sort(|p, q, _| p > q);
        assert_eq!(sorted.unwrap(), &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[rstest]
    fn test_aggregate() {
        let sequence = one_to_ten();
        assert_eq!(sequence.aggregate(|left, right| left + right), 55);
        assert_eq!(sequence.aggregate(|left, right| left * right), 3_628_800);

        let letters = Sequence::from(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(letters.aggregate(|left, right| left + &right), "abc");
    }

    #[rstest]
    fn test_aggregate_empty_skips_function() {
        let empty: Sequence<i32> = Sequence::new();
        let mut calls = 0;
        let result = empty.aggregate(|left, right| {
            calls += 1;
            left + right
        });
        assert_eq!(result, 0);
        assert_eq!(calls, 0);
        assert_eq!(empty.reduce(|left, right| left + right), None);
    }

    #[rstest]
    fn test_push() {
        let mut sequence = Sequence::from(vec![1, 2]);
        sequence.push(3);
        assert_eq!(sequence.unwrap(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_pop() {
        let mut sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.pop(), Some(3));
        assert_eq!(sequence.unwrap(), &[1, 2]);

        let mut empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.pop(), None);
        assert!(empty.is_empty());
    }

    #[rstest]
    fn test_append() {
        let mut sequence = Sequence::from(vec![1, 2]);
        sequence.append(&Sequence::from(vec![3, 4]));
        assert_eq!(sequence.unwrap(), &[1, 2, 3, 4]);

        sequence.append(&Sequence::new());
        assert_eq!(sequence.unwrap(), &[1, 2, 3, 4]);
    }

    #[rstest]
    fn test_flush() {
        let mut sequence = Sequence::from(vec![1, 2]);
        sequence.flush();
        assert!(sequence.is_empty());
        assert_eq!(sequence.unwrap(), &[] as &[i32]);
    }

    #[rstest]
    fn test_splice() {
        let mut sequence = one_to_ten();
        let removed = sequence.splice(4, 3).unwrap();
        assert_eq!(removed.unwrap(), &[5, 6, 7]);
        assert_eq!(sequence.unwrap(), &[1, 2, 3, 4, 8, 9, 10]);
    }

    #[rstest]
    #[case(0, 0, &[])]
    #[case(10, 0, &[])]
    #[case(0, 10, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])]
    #[case(9, 1, &[10])]
    fn test_splice_edges(#[case] index: usize, #[case] count: usize, #[case] expected: &[i32]) {
        let mut sequence = one_to_ten();
        let removed = sequence.splice(index, count).unwrap();
        assert_eq!(removed.unwrap(), expected);
        assert_eq!(sequence.len(), 10 - count);
    }

    #[rstest]
    #[case(8, 3)]
    #[case(11, 0)]
    #[case(1, usize::MAX)]
    fn test_splice_out_of_range(#[case] index: usize, #[case] count: usize) {
        let mut sequence = one_to_ten();
        assert_eq!(
            sequence.splice(index, count),
            Err(EnumerableError::OutOfRange {
                index,
                count,
                length: 10,
            })
        );
        assert_eq!(sequence, one_to_ten());
    }

    #[rstest]
    fn test_splice_result_is_independent() {
        let mut sequence = one_to_ten();
        let mut removed = sequence.splice(0, 2).unwrap();
        removed.push(99);
        sequence.push(100);
        assert_eq!(removed.unwrap(), &[1, 2, 99]);
        assert_eq!(sequence.at(0), Some(&3));
    }

    #[rstest]
    #[case(3, None)]
    #[case(0, Some(&1))]
    #[case(2, Some(&3))]
    fn test_at(#[case] index: usize, #[case] expected: Option<&i32>) {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.at(index), expected);
    }

    #[rstest]
    fn test_replace() {
        let mut sequence = Sequence::from(vec![1, 2, 3]);

        assert!(!sequence.replace(3, 4));
        assert_eq!(sequence.unwrap(), &[1, 2, 3]);

        assert!(sequence.replace(1, 4));
        assert_eq!(sequence.unwrap(), &[1, 4, 3]);

        assert!(sequence.replace(2, 5));
        assert_eq!(sequence.unwrap(), &[1, 4, 5]);
    }

    #[rstest]
    fn test_generate() {
        let sequence = Sequence::generate(5, |index| index + 1);
        assert_eq!(sequence.unwrap(), &[1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_unwrap_mut_is_live() {
        let mut sequence = Sequence::from(vec![1, 2, 3]);
        sequence.unwrap_mut().retain(|value| *value != 2);
        assert_eq!(sequence.unwrap(), &[1, 3]);
    }

    #[rstest]
    fn test_display_and_debug() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(format!("{sequence}"), "[1, 2, 3]");
        assert_eq!(format!("{sequence:?}"), "[1, 2, 3]");
        assert_eq!(format!("{}", Sequence::<i32>::new()), "[]");
    }

    #[rstest]
    fn test_conversions() {
        let sequence: Sequence<i32> = [1, 2, 3].into();
        let back: Vec<i32> = sequence.clone().into();
        assert_eq!(back, vec![1, 2, 3]);
        assert_eq!(sequence.into_inner(), vec![1, 2, 3]);

        let mut extended = Sequence::from(vec![1]);
        extended.extend([2, 3]);
        assert_eq!(extended.as_ref(), &[1, 2, 3]);
    }
}
