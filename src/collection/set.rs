//! Uniqueness-enforcing sequence.
//!
//! This module provides [`Set`], an [`Enumerable`] that wraps a
//! [`Sequence`] and guarantees that no two elements compare equal.
//!
//! # Insertion Paths
//!
//! | Operation | On duplicate                     |
//! |-----------|----------------------------------|
//! | `push`    | value silently dropped           |
//! | `append`  | each duplicate silently dropped  |
//! | `replace` | returns `false`, no mutation     |
//!
//! Every other operation is answered by the wrapped sequence, since removing
//! or reordering elements can not introduce a duplicate.
//!
//! Membership is a linear scan, so only `PartialEq` is required of `T`.

use super::{Enumerable, Sequence, SequenceIntoIterator};
use crate::error::Result;
use rand::Rng;
use std::fmt;

/// A sequence whose elements are pairwise distinct.
///
/// Elements keep the order in which their first occurrence was inserted.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let mut set = Set::from(vec![1, 2, 3, 4, 1, 3, 5, 6, 2]);
/// assert_eq!(set.unwrap(), &[1, 2, 3, 4, 5, 6]);
///
/// set.push(2);
/// assert_eq!(set.len(), 6);
///
/// assert!(!set.replace(1, 3));
/// assert!(set.replace(1, 7));
/// assert_eq!(set.unwrap(), &[1, 7, 3, 4, 5, 6]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Set<T> {
    sequence: Sequence<T>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);

impl<T> Set<T> {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            sequence: Sequence::new(),
        }
    }

    /// Wraps a sequence already known to hold distinct elements.
    const fn from_distinct(sequence: Sequence<T>) -> Self {
        Self { sequence }
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.sequence.iter()
    }

    /// Consumes the set, returning the wrapped sequence.
    #[inline]
    pub fn into_sequence(self) -> Sequence<T> {
        self.sequence
    }

    /// Consumes the set, returning its backing store.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.sequence.into_inner()
    }
}

impl<T: PartialEq> Set<T> {
    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.sequence.any(|element, _| element == value)
    }
}

impl<T: PartialEq + Clone> Set<T> {
    /// [`filter`](Enumerable::filter) with a predicate that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::InvalidArgument`](crate::error::EnumerableError::InvalidArgument)
    /// if `predicate` is `None`.
    pub fn try_filter<P>(&self, predicate: Option<P>) -> Result<Self>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.sequence.try_filter(predicate).map(Self::from_distinct)
    }

    /// [`sort`](Enumerable::sort) with a comparator that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::InvalidArgument`](crate::error::EnumerableError::InvalidArgument)
    /// if `less` is `None`.
    pub fn try_sort<F>(&self, less: Option<F>) -> Result<Self>
    where
        F: FnMut(&T, &T, usize) -> bool,
    {
        self.sequence.try_sort(less).map(Self::from_distinct)
    }
}

impl<T: PartialEq> Enumerable<T> for Set<T> {
    type Derived = Self;

    #[inline]
    fn unwrap(&self) -> &[T] {
        self.sequence.unwrap()
    }

    fn filter<P>(&self, predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool,
    {
        Self::from_distinct(self.sequence.filter(predicate))
    }

    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        T: Clone,
        R: Rng + ?Sized,
    {
        Self::from_distinct(self.sequence.shuffle_with(rng))
    }

    fn sort<F>(&self, less: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T, usize) -> bool,
    {
        Self::from_distinct(self.sequence.sort(less))
    }

    fn push(&mut self, value: T) {
        if self.contains(&value) {
            log::trace!("set dropped a duplicate on push");
        } else {
            self.sequence.push(value);
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.sequence.pop()
    }

    fn append<E>(&mut self, other: &E)
    where
        T: Clone,
        E: Enumerable<T>,
    {
        other.each(|value, _| self.push(value.clone()));
    }

    #[inline]
    fn flush(&mut self) {
        self.sequence.flush();
    }

    fn splice(&mut self, index: usize, count: usize) -> Result<Self> {
        self.sequence.splice(index, count).map(Self::from_distinct)
    }

    fn replace(&mut self, index: usize, value: T) -> bool {
        if self.contains(&value) {
            log::trace!("set rejected a duplicate replacement at {index}");
            return false;
        }
        self.sequence.replace(index, value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialEq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq> From<Sequence<T>> for Set<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_iter().collect()
    }
}

impl<T> From<Set<T>> for Sequence<T> {
    #[inline]
    fn from(set: Set<T>) -> Self {
        set.sequence
    }
}

impl<T> AsRef<[T]> for Set<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.sequence.as_ref()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.sequence.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sequence, formatter)
    }
}
