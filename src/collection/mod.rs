//! The enumerable contract and its realizations.
//!
//! This module provides:
//!
//! - [`Enumerable`]: the operation set shared by every realization
//! - [`Sequence`]: ordered, mutable, duplicate-permitting container
//! - [`Set`]: a [`Sequence`] that rejects duplicate elements
//! - [`Tuple`]: a key/value pair
//! - [`RandomSource`]: generator selection for shuffling
//!
//! # Derive vs. Mutate
//!
//! Operations split in two groups:
//!
//! - **Derive** (`filter`, `sort`, `shuffle`) return a new, independently
//!   owned value and never touch the receiver.
//! - **Mutate** (`push`, `pop`, `append`, `flush`, `splice`, `replace`)
//!   change the receiver in place.
//!
//! `splice` sits in both: it removes a range from the receiver and hands the
//! removed elements back as a fresh value.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers: Sequence<i32> = (1..=10).collect();
//!
//! // Derive: the receiver is untouched
//! let even = numbers.filter(|value, _| value % 2 == 0);
//! assert_eq!(even.unwrap(), &[2, 4, 6, 8, 10]);
//! assert_eq!(numbers.len(), 10);
//!
//! // Mutate
//! let mut numbers = numbers;
//! let removed = numbers.splice(4, 3).unwrap();
//! assert_eq!(removed.unwrap(), &[5, 6, 7]);
//! assert_eq!(numbers.unwrap(), &[1, 2, 3, 4, 8, 9, 10]);
//! ```

mod random;
mod sequence;
#[cfg(feature = "set")]
mod set;
pub(crate) mod support;
mod tuple;

pub use random::RandomSource;
pub use sequence::Sequence;
pub use sequence::SequenceIntoIterator;
#[cfg(feature = "set")]
pub use set::Set;
pub use tuple::Tuple;

use crate::error::Result;
use rand::Rng;

/// Query and mutation operations over an owned, ordered collection.
///
/// Callables receive each element by reference together with its index.
/// They are plain generic parameters and can therefore never be absent.
///
/// # Required Methods
///
/// - `unwrap`: view of the backing store
/// - `filter`, `shuffle_with`, `sort`: derive operations
/// - `push`, `pop`, `append`, `flush`, `splice`, `replace`: mutations
///
/// # Provided Methods
///
/// Every query (`len`, `each`, `any`, `all`, `none`, `first`, `count`,
/// `reduce`, `aggregate`, `at`, ...) is answered from `unwrap`.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// fn total<E: Enumerable<i32>>(values: &E) -> i32 {
///     values.aggregate(|left, right| left + right)
/// }
///
/// let sequence: Sequence<i32> = (1..=10).collect();
/// assert_eq!(total(&sequence), 55);
///
/// let set = Set::from(vec![1, 1, 2, 2, 3]);
/// assert_eq!(total(&set), 6);
/// ```
pub trait Enumerable<T> {
    /// The type returned by derive operations and `splice`.
    type Derived: Enumerable<T>;

    /// Returns the live backing store.
    fn unwrap(&self) -> &[T];

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.unwrap().len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `function` with every element and its index, in order.
    fn each<F>(&self, mut function: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, value) in self.unwrap().iter().enumerate() {
            function(value, index);
        }
    }

    /// Returns a new collection holding, in order, the elements for which
    /// `predicate` returns `true`.
    fn filter<P>(&self, predicate: P) -> Self::Derived
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool;

    /// Returns `true` if `predicate` holds for at least one element.
    ///
    /// Stops at the first match.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.unwrap()
            .iter()
            .enumerate()
            .any(|(index, value)| predicate(value, index))
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// An empty collection satisfies any predicate.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        !self.any(|value, index| !predicate(value, index))
    }

    /// Returns `true` if `predicate` holds for no element.
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        !self.any(predicate)
    }

    /// Returns the first element satisfying `predicate` along with its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let sequence = Sequence::from(vec!["a", "bb", "cc"]);
    /// assert_eq!(sequence.first(|value, _| value.len() == 2), Some((&"bb", 1)));
    /// assert_eq!(sequence.first(|value, _| value.is_empty()), None);
    /// ```
    fn first<P>(&self, mut predicate: P) -> Option<(&T, usize)>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.unwrap()
            .iter()
            .enumerate()
            .find(|(index, value)| predicate(*value, *index))
            .map(|(index, value)| (value, index))
    }

    /// Returns the index of the first element satisfying `predicate`.
    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.first(predicate).map(|(_, index)| index)
    }

    /// Returns the number of elements satisfying `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.unwrap()
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(*value, *index))
            .count()
    }

    /// Returns a new collection with the elements in a uniformly random order.
    ///
    /// The generator is built from `source` for this call only.
    fn shuffle(&self, source: RandomSource) -> Self::Derived
    where
        T: Clone,
    {
        self.shuffle_with(&mut source.into_rng())
    }

    /// Like [`shuffle`](Self::shuffle), drawing from a caller-owned generator.
    fn shuffle_with<R>(&self, rng: &mut R) -> Self::Derived
    where
        T: Clone,
        R: Rng + ?Sized;

    /// Returns a new collection stably sorted by `less`.
    ///
    /// `less(p, q, i)` reports whether `p` must come before `q`; `i` is the
    /// current position of `p` in the buffer being sorted, which changes as
    /// the sort progresses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![3, 1, 2]);
    /// let sorted = sequence.sort(|p, q, _| p < q);
    /// assert_eq!(sorted.unwrap(), &[1, 2, 3]);
    /// assert_eq!(sequence.unwrap(), &[3, 1, 2]);
    /// ```
    fn sort<F>(&self, less: F) -> Self::Derived
    where
        T: Clone,
        F: FnMut(&T, &T, usize) -> bool;

    /// Folds the elements from the left, starting from the first element.
    ///
    /// Returns `None` for an empty collection without calling `function`.
    fn reduce<F>(&self, mut function: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        let (head, tail) = self.unwrap().split_first()?;
        Some(
            tail.iter()
                .fold(head.clone(), |accumulator, value| function(accumulator, value.clone())),
        )
    }

    /// Folds the elements from the left, starting from the first element.
    ///
    /// An empty collection yields `T::default()` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let words = Sequence::from(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(words.aggregate(|left, right| left + &right), "ab");
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(empty.aggregate(|_, _| unreachable!()), 0);
    /// ```
    fn aggregate<F>(&self, function: F) -> T
    where
        T: Clone + Default,
        F: FnMut(T, T) -> T,
    {
        self.reduce(function).unwrap_or_default()
    }

    /// Appends `value` at the end.
    fn push(&mut self, value: T);

    /// Removes and returns the last element, or `None` if empty.
    fn pop(&mut self) -> Option<T>;

    /// Appends every element of `other`, in order.
    fn append<E>(&mut self, other: &E)
    where
        T: Clone,
        E: Enumerable<T>;

    /// Removes all elements.
    fn flush(&mut self);

    /// Removes `count` elements starting at `index` and returns them.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::OutOfRange`](crate::error::EnumerableError::OutOfRange)
    /// when `index + count` exceeds the length. The receiver is then left
    /// unchanged.
    fn splice(&mut self, index: usize, count: usize) -> Result<Self::Derived>;

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        self.unwrap().get(index)
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// Returns `false`, leaving the receiver unchanged, if the write is
    /// rejected.
    fn replace(&mut self, index: usize, value: T) -> bool;
}
