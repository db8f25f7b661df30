//! Free functions that build or convert enumerables.
//!
//! This module provides:
//!
//! - [`map`]: change the element type
//! - [`flat`]: concatenate nested sequences
//! - [`fill`]: build a sequence from an index function
//! - [`range`]: build a sequence of consecutive integers
//! - [`group`] / [`group_e`]: collect into a hash map
//! - [`map_flat`]: turn key/value entries into a sequence of [`Tuple`]s
//!
//! All functions are pure: they read their input and return a freshly
//! allocated result.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = range(1, 5).unwrap();
//! let labels = map(&numbers, |value, index| format!("{index}: {value}"));
//! assert_eq!(labels.at(4).map(String::as_str), Some("4: 5"));
//!
//! let nested = Sequence::from(vec![vec![1, 2], vec![], vec![3]]);
//! let flattened: Sequence<i32> = flat(&nested);
//! assert_eq!(flattened.unwrap(), &[1, 2, 3]);
//! ```

mod group;

pub use group::{GroupHasher, GroupMap, group, group_e, map_flat};

use crate::collection::{Enumerable, Sequence};
use crate::error::{EnumerableError, Result};
use num_traits::PrimInt;

#[cfg(doc)]
use crate::collection::Tuple;

/// Maps every element of `source`, in order, into a new sequence.
///
/// `function` receives the element and its index.
pub fn map<T, U, E, F>(source: &E, mut function: F) -> Sequence<U>
where
    E: Enumerable<T>,
    F: FnMut(&T, usize) -> U,
{
    source
        .unwrap()
        .iter()
        .enumerate()
        .map(|(index, value)| function(value, index))
        .collect()
}

/// [`map`] with a function that may be absent.
///
/// # Errors
///
/// Returns [`EnumerableError::InvalidArgument`] if `function` is `None`.
pub fn try_map<T, U, E, F>(source: &E, function: Option<F>) -> Result<Sequence<U>>
where
    E: Enumerable<T>,
    F: FnMut(&T, usize) -> U,
{
    let function = function.ok_or(EnumerableError::missing_callable("function"))?;
    Ok(map(source, function))
}

/// Concatenates the sub-sequences of `source`, in order.
///
/// Anything viewable as a slice can be nested: `Vec`, arrays, [`Sequence`]
/// or [`Set`](crate::collection::Set).
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let nested = Sequence::from(vec![
///     vec![1, 2, 3],
///     vec![4, 5],
///     vec![6],
///     vec![],
///     vec![7, 8, 9, 10],
/// ]);
/// let flattened: Sequence<i32> = flat(&nested);
/// assert_eq!(flattened, range(1, 10).unwrap());
/// ```
pub fn flat<T, S, E>(source: &E) -> Sequence<T>
where
    T: Clone,
    S: AsRef<[T]>,
    E: Enumerable<S>,
{
    let total = source
        .unwrap()
        .iter()
        .map(|inner| inner.as_ref().len())
        .sum();
    let mut elements = Vec::with_capacity(total);
    for inner in source.unwrap() {
        elements.extend_from_slice(inner.as_ref());
    }
    Sequence::from(elements)
}

/// Builds a sequence of `length` elements where element `i` is `function(i)`.
pub fn fill<T, F>(length: usize, function: F) -> Sequence<T>
where
    F: FnMut(usize) -> T,
{
    Sequence::generate(length, function)
}

/// Builds the `count` consecutive integers starting at `start`.
///
/// # Errors
///
/// Returns [`EnumerableError::InvalidArgument`] if the last value,
/// `start + count - 1`, does not fit in `N`.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// assert_eq!(range(3, 5).unwrap().unwrap(), &[3, 4, 5, 6, 7]);
/// assert_eq!(range(-2i8, 3).unwrap().unwrap(), &[-2, -1, 0]);
/// assert_eq!(range(-100i8, 201).unwrap().len(), 201);
/// assert!(range(250u8, 10).is_err());
/// ```
pub fn range<N: PrimInt>(start: N, count: usize) -> Result<Sequence<N>> {
    let values: Vec<N> = std::iter::successors(Some(start), |value| value.checked_add(&N::one()))
        .take(count)
        .collect();
    if values.len() < count {
        log::debug!("range of {count} values overflows the element type");
        return Err(EnumerableError::InvalidArgument {
            parameter: "count",
            reason: "range exceeds the bounds of the element type",
        });
    }
    Ok(Sequence::from(values))
}
