//! Conversions between enumerables and hash maps.

use crate::collection::{Enumerable, Sequence, Tuple};
use std::collections::HashMap;
use std::hash::Hash;

/// Hasher used by the maps [`group`] and [`group_e`] build.
///
/// Selected at compile time: `ahash` feature, then `fxhash` feature, then
/// the standard library's `RandomState`.
#[cfg(feature = "ahash")]
pub type GroupHasher = ahash::RandomState;

/// Hasher used by the maps [`group`] and [`group_e`] build.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// Hasher used by the maps [`group`] and [`group_e`] build.
#[cfg(not(any(feature = "ahash", feature = "fxhash")))]
pub type GroupHasher = std::collections::hash_map::RandomState;

/// Map type returned by [`group`] and [`group_e`].
pub type GroupMap<K, V> = HashMap<K, V, GroupHasher>;

/// Builds a map with one entry per distinct key produced by `function`.
///
/// `function` turns each element and its index into a key/value pair.
/// When a key recurs, the later value replaces the earlier one.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let sequence = Sequence::from(vec![1, 2, 3, 2]);
/// let grouped = group(&sequence, |value, index| (*value, index));
/// assert_eq!(grouped.len(), 3);
/// assert_eq!(grouped[&2], 3);
/// ```
pub fn group<T, K, V, E, F>(source: &E, mut function: F) -> GroupMap<K, V>
where
    E: Enumerable<T>,
    K: Eq + Hash,
    F: FnMut(&T, usize) -> (K, V),
{
    let mut grouped = GroupMap::with_capacity_and_hasher(source.len(), GroupHasher::default());
    source.each(|element, index| {
        let (key, value) = function(element, index);
        grouped.insert(key, value);
    });
    grouped
}

/// Builds a map from each distinct key to every value produced for it.
///
/// Values are collected in the order their elements appear in `source`.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let pairs = Sequence::from(vec![("a", 1), ("b", 1), ("a", 2)]);
/// let grouped = group_e(&pairs, |(key, value), _| (*key, *value));
/// assert_eq!(grouped["a"].unwrap(), &[1, 2]);
/// assert_eq!(grouped["b"].unwrap(), &[1]);
/// ```
pub fn group_e<T, K, V, E, F>(source: &E, mut function: F) -> GroupMap<K, Sequence<V>>
where
    E: Enumerable<T>,
    K: Eq + Hash,
    F: FnMut(&T, usize) -> (K, V),
{
    let mut grouped: GroupMap<K, Sequence<V>> = GroupMap::default();
    source.each(|element, index| {
        let (key, value) = function(element, index);
        grouped.entry(key).or_default().push(value);
    });
    grouped
}

/// Turns key/value entries into a sequence of [`Tuple`]s.
///
/// The order follows the iteration order of `entries`, which for hash maps
/// is unspecified.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("1", 1), ("2", 2)]);
/// let tuples = map_flat(map);
/// assert_eq!(tuples.unwrap(), &[Tuple::new("1", 1), Tuple::new("2", 2)]);
/// ```
pub fn map_flat<K, V, I>(entries: I) -> Sequence<Tuple<K, V>>
where
    I: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().map(Tuple::from).collect()
}
