//! A two-value pair used for key/value interchange.

use std::fmt;

/// Groups two values together.
///
/// Produced by [`map_flat`](crate::transform::map_flat) as the element type
/// of a flattened key/value structure.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let tuple = Tuple::new("answer", 42);
/// assert_eq!(tuple.first, "answer");
/// assert_eq!(tuple.second, 42);
/// assert_eq!(tuple.into_pair(), ("answer", 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tuple<A, B> {
    /// The first value.
    pub first: A,
    /// The second value.
    pub second: B,
}

impl<A, B> Tuple<A, B> {
    /// Creates a new tuple.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the tuple into a native pair.
    #[inline]
    pub fn into_pair(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    #[inline]
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.into_pair()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Tuple<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}
