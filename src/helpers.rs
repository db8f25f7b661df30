//! Ready-made comparators and predicates.
//!
//! The comparators have the `(p, q, index) -> bool` shape that
//! [`Enumerable::sort`](crate::collection::Enumerable::sort) expects and
//! can be passed by name.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let sequence = Sequence::from(vec![2, 3, 1]);
//! assert_eq!(sequence.sort(ascending).unwrap(), &[1, 2, 3]);
//! assert_eq!(sequence.sort(descending).unwrap(), &[3, 2, 1]);
//!
//! let maybe = Sequence::from(vec![Some(1), None, Some(3)]);
//! assert_eq!(maybe.count(is_some), 2);
//! ```

/// Orders elements from smallest to largest.
#[inline]
pub fn ascending<T: PartialOrd>(p: &T, q: &T, _index: usize) -> bool {
    p < q
}

/// Orders elements from largest to smallest.
#[inline]
pub fn descending<T: PartialOrd>(p: &T, q: &T, _index: usize) -> bool {
    p > q
}

/// Holds for present optional elements.
#[inline]
pub const fn is_some<T>(value: &Option<T>, _index: usize) -> bool {
    value.is_some()
}
