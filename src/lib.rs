//! # enumerable
//!
//! Chainable query and mutation operations over owned, in-memory sequences.
//!
//! ## Overview
//!
//! The crate gives LINQ-style ergonomics without hiding the underlying
//! buffer:
//!
//! - **Enumerable contract**: one trait with filtering, sorting, shuffling,
//!   aggregation, membership tests, slicing and in-place mutation
//! - **Sequence**: ordered, duplicate-permitting realization over a `Vec`
//! - **Set**: a sequence that rejects duplicates on every insertion path
//! - **Transforms**: `map`, `flat`, `fill`, `range`, `group`, `group_e`,
//!   `map_flat`
//! - **Helpers**: comparators and predicates to pass by name
//!
//! Derive operations (`filter`, `sort`, `shuffle`) return a new value and
//! leave the receiver untouched; operations named after an effect (`push`,
//! `pop`, `append`, `flush`, `splice`, `replace`) mutate it.
//!
//! ## Feature Flags
//!
//! - `sequence`: `Enumerable`, `Sequence`, `Tuple`, `RandomSource`
//! - `set`: `Set`
//! - `transform`: free transform functions
//! - `helpers`: comparators and predicates
//! - `ahash` / `fxhash`: hasher used by `group` and `group_e`
//! - `full`: enable all of the above except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = range(1, 10).unwrap();
//! let even_total = numbers
//!     .filter(|value, _| value % 2 == 0)
//!     .sort(descending)
//!     .aggregate(|left, right| left + right);
//! assert_eq!(even_total, 30);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use enumerable::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::collection::*;

    #[cfg(feature = "sequence")]
    pub use crate::error::EnumerableError;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "helpers")]
    pub use crate::helpers::*;
}

#[cfg(feature = "sequence")]
pub mod error;

#[cfg(feature = "sequence")]
pub mod collection;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "helpers")]
pub mod helpers;
