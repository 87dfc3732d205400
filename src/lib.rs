//! A generic segment tree stored in a single flat array.
//!
//! The tree aggregates a fixed-size sequence with any associative operator,
//! supporting point updates and segment queries in `O(log N)`.
//! See [`SegmentTree`] and the [`Combine`] trait.

pub mod data;
pub mod error;
pub mod trees;

pub use data::example_data::{Concat, Extremes, Max, Min, Sum};
pub use data::{Combine, Monoid};
pub use error::{Result, SegmentTreeError};
pub use trees::*;
