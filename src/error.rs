//! Errors reported by [`SegmentTree`](crate::SegmentTree) operations.
//!
//! Every error is detected before the tree is touched, so a failed call
//! leaves the structure exactly as it was.

use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum SegmentTreeError {
    /// A malformed argument: an empty input sequence, or a reversed range.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// An index outside the leaves of the tree.
    #[error("index {index} is out of range for segment tree of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SegmentTreeError {
    pub fn invalid_arg(name: &'static str, message: impl Into<String>) -> Self {
        SegmentTreeError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        SegmentTreeError::IndexOutOfRange { index, len }
    }
}

pub type Result<T, E = SegmentTreeError> = std::result::Result<T, E>;
