//! This module contains the tree implementations.

pub mod segment_tree;

pub use segment_tree::SegmentTree;
