//! Array-backed segment trees. All nodes live in one allocation and the
//! tree structure is implicit in the indices: node `i` has children `2i` and `2i + 1`.
//!
//! See [`SegmentTree`]

use std::ops::{Bound, RangeBounds};

use crate::data::example_data::{Max, Min, Sum};
use crate::data::{Combine, Monoid};
use crate::error::{Result, SegmentTreeError};

/// A segment tree over a fixed number of leaves.
///
/// Supports replacing single values and querying the combined value of any
/// contiguous segment, both in `O(log N)`. Does not support inserting or removing
/// values, or applying actions over ranges.
///
/// The operator only has to be associative. Queries respect the order of the leaves,
/// so non-commutative operators like string concatenation give the expected results:
/// ```
/// use flat_segment_tree::{Concat, SegmentTree};
///
/// let words = ["a", "b", "c"].iter().map(|s| s.to_string());
/// let tree = SegmentTree::new(words, Concat, String::new())?;
/// assert_eq!(tree.query(0, 3)?, "abc");
/// # Ok::<(), flat_segment_tree::SegmentTreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SegmentTree<T, C> {
    /// The number of leaves
    len: usize,
    identity: T,
    combine: C,
    /// `nodes[len..]` are the leaves, `nodes[1..len]` are the aggregates,
    /// and `nodes[0]` is unused.
    nodes: Vec<T>,
}

impl<T: Clone, C: Combine<T>> SegmentTree<T, C> {
    /// Builds a tree over `elements`, using the `combine` operator with neutral element `identity`.
    ///
    /// Fails if `elements` is empty.
    /// O(N)
    pub fn new<I>(elements: I, combine: C, identity: T) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let leaves: Vec<T> = elements.into_iter().collect();
        let len = leaves.len();
        if len == 0 {
            return Err(SegmentTreeError::invalid_arg(
                "elements",
                "a segment tree needs at least one leaf",
            ));
        }

        let mut nodes = Vec::with_capacity(2 * len);
        nodes.resize(len, identity.clone());
        nodes.extend(leaves);

        for index in (1..len).rev() {
            nodes[index] = combine.combine(&nodes[2 * index], &nodes[2 * index + 1]);
        }

        log::trace!(
            "built segment tree over {} leaves with {}",
            len,
            std::any::type_name::<C>()
        );

        Ok(SegmentTree {
            len,
            identity,
            combine,
            nodes,
        })
    }

    /// Builds a tree over `elements`, taking the identity from the operator itself.
    pub fn with_monoid<I>(elements: I, op: C) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        C: Monoid<T>,
    {
        let identity = op.identity();
        Self::new(elements, op, identity)
    }

    /// Replaces the value at `index` with `value`, and recalculates
    /// every aggregate above it.
    /// O(log N)
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(SegmentTreeError::out_of_range(index, self.len));
        }

        let mut node = index + self.len;
        self.nodes[node] = value;
        node >>= 1;
        while node > 0 {
            self.recalc_at(node);
            node >>= 1;
        }
        log::trace!("updated leaf {index}");
        Ok(())
    }

    /// Calculates the combined value of the leaves in `left..right`, in order.
    ///
    /// An empty segment (`left == right`) gives the identity.
    /// Fails if `left > right`, or if the segment doesn't fit in the tree.
    /// O(log N)
    pub fn query(&self, left: usize, right: usize) -> Result<T> {
        self.check_segment(left, right)?;
        Ok(self.fold_nodes(left + self.len, right + self.len))
    }

    /// Same as [`SegmentTree::query`], but with a range:
    /// ```
    /// use flat_segment_tree::SegmentTree;
    ///
    /// let tree = SegmentTree::sum(vec![1, 2, 3, 4, 5])?;
    /// assert_eq!(tree.query_range(1..4)?, 9);
    /// assert_eq!(tree.query_range(1..=4)?, 14);
    /// assert_eq!(tree.query_range(..)?, 15);
    /// # Ok::<(), flat_segment_tree::SegmentTreeError>(())
    /// ```
    pub fn query_range<R: RangeBounds<usize>>(&self, range: R) -> Result<T> {
        let left = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start
                .checked_add(1)
                .ok_or_else(|| SegmentTreeError::out_of_range(start, self.len))?,
            Bound::Unbounded => 0,
        };
        let right = match range.end_bound() {
            Bound::Included(&end) => end
                .checked_add(1)
                .ok_or_else(|| SegmentTreeError::out_of_range(end, self.len))?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        self.query(left, right)
    }

    /// The combined value of all the leaves.
    /// O(log N)
    pub fn total(&self) -> T {
        // `nodes[1]` is not the answer when `len` isn't a power of two:
        // the leaves wrap around the tree levels, and the root sees them out of order.
        self.fold_nodes(self.len, 2 * self.len)
    }

    /// Folds the nodes in `left..right`, both given as positions in `nodes`,
    /// walking up the tree one level at a time.
    fn fold_nodes(&self, mut left: usize, mut right: usize) -> T {
        let mut acc_left = self.identity.clone();
        let mut acc_right = self.identity.clone();
        while left < right {
            // Values from the left side are appended on the right of `acc_left`,
            // and values from the right side are prepended on the left of `acc_right`.
            // The order is important for non commutative operators.
            if left & 1 == 1 {
                acc_left = self.combine.combine(&acc_left, &self.nodes[left]);
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                acc_right = self.combine.combine(&self.nodes[right], &acc_right);
            }
            left >>= 1;
            right >>= 1;
        }
        self.combine.combine(&acc_left, &acc_right)
    }

    fn recalc_at(&mut self, index: usize) {
        self.nodes[index] = self
            .combine
            .combine(&self.nodes[2 * index], &self.nodes[2 * index + 1]);
    }

    fn check_segment(&self, left: usize, right: usize) -> Result<()> {
        if left > self.len {
            return Err(SegmentTreeError::out_of_range(left, self.len));
        }
        if right > self.len {
            return Err(SegmentTreeError::out_of_range(right, self.len));
        }
        if left > right {
            return Err(SegmentTreeError::invalid_arg(
                "left",
                format!("start of segment {left} is bigger than its end {right}"),
            ));
        }
        Ok(())
    }

    /// Checks that every aggregate equals the combination of its two children.
    /// Panics otherwise.
    /// O(N)
    pub fn assert_correctness(&self)
    where
        T: PartialEq + std::fmt::Debug,
    {
        for index in 1..self.len {
            let expected = self
                .combine
                .combine(&self.nodes[2 * index], &self.nodes[2 * index + 1]);
            assert_eq!(
                self.nodes[index], expected,
                "aggregate at node {index} doesn't match its children"
            );
        }
    }
}

impl<T, C> SegmentTree<T, C> {
    /// The number of leaves. Never zero.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, since a tree can't be built without leaves.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn identity(&self) -> &T {
        &self.identity
    }

    /// The value of the leaf at `index`.
    /// O(1)
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(SegmentTreeError::out_of_range(index, self.len));
        }
        Ok(&self.nodes[self.len + index])
    }

    /// The current values of all the leaves, in order.
    pub fn leaves(&self) -> &[T] {
        &self.nodes[self.len..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.leaves().iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SegmentTree<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> SegmentTree<T, Sum>
where
    Sum: Monoid<T>,
{
    /// A tree of sums, with zero as the identity.
    ///
    /// Integer overflow panics in debug builds; use [`std::num::Wrapping`] leaves to wrap instead.
    pub fn sum<I: IntoIterator<Item = T>>(elements: I) -> Result<Self> {
        Self::with_monoid(elements, Sum)
    }
}

impl<T: Clone> SegmentTree<T, Min>
where
    Min: Monoid<T>,
{
    /// A tree of minimums, with the greatest value of `T` as the identity
    /// (positive infinity for floats).
    pub fn min<I: IntoIterator<Item = T>>(elements: I) -> Result<Self> {
        Self::with_monoid(elements, Min)
    }
}

impl<T: Clone> SegmentTree<T, Max>
where
    Max: Monoid<T>,
{
    /// A tree of maximums, with the least value of `T` as the identity
    /// (negative infinity for floats).
    pub fn max<I: IntoIterator<Item = T>>(elements: I) -> Result<Self> {
        Self::with_monoid(elements, Max)
    }
}

#[test]
fn sum_tree_scenario() {
    let mut tree = SegmentTree::sum(vec![1, 2, 3, 4, 5]).unwrap();
    assert_eq!(tree.query(1, 4), Ok(9));
    tree.update(2, 10).unwrap();
    tree.assert_correctness();
    assert_eq!(tree.leaves(), &[1, 2, 10, 4, 5]);
    assert_eq!(tree.query(0, 5), Ok(22));
    assert_eq!(tree.query(2, 3), Ok(10));
    assert_eq!(tree.total(), 22);
}

#[test]
fn concat_keeps_leaf_order() {
    let concat = |a: &String, b: &String| format!("{a}{b}");
    let words = ["a", "b", "c"].iter().map(|s| s.to_string());
    let tree = SegmentTree::new(words, concat, String::new()).unwrap();
    assert_eq!(tree.query(0, 3).unwrap(), "abc");
    assert_eq!(tree.query(1, 3).unwrap(), "bc");
    assert_eq!(tree.total(), "abc");
}

#[test]
fn single_leaf() {
    let mut tree = SegmentTree::max(vec![7i32]).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.total(), 7);
    tree.update(0, -3).unwrap();
    assert_eq!(tree.query(0, 1), Ok(-3));
    assert_eq!(tree.query(0, 0), Ok(i32::MIN));
    tree.assert_correctness();
}

#[test]
fn empty_input_is_rejected() {
    let res = SegmentTree::min(Vec::<i64>::new());
    assert!(matches!(
        res,
        Err(SegmentTreeError::InvalidArgument { name: "elements", .. })
    ));
}

#[test]
fn bad_indices_leave_tree_unchanged() {
    let mut tree = SegmentTree::sum(vec![1u64, 2, 3]).unwrap();
    assert_eq!(
        tree.update(3, 100),
        Err(SegmentTreeError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        tree.query(0, 4),
        Err(SegmentTreeError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert!(matches!(
        tree.query(2, 1),
        Err(SegmentTreeError::InvalidArgument { .. })
    ));
    assert!(tree.get(3).is_err());
    assert_eq!(tree.leaves(), &[1, 2, 3]);
    tree.assert_correctness();
}
