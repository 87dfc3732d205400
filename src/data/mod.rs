pub mod example_data;

/// The operator that aggregates the values stored inside the tree.
///
/// The operator must be associative: `combine(combine(a, b), c) == combine(a, combine(b, c))`.
/// It does not need to be commutative. The tree always combines values in the order
/// they appear in the sequence, the left operand coming first.
///
/// The operator should also be pure: deterministic on equal inputs, and without
/// observable side effects. The tree can't check any of this, so an operator that
/// breaks these rules gives meaningless results instead of an error.
///
/// Any closure of the form `Fn(&T, &T) -> T` is an operator:
/// ```
/// use flat_segment_tree::Combine;
///
/// let concat = |a: &String, b: &String| format!("{a}{b}");
/// assert_eq!(concat.combine(&"ab".to_string(), &"c".to_string()), "abc");
/// ```
pub trait Combine<T> {
    fn combine(&self, left: &T, right: &T) -> T;
}

impl<T, F> Combine<T> for F
where
    F: Fn(&T, &T) -> T,
{
    fn combine(&self, left: &T, right: &T) -> T {
        self(left, right)
    }
}

/// An operator that also knows its own identity element,
/// i.e., a value `e` such that `combine(e, x) == combine(x, e) == x`.
///
/// Trees over a monoid can be built without restating the identity,
/// see [`SegmentTree::with_monoid`](crate::SegmentTree::with_monoid).
pub trait Monoid<T>: Combine<T> {
    fn identity(&self) -> T;
}
