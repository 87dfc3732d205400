//! Ready-made operators for the common cases.

use super::*;
use num_traits::{Bounded, Zero};

/// Addition. The identity is zero.
///
/// Uses the type's own `+`, so integer overflow panics in debug builds like any other
/// Rust addition. For sums that wrap around instead, use [`std::num::Wrapping`] values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Sum;

impl<T: Zero + Clone> Combine<T> for Sum {
    fn combine(&self, left: &T, right: &T) -> T {
        left.clone() + right.clone()
    }
}

impl<T: Zero + Clone> Monoid<T> for Sum {
    fn identity(&self) -> T {
        T::zero()
    }
}

/// The values that are neutral for [`Min`] and [`Max`]: the greatest and least
/// values of the type. Floats use the infinities, since nothing else is neutral
/// for them.
pub trait Extremes {
    fn greatest() -> Self;
    fn least() -> Self;
}

macro_rules! bounded_extremes {
    ($($t:ty),*) => {$(
        impl Extremes for $t {
            fn greatest() -> Self {
                <$t as Bounded>::max_value()
            }
            fn least() -> Self {
                <$t as Bounded>::min_value()
            }
        }
    )*};
}

bounded_extremes!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_extremes {
    ($($t:ident),*) => {$(
        impl Extremes for $t {
            fn greatest() -> Self {
                $t::INFINITY
            }
            fn least() -> Self {
                $t::NEG_INFINITY
            }
        }
    )*};
}

float_extremes!(f32, f64);

/// `NaN`-like values, which aren't comparable even to themselves.
fn is_unordered<T: PartialOrd>(val: &T) -> bool {
    val.partial_cmp(val).is_none()
}

/// The minimum. On ties the left value is kept.
/// An incomparable value (like `NaN`) absorbs everything; the leftmost one wins.
/// The identity is the greatest value of the type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Min;

impl<T: PartialOrd + Clone> Combine<T> for Min {
    fn combine(&self, left: &T, right: &T) -> T {
        if !is_unordered(left) && (is_unordered(right) || right < left) {
            right.clone()
        } else {
            left.clone()
        }
    }
}

impl<T: PartialOrd + Extremes + Clone> Monoid<T> for Min {
    fn identity(&self) -> T {
        T::greatest()
    }
}

/// The maximum. On ties the left value is kept.
/// An incomparable value (like `NaN`) absorbs everything; the leftmost one wins.
/// The identity is the least value of the type, negative infinity for floats.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Max;

impl<T: PartialOrd + Clone> Combine<T> for Max {
    fn combine(&self, left: &T, right: &T) -> T {
        if !is_unordered(left) && (is_unordered(right) || right > left) {
            right.clone()
        } else {
            left.clone()
        }
    }
}

impl<T: PartialOrd + Extremes + Clone> Monoid<T> for Max {
    fn identity(&self) -> T {
        T::least()
    }
}

/// Concatenation of strings or vectors. This operator is not commutative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Concat;

impl Combine<String> for Concat {
    fn combine(&self, left: &String, right: &String) -> String {
        let mut res = String::with_capacity(left.len() + right.len());
        res.push_str(left);
        res.push_str(right);
        res
    }
}

impl Monoid<String> for Concat {
    fn identity(&self) -> String {
        String::new()
    }
}

impl<U: Clone> Combine<Vec<U>> for Concat {
    fn combine(&self, left: &Vec<U>, right: &Vec<U>) -> Vec<U> {
        let mut res = Vec::with_capacity(left.len() + right.len());
        res.extend_from_slice(left);
        res.extend_from_slice(right);
        res
    }
}

impl<U: Clone> Monoid<Vec<U>> for Concat {
    fn identity(&self) -> Vec<U> {
        Vec::new()
    }
}

#[test]
fn min_max_keep_left_on_ties() {
    assert_eq!(Min.combine(&3, &7), 3);
    assert_eq!(Min.combine(&7, &3), 3);
    assert_eq!(Max.combine(&3, &7), 7);
    assert_eq!(Max.combine(&7, &3), 7);
}

#[test]
fn nan_absorbs() {
    assert!(Min.combine(&f64::NAN, &1.0).is_nan());
    assert!(Min.combine(&1.0, &f64::NAN).is_nan());
    assert!(Max.combine(&f64::NAN, &1.0).is_nan());
    assert!(Max.combine(&1.0, &f64::NAN).is_nan());
    let bottom: f64 = Max.identity();
    assert!(Max.combine(&bottom, &f64::NAN).is_nan());
}

#[test]
fn identities_are_neutral() {
    for x in [-5i64, 0, 17, i64::MAX, i64::MIN] {
        let zero: i64 = Sum.identity();
        let top: i64 = Min.identity();
        let bottom: i64 = Max.identity();
        assert_eq!(Sum.combine(&zero, &x), x);
        assert_eq!(Min.combine(&top, &x), x);
        assert_eq!(Max.combine(&x, &bottom), x);
    }
    assert_eq!(<Max as Monoid<f64>>::identity(&Max), f64::NEG_INFINITY);
    assert_eq!(<Min as Monoid<f32>>::identity(&Min), f32::INFINITY);
    for x in [f64::NEG_INFINITY, -1.5, 0.0, f64::INFINITY] {
        let top: f64 = Min.identity();
        let bottom: f64 = Max.identity();
        assert_eq!(Min.combine(&top, &x), x);
        assert_eq!(Min.combine(&x, &top), x);
        assert_eq!(Max.combine(&bottom, &x), x);
        assert_eq!(Max.combine(&x, &bottom), x);
    }
}

#[test]
fn concat_keeps_order() {
    let ab = Concat.combine(&"a".to_string(), &"b".to_string());
    assert_eq!(ab, "ab");
    assert_eq!(Concat.combine(&vec![1, 2], &vec![3]), vec![1, 2, 3]);
    let empty: String = Concat.identity();
    assert_eq!(Concat.combine(&empty, &ab), ab);
}

#[test]
fn wrapping_sums_dont_overflow() {
    use std::num::Wrapping;
    let sum = Sum.combine(&Wrapping(i64::MAX), &Wrapping(1));
    assert_eq!(sum, Wrapping(i64::MIN));
}
