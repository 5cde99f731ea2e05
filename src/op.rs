//! Combine operations for range query trees.
//!
//! A tree is parameterized by a [`Combine`] implementation, which names the
//! value type stored in every slot, the associative operation used to merge
//! two sub-range aggregates, and the identity element returned for empty
//! sub-ranges.
//!
//! Ready-made operations:
//! - [`Sum`]: addition, identity `T::default()`
//! - [`Min`] and [`Max`]: identity is the bound of the type
//! - [`Agg`]: any value type implementing [`Aggregate`]

use std::marker::PhantomData;
use std::ops::Add;

/// An associative binary operation with a two-sided identity.
pub trait Combine {
    /// The value stored in every slot of the tree.
    type Value: Clone;

    /// Require for all a: combine(a, identity()) = combine(identity(), a) = a
    fn identity() -> Self::Value;

    /// Require for all a,b,c: combine(a, combine(b, c)) = combine(combine(a, b), c)
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// Addition. The default operation of a tree.
///
/// Uses `T`'s own `+`. For primitive integers an overflowing sum panics in
/// debug builds and wraps in release builds. Store a wider type, or use
/// `std::num::Wrapping` to wrap in every profile, when totals can exceed
/// the range of `T`.
pub struct Sum<T>(PhantomData<T>);

impl<T> Combine for Sum<T>
where
    T: Clone + Default + Add<Output = T>,
{
    type Value = T;

    fn identity() -> T {
        return T::default();
    }

    fn combine(a: &T, b: &T) -> T {
        return a.clone() + b.clone();
    }
}

/// Types with a least and a greatest value.
pub trait Bounded {
    fn least() -> Self;
    fn greatest() -> Self;
}

macro_rules! bounded_int {
    ($($t:ty),*) => {
        $(impl Bounded for $t {
            fn least() -> Self { <$t>::MIN }
            fn greatest() -> Self { <$t>::MAX }
        })*
    };
}

macro_rules! bounded_float {
    ($($t:ty),*) => {
        $(impl Bounded for $t {
            fn least() -> Self { <$t>::NEG_INFINITY }
            fn greatest() -> Self { <$t>::INFINITY }
        })*
    };
}

bounded_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
bounded_float!(f32, f64);

/// Minimum. Empty ranges yield the greatest value of `T`.
pub struct Min<T>(PhantomData<T>);

impl<T> Combine for Min<T>
where
    T: Clone + PartialOrd + Bounded,
{
    type Value = T;

    fn identity() -> T {
        return T::greatest();
    }

    fn combine(a: &T, b: &T) -> T {
        if b < a {
            return b.clone();
        }
        return a.clone();
    }
}

/// Maximum. Empty ranges yield the least value of `T`.
pub struct Max<T>(PhantomData<T>);

impl<T> Combine for Max<T>
where
    T: Clone + PartialOrd + Bounded,
{
    type Value = T;

    fn identity() -> T {
        return T::least();
    }

    fn combine(a: &T, b: &T) -> T {
        if b > a {
            return b.clone();
        }
        return a.clone();
    }
}

/// A trait for values that know how to merge themselves.
///
/// `Default` must produce the identity of `combine`.
pub trait Aggregate: Clone + Default {
    /// Combine two aggregates.
    fn combine(&self, other: &Self) -> Self;
}

/// Adapts an [`Aggregate`] type into a [`Combine`] operation.
pub struct Agg<A>(PhantomData<A>);

impl<A: Aggregate> Combine for Agg<A> {
    type Value = A;

    fn identity() -> A {
        return A::default();
    }

    fn combine(a: &A, b: &A) -> A {
        return a.combine(b);
    }
}

/// Number of items and their summed weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountWeight {
    pub count: usize,
    pub weight: u64,
}

impl CountWeight {
    /// A single item of the given weight.
    pub fn item(weight: u64) -> Self {
        return CountWeight { count: 1, weight };
    }
}

impl Aggregate for CountWeight {
    fn combine(&self, other: &Self) -> Self {
        return CountWeight {
            count: self.count + other.count,
            weight: self.weight + other.weight,
        };
    }
}
