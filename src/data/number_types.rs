//! # Number types
//!
//! All data structures and algorithms are generic over the number type used for costs and
//! quantities. The bound is deliberately small: the stepping-stone method only adds, subtracts,
//! multiplies and compares.
//!
//! Balance and loop values are compared exactly, so exact types (integers or rationals) are the
//! natural choice. Floats work as long as the input doesn't rely on rounding.
use std::fmt::{Debug, Display};

use num_traits::Num;

/// Ordered ring operations with `Self`, plus the practicalities needed to store and show values.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait OrderedRing:
    Num +
    PartialOrd +
    // Practicalities
    Clone +
    Display +
    Debug +
{
}

impl<T> OrderedRing for T
where
    T: Num + PartialOrd + Clone + Display + Debug,
{
}

/// Sum a sequence of values by reference.
pub(crate) fn sum<'a, F: OrderedRing + 'a>(values: impl IntoIterator<Item = &'a F>) -> F {
    values.into_iter().fold(F::zero(), |total, value| total + value.clone())
}

/// The smaller of two values, preferring the first one when they're equal.
pub(crate) fn min<F: OrderedRing>(left: F, right: F) -> F {
    if right < left { right } else { left }
}
