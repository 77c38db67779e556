//! Ready-made binary operations.
//!
//! Unit structs implementing [`Invocable`] for every pair of argument types
//! the underlying operator supports, so they can be folded over arguments
//! of any type without writing a closure per type.
//!
//! - [`Max`]: the larger of two values (the second one on ties)
//! - [`Min`]: the smaller of two values (the first one on ties)
//! - [`Sum`]: `left + right`
//! - [`Product`]: `left * right`
//!
//! # Examples
//!
//! ```rust
//! use lambars_adaptors::call;
//! use lambars_adaptors::compress::compress;
//! use lambars_adaptors::operation::{Max, Min, Product, Sum};
//!
//! assert_eq!(call!(compress(Max), 2, 3, 4, 5), 5);
//! assert_eq!(call!(compress(Min), 2.5, 0.5, 1.5), 0.5);
//! assert_eq!(call!(compress(Sum), 1, 2, 3), 6);
//! assert_eq!(call!(compress(Product), 2, 3, 4), 24);
//! ```

use std::ops::{Add, Mul};

use crate::capability::Invocable;

/// Returns the larger of two values.
///
/// `Max.invoke((x, y))` is `x` if `x > y`, otherwise `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max;

impl<T: PartialOrd> Invocable<(T, T)> for Max {
    type Output = T;

    #[inline]
    fn invoke(&self, (left, right): (T, T)) -> T {
        if left > right { left } else { right }
    }
}

/// Returns the smaller of two values.
///
/// `Min.invoke((x, y))` is `y` if `y < x`, otherwise `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min;

impl<T: PartialOrd> Invocable<(T, T)> for Min {
    type Output = T;

    #[inline]
    fn invoke(&self, (left, right): (T, T)) -> T {
        if right < left { right } else { left }
    }
}

/// Adds two values.
///
/// The operand types may differ; the result is whatever `Add` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum;

impl<L, R> Invocable<(L, R)> for Sum
where
    L: Add<R>,
{
    type Output = L::Output;

    #[inline]
    fn invoke(&self, (left, right): (L, R)) -> L::Output {
        left + right
    }
}

/// Multiplies two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product;

impl<L, R> Invocable<(L, R)> for Product
where
    L: Mul<R>,
{
    type Output = L::Output;

    #[inline]
    fn invoke(&self, (left, right): (L, R)) -> L::Output {
        left * right
    }
}
