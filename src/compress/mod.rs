//! Variadic fold adaptors.
//!
//! `compress` turns a binary operation into an operation over any number of
//! arguments by folding them left to right. The operation receives the
//! accumulated state first and the next argument second.
//!
//! # Overview
//!
//! - [`compress`]: self-seeding fold; the first argument is the initial
//!   state.
//! - [`compress_seeded`]: fold with an explicit initial state.
//! - [`compress!`](crate::compress!): either of the above through one name.
//! - [`Fold`] and [`SelfFold`]: the fold engine, usable on argument tuples
//!   directly.
//!
//! # Laws
//!
//! For any operation `f`, seed `z` and arguments `x, y, xs...`:
//!
//! ```text
//! compress_seeded(f, z)()            == z
//! compress_seeded(f, z)(x, xs...)    == compress_seeded(f, f(z, x))(xs...)
//! compress(f)(x)                     == x
//! compress(f)(x, y, xs...)           == compress_seeded(f, f(x, y))(xs...)
//! ```
//!
//! The operation is called exactly `n` times for `n` seeded arguments and
//! `n - 1` times for `n` self-seeded arguments, left to right.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adaptors::call;
//! use lambars_adaptors::compress::{compress, compress_seeded};
//! use lambars_adaptors::operation::{Max, Sum};
//!
//! assert_eq!(call!(compress(Max), 2, 3, 4, 5), 5);
//! assert_eq!(call!(compress_seeded(Sum, 0), 1, 2, 3), 6);
//! assert_eq!(call!(compress_seeded(Sum, 0)), 0);
//! ```
//!
//! The state type can change from one step to the next:
//!
//! ```rust
//! use lambars_adaptors::call;
//! use lambars_adaptors::capability::Invocable;
//! use lambars_adaptors::compress::compress_seeded;
//!
//! struct Push;
//!
//! impl<T> Invocable<((), T)> for Push {
//!     type Output = Vec<T>;
//!
//!     fn invoke(&self, ((), value): ((), T)) -> Vec<T> {
//!         vec![value]
//!     }
//! }
//!
//! impl<T> Invocable<(Vec<T>, T)> for Push {
//!     type Output = Vec<T>;
//!
//!     fn invoke(&self, (mut values, value): (Vec<T>, T)) -> Vec<T> {
//!         values.push(value);
//!         values
//!     }
//! }
//!
//! assert_eq!(call!(compress_seeded(Push, ()), 1, 2, 3), vec![1, 2, 3]);
//! ```

mod fold;
mod steps;

pub use fold::{Fold, SelfFold};

use crate::capability::Invocable;

/// A self-seeding fold over a binary operation.
///
/// Created by [`compress`]. Invoking it with `(x,)` returns `x` without
/// calling the operation; invoking it with `(x, y, xs...)` folds `xs...`
/// starting from `operation(x, y)`. It is not invocable with `()`.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::capability::Invocable;
/// use lambars_adaptors::compress::compress;
///
/// let longest = compress(|left: &'static str, right: &'static str| {
///     if right.len() > left.len() { right } else { left }
/// });
/// assert_eq!(longest.invoke(("a", "abc", "ab")), "abc");
/// assert_eq!(longest.invoke(("solo",)), "solo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Compress<F> {
    operation: F,
}

impl<F> Compress<F> {
    /// Wraps a binary operation.
    pub const fn new(operation: F) -> Self {
        Self { operation }
    }

    /// The wrapped operation.
    pub const fn operation(&self) -> &F {
        &self.operation
    }

    /// Returns the wrapped operation.
    pub fn into_inner(self) -> F {
        self.operation
    }

    /// Turns this fold into one seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adaptors::call;
    /// use lambars_adaptors::compress::compress;
    /// use lambars_adaptors::operation::Product;
    ///
    /// let product = compress(Product).seeded(1);
    /// assert_eq!(call!(product), 1);
    /// assert_eq!(call!(product, 2, 3, 4), 24);
    /// ```
    pub fn seeded<S>(self, seed: S) -> SeededCompress<F, S> {
        SeededCompress::new(self.operation, seed)
    }
}

impl<F, Args> Invocable<Args> for Compress<F>
where
    Args: SelfFold<F>,
{
    type Output = Args::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        arguments.fold_self(&self.operation)
    }
}

/// A fold over a binary operation with an explicit initial state.
///
/// Created by [`compress_seeded`]. Invoking it with `()` returns a copy of
/// the seed without calling the operation; invoking it with `(x, xs...)`
/// folds `xs...` starting from `operation(seed, x)`. The seed is cloned for
/// every invocation, so the adaptor can be called any number of times.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::capability::Invocable;
/// use lambars_adaptors::compress::compress_seeded;
///
/// let join = compress_seeded(|state: String, next: &str| state + next, String::from(">"));
/// assert_eq!(join.invoke(("a", "b")), ">ab");
/// assert_eq!(join.invoke(()), ">");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeededCompress<F, S> {
    operation: F,
    seed: S,
}

impl<F, S> SeededCompress<F, S> {
    /// Wraps a binary operation and its initial state.
    pub const fn new(operation: F, seed: S) -> Self {
        Self { operation, seed }
    }

    /// The wrapped operation.
    pub const fn operation(&self) -> &F {
        &self.operation
    }

    /// The initial state.
    pub const fn seed(&self) -> &S {
        &self.seed
    }

    /// Returns the operation and the initial state.
    pub fn into_parts(self) -> (F, S) {
        (self.operation, self.seed)
    }
}

impl<F, S, Args> Invocable<Args> for SeededCompress<F, S>
where
    S: Clone,
    Args: Fold<F, S>,
{
    type Output = Args::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        arguments.fold(&self.operation, self.seed.clone())
    }
}

/// Creates a self-seeding fold over `operation`.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::call;
/// use lambars_adaptors::compress::compress;
/// use lambars_adaptors::operation::Max;
///
/// static MAXIMUM: lambars_adaptors::compress::Compress<Max> = compress(Max);
///
/// assert_eq!(call!(MAXIMUM, 2, 3, 4, 5), 5);
/// assert_eq!(call!(MAXIMUM, 'x'), 'x');
/// ```
pub const fn compress<F>(operation: F) -> Compress<F> {
    Compress::new(operation)
}

/// Creates a fold over `operation` starting from `seed`.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::call;
/// use lambars_adaptors::compress::compress_seeded;
///
/// let count = compress_seeded(|total: usize, _: &str| total + 1, 0);
/// assert_eq!(call!(count, "a", "b", "c"), 3);
/// ```
pub const fn compress_seeded<F, S>(operation: F, seed: S) -> SeededCompress<F, S> {
    SeededCompress::new(operation, seed)
}

/// Builds a fold adaptor, with or without an explicit seed.
///
/// - `compress!(f)` is [`compress(f)`](compress()).
/// - `compress!(f, z)` is [`compress_seeded(f, z)`](compress_seeded).
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::{call, compress};
/// use lambars_adaptors::operation::{Max, Sum};
///
/// assert_eq!(call!(compress!(Max), 2, 3, 4, 5), 5);
/// assert_eq!(call!(compress!(Sum, 10), 1, 2), 13);
/// ```
#[macro_export]
macro_rules! compress {
    ($operation:expr $(,)?) => {
        $crate::compress::compress($operation)
    };
    ($operation:expr, $seed:expr $(,)?) => {
        $crate::compress::compress_seeded($operation, $seed)
    };
}

// Adaptors add no storage of their own and inherit Send/Sync from their members
static_assertions::assert_eq_size!(Compress<crate::operation::Max>, ());
static_assertions::assert_eq_size!(SeededCompress<crate::operation::Sum, u64>, u64);
static_assertions::assert_impl_all!(SeededCompress<crate::operation::Sum, String>: Send, Sync);
static_assertions::assert_not_impl_any!(SeededCompress<crate::operation::Sum, std::rc::Rc<u8>>: Send, Sync);
