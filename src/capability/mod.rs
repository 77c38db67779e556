//! Capability detection for callables.
//!
//! Every adaptor in this crate asks the same question before it calls
//! anything: *is this operation invocable with these argument types, and
//! what does it return?* This module answers it at compile time.
//!
//! # Overview
//!
//! - [`Invocable`]: the capability itself. An operation is invocable with an
//!   argument list `Args` (a tuple) when it implements `Invocable<Args>`; the
//!   result type is the associated [`Invocable::Output`].
//! - [`ResultOf`]: shorthand for `<Op as Invocable<Args>>::Output`.
//! - [`TypeList`]: describes an argument tuple (length and type names).
//! - [`Failure`] and [`Site`]: a structured, chainable description of why a
//!   composition is not invocable.
//! - [`Reveal`]: lets an operation describe the failure it reports for an
//!   argument list.
//! - [`Capability`]: the answer produced by [`probe!`](crate::probe).
//!
//! # Normalized calling convention
//!
//! Closures, function items and function pointers taking up to twelve
//! arguments are invocable through blanket implementations: a callable
//! `Fn(A, B) -> R` implements `Invocable<(A, B)>` with `Output = R`.
//! Function objects that accept several argument shapes (for example a
//! generic maximum) implement `Invocable` once per shape.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adaptors::capability::Invocable;
//! use lambars_adaptors::{call, probe};
//!
//! let add = |left: i32, right: i32| left + right;
//! assert_eq!(add.invoke((1, 2)), 3);
//! assert_eq!(call!(add, 1, 2), 3);
//!
//! let capability = probe!(fn(i32) -> i32, (i32,));
//! assert!(capability.is_invocable());
//! assert_eq!(capability.result_type(), Some("i32"));
//!
//! let capability = probe!(fn(i32) -> i32, (&str,));
//! assert!(!capability.is_invocable());
//! ```
//!
//! # Compile-time rejection
//!
//! Calling an operation with arguments it does not accept is a build error
//! whose message names the operation and the argument tuple:
//!
//! ```compile_fail
//! use lambars_adaptors::capability::Invocable;
//!
//! let add = |left: i32, right: i32| left + right;
//! add.invoke(("one", 2));
//! ```

mod failure;
#[doc(hidden)]
pub mod probe;

pub use failure::{Chain, Failure, Site};
pub use probe::{Capability, Outcome, Reveal};

/// An operation that can be called with the argument list `Args`.
///
/// `Args` is always a tuple: `()` for no arguments, `(A,)` for one,
/// `(A, B)` for two, and so on. The operation is called through a shared
/// reference, so an adaptor can be invoked any number of times.
///
/// # Laws
///
/// Implementations must not have observable effects beyond those of the
/// call itself: asking whether `Op: Invocable<Args>` holds, or naming
/// `Op::Output`, never evaluates anything.
///
/// # Examples
///
/// A polymorphic function object implements the trait for every argument
/// shape it supports:
///
/// ```rust
/// use lambars_adaptors::capability::Invocable;
///
/// struct Twice;
///
/// impl<T: Clone> Invocable<(T,)> for Twice {
///     type Output = (T, T);
///
///     fn invoke(&self, (value,): (T,)) -> (T, T) {
///         (value.clone(), value)
///     }
/// }
///
/// assert_eq!(Twice.invoke((1,)), (1, 1));
/// assert_eq!(Twice.invoke(("a",)), ("a", "a"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not invocable with arguments `{Args}`",
    label = "not invocable with `{Args}`",
    note = "argument lists are tuples; `{Self}` needs an `Invocable<{Args}>` implementation, or a closure taking exactly these arguments"
)]
pub trait Invocable<Args> {
    /// The result of invoking the operation with `Args`.
    type Output;

    /// Invokes the operation.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

/// The result type of invoking `Op` with `Args`.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::capability::ResultOf;
///
/// type Length = ResultOf<fn(&str) -> usize, (&'static str,)>;
/// let length: Length = 3;
/// assert_eq!(length, 3);
/// ```
pub type ResultOf<Op, Args> = <Op as Invocable<Args>>::Output;

macro_rules! impl_invocable_for_functions {
    () => {
        impl<Function, Return> Invocable<()> for Function
        where
            Function: Fn() -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, (): ()) -> Return {
                self()
            }
        }
    };
    ($head:ident $head_value:ident $(, $tail:ident $tail_value:ident)*) => {
        impl<Function, Return, $head $(, $tail)*> Invocable<($head, $($tail,)*)> for Function
        where
            Function: Fn($head $(, $tail)*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(
                &self,
                ($head_value, $($tail_value,)*): ($head, $($tail,)*),
            ) -> Return {
                self($head_value $(, $tail_value)*)
            }
        }

        impl_invocable_for_functions!($($tail $tail_value),*);
    };
}

impl_invocable_for_functions!(
    A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6,
    A7 a7, A8 a8, A9 a9, A10 a10, A11 a11, A12 a12
);

/// A statically known argument list.
///
/// Implemented for tuples of up to twelve elements. Used to describe
/// argument lists in [`Failure`] and [`Capability`] values.
pub trait TypeList {
    /// Number of arguments in the list.
    const LEN: usize;

    /// The type names of the arguments, in order.
    fn type_names() -> Vec<&'static str>;
}

impl TypeList for () {
    const LEN: usize = 0;

    fn type_names() -> Vec<&'static str> {
        Vec::new()
    }
}

macro_rules! impl_type_list {
    ($length:expr; $head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> TypeList for ($head, $($tail,)*) {
            const LEN: usize = $length;

            fn type_names() -> Vec<&'static str> {
                vec![
                    std::any::type_name::<$head>()
                    $(, std::any::type_name::<$tail>())*
                ]
            }
        }

        impl_type_list!($length - 1; $($tail),*);
    };
    ($length:expr;) => {};
}

impl_type_list!(12; A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

/// Invokes an operation with a variadic argument list.
///
/// `call!(operation, x, y)` is `Invocable::invoke(&operation, (x, y))`.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::call;
/// use lambars_adaptors::compress::compress;
/// use lambars_adaptors::operation::Max;
///
/// assert_eq!(call!(compress(Max), 2, 3, 4, 5), 5);
/// assert_eq!(call!(|| 7), 7);
/// ```
#[macro_export]
macro_rules! call {
    ($operation:expr $(, $argument:expr)* $(,)?) => {
        $crate::capability::Invocable::invoke(&$operation, ($($argument,)*))
    };
}

/// Asserts at compile time that an operation is invocable with an argument
/// list, optionally checking the result type.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::assert_invocable;
/// use lambars_adaptors::compress::Compress;
/// use lambars_adaptors::operation::Max;
///
/// assert_invocable!(Compress<Max>, (i32, i32, i32) => i32);
/// assert_invocable!(fn(u8) -> u16, (u8,));
/// ```
#[macro_export]
macro_rules! assert_invocable {
    ($operation:ty, $arguments:ty => $output:ty $(,)?) => {
        $crate::__private::static_assertions::assert_impl_all!(
            $operation: $crate::capability::Invocable<$arguments>
        );
        $crate::__private::static_assertions::assert_type_eq_all!(
            <$operation as $crate::capability::Invocable<$arguments>>::Output,
            $output
        );
    };
    ($operation:ty, $arguments:ty $(,)?) => {
        $crate::__private::static_assertions::assert_impl_all!(
            $operation: $crate::capability::Invocable<$arguments>
        );
    };
}

/// Asserts at compile time that an operation is **not** invocable with an
/// argument list.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::assert_not_invocable;
/// use lambars_adaptors::compress::Compress;
/// use lambars_adaptors::operation::Max;
///
/// assert_not_invocable!(Compress<Max>, ());
/// assert_not_invocable!(Compress<Max>, (i32, &'static str));
/// ```
#[macro_export]
macro_rules! assert_not_invocable {
    ($operation:ty, $arguments:ty $(,)?) => {
        $crate::__private::static_assertions::assert_not_impl_any!(
            $operation: $crate::capability::Invocable<$arguments>
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(left: i32, right: i32) -> i32 {
        left + right
    }

    #[test]
    fn test_zero_argument_closure_is_invocable() {
        let answer = || 42;
        assert_eq!(answer.invoke(()), 42);
    }

    #[test]
    fn test_function_item_is_invocable() {
        assert_eq!(add.invoke((2, 3)), 5);
    }

    #[test]
    fn test_twelve_argument_closure_is_invocable() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8, j: u8, k: u8, l: u8| {
            [a, b, c, d, e, f, g, h, i, j, k, l]
                .into_iter()
                .map(u32::from)
                .sum::<u32>()
        };
        assert_eq!(sum.invoke((1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1)), 12);
    }

    #[test]
    fn test_type_list_lengths() {
        assert_eq!(<() as TypeList>::LEN, 0);
        assert_eq!(<(i32,) as TypeList>::LEN, 1);
        assert_eq!(<(i32, u8, bool) as TypeList>::LEN, 3);
    }

    #[test]
    fn test_type_list_names_keep_order() {
        assert_eq!(<(i32, bool) as TypeList>::type_names(), vec!["i32", "bool"]);
        assert!(<() as TypeList>::type_names().is_empty());
    }

    #[test]
    fn test_call_macro_builds_tuples() {
        let identity = |value: i32| value;
        assert_eq!(call!(identity, 9), 9);
        assert_eq!(call!(add, 4, 5,), 9);
    }

    assert_invocable!(fn(i32, i32) -> i32, (i32, i32) => i32);
    assert_not_invocable!(fn(i32, i32) -> i32, (i32,));
    assert_not_invocable!(fn(i32, i32) -> i32, (i32, i32, i32));
}
