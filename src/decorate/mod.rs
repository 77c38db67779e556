//! Function decorators.
//!
//! A function adaptor takes a function and returns a new function. A
//! decorator takes some parameters first and then returns a function
//! adaptor. [`decorate`] builds such decorators out of a single operation
//! that receives the parameters, the decorated function and the call
//! arguments:
//!
//! ```text
//! decorate(d)(x)(g)(xs...) == d(&x, &g, xs...)
//! ```
//!
//! # Stages
//!
//! 1. [`decorate`] wraps the decorator operation in a [`Decorate`].
//! 2. [`Decorate::with_data`] binds the auxiliary data, producing a
//!    [`Decoration`]. A decoration can be applied to any number of targets.
//! 3. [`Decoration::apply`] binds a target callable, producing a
//!    [`Decorated`] callable.
//! 4. Invoking the [`Decorated`] with `(xs...)` calls the decorator
//!    operation with `(&data, &target, xs...)`, exactly once per call.
//!
//! Every stage is also [`Invocable`] with a single argument, so the stages
//! compose like any other operation.
//!
//! # Capability
//!
//! `Decorated<D, T, G>` is invocable with `(xs...)` exactly when `D` is
//! invocable with `(&T, &G, xs...)`, and returns what `D` returns. When it
//! is not, the reported failure names the decorator operation, not the
//! target, together with the data, target and argument types.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adaptors::call;
//! use lambars_adaptors::capability::Invocable;
//! use lambars_adaptors::decorate::decorate;
//!
//! #[derive(Clone)]
//! struct Logger;
//!
//! impl<G, A, B> Invocable<(&&str, &G, A, B)> for Logger
//! where
//!     G: Invocable<(A, B)>,
//! {
//!     type Output = G::Output;
//!
//!     fn invoke(&self, (message, target, a, b): (&&str, &G, A, B)) -> G::Output {
//!         println!("{message}");
//!         target.invoke((a, b))
//!     }
//! }
//!
//! let sum = |left: i32, right: i32| left + right;
//! let logged_sum = decorate(Logger).with_data("Calling sum").apply(sum);
//! assert_eq!(call!(logged_sum, 1, 2), 3);
//! ```

mod steps;
#[cfg(feature = "tracing")]
mod trace;

#[cfg(feature = "tracing")]
pub use trace::{Trace, trace};

use crate::capability::Invocable;

/// A decorator operation waiting for its auxiliary data.
///
/// Created by [`decorate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decorate<D> {
    decorator: D,
}

impl<D> Decorate<D> {
    /// Wraps a decorator operation.
    pub const fn new(decorator: D) -> Self {
        Self { decorator }
    }

    /// The decorator operation.
    pub const fn decorator(&self) -> &D {
        &self.decorator
    }

    /// Returns the decorator operation.
    pub fn into_inner(self) -> D {
        self.decorator
    }

    /// Binds the auxiliary data, copying the decorator operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adaptors::decorate::decorate;
    ///
    /// let tagged = decorate(|tag: &&str, target: &fn() -> u8| format!("{tag}: {}", target()));
    /// let decoration = tagged.with_data("answer");
    /// assert_eq!(decoration.data(), &"answer");
    /// ```
    pub fn with_data<T>(&self, data: T) -> Decoration<D, T>
    where
        D: Clone,
    {
        Decoration::new(self.decorator.clone(), data)
    }
}

impl<D, T> Invocable<(T,)> for Decorate<D>
where
    D: Clone,
{
    type Output = Decoration<D, T>;

    #[inline]
    fn invoke(&self, (data,): (T,)) -> Decoration<D, T> {
        self.with_data(data)
    }
}

/// A decorator operation together with its auxiliary data.
///
/// Applying a decoration to a target never changes the decoration: each
/// application yields an independent [`Decorated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decoration<D, T> {
    decorator: D,
    data: T,
}

impl<D, T> Decoration<D, T> {
    /// Pairs a decorator operation with its data.
    pub const fn new(decorator: D, data: T) -> Self {
        Self { decorator, data }
    }

    /// The decorator operation.
    pub const fn decorator(&self) -> &D {
        &self.decorator
    }

    /// The auxiliary data.
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the decorator operation and the data.
    pub fn into_parts(self) -> (D, T) {
        (self.decorator, self.data)
    }

    /// Decorates `target`, copying the decorator operation and the data so
    /// the decoration can be applied again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adaptors::call;
    /// use lambars_adaptors::decorate::decorate;
    ///
    /// let scaled = decorate(|factor: &i32, target: &fn(i32) -> i32, value: i32| factor * target(value));
    /// let triple = scaled.with_data(3);
    ///
    /// let increment: fn(i32) -> i32 = |value| value + 1;
    /// let square: fn(i32) -> i32 = |value| value * value;
    /// let tripled_increment = triple.apply(increment);
    /// let tripled_square = triple.apply(square);
    ///
    /// assert_eq!(call!(tripled_increment, 4), 15);
    /// assert_eq!(call!(tripled_square, 4), 48);
    /// ```
    pub fn apply<G>(&self, target: G) -> Decorated<D, T, G>
    where
        D: Clone,
        T: Clone,
    {
        Decorated::new(self.decorator.clone(), self.data.clone(), target)
    }

    /// Decorates `target`, consuming the decoration.
    pub fn into_decorated<G>(self, target: G) -> Decorated<D, T, G> {
        Decorated::new(self.decorator, self.data, target)
    }
}

impl<D, T, G> Invocable<(G,)> for Decoration<D, T>
where
    D: Clone,
    T: Clone,
{
    type Output = Decorated<D, T, G>;

    #[inline]
    fn invoke(&self, (target,): (G,)) -> Decorated<D, T, G> {
        self.apply(target)
    }
}

/// A decorated callable: decorator operation, data and target.
///
/// Invoking it with `(xs...)` invokes the decorator operation with
/// `(&data, &target, xs...)` and returns its result. Up to ten call
/// arguments are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decorated<D, T, G> {
    decorator: D,
    data: T,
    target: G,
}

impl<D, T, G> Decorated<D, T, G> {
    /// Assembles a decorated callable from its parts.
    pub const fn new(decorator: D, data: T, target: G) -> Self {
        Self {
            decorator,
            data,
            target,
        }
    }

    /// The decorator operation.
    pub const fn decorator(&self) -> &D {
        &self.decorator
    }

    /// The auxiliary data.
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// The decorated target.
    pub const fn target(&self) -> &G {
        &self.target
    }

    /// Returns the decorator operation, the data and the target.
    pub fn into_parts(self) -> (D, T, G) {
        (self.decorator, self.data, self.target)
    }
}

macro_rules! impl_decorated_invocable {
    ($($argument:ident $value:ident),*) => {
        impl<D, T, G, Return $(, $argument)*> Invocable<($($argument,)*)> for Decorated<D, T, G>
        where
            D: for<'call> Invocable<(&'call T, &'call G, $($argument,)*), Output = Return>,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, ($($value,)*): ($($argument,)*)) -> Return {
                self.decorator.invoke((&self.data, &self.target, $($value,)*))
            }
        }
    };
}

macro_rules! impl_decorated_invocable_up_to {
    () => {
        impl_decorated_invocable!();
    };
    ($head:ident $head_value:ident $(, $tail:ident $tail_value:ident)*) => {
        impl_decorated_invocable!($head $head_value $(, $tail $tail_value)*);
        impl_decorated_invocable_up_to!($($tail $tail_value),*);
    };
}

impl_decorated_invocable_up_to!(
    A1 a1, A2 a2, A3 a3, A4 a4, A5 a5,
    A6 a6, A7 a7, A8 a8, A9 a9, A10 a10
);

/// Creates a decorator from a decorator operation.
///
/// The operation is later invoked as `decorator(&data, &target, xs...)`.
/// `decorate` is a `const fn`, so decorators can live in `static`s.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::call;
/// use lambars_adaptors::decorate::{Decorate, decorate};
///
/// fn offset(amount: &i32, target: &fn(i32) -> i32, value: i32) -> i32 {
///     target(value) + amount
/// }
///
/// static OFFSET: Decorate<fn(&i32, &fn(i32) -> i32, i32) -> i32> = decorate(offset);
///
/// let double: fn(i32) -> i32 = |value| value * 2;
/// let shifted = call!(call!(OFFSET, 10), double);
/// assert_eq!(call!(shifted, 5), 20);
/// ```
pub const fn decorate<D>(decorator: D) -> Decorate<D> {
    Decorate::new(decorator)
}

static_assertions::assert_eq_size!(Decoration<crate::operation::Max, ()>, ());
static_assertions::assert_eq_size!(Decorated<crate::operation::Max, u32, crate::operation::Sum>, u32);
static_assertions::assert_not_impl_any!(Decorated<crate::operation::Max, std::cell::Cell<u8>, ()>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Failure, Site};
    use crate::{assert_invocable, assert_not_invocable, call};
    use std::any::type_name;
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Prefix;

    impl<G, A> Invocable<(&&str, &G, A)> for Prefix
    where
        G: Invocable<(A,), Output = String>,
    {
        type Output = String;

        fn invoke(&self, (prefix, target, argument): (&&str, &G, A)) -> String {
            format!("{prefix}{}", target.invoke((argument,)))
        }
    }

    type Render = fn(i32) -> String;

    #[test]
    fn test_decorated_passes_data_target_and_arguments_in_order() {
        let render: Render = |value| value.to_string();
        let decorated = decorate(Prefix).with_data("#").apply(render);
        assert_eq!(call!(decorated, 7), "#7");
    }

    #[test]
    fn test_decorator_runs_once_per_call() {
        let calls = Cell::new(0);
        let counting = |_: &(), target: &fn() -> u8| {
            calls.set(calls.get() + 1);
            target()
        };
        let nine: fn() -> u8 = || 9;
        let decorated = decorate(counting).with_data(()).apply(nine);
        assert_eq!(call!(decorated), 9);
        assert_eq!(call!(decorated), 9);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_into_decorated_moves_parts() {
        let decoration = decorate(Prefix).with_data("!");
        let render: Render = |value| value.to_string();
        let (decorator, data, _) = decoration.into_decorated(render).into_parts();
        assert_eq!(decorator, Prefix);
        assert_eq!(data, "!");
    }

    #[test]
    fn test_zero_sized_stages() {
        assert_eq!(std::mem::size_of::<Decorate<Prefix>>(), 0);
        assert_eq!(std::mem::size_of::<Decoration<Prefix, ()>>(), 0);
        assert_eq!(
            std::mem::size_of::<Decorated<Prefix, &str, Render>>(),
            std::mem::size_of::<&str>() + std::mem::size_of::<Render>()
        );
    }

    #[test]
    fn test_rejected_call_names_decorator_operation() {
        let failure = crate::probe!(Decorated<Prefix, &'static str, Render>, (bool,))
            .into_result()
            .unwrap_err();
        assert_eq!(failure.site(), Site::Decorated);
        assert_eq!(failure.arguments(), ["bool"]);
        let decorator = failure.cause().unwrap();
        assert_eq!(decorator.site(), Site::DecoratorOperation);
        assert_eq!(decorator.operation(), type_name::<Prefix>());
        assert_eq!(
            decorator.arguments(),
            [type_name::<&&str>(), type_name::<&Render>(), "bool"]
        );
        // The target rejects `bool` as well
        let root = failure.root_cause();
        assert_eq!(root.site(), Site::Operation);
        assert_eq!(root.operation(), type_name::<Render>());
    }

    #[test]
    fn test_target_accepting_the_arguments_ends_the_chain() {
        // Prefix needs a `String` result, which a `u8` target does not give
        let failure = crate::probe!(Decorated<Prefix, &'static str, fn(bool) -> u8>, (bool,))
            .into_result()
            .unwrap_err();
        let frames: Vec<Site> = failure.chain().map(Failure::site).collect();
        assert_eq!(frames, [Site::Decorated, Site::DecoratorOperation]);
    }

    assert_invocable!(Decorate<Prefix>, (&'static str,) => Decoration<Prefix, &'static str>);
    assert_invocable!(Decoration<Prefix, &'static str>, (Render,) => Decorated<Prefix, &'static str, Render>);
    assert_invocable!(Decorated<Prefix, &'static str, Render>, (i32,) => String);
    assert_not_invocable!(Decorated<Prefix, &'static str, Render>, (bool,));
    assert_not_invocable!(Decorated<Prefix, &'static str, Render>, ());
}
