//! The variadic fold engine.
//!
//! Argument lists are tuples, and the recursion over them is expressed as
//! one trait implementation per tuple length: a tuple `(x, xs...)` folds by
//! calling the operation once and handing the result to the implementation
//! for `(xs...)`. Each step is a trait bound, so a step the operation does
//! not accept rejects the whole fold at compile time, with a diagnostic
//! naming the state and argument types of that step.
//!
//! The state type may change at every step: the output of
//! `operation(state, x)` is the state of the next step.

use crate::capability::Invocable;

/// Left fold of an argument tuple, seeded with an explicit state.
///
/// - `().fold(op, state)` is `state`, with no call to `op`.
/// - `(x, xs...).fold(op, state)` is `(xs...).fold(op, op(state, x))`.
///
/// The operation is called exactly once per element, left to right.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::compress::Fold;
///
/// let concatenate = |state: String, next: &str| state + next;
/// assert_eq!(("b", "c").fold(&concatenate, String::from("a")), "abc");
/// assert_eq!(().fold(&concatenate, String::from("a")), "a");
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` through `{Op}` starting from state `{State}`",
    label = "`{Op}` must accept `(state, argument)` at every step",
    note = "each step calls the operation with the accumulated state and the next argument; the result becomes the next state"
)]
pub trait Fold<Op, State> {
    /// The final state.
    type Output;

    /// Folds the arguments through `operation`, starting from `state`.
    fn fold(self, operation: &Op, state: State) -> Self::Output;
}

impl<Op, State> Fold<Op, State> for () {
    type Output = State;

    #[inline]
    fn fold(self, _operation: &Op, state: State) -> State {
        state
    }
}

macro_rules! impl_fold {
    () => {};
    ($head:ident $head_value:ident $(, $tail:ident $tail_value:ident)*) => {
        impl<Op, State, $head $(, $tail)*> Fold<Op, State> for ($head, $($tail,)*)
        where
            Op: Invocable<(State, $head)>,
            ($($tail,)*): Fold<Op, <Op as Invocable<(State, $head)>>::Output>,
        {
            type Output =
                <($($tail,)*) as Fold<Op, <Op as Invocable<(State, $head)>>::Output>>::Output;

            #[inline]
            fn fold(self, operation: &Op, state: State) -> Self::Output {
                let ($head_value, $($tail_value,)*) = self;
                let next = operation.invoke((state, $head_value));
                ($($tail_value,)*).fold(operation, next)
            }
        }

        impl_fold!($($tail $tail_value),*);
    };
}

impl_fold!(
    A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6,
    A7 a7, A8 a8, A9 a9, A10 a10, A11 a11, A12 a12
);

/// Left fold of a non-empty argument tuple, seeded by its first element.
///
/// - `(x,).fold_self(op)` is `x`, with no call to `op`.
/// - `(x, y, xs...).fold_self(op)` is `(xs...).fold(op, op(x, y))`.
///
/// The operation is called exactly `n - 1` times for `n` arguments. The
/// empty tuple has no implementation: there is nothing to seed from.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::compress::SelfFold;
///
/// let larger = |left: i32, right: i32| left.max(right);
/// assert_eq!((2, 3, 4, 5).fold_self(&larger), 5);
/// assert_eq!((7,).fold_self(&larger), 7);
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` through `{Op}` seeded by its first argument",
    label = "`{Op}` must accept `(state, argument)` at every step",
    note = "a self-seeding fold needs at least one argument, and the operation must accept each accumulation step"
)]
pub trait SelfFold<Op> {
    /// The final state.
    type Output;

    /// Folds the arguments through `operation`, seeded by the first one.
    fn fold_self(self, operation: &Op) -> Self::Output;
}

impl<Op, A1> SelfFold<Op> for (A1,) {
    type Output = A1;

    #[inline]
    fn fold_self(self, _operation: &Op) -> A1 {
        self.0
    }
}

macro_rules! impl_self_fold {
    ($single:ident $single_value:ident) => {};
    (
        $first:ident $first_value:ident,
        $second:ident $second_value:ident
        $(, $rest:ident $rest_value:ident)*
    ) => {
        impl<Op, $first, $second $(, $rest)*> SelfFold<Op> for ($first, $second, $($rest,)*)
        where
            Op: Invocable<($first, $second)>,
            ($($rest,)*): Fold<Op, <Op as Invocable<($first, $second)>>::Output>,
        {
            type Output =
                <($($rest,)*) as Fold<Op, <Op as Invocable<($first, $second)>>::Output>>::Output;

            #[inline]
            fn fold_self(self, operation: &Op) -> Self::Output {
                let ($first_value, $second_value, $($rest_value,)*) = self;
                let seed = operation.invoke(($first_value, $second_value));
                ($($rest_value,)*).fold(operation, seed)
            }
        }

        impl_self_fold!($second $second_value $(, $rest $rest_value)*);
    };
}

impl_self_fold!(
    A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6,
    A7 a7, A8 a8, A9 a9, A10 a10, A11 a11, A12 a12
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_empty_fold_returns_state_without_calls() {
        let calls = RefCell::new(0);
        let count = |state: i32, next: i32| {
            *calls.borrow_mut() += 1;
            state + next
        };
        assert_eq!(().fold(&count, 10), 10);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_fold_applies_operation_once_per_argument() {
        let calls = RefCell::new(Vec::new());
        let record = |state: i32, next: i32| {
            calls.borrow_mut().push((state, next));
            state + next
        };
        assert_eq!((1, 2, 3).fold(&record, 0), 6);
        assert_eq!(*calls.borrow(), vec![(0, 1), (1, 2), (3, 3)]);
    }

    #[test]
    fn test_self_fold_single_argument_is_identity() {
        let never = |_: String, _: String| -> String { unreachable!("no step for one argument") };
        assert_eq!((String::from("only"),).fold_self(&never), "only");
    }

    #[test]
    fn test_fold_twelve_arguments() {
        let add = |state: u32, next: u32| state + next;
        assert_eq!((1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1).fold(&add, 0), 12);
        assert_eq!((1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1).fold_self(&add), 12);
    }
}
