//! A decorator that emits `tracing` events around each call.

use std::any::type_name;
use std::fmt::Display;

use super::{Decorate, decorate};
use crate::capability::Invocable;

/// Decorator operation that logs each call of the decorated target.
///
/// The decoration data is a label. Each call emits a `debug` event with the
/// label and the target type before invoking the target, and a `trace`
/// event after it returns. The target's result is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::call;
/// use lambars_adaptors::decorate::trace;
///
/// let traced_sum = trace().with_data("sum").apply(|left: i32, right: i32| left + right);
/// assert_eq!(call!(traced_sum, 1, 2), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trace;

/// Creates the tracing decorator.
pub const fn trace() -> Decorate<Trace> {
    decorate(Trace)
}

macro_rules! impl_trace {
    ($($argument:ident $value:ident),*) => {
        impl<Label, Target $(, $argument)*> Invocable<(&Label, &Target, $($argument,)*)> for Trace
        where
            Label: Display,
            Target: Invocable<($($argument,)*)>,
        {
            type Output = <Target as Invocable<($($argument,)*)>>::Output;

            fn invoke(
                &self,
                (label, target, $($value,)*): (&Label, &Target, $($argument,)*),
            ) -> Self::Output {
                tracing::debug!(
                    label = %label,
                    operation = type_name::<Target>(),
                    "invoking decorated operation"
                );
                let output = target.invoke(($($value,)*));
                tracing::trace!(label = %label, "decorated operation returned");
                output
            }
        }
    };
}

macro_rules! impl_trace_up_to {
    () => {
        impl_trace!();
    };
    ($head:ident $head_value:ident $(, $tail:ident $tail_value:ident)*) => {
        impl_trace!($head $head_value $(, $tail $tail_value)*);
        impl_trace_up_to!($($tail $tail_value),*);
    };
}

impl_trace_up_to!(
    A1 a1, A2 a2, A3 a3, A4 a4, A5 a5,
    A6 a6, A7 a7, A8 a8, A9 a9, A10 a10
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call;

    #[test]
    fn test_trace_returns_target_result() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let traced = trace().with_data("concat").apply(|left: String, right: &str| left + right);
            assert_eq!(call!(traced, String::from("a"), "b"), "ab");
        });
    }

    #[test]
    fn test_trace_without_arguments() {
        let answer: fn() -> u8 = || 42;
        let traced = trace().with_data(String::from("answer")).apply(answer);
        assert_eq!(call!(traced), 42);
    }
}
