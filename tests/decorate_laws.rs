#![cfg(feature = "decorate")]
//! Property-based tests for the decorator laws.
//!
//! ## Application Law
//! - `decorate(d)(x)(g)(xs...) == d(&x, &g, xs...)`
//!
//! ## Reuse Law
//! - Applying one decoration to a target any number of times yields
//!   callables that agree with each other.
//!
//! ## Transparency Law
//! - A decorator that only forwards to its target behaves like the target.

use lambars_adaptors::call;
use lambars_adaptors::capability::Invocable;
use lambars_adaptors::decorate::decorate;
use proptest::prelude::*;

type Target = fn(i64, i64) -> i64;

fn combine(offset: &i64, target: &Target, left: i64, right: i64) -> i64 {
    target(left, right).wrapping_mul(3).wrapping_add(*offset)
}

fn forward(_: &(), target: &Target, left: i64, right: i64) -> i64 {
    target(left, right)
}

fn targets() -> impl Strategy<Value = Target> {
    prop_oneof![
        Just((|left: i64, right: i64| left.wrapping_add(right)) as Target),
        Just((|left: i64, right: i64| left.wrapping_sub(right)) as Target),
        Just((|left: i64, right: i64| left.max(right)) as Target),
    ]
}

// =============================================================================
// Application Law
// =============================================================================

proptest! {
    /// Application Law: decorate(d)(x)(g)(xs...) == d(&x, &g, xs...)
    #[test]
    fn prop_application(
        offset in any::<i64>(),
        target in targets(),
        left in any::<i64>(),
        right in any::<i64>(),
    ) {
        let decorated = decorate(combine as fn(&i64, &Target, i64, i64) -> i64)
            .with_data(offset)
            .apply(target);
        prop_assert_eq!(call!(decorated, left, right), combine(&offset, &target, left, right));
    }

    /// Application Law through the staged single-argument invocations
    #[test]
    fn prop_application_staged(
        offset in any::<i64>(),
        target in targets(),
        left in any::<i64>(),
        right in any::<i64>(),
    ) {
        let decorator = decorate(combine as fn(&i64, &Target, i64, i64) -> i64);
        let decorated = decorator.invoke((offset,)).invoke((target,));
        prop_assert_eq!(decorated.invoke((left, right)), combine(&offset, &target, left, right));
    }
}

// =============================================================================
// Reuse Law
// =============================================================================

proptest! {
    /// Applying one decoration twice yields callables that agree
    #[test]
    fn prop_reuse(
        offset in any::<i64>(),
        target in targets(),
        left in any::<i64>(),
        right in any::<i64>(),
    ) {
        let decoration = decorate(combine as fn(&i64, &Target, i64, i64) -> i64).with_data(offset);
        let first = decoration.apply(target);
        let second = decoration.apply(target);
        prop_assert_eq!(call!(first, left, right), call!(second, left, right));
        prop_assert_eq!(decoration.data(), &offset);
    }
}

// =============================================================================
// Transparency Law
// =============================================================================

proptest! {
    /// A forwarding decorator is indistinguishable from its target
    #[test]
    fn prop_forwarding_is_transparent(
        target in targets(),
        left in any::<i64>(),
        right in any::<i64>(),
    ) {
        let forwarded = decorate(forward as fn(&(), &Target, i64, i64) -> i64)
            .with_data(())
            .apply(target);
        prop_assert_eq!(call!(forwarded, left, right), target(left, right));
    }
}
