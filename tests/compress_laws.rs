#![cfg(feature = "compress")]
//! Property-based tests for the fold adaptor laws.
//!
//! ## Seeded Fold Laws
//! - **Identity**: `compress_seeded(f, z)() == z`
//! - **Step**: `compress_seeded(f, z)(x, xs...) == compress_seeded(f, f(z, x))(xs...)`
//!
//! ## Self-Seeding Fold Laws
//! - **Identity**: `compress(f)(x) == x`
//! - **Step**: `compress(f)(x, y, xs...) == compress_seeded(f, f(x, y))(xs...)`
//!
//! The operation used is deliberately neither commutative nor associative,
//! so any change in evaluation order shows up as a different result.

use lambars_adaptors::call;
use lambars_adaptors::capability::Invocable;
use lambars_adaptors::compress::{compress, compress_seeded};
use proptest::prelude::*;

fn step(state: i64, next: i64) -> i64 {
    state.wrapping_mul(31).wrapping_sub(next)
}

// =============================================================================
// Seeded Fold Laws
// =============================================================================

proptest! {
    /// Identity Law: compress_seeded(f, z)() == z
    #[test]
    fn prop_seeded_identity(seed in any::<i64>()) {
        prop_assert_eq!(call!(compress_seeded(step, seed)), seed);
    }

    /// Identity Law holds for seeds that are not numbers
    #[test]
    fn prop_seeded_identity_string(seed in ".*") {
        let join = compress_seeded(|state: String, next: &str| state + next, seed.clone());
        prop_assert_eq!(call!(join), seed);
    }

    /// Step Law: compress_seeded(f, z)(x, xs...) == compress_seeded(f, f(z, x))(xs...)
    #[test]
    fn prop_seeded_step(
        seed in any::<i64>(),
        first in any::<i64>(),
        second in any::<i64>(),
        third in any::<i64>(),
    ) {
        let left = call!(compress_seeded(step, seed), first, second, third);
        let right = call!(compress_seeded(step, step(seed, first)), second, third);
        prop_assert_eq!(left, right);
    }

    /// Step Law for the last remaining argument
    #[test]
    fn prop_seeded_step_single(seed in any::<i64>(), only in any::<i64>()) {
        let left = call!(compress_seeded(step, seed), only);
        let right = call!(compress_seeded(step, step(seed, only)));
        prop_assert_eq!(left, right);
    }

    /// The seed is reused untouched across invocations
    #[test]
    fn prop_seeded_invocations_are_independent(
        seed in any::<i64>(),
        first in any::<i64>(),
        second in any::<i64>(),
    ) {
        let fold = compress_seeded(step, seed);
        let before = fold.invoke((first, second));
        let _ = fold.invoke((second, first, first));
        prop_assert_eq!(fold.invoke((first, second)), before);
    }
}

// =============================================================================
// Self-Seeding Fold Laws
// =============================================================================

proptest! {
    /// Identity Law: compress(f)(x) == x
    #[test]
    fn prop_unary_identity(value in any::<i64>()) {
        prop_assert_eq!(call!(compress(step), value), value);
    }

    /// Identity Law holds even when f could not combine two values
    #[test]
    fn prop_unary_identity_vec(values in proptest::collection::vec(any::<u8>(), 0..8)) {
        let never = |_: Vec<u8>, _: Vec<u8>| -> Vec<u8> { unreachable!("one argument needs no step") };
        prop_assert_eq!(call!(compress(never), values.clone()), values);
    }

    /// Step Law: compress(f)(x, y, xs...) == compress_seeded(f, f(x, y))(xs...)
    #[test]
    fn prop_unary_step(
        first in any::<i64>(),
        second in any::<i64>(),
        third in any::<i64>(),
        fourth in any::<i64>(),
    ) {
        let left = call!(compress(step), first, second, third, fourth);
        let right = call!(compress_seeded(step, step(first, second)), third, fourth);
        prop_assert_eq!(left, right);
    }

    /// Step Law with exactly two arguments
    #[test]
    fn prop_unary_step_pair(first in any::<i64>(), second in any::<i64>()) {
        prop_assert_eq!(call!(compress(step), first, second), step(first, second));
    }

    /// A self-seeded fold agrees with the iterator fold over the same values
    #[test]
    fn prop_unary_matches_iterator_fold(values in proptest::array::uniform6(any::<i64>())) {
        let [a, b, c, d, e, f] = values;
        let expected = values[1..].iter().fold(a, |state, next| step(state, *next));
        prop_assert_eq!(call!(compress(step), a, b, c, d, e, f), expected);
    }
}
