//! Explaining a rejected fold.
//!
//! When [`probe!`](crate::probe) meets a fold adaptor that rejects its
//! arguments, the fold is replayed one step at a time: every step whose
//! `(state, argument)` pair the operation accepts yields the next state
//! type, and the first rejected pair is reported together with whatever the
//! operation itself says about it. Steps after the rejected one are never
//! looked at.

use std::any::type_name;
use std::marker::PhantomData;

use super::{Compress, SeededCompress};
use crate::capability::probe::{Done, Expand, Nested, StepFirst, StepLast, Trail};
use crate::capability::{Failure, Invocable, Site, TypeList};

/// The steps of a fold still to replay, from `State`.
#[doc(hidden)]
pub struct FoldWalk<Op, State, Rest>(PhantomData<fn(State, Rest) -> Op>);

impl<Op, State, Rest> FoldWalk<Op, State, Rest> {
    const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Op, State> StepLast for FoldWalk<Op, State, ()> {
    type Next = Done;

    fn advance(&self, _trail: &mut Trail) -> Done {
        Done
    }
}

macro_rules! impl_fold_walk {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<Op, State, $head $(, $tail)*> StepFirst for &&&FoldWalk<Op, State, ($head, $($tail,)*)>
        where
            Op: Invocable<(State, $head)>,
        {
            type Next = FoldWalk<Op, <Op as Invocable<(State, $head)>>::Output, ($($tail,)*)>;

            fn advance(&self, _trail: &mut Trail) -> Self::Next {
                FoldWalk::new()
            }
        }

        impl<Op, State, $head $(, $tail)*> StepLast for FoldWalk<Op, State, ($head, $($tail,)*)> {
            type Next = Nested<Op, (State, $head)>;

            fn advance(&self, trail: &mut Trail) -> Self::Next {
                trail.push(Failure::new(
                    Site::FoldOperation,
                    type_name::<Op>(),
                    vec![type_name::<State>(), type_name::<$head>()],
                ));
                Nested::new()
            }
        }

        impl_fold_walk!($($tail),*);
    };
}

impl_fold_walk!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

impl<F> Expand<()> for Compress<F> {
    type Next = Done;

    fn expand(trail: &mut Trail) -> Done {
        trail.push(Failure::new(Site::MissingSeed, type_name::<Self>(), Vec::new()));
        Done
    }
}

macro_rules! impl_compress_expand {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<F, $head $(, $tail)*> Expand<($head, $($tail,)*)> for Compress<F> {
            type Next = FoldWalk<F, $head, ($($tail,)*)>;

            fn expand(trail: &mut Trail) -> Self::Next {
                trail.push(Failure::new(
                    Site::Fold,
                    type_name::<Self>(),
                    <($head, $($tail,)*) as TypeList>::type_names(),
                ));
                FoldWalk::new()
            }
        }

        impl_compress_expand!($($tail),*);
    };
}

impl_compress_expand!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

/// A seeded fold whose seed has not been checked for `Clone` yet.
#[doc(hidden)]
pub struct SeedCheck<F, S, Args>(PhantomData<fn(S, Args) -> F>);

impl<F, S, Args> StepFirst for &&&SeedCheck<F, S, Args>
where
    S: Clone,
{
    type Next = FoldWalk<F, S, Args>;

    fn advance(&self, _trail: &mut Trail) -> Self::Next {
        FoldWalk::new()
    }
}

impl<F, S, Args> StepLast for SeedCheck<F, S, Args> {
    type Next = Done;

    fn advance(&self, trail: &mut Trail) -> Done {
        trail.push(Failure::new(Site::SeedNotClone, type_name::<S>(), Vec::new()));
        Done
    }
}

impl<F, S, Args: TypeList> Expand<Args> for SeededCompress<F, S> {
    type Next = SeedCheck<F, S, Args>;

    fn expand(trail: &mut Trail) -> Self::Next {
        trail.push(Failure::new(Site::Fold, type_name::<Self>(), Args::type_names()));
        SeedCheck(PhantomData)
    }
}
