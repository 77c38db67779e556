//! Explaining a rejected decorated call.
//!
//! A decorated callable rejects `xs...` when its decorator operation rejects
//! `(&data, &target, xs...)`. [`probe!`](crate::probe) reports that call,
//! then checks the target with `xs...`: a target that rejects them too is
//! reported as the cause, so a forwarding decorator over a fold names the
//! fold step that failed.

use std::any::type_name;
use std::marker::PhantomData;

use super::Decorated;
use crate::capability::probe::{Done, Expand, StepFirst, StepLast, Target, Trail};
use crate::capability::{Failure, Invocable, Site, TypeList};

/// A decorated call whose decorator operation is checked next.
#[doc(hidden)]
pub struct DecoratorWalk<D, T, G, Args>(PhantomData<fn(T, G, Args) -> D>);

macro_rules! impl_decorator_walk {
    ($($argument:ident),*) => {
        impl<D, T, G $(, $argument)*> StepFirst for &&&DecoratorWalk<D, T, G, ($($argument,)*)>
        where
            D: for<'call> Invocable<(&'call T, &'call G, $($argument,)*)>,
        {
            type Next = Done;

            fn advance(&self, _trail: &mut Trail) -> Done {
                Done
            }
        }
    };
}

macro_rules! impl_decorator_walk_up_to {
    () => {
        impl_decorator_walk!();
    };
    ($head:ident $(, $tail:ident)*) => {
        impl_decorator_walk!($head $(, $tail)*);
        impl_decorator_walk_up_to!($($tail),*);
    };
}

impl_decorator_walk_up_to!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);

impl<D, T, G, Args: TypeList> StepLast for DecoratorWalk<D, T, G, Args> {
    type Next = Target<G, Args>;

    fn advance(&self, trail: &mut Trail) -> Self::Next {
        let mut operands = vec![type_name::<&T>(), type_name::<&G>()];
        operands.extend(Args::type_names());
        trail.push(Failure::new(Site::DecoratorOperation, type_name::<D>(), operands));
        Target::new()
    }
}

impl<D, T, G, Args: TypeList> Expand<Args> for Decorated<D, T, G> {
    type Next = DecoratorWalk<D, T, G, Args>;

    fn expand(trail: &mut Trail) -> Self::Next {
        trail.push(Failure::new(Site::Decorated, type_name::<Self>(), Args::type_names()));
        DecoratorWalk(PhantomData)
    }
}
