//! Non-failing capability queries.
//!
//! [`probe!`](crate::probe) answers "is `Op` invocable with `Args`?" for
//! concrete types without turning a negative answer into a build error.
//! Nothing is ever invoked; the answer is computed from types alone.
//!
//! # How a query is answered
//!
//! The macro expands into a fixed sequence of steps. Each step is a method
//! call on a zero-sized state value whose type encodes what is left to
//! check; the method resolves through four candidate traits, most specific
//! first, and returns the next state:
//!
//! 1. [`StepFirst`]: the call is accepted (`Op: Invocable<Args>`).
//! 2. [`StepSecond`]: `Op` is an adaptor of this crate, which pushes its own
//!    frame and hands over to the next layer ([`Expand`]).
//! 3. [`StepThird`]: `Op` describes its own failure ([`Reveal`]).
//! 4. [`StepLast`]: anything else; a single [`Site::Operation`] frame.
//!
//! Adaptor layers are walked one at a time: a fold checks its steps left to
//! right and stops at the first pair its operation rejects, a decorated
//! callable checks its decorator operation and then its target. The frames
//! pushed on the way form the [`Failure`] chain, outermost first, so the
//! root cause is always the innermost call that was rejected.

use std::any::type_name;
use std::marker::PhantomData;

use super::failure::{Failure, Site};
use super::{Invocable, TypeList};

/// Describes the failure an operation reports when it is not invocable
/// with `Args`.
///
/// Implement it for your own operation types to replace the plain
/// [`Site::Operation`] frame [`probe!`](crate::probe) reports for them. The
/// adaptors of this crate need no `Reveal` implementation: their failures
/// are traced layer by layer down to the rejected inner call.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::probe;
/// use lambars_adaptors::capability::{Failure, Reveal, Site};
///
/// struct Parser;
///
/// impl Reveal<(u8,)> for Parser {
///     fn reveal() -> Failure {
///         Failure::new(Site::Operation, "Parser", vec!["u8"])
///             .caused_by(Failure::new(Site::Operation, "from_utf8", vec!["u8"]))
///     }
/// }
///
/// let failure = probe!(Parser, (u8,)).into_result().unwrap_err();
/// assert_eq!(failure.root_cause().operation(), "from_utf8");
/// ```
pub trait Reveal<Args> {
    /// The failure reported for `Args`.
    fn reveal() -> Failure;
}

/// Whether a queried invocation is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The operation accepts the arguments.
    Invocable {
        /// Type name of the result.
        result: &'static str,
    },
    /// The operation rejects the arguments.
    NotInvocable(Failure),
}

/// The answer to a capability query.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::probe;
/// use lambars_adaptors::capability::Site;
/// use lambars_adaptors::compress::Compress;
/// use lambars_adaptors::operation::Max;
///
/// let capability = probe!(Compress<Max>, (u8, u8, u8));
/// assert_eq!(capability.result_type(), Some("u8"));
///
/// let capability = probe!(Compress<Max>, ());
/// let failure = capability.failure().expect("no seed");
/// assert_eq!(failure.site(), Site::MissingSeed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    operation: &'static str,
    arguments: Vec<&'static str>,
    outcome: Outcome,
}

impl Capability {
    /// The capability of an operation that accepts `Args`.
    #[must_use]
    pub fn invocable<Op, Args>() -> Self
    where
        Op: Invocable<Args>,
        Args: TypeList,
    {
        Self {
            operation: type_name::<Op>(),
            arguments: Args::type_names(),
            outcome: Outcome::Invocable {
                result: type_name::<Op::Output>(),
            },
        }
    }

    /// The capability of an operation that rejects `Args`, with the reason.
    #[must_use]
    pub fn not_invocable<Op: ?Sized, Args: TypeList>(failure: Failure) -> Self {
        Self {
            operation: type_name::<Op>(),
            arguments: Args::type_names(),
            outcome: Outcome::NotInvocable(failure),
        }
    }

    /// The queried operation's type name.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The queried argument type names.
    #[must_use]
    pub fn arguments(&self) -> &[&'static str] {
        &self.arguments
    }

    /// The outcome of the query.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns `true` if the invocation is well-formed.
    #[must_use]
    pub const fn is_invocable(&self) -> bool {
        matches!(self.outcome, Outcome::Invocable { .. })
    }

    /// The result type name, if invocable.
    #[must_use]
    pub const fn result_type(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::Invocable { result } => Some(result),
            Outcome::NotInvocable(_) => None,
        }
    }

    /// The failure, if not invocable.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Invocable { .. } => None,
            Outcome::NotInvocable(failure) => Some(failure),
        }
    }

    /// Converts the capability into the result type name or the failure.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] when the operation is not invocable.
    pub fn into_result(self) -> Result<&'static str, Failure> {
        match self.outcome {
            Outcome::Invocable { result } => Ok(result),
            Outcome::NotInvocable(failure) => Err(failure),
        }
    }
}

/// Frames collected while a query is walked.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct Trail {
    result: Option<&'static str>,
    frames: Vec<Failure>,
}

impl Trail {
    #[doc(hidden)]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            result: None,
            frames: Vec::new(),
        }
    }

    /// Records that the queried operation accepts its arguments.
    #[doc(hidden)]
    pub fn accept(&mut self, result: &'static str) {
        self.result = Some(result);
    }

    /// Records the next, more inner, failure frame.
    #[doc(hidden)]
    pub fn push(&mut self, frame: Failure) {
        self.frames.push(frame);
    }

    #[doc(hidden)]
    #[must_use]
    pub fn into_capability<Op: ?Sized, Args: TypeList>(self) -> Capability {
        let outcome = match self.result {
            Some(result) => Outcome::Invocable { result },
            None => Outcome::NotInvocable(
                self.frames
                    .into_iter()
                    .rev()
                    .reduce(|inner, outer| outer.caused_by(inner))
                    .unwrap_or_else(Failure::not_invocable::<Op, Args>),
            ),
        };
        Capability {
            operation: type_name::<Op>(),
            arguments: Args::type_names(),
            outcome,
        }
    }
}

/// Highest priority step: resolved on `&&&State`.
#[doc(hidden)]
pub trait StepFirst {
    type Next;
    fn advance(&self, trail: &mut Trail) -> Self::Next;
}

/// Second priority step: resolved on `&&State`.
#[doc(hidden)]
pub trait StepSecond {
    type Next;
    fn advance(&self, trail: &mut Trail) -> Self::Next;
}

/// Third priority step: resolved on `&State`.
#[doc(hidden)]
pub trait StepThird {
    type Next;
    fn advance(&self, trail: &mut Trail) -> Self::Next;
}

/// Lowest priority step: resolved on `State`.
#[doc(hidden)]
pub trait StepLast {
    type Next;
    fn advance(&self, trail: &mut Trail) -> Self::Next;
}

/// An adaptor that explains its own rejection of `Args`.
///
/// `expand` pushes the adaptor's frame and returns the state that checks
/// the adaptor's inner layer.
#[doc(hidden)]
pub trait Expand<Args> {
    type Next;
    fn expand(trail: &mut Trail) -> Self::Next;
}

/// Nothing left to check.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Done;

impl StepLast for Done {
    type Next = Self;

    fn advance(&self, _trail: &mut Trail) -> Self {
        Self
    }
}

macro_rules! state {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[doc(hidden)]
        pub struct $name<Op: ?Sized, Args>(PhantomData<fn(Args) -> *const Op>);

        impl<Op: ?Sized, Args> $name<Op, Args> {
            #[doc(hidden)]
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<Op, Args> StepSecond for &&$name<Op, Args>
        where
            Op: Expand<Args>,
        {
            type Next = Op::Next;

            fn advance(&self, trail: &mut Trail) -> Op::Next {
                Op::expand(trail)
            }
        }

        impl<Op, Args> StepThird for &$name<Op, Args>
        where
            Op: Reveal<Args> + ?Sized,
        {
            type Next = Done;

            fn advance(&self, trail: &mut Trail) -> Done {
                trail.push(Op::reveal());
                Done
            }
        }
    };
}

state! {
    /// The query `probe!` starts from: is `Op` invocable with `Args`?
    Probe
}

state! {
    /// The target of a decorated callable: if it rejects `Args`, that
    /// rejection is the cause of the decorator operation's.
    Target
}

state! {
    /// An operation whose rejection of `Args` is already recorded; only its
    /// inner layers remain to be explained.
    Nested
}

impl<Op, Args> StepFirst for &&&Probe<Op, Args>
where
    Op: Invocable<Args> + ?Sized,
{
    type Next = Done;

    fn advance(&self, trail: &mut Trail) -> Done {
        trail.accept(type_name::<Op::Output>());
        Done
    }
}

impl<Op: ?Sized, Args: TypeList> StepLast for Probe<Op, Args> {
    type Next = Done;

    fn advance(&self, trail: &mut Trail) -> Done {
        trail.push(Failure::not_invocable::<Op, Args>());
        Done
    }
}

impl<Op, Args> StepFirst for &&&Target<Op, Args>
where
    Op: Invocable<Args> + ?Sized,
{
    type Next = Done;

    fn advance(&self, _trail: &mut Trail) -> Done {
        Done
    }
}

impl<Op: ?Sized, Args: TypeList> StepLast for Target<Op, Args> {
    type Next = Done;

    fn advance(&self, trail: &mut Trail) -> Done {
        trail.push(Failure::not_invocable::<Op, Args>());
        Done
    }
}

impl<Op: ?Sized, Args> StepLast for Nested<Op, Args> {
    type Next = Done;

    fn advance(&self, _trail: &mut Trail) -> Done {
        Done
    }
}

/// Queries whether an operation type is invocable with an argument tuple
/// type, returning a [`Capability`].
///
/// Unlike a direct call, a negative answer is not a compile error: it is a
/// [`Failure`] chain describing which component rejected which argument
/// types, ending at the innermost rejected call. Both types must be
/// concrete at the call site.
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::probe;
/// use lambars_adaptors::capability::Site;
///
/// let capability = probe!(fn() -> bool, ());
/// assert_eq!(capability.result_type(), Some("bool"));
///
/// let capability = probe!(fn() -> bool, (bool,));
/// let failure = capability.failure().expect("takes no arguments");
/// assert_eq!(failure.site(), Site::Operation);
/// assert_eq!(failure.arguments(), ["bool"]);
/// ```
#[macro_export]
macro_rules! probe {
    ($operation:ty, $arguments:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::capability::probe::{
            StepFirst as _, StepLast as _, StepSecond as _, StepThird as _,
        };
        let mut trail = $crate::capability::probe::Trail::new();
        let walk = $crate::capability::probe::Probe::<$operation, $arguments>::new();
        $crate::__probe_steps!(trail, walk;
            _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _
        );
        let _ = walk;
        trail.into_capability::<$operation, $arguments>()
    }};
}

/// Unrolls the steps of a [`probe!`](crate::probe) walk, one per token.
#[doc(hidden)]
#[macro_export]
macro_rules! __probe_steps {
    ($trail:ident, $walk:ident;) => {};
    ($trail:ident, $walk:ident; $step:tt $($rest:tt)*) => {
        #[allow(clippy::needless_borrow)]
        let $walk = (&&&&$walk).advance(&mut $trail);
        $crate::__probe_steps!($trail, $walk; $($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejects;

    impl Reveal<(u8,)> for Rejects {
        fn reveal() -> Failure {
            Failure::new(Site::Decorated, "Rejects", vec!["u8"])
        }
    }

    #[test]
    fn test_query_reports_result_type() {
        let capability = crate::probe!(fn(u8) -> u16, (u8,));
        assert!(capability.is_invocable());
        assert_eq!(capability.result_type(), Some("u16"));
        assert_eq!(capability.arguments(), ["u8"]);
        assert!(capability.failure().is_none());
    }

    #[test]
    fn test_query_prefers_revealed_failure() {
        let capability = crate::probe!(Rejects, (u8,));
        let failure = capability.failure().cloned();
        assert_eq!(
            failure,
            Some(Failure::new(Site::Decorated, "Rejects", vec!["u8"]))
        );
    }

    #[test]
    fn test_query_falls_back_to_operation_frame() {
        let capability = crate::probe!(Rejects, (u8, u8));
        let failure = capability.into_result().unwrap_err();
        assert_eq!(failure.site(), Site::Operation);
        assert_eq!(failure.arguments(), ["u8", "u8"]);
        assert!(failure.cause().is_none());
    }

    #[test]
    fn test_query_supports_zero_arguments() {
        assert!(crate::probe!(fn() -> u8, ()).is_invocable());
        assert!(!crate::probe!(fn(u8) -> u8, ()).is_invocable());
    }

    #[test]
    fn test_trail_chains_frames_outermost_first() {
        let mut trail = Trail::new();
        trail.push(Failure::new(Site::Fold, "outer", vec!["u8"]));
        trail.push(Failure::new(Site::FoldOperation, "inner", vec!["u8", "u8"]));
        let failure = trail.into_capability::<u8, (u8,)>().into_result().unwrap_err();

        assert_eq!(failure.operation(), "outer");
        assert_eq!(failure.root_cause().operation(), "inner");
        assert_eq!(failure.chain().count(), 2);
    }

    #[test]
    fn test_empty_trail_falls_back_to_operation_frame() {
        let failure = Trail::new()
            .into_capability::<fn() -> u8, (bool,)>()
            .into_result()
            .unwrap_err();
        assert_eq!(failure, Failure::not_invocable::<fn() -> u8, (bool,)>());
    }
}
