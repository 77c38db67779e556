//! Structured descriptions of non-invocable compositions.
//!
//! A [`Failure`] names the component that rejected a call (its [`Site`]),
//! the operation type, and the argument types it was offered. Failures are
//! chained: an adaptor that fails because an inner operation fails wraps
//! the inner failure as its cause, so the chain always ends at the call
//! that was actually rejected.

use std::any::type_name;
use std::fmt;

use super::TypeList;

/// The kind of component a [`Failure`] frame describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    /// A plain operation rejected the argument list.
    Operation,
    /// A fold adaptor could not reduce its arguments.
    Fold,
    /// The binary operation of a fold rejected one of its steps.
    FoldOperation,
    /// A self-seeding fold was given no argument to seed from.
    MissingSeed,
    /// A seeded fold holds a seed it cannot copy for each invocation.
    SeedNotClone,
    /// A decorated callable could not be invoked with its arguments.
    Decorated,
    /// The decorator operation rejected `(data, target, arguments...)`.
    DecoratorOperation,
}

impl Site {
    /// A short human-readable name for the site.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adaptors::capability::Site;
    ///
    /// assert_eq!(Site::DecoratorOperation.describe(), "decorator operation");
    /// ```
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Operation => "operation",
            Self::Fold => "fold",
            Self::FoldOperation => "fold operation",
            Self::MissingSeed => "self-seeding fold",
            Self::SeedNotClone => "fold seed",
            Self::Decorated => "decorated callable",
            Self::DecoratorOperation => "decorator operation",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.describe())
    }
}

/// A chainable description of why an operation is not invocable.
///
/// Each frame records where the call was rejected, which operation type
/// rejected it, and the argument types involved. The innermost frame of
/// the chain (see [`Failure::root_cause`]) is the call that failed.
///
/// `Display` prints the outermost frame; the alternate form (`{:#}`)
/// prints the whole chain, one `caused by:` line per inner frame. The
/// chain is also reachable through [`std::error::Error::source`].
///
/// # Examples
///
/// ```rust
/// use lambars_adaptors::capability::{Failure, Site};
///
/// let inner = Failure::not_invocable::<fn(i32) -> i32, (bool,)>();
/// let outer = Failure::new(Site::Decorated, "logged", vec!["bool"]).caused_by(inner.clone());
///
/// assert_eq!(outer.site(), Site::Decorated);
/// assert_eq!(outer.root_cause(), &inner);
/// assert_eq!(outer.chain().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    site: Site,
    operation: &'static str,
    arguments: Vec<&'static str>,
    cause: Option<Box<Failure>>,
}

impl Failure {
    /// Creates a single-frame failure.
    #[must_use]
    pub const fn new(site: Site, operation: &'static str, arguments: Vec<&'static str>) -> Self {
        Self {
            site,
            operation,
            arguments,
            cause: None,
        }
    }

    /// Describes `Op` rejecting the argument list `Args`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adaptors::capability::{Failure, Site};
    ///
    /// let failure = Failure::not_invocable::<fn(u8) -> u8, (u8, u8)>();
    /// assert_eq!(failure.site(), Site::Operation);
    /// assert_eq!(failure.arguments(), ["u8", "u8"]);
    /// ```
    #[must_use]
    pub fn not_invocable<Op: ?Sized, Args: TypeList>() -> Self {
        Self::new(Site::Operation, type_name::<Op>(), Args::type_names())
    }

    /// Attaches `cause` at the innermost end of this failure's chain.
    ///
    /// Frames already in the chain are kept as they are; the new cause
    /// becomes the root cause.
    #[must_use]
    pub fn caused_by(mut self, cause: Self) -> Self {
        let mut slot = &mut self.cause;
        while let Some(inner) = slot {
            slot = &mut inner.cause;
        }
        *slot = Some(Box::new(cause));
        self
    }

    /// Wraps this failure in a new outer frame.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adaptors::capability::{Failure, Site};
    ///
    /// let inner = Failure::not_invocable::<fn() -> u8, (u8,)>();
    /// let outer = inner.clone().within(Site::Fold, "sum", vec!["u8"]);
    ///
    /// assert_eq!(outer.site(), Site::Fold);
    /// assert_eq!(outer.cause(), Some(&inner));
    /// ```
    #[must_use]
    pub fn within(self, site: Site, operation: &'static str, arguments: Vec<&'static str>) -> Self {
        Self::new(site, operation, arguments).caused_by(self)
    }

    /// The component this frame describes.
    #[must_use]
    pub const fn site(&self) -> Site {
        self.site
    }

    /// The type name of the operation that rejected the call.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The type names of the arguments the operation was offered.
    #[must_use]
    pub fn arguments(&self) -> &[&'static str] {
        &self.arguments
    }

    /// The failure this frame wraps, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// The innermost failure of the chain.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Some(inner) = current.cause() {
            current = inner;
        }
        current
    }

    /// Iterates the chain from this frame to the root cause.
    pub const fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn fmt_frame(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.site {
            Site::MissingSeed => write!(
                formatter,
                "{} `{}` needs at least one argument",
                self.site, self.operation
            ),
            Site::SeedNotClone => write!(
                formatter,
                "{} `{}` does not implement `Clone`",
                self.site, self.operation
            ),
            Site::Fold | Site::FoldOperation => write!(
                formatter,
                "{} `{}` cannot reduce `{}`",
                self.site,
                self.operation,
                format_arguments(&self.arguments)
            ),
            Site::Operation | Site::Decorated | Site::DecoratorOperation => write!(
                formatter,
                "{} `{}` is not invocable with `{}`",
                self.site,
                self.operation,
                format_arguments(&self.arguments)
            ),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_frame(formatter)?;
        if formatter.alternate() {
            for inner in self.chain().skip(1) {
                formatter.write_str("\ncaused by: ")?;
                inner.fmt_frame(formatter)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Iterator over the frames of a [`Failure`], outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

/// Formats type names as a Rust tuple type: `()`, `(A,)`, `(A, B)`.
pub(crate) fn format_arguments(arguments: &[&str]) -> String {
    match arguments {
        [] => String::from("()"),
        [single] => format!("({single},)"),
        many => format!("({})", many.join(", ")),
    }
}
