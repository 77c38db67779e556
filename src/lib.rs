//! # lambars-adaptors
//!
//! Zero-overhead function adaptors for Rust, from the lambars family.
//!
//! ## Overview
//!
//! Adaptors are higher-order wrappers that change how a callable is
//! invoked, resolved entirely at compile time. This crate provides:
//!
//! - **Capability detection**: the [`Invocable`](capability::Invocable)
//!   trait decides whether an operation accepts an argument list and what it
//!   returns; [`probe!`] answers the same question without a build error and
//!   explains failures as a chain of [`Failure`](capability::Failure)s.
//! - **Fold adaptors**: [`compress`](compress::compress) and
//!   [`compress_seeded`](compress::compress_seeded) reduce any number of
//!   arguments through a binary operation.
//! - **Decorators**: [`decorate`](decorate::decorate) captures auxiliary
//!   data and a target callable, then calls the decorator operation with
//!   both in front of the call arguments.
//! - **Operations**: ready-made polymorphic binary operations in
//!   [`operation`].
//!
//! Argument lists are tuples. [`call!`] invokes an adaptor with plain
//! comma-separated arguments.
//!
//! ## Feature Flags
//!
//! - `compress`: fold adaptors (default)
//! - `decorate`: decorators (default)
//! - `tracing`: the [`Trace`](decorate::Trace) decorator, logging through
//!   the `tracing` crate
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_adaptors::prelude::*;
//! use lambars_adaptors::{call, probe};
//!
//! // Fold any number of arguments.
//! assert_eq!(call!(compress(Max), 2, 3, 4, 5), 5);
//! assert_eq!(call!(compress_seeded(Sum, 0), 1, 2, 3), 6);
//!
//! // Decorate a callable.
//! let announce = decorate(|message: &&str, target: &fn(i32, i32) -> i32, left: i32, right: i32| {
//!     format!("{message}: {}", target(left, right))
//! });
//! let add: fn(i32, i32) -> i32 = |left, right| left + right;
//! let announced_add = announce.with_data("sum").apply(add);
//! assert_eq!(call!(announced_add, 1, 2), "sum: 3");
//!
//! // Ask before calling.
//! assert!(probe!(Compress<Max>, (i32, i32)).is_invocable());
//! assert!(!probe!(Compress<Max>, (i32, &str)).is_invocable());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. Macros ([`call!`],
/// [`probe!`], [`compress!`], [`assert_invocable!`],
/// [`assert_not_invocable!`]) live at the crate root.
///
/// # Usage
///
/// ```rust
/// use lambars_adaptors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{Capability, Failure, Invocable, Outcome, ResultOf, Reveal, Site};

    pub use crate::operation::{Max, Min, Product, Sum};

    #[cfg(feature = "compress")]
    pub use crate::compress::{Compress, Fold, SeededCompress, SelfFold, compress, compress_seeded};

    #[cfg(feature = "decorate")]
    pub use crate::decorate::{Decorate, Decorated, Decoration, decorate};

    #[cfg(feature = "tracing")]
    pub use crate::decorate::{Trace, trace};
}

pub mod capability;

pub mod operation;

#[cfg(feature = "compress")]
pub mod compress;

#[cfg(feature = "decorate")]
pub mod decorate;

#[doc(hidden)]
pub mod __private {
    pub use static_assertions;
}
