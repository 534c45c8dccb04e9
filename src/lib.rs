//! # tagged-outcome
//!
//! Explicit success/failure values with monadic combinators, do-notation,
//! and tag-dispatched error handling.
//!
//! ## Overview
//!
//! This library replaces implicit unwinding with type-visible failure
//! propagation. It includes:
//!
//! - **Outcome**: a two-variant `Success`/`Failure` container with the full
//!   combinator set (`map`, `map_error`, `and_then`, `tap`, `unwrap`, ...)
//! - **Async combinators**: `and_then_async`, `map_async`, `tap_async` for
//!   chaining deferred fallible steps
//! - **Tagged errors**: an error hierarchy discriminated by a fixed tag,
//!   with a matcher for dispatch over a closed variant set
//! - **Do-notation**: the `attempt!` macro for sequencing dependent fallible
//!   steps with short-circuit on the first failure
//!
//! ## Feature Flags
//!
//! - `outcome`: the core `Outcome` type and synchronous combinators
//! - `error`: the tagged error hierarchy and matcher
//! - `attempt`: the `attempt!` do-notation macro
//! - `async`: asynchronous combinators on `Outcome`
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use tagged_outcome::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse().map_or_else(
//!         |_| failure(format!("not a number: {input}")),
//!         success,
//!     )
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, success(42));
//!
//! let failed = parse("twenty-one").map(|n| n * 2);
//! assert!(failed.is_failure());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use tagged_outcome::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "outcome")]
    pub use crate::outcome::*;

    #[cfg(feature = "error")]
    pub use crate::error::*;
}

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "error")]
pub mod error;
