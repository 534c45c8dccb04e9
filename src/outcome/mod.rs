//! The `Outcome` type and its combinator set.
//!
//! This module provides [`Outcome<A, E>`], a two-variant container holding
//! either a `Success(A)` or a `Failure(E)`, together with:
//!
//! - The synchronous combinators (`map`, `map_error`, `and_then`, `or_else`,
//!   `tap`, `tap_error`, `unwrap`, ...)
//! - Asynchronous combinators behind the `async` feature (`and_then_async`,
//!   `map_async`, `tap_async`, `tap_error_async`)
//! - The [`attempt!`](crate::attempt!) do-notation macro behind the
//!   `attempt` feature
//!
//! # Examples
//!
//! ```rust
//! use tagged_outcome::outcome::{Outcome, success, failure};
//!
//! fn reciprocal(n: f64) -> Outcome<f64, String> {
//!     if n == 0.0 {
//!         failure("division by zero".to_string())
//!     } else {
//!         success(1.0 / n)
//!     }
//! }
//!
//! let result = reciprocal(4.0).map(|x| x * 100.0);
//! assert_eq!(result, success(25.0));
//!
//! let result = reciprocal(0.0).map(|x| x * 100.0);
//! assert!(result.is_failure());
//! ```

#[allow(clippy::module_inception)]
mod outcome;

#[cfg(feature = "async")]
mod future;

#[cfg(feature = "attempt")]
mod attempt_macro;

pub use outcome::{Outcome, failure, success};
