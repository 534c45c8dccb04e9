//! Tagged errors - a discriminated, dispatchable error hierarchy.
//!
//! This module provides an error-hierarchy base built around a fixed
//! discriminant (the *tag*) per concrete variant:
//!
//! - [`Tagged`]: the compile-time tag constant for a variant
//! - [`TaggedError`]: the dyn-compatible capability exposing `tag`,
//!   `message`, and the traversable `cause` chain
//! - [`Matcher`]: a dispatch table from tags to handlers for a closed
//!   variant set
//! - [`find_cause`]: cause-chain search for a concrete variant
//! - [`is_error!`](crate::is_error) / [`is_tagged_error!`](crate::is_tagged_error):
//!   classification of an arbitrary expression
//!
//! Tagged errors are the conventional failure payload for
//! [`Outcome`](crate::outcome::Outcome), though nothing requires it.
//!
//! When the variant set is closed at compile time, a plain `enum` with an
//! exhaustive `match` is the stronger tool; the [`Matcher`] exists for the
//! boundary where variants arrive behind `dyn TaggedError`.
//!
//! # Examples
//!
//! ```rust
//! use std::fmt;
//! use tagged_outcome::error::{Matcher, Tagged, TaggedError};
//!
//! #[derive(Debug)]
//! struct NotFoundError {
//!     id: String,
//! }
//!
//! impl fmt::Display for NotFoundError {
//!     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(formatter, "Not found: {}", self.id)
//!     }
//! }
//!
//! impl std::error::Error for NotFoundError {}
//!
//! impl Tagged for NotFoundError {
//!     const TAG: &'static str = "NotFoundError";
//! }
//!
//! impl TaggedError for NotFoundError {
//!     fn tag(&self) -> &'static str {
//!         Self::TAG
//!     }
//! }
//!
//! let matcher = Matcher::new().on::<NotFoundError, _>(|e| format!("missing {}", e.id));
//! let error = NotFoundError { id: "123".to_string() };
//! assert_eq!(matcher.dispatch(&error), "missing 123");
//! ```

mod matcher;
mod tagged;

pub use matcher::{Matcher, NoHandlerForTag};
pub use tagged::{Tagged, TaggedError, find_cause};

#[doc(hidden)]
pub use tagged::probe;
