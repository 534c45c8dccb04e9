//! attempt! macro for do-notation style sequencing of outcomes.
//!
//! This module provides the `attempt!` macro, which lets a sequence of
//! dependent fallible steps be written linearly. Each bind draws the success
//! payload out of an intermediate [`Outcome`](crate::outcome::Outcome); the
//! first `Failure` aborts the remaining steps and propagates unchanged as
//! the overall outcome.
//!
//! # Syntax
//!
//! The macro supports the following constructs:
//!
//! - `pattern <= expression;` - Bind: extracts the success payload, or
//!   short-circuits on a failure
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final expression (wrapped in `Success`)
//! - `expression` - Final expression (already an `Outcome`)
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//! - It's a valid token in Rust macros
//!
//! # Examples
//!
//! ## Chaining dependent steps
//!
//! ```rust
//! use tagged_outcome::attempt;
//! use tagged_outcome::outcome::Outcome;
//!
//! fn positive(n: i32) -> Outcome<i32, String> {
//!     if n > 0 {
//!         Outcome::success(n)
//!     } else {
//!         Outcome::failure(format!("{n} is not positive"))
//!     }
//! }
//!
//! let result = attempt! {
//!     x <= positive(5);
//!     y <= positive(x * 2);
//!     let sum = x + y;
//!     yield sum
//! };
//! assert_eq!(result, Outcome::success(15));
//! ```
//!
//! ## Short-circuit on first failure
//!
//! ```rust
//! use tagged_outcome::attempt;
//! use tagged_outcome::outcome::Outcome;
//!
//! let result: Outcome<i32, String> = attempt! {
//!     x <= Outcome::success(5);
//!     y <= Outcome::<i32, String>::failure("boom".to_string());
//!     yield x + y
//! };
//! assert_eq!(result, Outcome::failure("boom".to_string()));
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.and_then(move |pattern| { /* rest */ })
//! ```
//!
//! so short-circuiting is exactly the `and_then` contract applied at every
//! step, and the terminal `yield value` becomes `Outcome::Success(value)`.

/// A macro for sequencing fallible steps in do-notation style.
///
/// Each `pattern <= outcome;` step binds the success payload; the first
/// `Failure` in the sequence becomes the overall result and every remaining
/// step is skipped. The terminal step is either `yield value`, wrapped in a
/// `Success`, or a bare `Outcome` expression returned as-is.
///
/// # Syntax
///
/// ```text
/// attempt! {
///     pattern <= outcome_expression;   // Bind operation (and_then)
///     let pattern = expression;        // Pure let binding
///     yield expression                 // Final value, wrapped in Success
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::attempt;
/// use tagged_outcome::outcome::Outcome;
///
/// let result: Outcome<i32, String> = attempt! {
///     x <= Outcome::success(5);
///     y <= Outcome::success(10);
///     yield x + y
/// };
/// assert_eq!(result, Outcome::success(15));
/// ```
#[macro_export]
macro_rules! attempt {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Case 1: yield wraps the final value in Success
    (yield $value:expr) => {
        $crate::outcome::Outcome::Success($value)
    };

    // Case 2: Single expression (terminal) - already an Outcome, return as-is
    ($outcome:expr) => {
        $outcome
    };

    // ==========================================================================
    // Bind operation: pattern <= outcome; rest
    // ==========================================================================

    // Case 3: Bind with identifier pattern
    ($pattern:ident <= $outcome:expr ; $($rest:tt)+) => {
        $outcome.and_then(move |$pattern| {
            $crate::attempt!($($rest)+)
        })
    };

    // Case 4: Bind with tuple pattern
    (($($pattern:tt)*) <= $outcome:expr ; $($rest:tt)+) => {
        $outcome.and_then(move |($($pattern)*)| {
            $crate::attempt!($($rest)+)
        })
    };

    // Case 5: Bind with wildcard pattern
    (_ <= $outcome:expr ; $($rest:tt)+) => {
        $outcome.and_then(move |_| {
            $crate::attempt!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 6: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::attempt!($($rest)+)
        }
    };

    // Case 7: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::attempt!($($rest)+)
        }
    };
}
