//! Outcome type - an explicit success-or-failure value.
//!
//! This module provides the `Outcome<A, E>` type, which represents the
//! completed state of a fallible operation: either a `Success(A)` or a
//! `Failure(E)`. It is used in place of unwinding for expected failure
//! paths, so that failure propagation is visible in the types.
//!
//! # Examples
//!
//! ```rust
//! use tagged_outcome::outcome::{Outcome, success, failure};
//!
//! // Creating Outcome values
//! let won: Outcome<i32, String> = success(42);
//! let lost: Outcome<i32, String> = failure("out of range".to_string());
//!
//! // Pattern matching
//! match won {
//!     Outcome::Success(n) => println!("Got value: {}", n),
//!     Outcome::Failure(e) => println!("Got error: {}", e),
//! }
//!
//! // Using fold to handle both cases
//! let report = lost.fold(
//!     |n| format!("value: {}", n),
//!     |e| format!("error: {}", e),
//! );
//! assert_eq!(report, "error: out of range");
//! ```

use std::fmt;

/// An explicit success-or-failure value.
///
/// `Outcome<A, E>` is a closed two-variant union: `Success(A)` carries the
/// payload of a completed fallible operation, `Failure(E)` carries its error.
/// A value is immutable after construction; every combinator consumes the
/// outcome and returns a new one, and the closure for the untaken branch is
/// never invoked.
///
/// # Type Parameters
///
/// * `A` - The type of the success payload
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::outcome::Outcome;
///
/// let won: Outcome<i32, String> = Outcome::success(42);
/// let doubled = won.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::success(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<A, E> {
    /// The operation completed and produced a value.
    Success(A),
    /// The operation failed and produced an error.
    Failure(E),
}

/// Creates a `Success` outcome carrying `value`.
///
/// Free-function form of [`Outcome::success`], convenient as a function
/// argument (e.g. for `map_or_else`).
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::outcome::{Outcome, success};
///
/// let outcome: Outcome<i32, String> = success(42);
/// assert!(outcome.is_success());
/// ```
#[inline]
pub const fn success<A, E>(value: A) -> Outcome<A, E> {
    Outcome::Success(value)
}

/// Creates a `Failure` outcome carrying `error`.
///
/// Free-function form of [`Outcome::failure`].
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::outcome::{Outcome, failure};
///
/// let outcome: Outcome<i32, &str> = failure("boom");
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub const fn failure<A, E>(error: E) -> Outcome<A, E> {
    Outcome::Failure(error)
}

impl<A, E> Outcome<A, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` outcome carrying `value`.
    ///
    /// Construction cannot fail and the value is stored unchanged.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` outcome carrying `error`.
    ///
    /// Construction cannot fail and the error is stored unchanged.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Status Predicates
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// assert!(won.is_success());
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert!(!lost.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert!(lost.is_failure());
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// assert!(!won.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the outcome into an `Option<A>`, consuming the outcome.
    ///
    /// Returns `Some(value)` for a `Success`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(won.success_value(), Some(42));
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert_eq!(lost.success_value(), None);
    /// ```
    #[inline]
    pub fn success_value(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, consuming the outcome.
    ///
    /// Returns `Some(error)` for a `Failure`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert_eq!(lost.failure_value(), Some("boom".to_string()));
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(won.failure_value(), None);
    /// ```
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success payload if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure payload if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload.
    ///
    /// If this is `Success(value)`, returns `Success(function(value))`.
    /// If this is `Failure(error)`, the failure moves through untouched and
    /// `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let won: Outcome<i32, String> = Outcome::success(5);
    /// assert_eq!(won.map(|x| x * 2), Outcome::success(10));
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// let mapped = lost.map(|x: i32| x * 2);
    /// assert_eq!(mapped, Outcome::failure("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure payload.
    ///
    /// Dual of [`map`](Self::map): if this is `Failure(error)`, returns
    /// `Failure(function(error))`; on a `Success` the function is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("not found".to_string());
    /// let mapped = lost.map_error(|e| format!("Error: {}", e));
    /// assert_eq!(mapped, Outcome::failure("Error: not found".to_string()));
    /// ```
    #[inline]
    pub fn map_error<T, F>(self, function: F) -> Outcome<A, T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    // =========================================================================
    // Monadic Bind
    // =========================================================================

    /// Chains a dependent fallible step, flattening the result.
    ///
    /// If this is `Success(value)`, invokes `function(value)` and returns its
    /// outcome directly. If this is `Failure(error)`, short-circuits and
    /// returns the original failure unchanged, never invoking `function`.
    ///
    /// This is the monadic bind for `Outcome`; it satisfies left identity,
    /// right identity, and associativity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// let result = Outcome::success(8).and_then(halve).and_then(halve);
    /// assert_eq!(result, Outcome::success(2));
    ///
    /// let result = Outcome::success(6).and_then(halve).and_then(halve);
    /// assert_eq!(result, Outcome::failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a recovery step on the failure channel.
    ///
    /// Dual of [`and_then`](Self::and_then): on a `Failure` the function is
    /// invoked with the error and its outcome is returned; a `Success` moves
    /// through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// let recovered = lost.or_else(|_| Outcome::<i32, String>::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn or_else<T, F>(self, function: F) -> Outcome<A, T>
    where
        F: FnOnce(E) -> Outcome<A, T>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Observation (Tap)
    // =========================================================================

    /// Observes the success payload without disturbing the value flow.
    ///
    /// Invokes `function` with a reference to the payload only on a
    /// `Success`, then returns the original outcome unchanged on both
    /// variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// let unchanged = won.tap(|&value| seen = Some(value));
    /// assert_eq!(unchanged, Outcome::success(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Observes the failure payload without disturbing the value flow.
    ///
    /// Invokes `function` with a reference to the error only on a `Failure`,
    /// then returns the original outcome unchanged on both variants.
    #[inline]
    pub fn tap_error<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// Case analysis as a function: `on_success` handles the success payload
    /// and `on_failure` the error, both producing the same result type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// let text = won.fold(|n| n.to_string(), |e| e);
    /// assert_eq!(text, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Swaps the channels: `Success(a)` becomes `Failure(a)` and vice versa.
    #[inline]
    pub fn swap(self) -> Outcome<E, A> {
        match self {
            Self::Success(value) => Outcome::Failure(value),
            Self::Failure(error) => Outcome::Success(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success payload, consuming the outcome.
    ///
    /// This is the single sanctioned boundary where a failure becomes a
    /// defect; it belongs at the edge of a pipeline, never in the middle.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(won.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::unwrap()` on a `Failure` value"),
        }
    }

    /// Returns the failure payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success payload, or `default` on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert_eq!(lost.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes a fallback from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts the outcome into a standard `Result`.
    ///
    /// `Success(a)` becomes `Ok(a)` and `Failure(e)` becomes `Err(e)`, so
    /// outcomes interoperate with the `?` operator at API boundaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let won: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(won.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<A: Default, E> Outcome<A, E> {
    /// Returns the success payload, or `A::default()` on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// assert_eq!(lost.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => A::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    /// Converts a standard `Result` to an `Outcome`.
    ///
    /// `Ok(a)` becomes `Success(a)`, and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Outcome<A, E>> for Result<A, E> {
    /// Converts an `Outcome` to a standard `Result`.
    ///
    /// `Success(a)` becomes `Ok(a)`, and `Failure(e)` becomes `Err(e)`.
    #[inline]
    fn from(outcome: Outcome<A, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// Outcomes of Copy payloads stay free to pass around by value.
static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn success_construction() {
        let outcome: Outcome<i32, String> = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[rstest]
    fn failure_construction() {
        let outcome: Outcome<i32, String> = Outcome::failure("boom".to_string());
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("boom".to_string());
        let outcome: Outcome<i32, String> = err.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("boom".to_string()));
    }

    #[rstest]
    fn debug_rendering() {
        let won: Outcome<i32, String> = Outcome::success(42);
        assert_eq!(format!("{won:?}"), "Success(42)");

        let lost: Outcome<i32, String> = Outcome::failure("boom".to_string());
        assert_eq!(format!("{lost:?}"), "Failure(\"boom\")");
    }
}
