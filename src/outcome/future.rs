//! Asynchronous combinators for `Outcome`.
//!
//! These methods carry the synchronous combinator contracts over to deferred
//! steps: the caller-supplied future is awaited to settlement before the
//! combinator's own future resolves, and the untaken branch never constructs
//! or awaits anything. The crate owns no runtime; any executor works.
//!
//! # Examples
//!
//! ```rust
//! use tagged_outcome::outcome::Outcome;
//!
//! async fn lookup(id: u32) -> Outcome<String, String> {
//!     if id == 0 {
//!         Outcome::failure("unknown id".to_string())
//!     } else {
//!         Outcome::success(format!("user-{id}"))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let name = Outcome::<u32, String>::success(7)
//!     .and_then_async(lookup)
//!     .await;
//! assert_eq!(name, Outcome::success("user-7".to_string()));
//! # }
//! ```

use std::future::Future;

use super::Outcome;

impl<A, E> Outcome<A, E> {
    /// Chains a deferred fallible step, flattening the result.
    ///
    /// Identical contract to [`and_then`](Self::and_then), except `function`
    /// returns a future of an outcome and the combinator itself must be
    /// awaited. The future is driven to settlement before the chained
    /// outcome is observable; a `Failure` it produces propagates unchanged.
    /// On a `Failure` input the function is never invoked and nothing is
    /// awaited.
    ///
    /// Cancellation belongs to the supplied future: dropping the combinator
    /// future drops the inner future per normal Rust semantics.
    pub async fn and_then_async<B, F, Fut>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Outcome<B, E>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a deferred transformation to the success payload.
    ///
    /// Async sibling of [`map`](Self::map): the future runs only on a
    /// `Success`; a `Failure` moves through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged_outcome::outcome::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcome: Outcome<i32, String> = Outcome::success(5);
    /// let doubled = outcome.map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, Outcome::success(10));
    /// # }
    /// ```
    pub async fn map_async<B, F, Fut>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Observes the success payload through a deferred side effect.
    ///
    /// The observation future is awaited to completion before the original
    /// outcome is yielded unchanged. On a `Failure` nothing runs.
    pub async fn tap_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = &self {
            function(value).await;
        }
        self
    }

    /// Observes the failure payload through a deferred side effect.
    ///
    /// Dual of [`tap_async`](Self::tap_async).
    pub async fn tap_error_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Failure(error) = &self {
            function(error).await;
        }
        self
    }
}
