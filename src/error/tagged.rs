//! The tagged-error capability and classification helpers.

use std::any::Any;
use std::error::Error;

/// The compile-time discriminant for a tagged-error variant.
///
/// Every concrete variant declares exactly one `TAG`, fixed for the life of
/// the type and distinct from every other variant registered with the same
/// [`Matcher`](crate::error::Matcher). The constant lives on a separate
/// trait so that [`TaggedError`] stays dyn-compatible.
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::error::Tagged;
///
/// struct ValidationError {
///     field: String,
/// }
///
/// impl Tagged for ValidationError {
///     const TAG: &'static str = "ValidationError";
/// }
///
/// assert_eq!(ValidationError::TAG, "ValidationError");
/// ```
pub trait Tagged {
    /// The discriminant tag for this variant.
    const TAG: &'static str;
}

/// An error carrying a fixed discriminant tag and a human-readable message.
///
/// `TaggedError` is the dyn-compatible face of the hierarchy: values flow as
/// `&dyn TaggedError` (or boxed) and are dispatched on their runtime tag by
/// a [`Matcher`](crate::error::Matcher), without type introspection at the
/// call site.
///
/// Implementations supply [`tag`](Self::tag) (conventionally returning
/// [`Tagged::TAG`]); `message` defaults to the `Display` rendering and
/// `cause` to [`Error::source`], so a variant with a `Display` impl and a
/// wired-up `source` gets both for free.
pub trait TaggedError: Error + Any {
    /// The discriminant tag of this error's concrete variant.
    fn tag(&self) -> &'static str;

    /// The human-readable description of this error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// The direct cause of this error, if one was attached.
    ///
    /// The cause's own cause is reachable the same way, so the full causal
    /// history is traversable.
    fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.source()
    }
}

impl dyn TaggedError {
    /// Returns `true` if the erased error's concrete variant is `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::fmt;
    /// # use tagged_outcome::error::{Tagged, TaggedError};
    /// # #[derive(Debug)]
    /// # struct NotFoundError;
    /// # impl fmt::Display for NotFoundError {
    /// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    /// #         write!(f, "not found")
    /// #     }
    /// # }
    /// # impl std::error::Error for NotFoundError {}
    /// # impl Tagged for NotFoundError {
    /// #     const TAG: &'static str = "NotFoundError";
    /// # }
    /// # impl TaggedError for NotFoundError {
    /// #     fn tag(&self) -> &'static str {
    /// #         Self::TAG
    /// #     }
    /// # }
    /// let error: &dyn TaggedError = &NotFoundError;
    /// assert!(error.is::<NotFoundError>());
    /// ```
    #[inline]
    pub fn is<T: TaggedError>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts the erased error to its concrete variant.
    ///
    /// Returns `None` when the variant is not `T`.
    #[inline]
    pub fn downcast_ref<T: TaggedError>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }
}

/// Searches an error's cause chain for a concrete variant.
///
/// The error itself is checked first, then each `source` in order. Returns
/// the first match, or `None` when the chain holds no `T`.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
/// use tagged_outcome::error::find_cause;
///
/// #[derive(Debug)]
/// struct Root;
///
/// impl fmt::Display for Root {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "root cause")
///     }
/// }
///
/// impl std::error::Error for Root {}
///
/// #[derive(Debug)]
/// struct Wrapper(Root);
///
/// impl fmt::Display for Wrapper {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "wrapper")
///     }
/// }
///
/// impl std::error::Error for Wrapper {
///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
///         Some(&self.0)
///     }
/// }
///
/// let wrapper = Wrapper(Root);
/// let root = find_cause::<Root>(&wrapper);
/// assert_eq!(root.unwrap().to_string(), "root cause");
/// ```
pub fn find_cause<'a, T: Error + 'static>(error: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut current = Some(error);
    while let Some(candidate) = current {
        if let Some(found) = candidate.downcast_ref::<T>() {
            return Some(found);
        }
        current = candidate.source();
    }
    None
}

// =============================================================================
// Classification Macros
// =============================================================================

/// Autoref-based probes backing `is_error!` and `is_tagged_error!`.
///
/// Method resolution prefers the inherent-reference impl on `Probe<T>` when
/// `T` satisfies the probed bound and falls back to the blanket impl on
/// `&Probe<T>` otherwise, so the check resolves entirely at compile time.
#[doc(hidden)]
#[allow(missing_docs)]
pub mod probe {
    use super::TaggedError;
    use std::error::Error;

    pub struct Probe<'a, T: ?Sized>(pub &'a T);

    pub trait ErrorProbe {
        #[inline]
        fn probe_error(&self) -> bool {
            true
        }
    }

    impl<T: Error> ErrorProbe for Probe<'_, T> {}

    pub trait ErrorFallback {
        #[inline]
        fn probe_error(&self) -> bool {
            false
        }
    }

    impl<T: ?Sized> ErrorFallback for &Probe<'_, T> {}

    pub trait TaggedErrorProbe {
        #[inline]
        fn probe_tagged_error(&self) -> bool {
            true
        }
    }

    impl<T: TaggedError> TaggedErrorProbe for Probe<'_, T> {}

    pub trait TaggedErrorFallback {
        #[inline]
        fn probe_tagged_error(&self) -> bool {
            false
        }
    }

    impl<T: ?Sized> TaggedErrorFallback for &Probe<'_, T> {}
}

/// Returns `true` iff the expression's type implements [`std::error::Error`].
///
/// The check resolves at compile time from the expression's own type; a
/// reference to an error counts (references forward the `Error` impl), a
/// plain value that merely resembles an error does not.
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::is_error;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// assert!(is_error!(parse_error));
/// assert!(!is_error!(123));
/// assert!(!is_error!("test"));
/// ```
#[macro_export]
macro_rules! is_error {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::error::probe::{ErrorFallback as _, ErrorProbe as _};
        (&$crate::error::probe::Probe(&$value)).probe_error()
    }};
}

/// Returns `true` iff the expression's type implements
/// [`TaggedError`](crate::error::TaggedError).
///
/// Plain errors without the tagged capability, and non-error values, both
/// yield `false`.
///
/// # Examples
///
/// ```rust
/// use tagged_outcome::is_tagged_error;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// assert!(!is_tagged_error!(parse_error));
/// assert!(!is_tagged_error!(123));
/// ```
#[macro_export]
macro_rules! is_tagged_error {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::error::probe::{TaggedErrorFallback as _, TaggedErrorProbe as _};
        (&$crate::error::probe::Probe(&$value)).probe_tagged_error()
    }};
}
