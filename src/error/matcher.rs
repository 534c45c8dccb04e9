//! Tag-keyed dispatch over a closed set of error variants.

use std::collections::HashMap;
use std::fmt;

use super::tagged::{Tagged, TaggedError};

type Handler<'h, R> = Box<dyn Fn(&dyn TaggedError) -> R + 'h>;

/// A dispatch table mapping each variant's tag to a handler function.
///
/// Handlers are registered per concrete variant with [`on`](Self::on) and
/// invoked by [`dispatch`](Self::dispatch) according to the error's runtime
/// tag. Covering every variant the call site can produce is the caller's
/// obligation: the table cannot enforce exhaustiveness at construction time,
/// so a tag without a handler surfaces as the
/// [`NoHandlerForTag`] condition. When the variant set is a compile-time
/// `enum`, prefer a plain `match`, which makes that condition unrepresentable.
///
/// # Examples
///
/// ```rust
/// # use std::fmt;
/// # use tagged_outcome::error::{Matcher, Tagged, TaggedError};
/// # #[derive(Debug)]
/// # struct NotFoundError { id: String }
/// # impl fmt::Display for NotFoundError {
/// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
/// #         write!(f, "Not found: {}", self.id)
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
/// # #[derive(Debug)]
/// # struct ValidationError { field: String }
/// # impl fmt::Display for ValidationError {
/// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
/// #         write!(f, "Invalid field: {}", self.field)
/// #     }
/// # }
/// # impl std::error::Error for ValidationError {}
/// # impl Tagged for ValidationError {
/// #     const TAG: &'static str = "ValidationError";
/// # }
/// # impl TaggedError for ValidationError {
/// #     fn tag(&self) -> &'static str {
/// #         Self::TAG
/// #     }
/// # }
/// let matcher = Matcher::new()
///     .on::<NotFoundError, _>(|e| format!("Not found: {}", e.id))
///     .on::<ValidationError, _>(|e| format!("Invalid field: {}", e.field));
///
/// let error = ValidationError { field: "name".to_string() };
/// assert_eq!(matcher.dispatch(&error), "Invalid field: name");
/// ```
pub struct Matcher<'h, R> {
    handlers: HashMap<&'static str, Handler<'h, R>>,
}

impl<'h, R> Matcher<'h, R> {
    /// Creates an empty matcher.
    #[inline]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for the variant `T` under `T::TAG`.
    ///
    /// Registering the same tag twice keeps the later handler, matching the
    /// behavior of building a literal tag-to-handler map.
    ///
    /// # Panics
    ///
    /// The stored closure panics at dispatch time if an error carrying
    /// `T::TAG` turns out not to be a `T` - two variants sharing one tag
    /// violate the distinctness invariant and are a programming error.
    pub fn on<T, F>(mut self, handler: F) -> Self
    where
        T: TaggedError + Tagged,
        F: Fn(&T) -> R + 'h,
    {
        let dispatcher = move |error: &dyn TaggedError| {
            let concrete = error.downcast_ref::<T>().unwrap_or_else(|| {
                panic!(
                    "tag `{}` is registered for a different variant than the dispatched error",
                    T::TAG
                )
            });
            handler(concrete)
        };
        self.handlers.insert(T::TAG, Box::new(dispatcher));
        self
    }

    /// Dispatches to the handler registered for the error's runtime tag.
    ///
    /// # Panics
    ///
    /// Panics if no handler is registered for the tag - an uncovered variant
    /// is a contract violation at the call site, not a runtime contingency.
    /// Use [`try_dispatch`](Self::try_dispatch) to recover instead.
    pub fn dispatch(&self, error: &dyn TaggedError) -> R {
        self.try_dispatch(error)
            .unwrap_or_else(|missing| panic!("{missing}"))
    }

    /// Dispatches to the handler registered for the error's runtime tag,
    /// reporting an uncovered tag as a value.
    ///
    /// # Errors
    ///
    /// Returns [`NoHandlerForTag`] naming the error's tag when the table has
    /// no handler for it.
    pub fn try_dispatch(&self, error: &dyn TaggedError) -> Result<R, NoHandlerForTag> {
        let tag = error.tag();
        self.handlers
            .get(tag)
            .map_or(Err(NoHandlerForTag { tag }), |handler| Ok(handler(error)))
    }

    /// Returns `true` if a handler is registered for `tag`.
    #[inline]
    pub fn covers(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }
}

impl<R> Default for Matcher<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Matcher<'_, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.handlers.keys().collect();
        tags.sort_unstable();
        formatter.debug_struct("Matcher").field("tags", &tags).finish()
    }
}

/// The condition raised when a matcher receives a tag it has no handler for.
///
/// Exhaustiveness over the closed variant set is the caller's obligation;
/// this value names the tag that slipped through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoHandlerForTag {
    /// The tag of the dispatched error.
    pub tag: &'static str,
}

impl fmt::Display for NoHandlerForTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "no handler registered for tag `{}`", self.tag)
    }
}

impl std::error::Error for NoHandlerForTag {}
