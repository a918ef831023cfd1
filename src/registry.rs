//! Handler registry: the pluggable set of named style handlers.

use std::collections::HashMap;

use crate::error::HandlerError;
use crate::style::StyleMap;

/// A style handler: a pure function from an optional argument to a partial
/// style map.
///
/// Handlers are stateless and side-effect-free. They receive the argument
/// segment of a token (`Some("lg")` for `"rounded:lg"`, `None` for a bare
/// token like `"relative"`) and return the attributes that token contributes.
pub type Handler = dyn Fn(Option<&str>) -> Result<StyleMap, HandlerError>;

/// An immutable mapping from handler key to handler function.
///
/// Built once with the fluent [`add`](HandlerRegistry::add) /
/// [`add_fallible`](HandlerRegistry::add_fallible) API and then moved into a
/// [`StyleResolver`](crate::StyleResolver); the registry cannot be mutated
/// afterwards, so later changes by the caller cannot affect a running engine.
///
/// Keys are either the key segment of a token (`"rounded"` matches
/// `"rounded:lg"`) or a literal full token (`"relative"` matches the bare
/// token `"relative"`).
///
/// # Example
///
/// ```rust
/// use breeze_styles::{style_map, HandlerRegistry};
///
/// let handlers = HandlerRegistry::new()
///     .add("relative", |_| style_map! { "position" => "relative" })
///     .add("z", |arg| match arg.and_then(|a| a.parse::<f64>().ok()) {
///         Some(z) => style_map! { "zIndex" => z },
///         None => style_map! {},
///     });
///
/// assert!(handlers.has("relative"));
/// assert_eq!(handlers.len(), 2);
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<Handler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an infallible handler, returning the updated registry for
    /// chaining. Re-adding a key replaces the previous handler.
    pub fn add<F>(self, key: &str, handler: F) -> Self
    where
        F: Fn(Option<&str>) -> StyleMap + 'static,
    {
        self.add_fallible(key, move |arg| Ok(handler(arg)))
    }

    /// Adds a handler that may fail.
    ///
    /// A handler error aborts the resolution that invoked it; see
    /// [`ResolveError`](crate::ResolveError).
    pub fn add_fallible<F>(mut self, key: &str, handler: F) -> Self
    where
        F: Fn(Option<&str>) -> Result<StyleMap, HandlerError> + 'static,
    {
        self.handlers.insert(key.to_string(), Box::new(handler));
        self
    }

    /// Looks up a handler by key.
    pub fn get(&self, key: &str) -> Option<&Handler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    /// Returns true if a handler is registered under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns an iterator over all registered handler keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(|s| s.as_str())
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("keys", &keys)
            .finish()
    }
}
