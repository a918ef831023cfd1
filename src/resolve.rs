//! The style resolver: token dispatch, merge, post-processing, and caching.

use crate::cache::BoundedCache;
use crate::color::{parse_color, to_rgba_string};
use crate::error::ResolveError;
use crate::registry::HandlerRegistry;
use crate::style::{StyleMap, StyleValue, BACKGROUND_COLOR_ATTR, BG_OPACITY_ATTR};
use crate::token::parse_token;

/// Default number of resolved token combinations kept in the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 200;

/// Separator joining tokens into a cache key. Not expected inside token
/// syntax, so distinct sequences produce distinct keys.
const CACHE_KEY_SEPARATOR: &str = ",";

/// Resolves ordered token sequences into merged style maps, memoizing each
/// combination it has seen.
///
/// The resolver owns its handler registry and cache: each engine instance
/// caches independently, so engines built from different handler sets never
/// share entries. Cache keys are order-sensitive; `["a", "b"]` and
/// `["b", "a"]` are distinct entries (and may legitimately resolve
/// differently, since later tokens win on attribute collisions).
///
/// # Example
///
/// ```rust
/// use breeze_styles::{style_map, HandlerRegistry, StyleResolver, StyleValue};
///
/// let handlers = HandlerRegistry::new()
///     .add("relative", |_| style_map! { "position" => "relative" })
///     .add("rounded", |arg| match arg {
///         Some("lg") => style_map! { "borderRadius" => 8 },
///         _ => style_map! {},
///     });
///
/// let mut resolver = StyleResolver::new(handlers);
/// let styles = resolver.resolve(&["relative", "rounded:lg"]).unwrap();
///
/// assert_eq!(styles.get("position"), Some(&StyleValue::from("relative")));
/// assert_eq!(styles.get("borderRadius"), Some(&StyleValue::from(8)));
/// ```
///
/// # Thread Safety
///
/// `resolve` takes `&mut self`: one logical owner per engine, mirroring a UI
/// rendering thread model. Wrap the resolver in a lock if it must be shared.
#[derive(Debug)]
pub struct StyleResolver {
    handlers: HandlerRegistry,
    cache: BoundedCache<String, StyleMap>,
}

impl StyleResolver {
    /// Creates a resolver with the default cache capacity
    /// ([`DEFAULT_CACHE_CAPACITY`]).
    pub fn new(handlers: HandlerRegistry) -> Self {
        Self::with_capacity(handlers, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a resolver whose cache holds at most `capacity` combinations.
    pub fn with_capacity(handlers: HandlerRegistry, capacity: usize) -> Self {
        Self {
            handlers,
            cache: BoundedCache::new(capacity),
        }
    }

    /// Resolves an ordered token sequence into a merged style map.
    ///
    /// Each token is parsed on its first colon and dispatched: first to the
    /// handler registered under the token's key segment, then, if none, to a
    /// handler registered under the literal full token (this is how bare
    /// tokens like `"relative"` match). Tokens with no handler at all are
    /// skipped silently. Partial results merge in token order with
    /// last-write-wins semantics, the background-opacity rule is applied, and
    /// the finished map is cached under the joined token sequence.
    ///
    /// An empty sequence resolves to an empty map (cached under the empty
    /// key, like any other combination).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Handler`] if any handler fails. The failed
    /// combination is not cached.
    pub fn resolve<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<StyleMap, ResolveError> {
        let cache_key = Self::cache_key(tokens);

        if let Some(hit) = self.cache.get(&cache_key) {
            return Ok(hit.clone());
        }

        let mut styles = StyleMap::new();
        for token in tokens {
            let token = token.as_ref();
            let parsed = parse_token(token);
            let handler = self
                .handlers
                .get(parsed.key)
                .or_else(|| self.handlers.get(token));

            if let Some(handler) = handler {
                let partial = handler(parsed.argument).map_err(|source| {
                    ResolveError::Handler {
                        token: token.to_string(),
                        source,
                    }
                })?;
                styles.extend(partial);
            }
        }

        compose_bg_opacity(&mut styles);

        self.cache.set(cache_key, styles.clone());
        Ok(styles)
    }

    /// The memoization key for a token sequence: the tokens joined with a
    /// comma, in given order.
    pub fn cache_key<S: AsRef<str>>(tokens: &[S]) -> String {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(CACHE_KEY_SEPARATOR)
    }

    /// The engine's cache, exposed for inspection.
    pub fn cache(&self) -> &BoundedCache<String, StyleMap> {
        &self.cache
    }
}

/// Recombines a pending `--bg-opacity` with the background color.
///
/// Fires only when the accumulator holds both a numeric opacity marker and a
/// `backgroundColor` string whose RGB channels can be extracted; the color is
/// then rewritten as an `rgba(...)` string with the marker as alpha. The
/// marker is removed unconditionally, whether or not the rewrite fired, so it
/// never leaks into a resolved map.
fn compose_bg_opacity(styles: &mut StyleMap) {
    if let Some(alpha) = styles.get(BG_OPACITY_ATTR).and_then(StyleValue::as_number) {
        let rgb = styles
            .get(BACKGROUND_COLOR_ATTR)
            .and_then(StyleValue::as_str)
            .and_then(parse_color);
        if let Some(rgb) = rgb {
            styles.insert(
                BACKGROUND_COLOR_ATTR.to_string(),
                StyleValue::Str(to_rgba_string(rgb, alpha)),
            );
        }
    }
    styles.remove(BG_OPACITY_ATTR);
}
