//! Utility-token styling engine with pluggable handlers and memoized
//! resolution.
//!
//! Short textual tokens like `"rounded:lg"` or `"z:0"` resolve into flat
//! style attribute maps through a set of caller-supplied handler functions.
//! The crate ships no handlers of its own; it provides the resolution
//! machinery:
//!
//! - [`parse_token`]: splits a token into handler key and argument
//! - [`HandlerRegistry`]: the immutable set of named handlers
//! - [`StyleResolver`]: dispatch, ordered merge, background-opacity
//!   composition, and per-combination memoization
//! - [`BoundedCache`]: the fixed-capacity store backing that memoization
//! - [`StyleBinding`]: dark-mode aware token lists with change detection
//!
//! # Example
//!
//! ```rust
//! use breeze_styles::{style_map, HandlerRegistry, StyleResolver, StyleValue};
//!
//! let handlers = HandlerRegistry::new()
//!     .add("relative", |_| style_map! { "position" => "relative" })
//!     .add("z", |arg| match arg.and_then(|a| a.parse::<f64>().ok()) {
//!         Some(z) => style_map! { "zIndex" => z },
//!         None => style_map! {},
//!     });
//!
//! let mut resolver = StyleResolver::new(handlers);
//! let styles = resolver.resolve(&["relative", "z:10"]).unwrap();
//!
//! assert_eq!(styles.get("position"), Some(&StyleValue::from("relative")));
//! assert_eq!(styles.get("zIndex"), Some(&StyleValue::from(10)));
//! ```

mod binding;
mod cache;
mod color;
mod error;
mod registry;
mod resolve;
mod style;
mod token;

pub use binding::{detect_color_mode, set_color_mode_detector, ColorMode, StyleBinding};
pub use cache::BoundedCache;
pub use color::{parse_color, Rgb};
pub use error::{HandlerError, ResolveError};
pub use registry::{Handler, HandlerRegistry};
pub use resolve::{StyleResolver, DEFAULT_CACHE_CAPACITY};
pub use style::{StyleMap, StyleValue, BACKGROUND_COLOR_ATTR, BG_OPACITY_ATTR};
pub use token::{parse_token, ParsedToken};
