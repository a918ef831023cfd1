//! Style attribute values and the flat mapping handlers produce.

use std::collections::HashMap;

use serde::Serialize;

/// Reserved attribute name carrying a pending background opacity.
///
/// Handlers that want the resolver to recombine the background color with an
/// alpha channel store the opacity here as a number. The resolver consumes
/// and removes this attribute during post-processing; it never appears in a
/// resolved [`StyleMap`].
pub const BG_OPACITY_ATTR: &str = "--bg-opacity";

/// Attribute name the opacity composition step rewrites.
pub const BACKGROUND_COLOR_ATTR: &str = "backgroundColor";

/// A single style attribute value: a number or a string.
///
/// Serializes untagged, so a [`StyleMap`] serializes to the flat
/// attribute-to-value object a rendering layer expects:
///
/// ```rust
/// use breeze_styles::{StyleMap, StyleValue};
///
/// let mut styles = StyleMap::new();
/// styles.insert("zIndex".into(), StyleValue::from(0));
/// styles.insert("position".into(), StyleValue::from("relative"));
///
/// let json = serde_json::to_value(&styles).unwrap();
/// assert_eq!(json["zIndex"], 0.0);
/// assert_eq!(json["position"], "relative");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (sizes, radii, z-indices, opacity markers).
    Number(f64),
    /// String value (colors, keywords like `"absolute"`).
    Str(String),
}

impl StyleValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Number(_) => None,
            StyleValue::Str(s) => Some(s.as_str()),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

/// Flat mapping from style attribute name to value.
///
/// Handlers return partial maps; the resolver merges them in token order
/// with plain overwrite-on-conflict semantics (later token wins). No nested
/// structures.
pub type StyleMap = HashMap<String, StyleValue>;

/// Builds a [`StyleMap`] from attribute/value pairs.
///
/// Convenience for handler bodies, mirroring the shape of the maps they
/// produce:
///
/// ```rust
/// use breeze_styles::style_map;
///
/// let styles = style_map! {
///     "position" => "absolute",
///     "zIndex" => 10,
/// };
/// assert_eq!(styles.len(), 2);
/// ```
#[macro_export]
macro_rules! style_map {
    () => { $crate::StyleMap::new() };
    ($($attr:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(map.insert($attr.to_string(), $crate::StyleValue::from($value));)+
        map
    }};
}
