//! Binding adapter: dark-mode aware token lists with change detection.
//!
//! This is the glue a rendering layer uses: a [`StyleBinding`] owns a base
//! token list plus a dark-mode token list, resolves them through a
//! [`StyleResolver`], and skips the resolver entirely when the effective
//! token combination did not change since the previous call. Color mode
//! detection uses OS settings via `dark-light`, behind a swappable detector
//! for tests.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::error::ResolveError;
use crate::resolve::StyleResolver;
use crate::style::StyleMap;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light
/// or dark color mode.
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the current color mode via the active detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

/// A memoized pairing of base and dark-mode token lists.
///
/// On each call the binding concatenates its base tokens with the dark
/// tokens (the latter only in [`ColorMode::Dark`]) and compares the joined
/// combination against the previous call; the resolver is re-invoked only
/// when it changed. This layers a caller-side shortcut atop the resolver's
/// own cache, mirroring how a rendering layer avoids redundant work across
/// repeated renders with identical tokens.
///
/// # Example
///
/// ```rust
/// use breeze_styles::{
///     style_map, ColorMode, HandlerRegistry, StyleBinding, StyleResolver, StyleValue,
/// };
///
/// let handlers = HandlerRegistry::new().add("bg", |arg| match arg {
///     Some(color) => style_map! { "backgroundColor" => color },
///     None => style_map! {},
/// });
/// let mut resolver = StyleResolver::new(handlers);
///
/// let mut binding = StyleBinding::new(["bg:white"], ["bg:black"]);
///
/// let light = binding.styles(&mut resolver, ColorMode::Light).unwrap();
/// assert_eq!(light.get("backgroundColor"), Some(&StyleValue::from("white")));
///
/// let dark = binding.styles(&mut resolver, ColorMode::Dark).unwrap();
/// assert_eq!(dark.get("backgroundColor"), Some(&StyleValue::from("black")));
/// ```
#[derive(Debug, Default)]
pub struct StyleBinding {
    base: Vec<String>,
    dark: Vec<String>,
    last_key: Option<String>,
    last_styles: StyleMap,
}

impl StyleBinding {
    /// Creates a binding from base tokens and dark-mode tokens.
    ///
    /// Dark tokens are appended after the base tokens when resolving in
    /// [`ColorMode::Dark`], so they win attribute collisions.
    pub fn new<I, J>(base: I, dark: J) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        Self {
            base: base.into_iter().map(Into::into).collect(),
            dark: dark.into_iter().map(Into::into).collect(),
            last_key: None,
            last_styles: StyleMap::new(),
        }
    }

    /// Resolves the binding's tokens for the given color mode.
    ///
    /// Skips the resolver when the effective token combination is unchanged
    /// since the previous successful call, returning the memoized map. A
    /// resolver error leaves the memo untouched.
    pub fn styles(
        &mut self,
        resolver: &mut StyleResolver,
        mode: ColorMode,
    ) -> Result<StyleMap, ResolveError> {
        let tokens = self.effective_tokens(mode);
        let key = StyleResolver::cache_key(&tokens);

        if self.last_key.as_deref() == Some(key.as_str()) {
            return Ok(self.last_styles.clone());
        }

        let styles = resolver.resolve(&tokens)?;
        self.last_key = Some(key);
        self.last_styles = styles.clone();
        Ok(styles)
    }

    /// Resolves using the detected OS color mode.
    pub fn styles_detected(
        &mut self,
        resolver: &mut StyleResolver,
    ) -> Result<StyleMap, ResolveError> {
        self.styles(resolver, detect_color_mode())
    }

    fn effective_tokens(&self, mode: ColorMode) -> Vec<&str> {
        let dark = match mode {
            ColorMode::Dark => self.dark.as_slice(),
            ColorMode::Light => &[],
        };
        self.base
            .iter()
            .chain(dark.iter())
            .map(String::as_str)
            .collect()
    }
}
