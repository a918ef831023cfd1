//! Color string parsing for background-opacity composition.
//!
//! The resolver needs the RGB channels of whatever string a handler stored
//! under `backgroundColor` so it can recombine them with a pending opacity.
//! Accepted forms: `#rgb` / `#rrggbb` hex, `rgb(...)` / `rgba(...)`
//! functional notation, and the common CSS color names.

/// An RGB triplet extracted from a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses a color string into its RGB channels.
///
/// Returns `None` for anything unrecognized; alpha channels in the input
/// (`rgba(...)`) are discarded, since the caller supplies its own.
///
/// ```rust
/// use breeze_styles::{parse_color, Rgb};
///
/// assert_eq!(parse_color("red"), Some(Rgb { r: 255, g: 0, b: 0 }));
/// assert_eq!(parse_color("#1a2b3c"), Some(Rgb { r: 26, g: 43, b: 60 }));
/// assert_eq!(parse_color("rgb(4, 8, 15)"), Some(Rgb { r: 4, g: 8, b: 15 }));
/// assert_eq!(parse_color("not-a-color"), None);
/// ```
pub fn parse_color(input: &str) -> Option<Rgb> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = strip_function(input, "rgba") {
        return parse_rgb_args(args);
    }
    if let Some(args) = strip_function(input, "rgb") {
        return parse_rgb_args(args);
    }
    named_color(&input.to_ascii_lowercase())
}

/// Formats RGB channels and an alpha value as an `rgba(...)` string.
///
/// The alpha is rendered as a bare number: `0.5` stays `0.5`, `1` stays `1`.
pub(crate) fn to_rgba_string(rgb: Rgb, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        3 => {
            let r = hex_digit(hex.as_bytes()[0])?;
            let g = hex_digit(hex.as_bytes()[1])?;
            let b = hex_digit(hex.as_bytes()[2])?;
            Some(Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        6 => {
            let channel = |i: usize| -> Option<u8> {
                let hi = hex_digit(hex.as_bytes()[i])?;
                let lo = hex_digit(hex.as_bytes()[i + 1])?;
                Some(hi * 16 + lo)
            };
            Some(Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            })
        }
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Strips `name(` and the trailing `)` from a functional color notation.
fn strip_function<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let rest = input.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<Rgb> {
    let mut parts = args.split(',');
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    // A fourth part (alpha) is tolerated and ignored; more is malformed.
    if parts.clone().count() > 1 {
        return None;
    }
    Some(Rgb { r, g, b })
}

fn parse_channel(part: &str) -> Option<u8> {
    let value: f64 = part.trim().parse().ok()?;
    if !(0.0..=255.0).contains(&value) {
        return None;
    }
    Some(value.round() as u8)
}

fn named_color(name: &str) -> Option<Rgb> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        _ => return None,
    };
    Some(Rgb { r, g, b })
}
