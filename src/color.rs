//! Color parsing, contrast selection and serialization.
//!
//! Color strings are first handed to a [`ColorCanonicalizer`], which maps
//! anything it understands (named colors, hex, `rgb()`, `rgba()`, ...) onto one
//! of the two canonical functional forms:
//!
//! ```text
//! rgb(r, g, b)
//! rgba(r, g, b, a)
//! ```
//!
//! The channels are then read back by a structural match. Input that cannot
//! be canonicalized yields an unresolved [`Color`] rather than an error.
//!
//! # Example
//!
//! ```
//! use pixicon::ColorModel;
//!
//! let colors = ColorModel::new();
//! let red = colors.parse("red");
//! assert_eq!(red.to_string(), "rgb(255,0,0)");
//! assert_eq!(red.contrast().to_string(), "rgb(255,255,255)");
//!
//! let dimmed = red.with_alpha(0.4);
//! assert_eq!(dimmed.to_string(), "rgba(255,0,0,0.4)");
//!
//! assert!(!colors.parse("not a color").is_resolved());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches the canonical functional forms produced by a [`ColorCanonicalizer`].
static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb(a)?\((\d+), (\d+), (\d+)(?:, ([.\d]+))?\)$")
        .expect("canonical color pattern is valid")
});

/// Loosely spaced `rgb()`/`rgba()` input with integer channels and a plain
/// decimal alpha.
static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("functional color pattern is valid")
});

// ============================================================================
// Canonicalization
// ============================================================================

/// Maps arbitrary color strings to `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Colors without an alpha use the `rgb` form, colors with one use `rgba`.
/// Returns `None` for strings the implementation does not understand.
pub trait ColorCanonicalizer {
    fn canonicalize(&self, color: &str) -> Option<String>;
}

/// In-process canonicalizer accepting CSS color syntax.
///
/// `rgb()` and `rgba()` with integer channels are normalized directly and
/// keep their alpha text exactly as written, so `0.123` stays `0.123`.
/// Everything else (named colors, `#rgb`, `#rrggbbaa`, `hsl()`, percentages)
/// is delegated to `svgtypes`. Alpha from that path has 8-bit precision and
/// is printed with the fewest decimals that map back to the same byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssCanonicalizer;

impl ColorCanonicalizer for CssCanonicalizer {
    fn canonicalize(&self, color: &str) -> Option<String> {
        let color = color.trim();
        if let Some(canonical) = canonicalize_functional(color) {
            return Some(canonical);
        }

        let parsed: svgtypes::Color = color.parse().ok()?;
        let svgtypes::Color {
            red,
            green,
            blue,
            alpha,
        } = parsed;

        if alpha == u8::MAX {
            Some(format!("rgb({red}, {green}, {blue})"))
        } else {
            Some(format!(
                "rgba({red}, {green}, {blue}, {})",
                canonical_alpha(alpha)
            ))
        }
    }
}

/// Respaces `rgb()`/`rgba()` input without touching the alpha text.
///
/// Returns `None` when a channel is out of range or the alpha is not in
/// `0..=1`, leaving those cases to the general parser.
fn canonicalize_functional(color: &str) -> Option<String> {
    let caps = FUNCTIONAL.captures(color)?;
    let channel = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u8>().ok());
    let (red, green, blue) = (channel(1)?, channel(2)?, channel(3)?);

    match caps.get(4) {
        None => Some(format!("rgb({red}, {green}, {blue})")),
        Some(alpha) => {
            let text = alpha.as_str();
            let value: f64 = text.parse().ok()?;
            (0.0..=1.0)
                .contains(&value)
                .then(|| format!("rgba({red}, {green}, {blue}, {text})"))
        }
    }
}

/// Shortest decimal (two or three places) that rounds back to `alpha`.
fn canonical_alpha(alpha: u8) -> f64 {
    let exact = f64::from(alpha) / 255.0;
    let short = (exact * 100.0).round() / 100.0;
    if (short * 255.0).round() == f64::from(alpha) {
        short
    } else {
        (exact * 1000.0).round() / 1000.0
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGB color with optional alpha.
///
/// Channels are `None` when the source string could not be resolved; such a
/// color should be treated as "no color".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: Option<u8>,
    g: Option<u8>,
    b: Option<u8>,
    a: Option<f64>,
}

impl Color {
    pub(crate) const WHITE: Self = Self::rgb(255, 255, 255);
    pub(crate) const BLACK: Self = Self::rgb(0, 0, 0);

    pub(crate) const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: None,
        }
    }

    pub fn r(&self) -> Option<u8> {
        self.r
    }

    pub fn g(&self) -> Option<u8> {
        self.g
    }

    pub fn b(&self) -> Option<u8> {
        self.b
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    /// Returns true if all three color channels are known.
    pub fn is_resolved(&self) -> bool {
        self.r.is_some() && self.g.is_some() && self.b.is_some()
    }

    /// Effective opacity: the alpha channel, or fully opaque when unset.
    pub fn opacity(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }

    /// Picks white or black, whichever stands out more against this color.
    ///
    /// White is returned when `r + g + b < 256`. Unresolved colors get black.
    pub fn contrast(&self) -> Color {
        match (self.r, self.g, self.b) {
            (Some(r), Some(g), Some(b)) if u16::from(r) + u16::from(g) + u16::from(b) < 256 => {
                Self::WHITE
            }
            _ => Self::BLACK,
        }
    }

    /// Copies the color channels and replaces the alpha.
    pub fn with_alpha(&self, alpha: f64) -> Color {
        Self {
            a: Some(alpha),
            ..*self
        }
    }
}

/// Serializes as `rgb(r,g,b)`, or `rgba(r,g,b,a)` when alpha is set and
/// non-zero. Unresolved colors serialize as `transparent`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(r), Some(g), Some(b)) = (self.r, self.g, self.b) else {
            return f.write_str("transparent");
        };
        match self.a {
            Some(a) if a != 0.0 && !a.is_nan() => write!(f, "rgba({r},{g},{b},{a})"),
            _ => write!(f, "rgb({r},{g},{b})"),
        }
    }
}

// ============================================================================
// ColorModel
// ============================================================================

/// Parses color strings through an injected [`ColorCanonicalizer`].
#[derive(Debug, Clone, Default)]
pub struct ColorModel<K = CssCanonicalizer> {
    canonicalizer: K,
}

impl ColorModel {
    /// Creates a model backed by [`CssCanonicalizer`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: ColorCanonicalizer> ColorModel<K> {
    pub fn with_canonicalizer(canonicalizer: K) -> Self {
        Self { canonicalizer }
    }

    /// Parses any color string the canonicalizer understands.
    ///
    /// Never fails: unknown input produces a color with every channel unset.
    pub fn parse(&self, color: &str) -> Color {
        let Some(canonical) = self.canonicalizer.canonicalize(color) else {
            tracing::trace!(color, "color did not canonicalize");
            return Color::default();
        };

        let Some(caps) = CANONICAL.captures(&canonical) else {
            tracing::warn!(color, canonical = %canonical, "canonicalizer returned a non-canonical form");
            return Color::default();
        };

        let channel = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u8>().ok());
        let (r, g, b) = match (channel(2), channel(3), channel(4)) {
            (Some(r), Some(g), Some(b)) => (Some(r), Some(g), Some(b)),
            _ => return Color::default(),
        };

        let a = if caps.get(1).is_some() {
            caps.get(5)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .filter(|a| a.is_finite())
        } else {
            None
        };

        Color { r, g, b, a }
    }
}

// ============================================================================
// Tests
// ============================================================================
