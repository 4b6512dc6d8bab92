// SPDX-License-Identifier: MIT
//
// The palette color value.
//
// A `Color` is an opaque 8-bit sRGB triple — exactly what a `#rrggbb`
// string can express, nothing more. It has no identity beyond its value:
// two colors with the same channels are the same color.
//
// Every adjustment (lighten, saturate, shift hue) happens in HSL, which is
// what palette tools show their users. Perceptual questions (how different
// are these two colors?) go through Oklab instead.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ColorError;
use crate::hex::{format_hex, parse_hex};
use crate::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::oklch::{Oklab, Oklch, rgb_to_oklab, rgb_to_oklch, srgb_to_linear};

/// Relative luminance below which white text beats black text.
///
/// Solving (1.05) / (L + 0.05) = (L + 0.05) / 0.05 gives L ≈ 0.179.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.179;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// 8-bit sRGB channels, 0–255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A single palette color.
///
/// # Examples
///
/// ```
/// use swatch_color::Color;
///
/// let teal = Color::from_hex("#008080").unwrap();
/// assert_eq!(teal.to_hex(), "#008080");
/// assert_eq!(teal.complement().to_hex(), "#800000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: Rgb::new(r, g, b) }
    }

    #[inline]
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Parse `#RRGGBB`, `#RGB` (hash optional, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for anything else.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).map(Self::from_rgb)
    }

    /// Build from HSL (h in degrees, s and l in percent).
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl_to_rgb(hsl))
    }

    /// Build from raw HSL components; the hue wraps, `s`/`l` clamp.
    #[must_use]
    pub fn hsl_components(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsl(Hsl::new(h, s, l))
    }

    /// Build from OKLCH, reducing chroma if needed to stay in sRGB.
    #[must_use]
    pub fn from_oklch(oklch: Oklch) -> Self {
        Self::from_rgb(oklch.to_rgb())
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.rgb
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format_hex(self.rgb)
    }

    #[must_use]
    pub fn hsl(self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }

    #[must_use]
    pub fn oklch(self) -> Oklch {
        rgb_to_oklch(self.rgb)
    }

    #[must_use]
    pub fn oklab(self) -> Oklab {
        rgb_to_oklab(self.rgb)
    }

    /// Relative luminance per WCAG 2.1, in [0.0, 1.0].
    ///
    /// L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(f64::from(self.rgb.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.rgb.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.rgb.b) / 255.0);
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// Whether white text reads better than black text on this color.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.relative_luminance() < DARK_LUMINANCE_THRESHOLD
    }

    /// Perceptual distance (ΔE in Oklab) to another color.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.oklab().distance(other.oklab())
    }

    // ─── HSL Adjustments ─────────────────────────────────────────────────
    //
    // Amounts are in HSL percentage points / degrees.

    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let hsl = self.hsl();
        Self::hsl_components(hsl.h, hsl.s, hsl.l + amount)
    }

    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        let hsl = self.hsl();
        Self::hsl_components(hsl.h, hsl.s, l)
    }

    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        let hsl = self.hsl();
        Self::hsl_components(hsl.h, hsl.s + amount, hsl.l)
    }

    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        let hsl = self.hsl();
        Self::hsl_components(hsl.h, s, hsl.l)
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        let hsl = self.hsl();
        Self::hsl_components(hsl.h + degrees, hsl.s, hsl.l)
    }

    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        let hsl = self.hsl();
        Self::hsl_components(h, hsl.s, hsl.l)
    }

    /// The color on the opposite side of the hue wheel.
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Channel-wise inversion (`255 - v`).
    #[must_use]
    pub const fn invert(self) -> Self {
        let Rgb { r, g, b } = self.rgb;
        Self::rgb8(255 - r, 255 - g, 255 - b)
    }

    /// Luminance-preserving gray.
    #[must_use]
    pub fn grayscale(self) -> Self {
        let Rgb { r, g, b } = self.rgb;
        let y = 0.2126f64
            .mul_add(f64::from(r), 0.7152f64.mul_add(f64::from(g), 0.0722 * f64::from(b)));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = y.round().clamp(0.0, 255.0) as u8;
        Self::rgb8(v, v, v)
    }

    /// Mix with another color in sRGB. `t` = 0 gives `self`, 1 gives `other`.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            let v = (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let out = v.round().clamp(0.0, 255.0) as u8;
            out
        };
        Self::rgb8(
            lerp(self.rgb.r, other.rgb.r),
            lerp(self.rgb.g, other.rgb.g),
            lerp(self.rgb.b, other.rgb.b),
        )
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Colors travel as hex strings: `"#rrggbb"` out, any accepted form in.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string such as \"#1e90ff\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
                Color::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
