// SPDX-License-Identifier: MIT
//
// swatch-color — the color value underneath every palette operation.
//
// A palette color is a plain `#rrggbb` value. This crate parses and
// formats that notation, converts between sRGB, HSL and OKLCH, and offers
// the handful of per-color adjustments the higher layers build on.
//
//   hex.rs   → `#RGB` / `#RRGGBB` parsing and formatting
//   color.rs → `Rgb`, `Color` (Copy value type, serde as hex string)
//   hsl.rs   → sRGB ↔ HSL, hue arithmetic
//   oklch.rs → sRGB ↔ Oklab ↔ OKLCH, gamut mapping, perceptual distance

pub mod color;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod oklch;

pub use color::{Color, Rgb};
pub use error::{ColorError, Result};
pub use hex::{is_valid_hex, normalize_hex, parse_hex};
pub use hsl::{Hsl, hue_distance, interpolate_hue, normalize_hue};
pub use oklch::{Oklab, Oklch};

/// Parse a hex string straight to RGB.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for malformed input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    parse_hex(hex)
}

/// Format RGB as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    hex::format_hex(rgb)
}

/// Parse a hex string straight to HSL.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for malformed input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    parse_hex(hex).map(hsl::rgb_to_hsl)
}

/// Format HSL as lowercase `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hex::format_hex(hsl::hsl_to_rgb(hsl))
}

pub use hsl::{hsl_to_rgb, rgb_to_hsl};

/// Parse every entry of a hex list, failing on the first bad one.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] naming the first invalid entry.
pub fn parse_all<S: AsRef<str>>(hexes: &[S]) -> Result<Vec<Color>> {
    hexes.iter().map(|h| Color::from_hex(h.as_ref())).collect()
}
