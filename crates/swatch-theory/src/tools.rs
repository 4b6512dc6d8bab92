//! Whole-palette utilities: deduplication, sorting, bulk adjustments.
//!
//! Palettes may legitimately hold duplicates; these are opt-in tools.

use std::collections::HashSet;

use swatch_color::Color;

use crate::error::{Result, TheoryError};

/// Remove exact duplicates, keeping the first occurrence.
#[must_use]
pub fn dedupe(colors: &[Color]) -> Vec<Color> {
    let mut seen = HashSet::with_capacity(colors.len());
    colors.iter().copied().filter(|c| seen.insert(*c)).collect()
}

/// Remove colors within `threshold` (Oklab ΔE) of an earlier kept color.
#[must_use]
pub fn dedupe_similar(colors: &[Color], threshold: f64) -> Vec<Color> {
    let mut kept: Vec<Color> = Vec::with_capacity(colors.len());
    for &c in colors {
        if kept.iter().all(|k| k.distance(c) >= threshold) {
            kept.push(c);
        }
    }
    kept
}

/// Property to order a palette by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Hue,
    Saturation,
    Lightness,
    Luminance,
}

impl SortKey {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Luminance => "luminance",
        }
    }

    fn value(self, c: Color) -> f64 {
        match self {
            Self::Hue => c.hsl().h,
            Self::Saturation => c.hsl().s,
            Self::Lightness => c.hsl().l,
            Self::Luminance => c.relative_luminance(),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hue" => Ok(Self::Hue),
            "saturation" | "sat" => Ok(Self::Saturation),
            "lightness" | "light" => Ok(Self::Lightness),
            "luminance" | "lum" => Ok(Self::Luminance),
            _ => Err(TheoryError::UnknownName { kind: "sort key", name: s.to_owned() }),
        }
    }
}

/// Stable ascending sort by `key`.
#[must_use]
pub fn sort_by(colors: &[Color], key: SortKey) -> Vec<Color> {
    let mut out = colors.to_vec();
    out.sort_by(|a, b| key.value(*a).total_cmp(&key.value(*b)));
    out
}

/// A single adjustment applied uniformly to every palette color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Lighten(f64),
    Darken(f64),
    Saturate(f64),
    Desaturate(f64),
    ShiftHue(f64),
    Invert,
    Grayscale,
}

impl Adjustment {
    #[must_use]
    pub fn apply(self, c: Color) -> Color {
        match self {
            Self::Lighten(v) => c.lighten(v),
            Self::Darken(v) => c.darken(v),
            Self::Saturate(v) => c.saturate(v),
            Self::Desaturate(v) => c.desaturate(v),
            Self::ShiftHue(v) => c.shift_hue(v),
            Self::Invert => c.invert(),
            Self::Grayscale => c.grayscale(),
        }
    }
}

#[must_use]
pub fn adjust_all(colors: &[Color], adjustment: Adjustment) -> Vec<Color> {
    colors.iter().map(|&c| adjustment.apply(c)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let (a, b, c) = (hex("#111111"), hex("#222222"), hex("#333333"));
        assert_eq!(dedupe(&[b, a, b, c, a]), vec![b, a, c]);
        assert!(dedupe(&[]).is_empty());
    }

    #[test]
    fn dedupe_similar_drops_near_neighbors() {
        let colors = [hex("#336699"), hex("#33669a"), hex("#ff0000"), hex("#fe0101")];
        assert_eq!(dedupe_similar(&colors, 0.02), vec![hex("#336699"), hex("#ff0000")]);
        // Zero threshold keeps everything, duplicates included.
        assert_eq!(dedupe_similar(&colors, 0.0).len(), 4);
    }

    #[test]
    fn sort_by_lightness() {
        let colors = [Color::WHITE, Color::BLACK, hex("#808080")];
        assert_eq!(
            sort_by(&colors, SortKey::Lightness),
            vec![Color::BLACK, hex("#808080"), Color::WHITE]
        );
    }

    #[test]
    fn sort_by_hue_is_stable() {
        // Both grays have hue 0 and keep their relative order.
        let colors = [hex("#0000ff"), hex("#444444"), hex("#00ff00"), hex("#bbbbbb")];
        assert_eq!(
            sort_by(&colors, SortKey::Hue),
            vec![hex("#444444"), hex("#bbbbbb"), hex("#00ff00"), hex("#0000ff")]
        );
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("Luminance".parse::<SortKey>().unwrap(), SortKey::Luminance);
        assert_eq!("sat".parse::<SortKey>().unwrap(), SortKey::Saturation);
        assert!("chroma".parse::<SortKey>().is_err());
    }

    #[test]
    fn adjust_all_applies_to_each() {
        let colors = [hex("#123456"), hex("#abcdef")];
        assert_eq!(adjust_all(&colors, Adjustment::Invert), vec![hex("#edcba9"), hex("#543210")]);
        let gray = adjust_all(&colors, Adjustment::Grayscale);
        assert!(gray.iter().all(|c| c.hsl().is_achromatic()));
        let lighter = adjust_all(&colors, Adjustment::Lighten(10.0));
        assert!(lighter[0].hsl().l > colors[0].hsl().l);
    }
}
