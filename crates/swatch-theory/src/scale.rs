//! Color scales — the 50…950 shade ramp around a base color.
//!
//! Every shade keeps the base hue. Lightness comes from a fixed table;
//! saturation is the base saturation times a per-shade multiplier, which
//! softens the pale end and tames the very dark end.

use swatch_color::Color;

/// Shade keys, lightest first.
pub const SHADE_KEYS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// HSL lightness per shade.
const LIGHTNESS: [f64; 11] = [97.0, 93.0, 86.0, 76.0, 64.0, 52.0, 43.0, 35.0, 27.0, 19.0, 11.0];

/// Multiplier on the base saturation per shade.
const SATURATION: [f64; 11] = [0.35, 0.5, 0.7, 0.85, 0.95, 1.0, 1.0, 0.95, 0.9, 0.85, 0.8];

/// One entry of a [`ColorScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub key: u16,
    pub color: Color,
}

/// An 11-step shade ramp generated from one base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    pub base: Color,
    shades: [Shade; 11],
}

impl ColorScale {
    /// The color for a shade key (`50`, `100`, … `950`).
    #[must_use]
    pub fn get(&self, key: u16) -> Option<Color> {
        self.shades.iter().find(|s| s.key == key).map(|s| s.color)
    }

    /// All shades, lightest first.
    #[must_use]
    pub const fn shades(&self) -> &[Shade] {
        &self.shades
    }

    /// Colors only, lightest first.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.shades.iter().map(|s| s.color).collect()
    }

    /// The shade key whose lightness is nearest the base color's.
    ///
    /// Useful to tell users where their color sits in the ramp.
    #[must_use]
    pub fn closest_shade_to_base(&self) -> u16 {
        let l = self.base.hsl().l;
        let mut best = (SHADE_KEYS[0], f64::MAX);
        for (key, target) in SHADE_KEYS.iter().zip(LIGHTNESS) {
            let d = (l - target).abs();
            if d < best.1 {
                best = (*key, d);
            }
        }
        best.0
    }
}

/// Generate the 50…950 ramp for `base`.
#[must_use]
pub fn generate_scale(base: Color) -> ColorScale {
    let hsl = base.hsl();
    let shades = std::array::from_fn(|i| Shade {
        key: SHADE_KEYS[i],
        color: Color::hsl_components(hsl.h, hsl.s * SATURATION[i], LIGHTNESS[i]),
    });
    ColorScale { base, shades }
}

/// Upper bound on the length of a [`tints`] or [`shades`] ramp.
pub const MAX_RAMP_STEPS: usize = 100;

/// `n` tints: mixes toward white, lightest last. Neither extreme included.
/// `n` is capped at [`MAX_RAMP_STEPS`].
#[must_use]
pub fn tints(base: Color, n: usize) -> Vec<Color> {
    ramp(base, Color::WHITE, n)
}

/// `n` shades: mixes toward black, darkest last. Neither extreme included.
/// `n` is capped at [`MAX_RAMP_STEPS`].
#[must_use]
pub fn shades(base: Color, n: usize) -> Vec<Color> {
    ramp(base, Color::BLACK, n)
}

fn ramp(base: Color, target: Color, n: usize) -> Vec<Color> {
    let n = n.min(MAX_RAMP_STEPS);
    let denom = (n + 1) as f64;
    (1..=n).map(|i| base.mix(target, i as f64 / denom)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
