//! Seeded palette generation.
//!
//! The same `(count, mode, seed)` always yields the same palette. Hues are
//! spread by the golden angle from a random starting hue, so even a "random"
//! palette never bunches up on one side of the wheel.

use swatch_color::Color;

use crate::error::{Result, TheoryError};
use crate::harmony::HarmonyKind;

/// Largest palette the generator produces.
pub const MAX_COLORS: usize = 20;

/// Golden angle = 360 / phi^2 ≈ 137.508
const GOLDEN_ANGLE: f64 = 137.507_764;

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random f64 in [lo, hi].
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let t = f64::from(self.next()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t, lo)
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

/// Flavor of generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RandomMode {
    /// Any saturation and lightness within readable bounds.
    #[default]
    Random,
    /// A harmony around a random base, padded with lightness variants.
    Harmony(HarmonyKind),
    /// Light, soft colors.
    Pastel,
    /// Fully saturated mid-lightness colors.
    Vibrant,
    /// Low-saturation, earthy colors.
    Muted,
}

impl RandomMode {
    /// Saturation and lightness ranges (HSL points).
    const fn ranges(self) -> ((f64, f64), (f64, f64)) {
        match self {
            Self::Random => ((40.0, 90.0), (30.0, 75.0)),
            Self::Harmony(_) => ((55.0, 85.0), (45.0, 65.0)),
            Self::Pastel => ((50.0, 80.0), (80.0, 90.0)),
            Self::Vibrant => ((80.0, 100.0), (45.0, 60.0)),
            Self::Muted => ((15.0, 35.0), (35.0, 65.0)),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Harmony(kind) => kind.name(),
            Self::Pastel => "pastel",
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
        }
    }
}

impl std::str::FromStr for RandomMode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "pastel" => Ok(Self::Pastel),
            "vibrant" => Ok(Self::Vibrant),
            "muted" => Ok(Self::Muted),
            other => HarmonyKind::from_name(other)
                .map(Self::Harmony)
                .ok_or_else(|| TheoryError::UnknownName {
                    kind: "generation mode",
                    name: s.to_owned(),
                }),
        }
    }
}

/// Generate `count` colors (clamped to 1..=20) deterministically from `seed`.
#[must_use]
pub fn random_palette(count: usize, mode: RandomMode, seed: u32) -> Vec<Color> {
    let count = count.clamp(1, MAX_COLORS);
    let mut rng = Xorshift32::new(seed);
    let ((s_lo, s_hi), (l_lo, l_hi)) = mode.ranges();
    let base_hue = rng.range(0.0, 360.0);

    match mode {
        RandomMode::Harmony(kind) => {
            let base =
                Color::hsl_components(base_hue, rng.range(s_lo, s_hi), rng.range(l_lo, l_hi));
            let core = kind.generate(base);
            pad_with_variants(&core, count)
        }
        _ => (0..count)
            .map(|i| {
                let jitter = rng.range(-12.0, 12.0);
                let h = (i as f64).mul_add(GOLDEN_ANGLE, base_hue) + jitter;
                Color::hsl_components(h, rng.range(s_lo, s_hi), rng.range(l_lo, l_hi))
            })
            .collect(),
    }
}

/// Extend `core` to `count` colors with alternating lighter/darker variants.
fn pad_with_variants(core: &[Color], count: usize) -> Vec<Color> {
    let mut out: Vec<Color> = core.iter().copied().take(count).collect();
    let mut round = 1u32;
    while out.len() < count {
        let step = 12.0 * f64::from(round.div_ceil(2));
        let delta = if round % 2 == 1 { step } else { -step };
        for &c in core {
            if out.len() == count {
                break;
            }
            out.push(c.lighten(delta));
        }
        round += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deterministic() {
        let a = random_palette(6, RandomMode::Random, 42);
        let b = random_palette(6, RandomMode::Random, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = random_palette(5, RandomMode::Vibrant, 42);
        let b = random_palette(5, RandomMode::Vibrant, 99);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_seed_is_usable() {
        let p = random_palette(3, RandomMode::Random, 0);
        assert_eq!(p.len(), 3);
        assert_eq!(p, random_palette(3, RandomMode::Random, 1));
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(random_palette(0, RandomMode::Random, 7).len(), 1);
        assert_eq!(random_palette(500, RandomMode::Muted, 7).len(), MAX_COLORS);
    }

    #[test]
    fn pastel_is_light() {
        for c in random_palette(10, RandomMode::Pastel, 3) {
            assert!(c.hsl().l >= 79.0, "{c} too dark for pastel");
        }
    }

    #[test]
    fn muted_is_low_saturation() {
        for c in random_palette(10, RandomMode::Muted, 11) {
            assert!(c.hsl().s <= 37.0, "{c} too saturated for muted");
        }
    }

    #[test]
    fn harmony_mode_starts_with_the_harmony() {
        let p = random_palette(3, RandomMode::Harmony(HarmonyKind::Triadic), 5);
        assert_eq!(p.len(), 3);
        assert_eq!(p, HarmonyKind::Triadic.generate(p[0]));
    }

    #[test]
    fn harmony_mode_pads_with_variants() {
        let p = random_palette(7, RandomMode::Harmony(HarmonyKind::Complementary), 5);
        assert_eq!(p.len(), 7);
        // Padding alternates lighter, darker around the two core colors.
        assert!(p[2].hsl().l > p[0].hsl().l);
        assert!(p[4].hsl().l < p[0].hsl().l);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("pastel".parse::<RandomMode>().unwrap(), RandomMode::Pastel);
        assert_eq!(
            "split-complementary".parse::<RandomMode>().unwrap(),
            RandomMode::Harmony(HarmonyKind::SplitComplementary)
        );
        assert!("neon".parse::<RandomMode>().is_err());
    }
}
