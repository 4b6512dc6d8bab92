//! Palette scoring: diversity, hue harmony, accessibility, temperature.
//!
//! All scores are on a 0–100 scale so they can be shown side by side and
//! combined into one overall figure.

use swatch_color::{Color, hue_distance};

use crate::contrast::accessibility_score;

/// Oklab ΔE that counts as "fully distinct" for diversity scoring.
const DIVERSITY_FULL_DISTANCE: f64 = 0.5;

/// Hue gaps (degrees) that read as intentional relationships.
const HARMONIC_ANGLES: [f64; 7] = [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0];

/// Deviation from a harmonic angle at which a pair scores zero.
const HARMONY_TOLERANCE: f64 = 15.0;

/// HSL saturation below which a color has no meaningful hue.
pub const CHROMATIC_MIN_SATURATION: f64 = 10.0;

/// Mean pairwise perceptual distance, 0–100.
///
/// Fewer than two colors → 0.
#[must_use]
pub fn diversity_score(colors: &[Color]) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            total += a.distance(*b);
            pairs += 1;
        }
    }
    if pairs == 0 {
        return 0.0;
    }
    (total / pairs as f64 / DIVERSITY_FULL_DISTANCE * 100.0).min(100.0)
}

/// How closely hue gaps land on harmonic angles, 0–100.
///
/// Only chromatic colors take part. A palette with fewer than two
/// chromatic colors has nothing to clash and scores 100 (0 when empty).
#[must_use]
pub fn harmony_score(colors: &[Color]) -> f64 {
    if colors.is_empty() {
        return 0.0;
    }

    let hues: Vec<f64> = colors
        .iter()
        .map(|c| c.hsl())
        .filter(|hsl| hsl.s >= CHROMATIC_MIN_SATURATION)
        .map(|hsl| hsl.h)
        .collect();

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, &a) in hues.iter().enumerate() {
        for &b in &hues[i + 1..] {
            let gap = hue_distance(a, b);
            let deviation = HARMONIC_ANGLES
                .iter()
                .map(|angle| (gap - angle).abs())
                .fold(f64::MAX, f64::min);
            total += (1.0 - deviation / HARMONY_TOLERANCE).max(0.0);
            pairs += 1;
        }
    }

    if pairs == 0 {
        100.0
    } else {
        total / pairs as f64 * 100.0
    }
}

/// Perceived warmth of a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    /// Reds, oranges, yellows and pinks are warm; greens through violets
    /// cool; low-saturation colors neutral.
    #[must_use]
    pub fn of(color: Color) -> Self {
        let hsl = color.hsl();
        if hsl.s < CHROMATIC_MIN_SATURATION {
            Self::Neutral
        } else if hsl.h < 90.0 || hsl.h >= 330.0 {
            Self::Warm
        } else {
            Self::Cool
        }
    }
}

/// Count of warm / cool / neutral colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemperatureBalance {
    pub warm: usize,
    pub cool: usize,
    pub neutral: usize,
}

impl TemperatureBalance {
    #[must_use]
    pub fn of(colors: &[Color]) -> Self {
        colors.iter().fold(Self::default(), |mut acc, &c| {
            match Temperature::of(c) {
                Temperature::Warm => acc.warm += 1,
                Temperature::Cool => acc.cool += 1,
                Temperature::Neutral => acc.neutral += 1,
            }
            acc
        })
    }

    /// True when there are chromatic colors and all share a temperature.
    #[must_use]
    pub const fn is_single_temperature(&self) -> bool {
        (self.warm == 0) != (self.cool == 0)
    }
}

/// A complete scorecard for one palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteAnalysis {
    pub count: usize,
    pub diversity: f64,
    pub harmony: f64,
    pub accessibility: f64,
    /// Max minus min HSL lightness, in points.
    pub lightness_range: f64,
    pub average_saturation: f64,
    pub temperature: TemperatureBalance,
    /// 0.35·harmony + 0.35·diversity + 0.30·accessibility.
    pub overall: f64,
}

/// Score a palette.
#[must_use]
pub fn analyze(colors: &[Color]) -> PaletteAnalysis {
    let diversity = diversity_score(colors);
    let harmony = harmony_score(colors);
    let accessibility = accessibility_score(colors);

    let hsls: Vec<_> = colors.iter().map(|c| c.hsl()).collect();
    let (min_l, max_l) = hsls
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), h| (lo.min(h.l), hi.max(h.l)));
    let lightness_range = if hsls.is_empty() { 0.0 } else { max_l - min_l };
    let average_saturation = if hsls.is_empty() {
        0.0
    } else {
        hsls.iter().map(|h| h.s).sum::<f64>() / hsls.len() as f64
    };

    let overall = 0.30f64.mul_add(accessibility, 0.35f64.mul_add(harmony, 0.35 * diversity));

    PaletteAnalysis {
        count: colors.len(),
        diversity,
        harmony,
        accessibility,
        lightness_range,
        average_saturation,
        temperature: TemperatureBalance::of(colors),
        overall,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
