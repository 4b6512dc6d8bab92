//! Palette recommendations — threshold rules over an analysis.
//!
//! Each rule looks at one property of the palette and, when it trips,
//! emits a [`Recommendation`] with a message and (where it makes sense)
//! concrete colors to add. [`optimize`] applies the two fixes that can be
//! made without taste: dropping near-duplicates and adding contrast anchors.

use swatch_color::Color;

use crate::analysis::{CHROMATIC_MIN_SATURATION, analyze};
use crate::contrast::{AA_NORMAL, accessible_pairs};
use crate::harmony::HarmonyKind;
use crate::tools::dedupe_similar;

/// Oklab ΔE under which two colors read as the same swatch.
pub const NEAR_DUPLICATE_DISTANCE: f64 = 0.04;

const MIN_COLORS: usize = 3;
const MAX_COLORS: usize = 10;
const MIN_LIGHTNESS_RANGE: f64 = 40.0;
const MAX_AVERAGE_SATURATION: f64 = 85.0;
const MIN_AVERAGE_SATURATION: f64 = 15.0;
const MIN_HARMONY: f64 = 50.0;

/// HSL lightness of the anchors [`optimize`] adds.
const DARK_ANCHOR_LIGHTNESS: f64 = 12.0;
const LIGHT_ANCHOR_LIGHTNESS: f64 = 95.0;
/// Anchors keep a hint of the palette hue but never more than this saturation.
const ANCHOR_MAX_SATURATION: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationKind {
    TooFewColors,
    TooManyColors,
    NearDuplicates,
    LowContrast,
    NarrowLightness,
    Oversaturated,
    Undersaturated,
    SingleTemperature,
    LowHarmony,
}

impl RecommendationKind {
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::LowContrast => Severity::Critical,
            Self::TooFewColors
            | Self::NearDuplicates
            | Self::NarrowLightness
            | Self::LowHarmony => Severity::Warning,
            Self::TooManyColors
            | Self::Oversaturated
            | Self::Undersaturated
            | Self::SingleTemperature => Severity::Info,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TooFewColors => "too-few-colors",
            Self::TooManyColors => "too-many-colors",
            Self::NearDuplicates => "near-duplicates",
            Self::LowContrast => "low-contrast",
            Self::NarrowLightness => "narrow-lightness",
            Self::Oversaturated => "oversaturated",
            Self::Undersaturated => "undersaturated",
            Self::SingleTemperature => "single-temperature",
            Self::LowHarmony => "low-harmony",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub severity: Severity,
    pub message: String,
    /// Colors worth adding to address the issue. May be empty.
    pub suggested: Vec<Color>,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: impl Into<String>, suggested: Vec<Color>) -> Self {
        log::trace!("recommend: {} triggered", kind.name());
        Self { kind, severity: kind.severity(), message: message.into(), suggested }
    }
}

/// Run every rule over `colors`. Most severe first; rule order within a
/// severity.
#[must_use]
pub fn recommend(colors: &[Color]) -> Vec<Recommendation> {
    use RecommendationKind as K;

    let analysis = analyze(colors);
    let mut out = Vec::new();

    if colors.len() < MIN_COLORS {
        out.push(Recommendation::new(
            K::TooFewColors,
            format!("only {} color(s); most palettes need at least {MIN_COLORS}", colors.len()),
            Vec::new(),
        ));
    }
    if colors.len() > MAX_COLORS {
        out.push(Recommendation::new(
            K::TooManyColors,
            format!(
                "{} colors is hard to apply consistently; consider at most {MAX_COLORS}",
                colors.len()
            ),
            Vec::new(),
        ));
    }

    let duplicates = near_duplicate_count(colors);
    if duplicates > 0 {
        out.push(Recommendation::new(
            K::NearDuplicates,
            format!("{duplicates} pair(s) of colors are nearly indistinguishable"),
            Vec::new(),
        ));
    }

    if colors.len() >= 2 && accessible_pairs(colors, AA_NORMAL).is_empty() {
        let anchor = contrast_anchor(colors);
        out.push(Recommendation::new(
            K::LowContrast,
            format!("no color pair reaches {AA_NORMAL}:1; text will be hard to read"),
            vec![anchor],
        ));
    }

    if let Some(&first) = colors.first() {
        if colors.len() >= 2 && analysis.lightness_range < MIN_LIGHTNESS_RANGE {
            out.push(Recommendation::new(
                K::NarrowLightness,
                format!(
                    "lightness only spans {:.0} points; add a darker and a lighter tone",
                    analysis.lightness_range
                ),
                vec![first.with_lightness(15.0), first.with_lightness(90.0)],
            ));
        }

        if analysis.average_saturation > MAX_AVERAGE_SATURATION {
            out.push(Recommendation::new(
                K::Oversaturated,
                format!(
                    "average saturation {:.0}% is tiring to look at; mute some colors",
                    analysis.average_saturation
                ),
                Vec::new(),
            ));
        } else if analysis.average_saturation < MIN_AVERAGE_SATURATION {
            out.push(Recommendation::new(
                K::Undersaturated,
                format!(
                    "average saturation {:.0}% feels flat; add an accent",
                    analysis.average_saturation
                ),
                vec![first.with_saturation(70.0)],
            ));
        }
    }

    let chromatic_count = colors.iter().filter(|c| c.hsl().s >= CHROMATIC_MIN_SATURATION).count();
    let chromatic = colors.iter().copied().find(|c| c.hsl().s >= CHROMATIC_MIN_SATURATION);

    if analysis.temperature.is_single_temperature() {
        let which = if analysis.temperature.warm > 0 { "warm" } else { "cool" };
        out.push(Recommendation::new(
            K::SingleTemperature,
            format!("every color is {which}; a contrasting accent adds balance"),
            chromatic.map(Color::complement).into_iter().collect(),
        ));
    }

    // Hue relationships need at least two hues to judge.
    if chromatic_count >= 2 && analysis.harmony < MIN_HARMONY {
        let suggested = chromatic
            .map(|c| HarmonyKind::Triadic.generate(c).into_iter().skip(1).collect())
            .unwrap_or_default();
        out.push(Recommendation::new(
            K::LowHarmony,
            format!("hue relationships look accidental (harmony {:.0}/100)", analysis.harmony),
            suggested,
        ));
    }

    // Stable, so rule order survives within a severity.
    out.sort_by(|a, b| b.severity.cmp(&a.severity));
    out
}

/// Apply the mechanical fixes: drop near-duplicates, then add a dark and a
/// light anchor if no pair reaches AA contrast.
///
/// Running it twice gives the same palette as running it once.
#[must_use]
pub fn optimize(colors: &[Color]) -> Vec<Color> {
    let mut out = dedupe_similar(colors, NEAR_DUPLICATE_DISTANCE);
    let Some(&first) = out.first() else {
        return out;
    };

    if accessible_pairs(&out, AA_NORMAL).is_empty() {
        let hsl = first.hsl();
        let s = hsl.s.min(ANCHOR_MAX_SATURATION);
        for l in [DARK_ANCHOR_LIGHTNESS, LIGHT_ANCHOR_LIGHTNESS] {
            let anchor = Color::hsl_components(hsl.h, s, l);
            if out.iter().all(|c| c.distance(anchor) >= NEAR_DUPLICATE_DISTANCE) {
                out.push(anchor);
            }
        }
    }

    log::debug!("optimize: {} colors in, {} out", colors.len(), out.len());
    out
}

fn near_duplicate_count(colors: &[Color]) -> usize {
    colors
        .iter()
        .enumerate()
        .map(|(i, a)| {
            colors[i + 1..].iter().filter(|b| a.distance(**b) < NEAR_DUPLICATE_DISTANCE).count()
        })
        .sum()
}

/// Black or white, whichever contrasts more with the palette's mean luminance.
fn contrast_anchor(colors: &[Color]) -> Color {
    let mean = colors.iter().map(|c| c.relative_luminance()).sum::<f64>() / colors.len() as f64;
    if 1.05 / (mean + 0.05) > (mean + 0.05) / 0.05 {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
