//! WCAG 2.1 contrast ratios and compliance levels.
//!
//! Thresholds, as published:
//!
//! - AA normal text: 4.5:1, AA large text: 3:1
//! - AAA normal text: 7:1, AAA large text: 4.5:1
//!
//! Ratios are measured in sRGB relative luminance (the WCAG definition);
//! corrective adjustments move HSL lightness, so hue and saturation survive.

use bitflags::bitflags;
use swatch_color::Color;

pub const AA_LARGE: f64 = 3.0;
pub const AA_NORMAL: f64 = 4.5;
pub const AAA_LARGE: f64 = 4.5;
pub const AAA_NORMAL: f64 = 7.0;

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// The highest WCAG level a ratio satisfies for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// 3:1 — large text only.
    AaLarge,
    /// 4.5:1 — normal text.
    Aa,
    /// 7:1 — enhanced.
    Aaa,
}

impl WcagLevel {
    /// Classify a contrast ratio. Boundaries are inclusive.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL {
            Self::Aaa
        } else if ratio >= AA_NORMAL {
            Self::Aa
        } else if ratio >= AA_LARGE {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Weight used when scoring a whole palette.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Fail => 0.0,
            Self::AaLarge => 0.5,
            Self::Aa => 0.8,
            Self::Aaa => 1.0,
        }
    }
}

bitflags! {
    /// Every WCAG text criterion a color pair passes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Compliance: u8 {
        const AA_LARGE   = 0b0001;
        const AA_NORMAL  = 0b0010;
        const AAA_LARGE  = 0b0100;
        const AAA_NORMAL = 0b1000;
    }
}

impl Compliance {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::AA_LARGE, ratio >= AA_LARGE);
        flags.set(Self::AA_NORMAL, ratio >= AA_NORMAL);
        flags.set(Self::AAA_LARGE, ratio >= AAA_LARGE);
        flags.set(Self::AAA_NORMAL, ratio >= AAA_NORMAL);
        flags
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Contrast of one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub level: WcagLevel,
    pub compliance: Compliance,
}

impl ContrastReport {
    /// Ratio rounded to two decimals, as displayed (`4.54:1`).
    #[must_use]
    pub fn ratio_rounded(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }
}

/// Full WCAG evaluation of a text color over a background.
#[must_use]
pub fn check(foreground: Color, background: Color) -> ContrastReport {
    let ratio = contrast_ratio(foreground, background);
    ContrastReport {
        foreground,
        background,
        ratio,
        level: WcagLevel::from_ratio(ratio),
        compliance: Compliance::from_ratio(ratio),
    }
}

/// One unordered pair of palette entries (`i < j`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPair {
    pub i: usize,
    pub j: usize,
    pub ratio: f64,
    pub level: WcagLevel,
}

/// Contrast of every unordered pair in a palette, in index order.
#[must_use]
pub fn contrast_matrix(colors: &[Color]) -> Vec<ContrastPair> {
    let mut pairs = Vec::with_capacity(colors.len() * colors.len().saturating_sub(1) / 2);
    for (i, &a) in colors.iter().enumerate() {
        for (j, &b) in colors.iter().enumerate().skip(i + 1) {
            let ratio = contrast_ratio(a, b);
            pairs.push(ContrastPair { i, j, ratio, level: WcagLevel::from_ratio(ratio) });
        }
    }
    pairs
}

/// Pairs whose ratio reaches `min_ratio`, best first.
#[must_use]
pub fn accessible_pairs(colors: &[Color], min_ratio: f64) -> Vec<ContrastPair> {
    let mut pairs: Vec<_> = contrast_matrix(colors)
        .into_iter()
        .filter(|p| p.ratio >= min_ratio)
        .collect();
    pairs.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    pairs
}

/// Palette-wide accessibility, 0–100.
///
/// Mean of the per-pair level weights (AAA 1.0, AA 0.8, AA-large 0.5).
/// A palette with fewer than two colors has no pairs and scores 0.
#[must_use]
pub fn accessibility_score(colors: &[Color]) -> f64 {
    let pairs = contrast_matrix(colors);
    if pairs.is_empty() {
        return 0.0;
    }
    let total: f64 = pairs.iter().map(|p| p.level.weight()).sum();
    total / pairs.len() as f64 * 100.0
}

// ---------------------------------------------------------------------------
// Corrections
// ---------------------------------------------------------------------------

/// Black or white, whichever contrasts more with `background`.
#[must_use]
pub fn best_text_color(background: Color) -> Color {
    if contrast_ratio(Color::WHITE, background) > contrast_ratio(Color::BLACK, background) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Adjust `fg`'s HSL lightness until it meets `min_ratio` against `bg`.
///
/// Direction: away from the background's luminance (lighter on dark
/// backgrounds, darker on light ones). Uses binary search so the result
/// stays as close to the original lightness as possible.
///
/// If no lightness reaches `min_ratio` in that direction, returns the
/// extreme (lightness 100 or 0) which is the best achievable.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Color {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let hsl = fg.hsl();
    let go_lighter = bg.is_dark();

    // Binary search on HSL lightness.
    let (mut lo, mut hi) = if go_lighter { (hsl.l, 100.0) } else { (0.0, hsl.l) };

    let extreme = Color::hsl_components(hsl.h, hsl.s, if go_lighter { 100.0 } else { 0.0 });
    let mut best = extreme;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        let candidate = Color::hsl_components(hsl.h, hsl.s, mid);
        if contrast_ratio(candidate, bg) >= min_ratio {
            best = candidate;
            // Try to stay closer to original lightness.
            if go_lighter {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if go_lighter {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#7f3fbf");
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let samples = ["#cc3344", "#1a1a66", "#ffffff", "#777777", "#00ff7f"];
        for a in samples {
            for b in samples {
                let ab = contrast_ratio(hex(a), hex(b));
                let ba = contrast_ratio(hex(b), hex(a));
                assert!(approx_eq(ab, ba, 1e-12), "{a}/{b}: {ab} vs {ba}");
            }
        }
    }

    #[test]
    fn known_reference_ratio() {
        // #767676 on white is the classic "just passes AA" gray.
        let ratio = contrast_ratio(hex("#767676"), Color::WHITE);
        assert!(approx_eq(ratio, 4.54, 0.01), "ratio {ratio}");
        assert_eq!(WcagLevel::from_ratio(ratio), WcagLevel::Aa);
    }

    // ── Levels ──────────────────────────────────────────────────────

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(WcagLevel::from_ratio(2.999), WcagLevel::Fail);
        assert_eq!(WcagLevel::from_ratio(3.0), WcagLevel::AaLarge);
        assert_eq!(WcagLevel::from_ratio(4.499), WcagLevel::AaLarge);
        assert_eq!(WcagLevel::from_ratio(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(6.999), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_ratio(21.0), WcagLevel::Aaa);
    }

    #[test]
    fn compliance_flags() {
        assert_eq!(Compliance::from_ratio(1.5), Compliance::empty());
        assert_eq!(Compliance::from_ratio(3.2), Compliance::AA_LARGE);
        assert_eq!(
            Compliance::from_ratio(5.0),
            Compliance::AA_LARGE | Compliance::AA_NORMAL | Compliance::AAA_LARGE
        );
        assert_eq!(Compliance::from_ratio(7.0), Compliance::all());
    }

    #[test]
    fn report_rounds_ratio() {
        let report = check(hex("#767676"), Color::WHITE);
        assert!(approx_eq(report.ratio_rounded(), 4.54, 1e-9));
        assert!(report.compliance.contains(Compliance::AA_NORMAL));
        assert!(!report.compliance.contains(Compliance::AAA_NORMAL));
    }

    // ── Palette-wide ────────────────────────────────────────────────

    #[test]
    fn matrix_covers_each_pair_once() {
        let colors = [Color::BLACK, Color::WHITE, hex("#808080"), hex("#ff0000")];
        let m = contrast_matrix(&colors);
        assert_eq!(m.len(), 6);
        assert!(m.iter().all(|p| p.i < p.j));
        assert!(contrast_matrix(&[Color::BLACK]).is_empty());
    }

    #[test]
    fn accessible_pairs_sorted_best_first() {
        let colors = [hex("#eeeeee"), Color::BLACK, Color::WHITE];
        let pairs = accessible_pairs(&colors, AA_NORMAL);
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].ratio >= pairs[1].ratio);
        assert_eq!((pairs[0].i, pairs[0].j), (1, 2));
    }

    #[test]
    fn accessibility_score_bounds() {
        assert!(approx_eq(accessibility_score(&[Color::BLACK, Color::WHITE]), 100.0, 1e-9));
        assert!(approx_eq(accessibility_score(&[Color::WHITE, hex("#fefefe")]), 0.0, 1e-9));
        assert!(approx_eq(accessibility_score(&[]), 0.0, 1e-9));
    }

    // ── Corrections ─────────────────────────────────────────────────

    #[test]
    fn best_text_on_extremes() {
        assert_eq!(best_text_color(hex("#000033")), Color::WHITE);
        assert_eq!(best_text_color(hex("#ffffcc")), Color::BLACK);
    }

    #[test]
    fn ensure_contrast_already_good() {
        let fg = hex("#111111");
        assert_eq!(ensure_contrast(fg, Color::WHITE, AA_NORMAL), fg);
    }

    #[test]
    fn ensure_contrast_darkens_on_light_bg() {
        let fg = hex("#88aadd");
        let bg = hex("#fafafa");
        let adjusted = ensure_contrast(fg, bg, AA_NORMAL);
        assert!(contrast_ratio(adjusted, bg) >= AA_NORMAL);
        assert!(adjusted.hsl().l < fg.hsl().l, "should have darkened");
    }

    #[test]
    fn ensure_contrast_lightens_on_dark_bg() {
        let fg = hex("#334466");
        let bg = hex("#101018");
        let adjusted = ensure_contrast(fg, bg, AAA_NORMAL);
        assert!(contrast_ratio(adjusted, bg) >= AAA_NORMAL);
        assert!(adjusted.hsl().l > fg.hsl().l, "should have lightened");
    }

    #[test]
    fn ensure_contrast_preserves_hue() {
        let fg = hex("#3366cc");
        let bg = hex("#223355");
        let adjusted = ensure_contrast(fg, bg, AA_NORMAL);
        let diff = swatch_color::hue_distance(adjusted.hsl().h, fg.hsl().h);
        assert!(diff < 3.0, "hue shifted by {diff}");
    }

    #[test]
    fn ensure_contrast_unreachable_returns_extreme() {
        // Nothing reaches 21:1 against mid gray.
        let bg = hex("#808080");
        let adjusted = ensure_contrast(hex("#707070"), bg, 21.0);
        assert_eq!(adjusted, Color::BLACK);
    }
}
