//! Color harmonies — fixed hue-angle relationships.
//!
//! Each harmony rotates the base color's hue by a fixed table of offsets,
//! keeping saturation and lightness. The first color in the result is
//! always the base itself.

use swatch_color::Color;

use crate::error::{Result, TheoryError};

/// Lightness offsets (HSL points) for monochromatic variants.
const MONO_STEPS: [f64; 4] = [-30.0, -15.0, 15.0, 30.0];

/// The kind of hue relationship used to build a harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// Opposite hue (180°).
    Complementary,
    /// Neighbors at ±30°.
    Analogous,
    /// 120° spacing (3 colors).
    Triadic,
    /// Complement ±30° (150°, 210°).
    SplitComplementary,
    /// Rectangle: 60°, 180°, 240°.
    Tetradic,
    /// 90° spacing (4 colors).
    Square,
    /// Same hue, lightness variations.
    Monochromatic,
}

impl HarmonyKind {
    /// Hue offsets (degrees) applied to the base, excluding the base itself.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Tetradic => &[60.0, 180.0, 240.0],
            Self::Square => &[90.0, 180.0, 270.0],
            Self::Monochromatic => &[],
        }
    }

    /// Build the harmony around `base`.
    #[must_use]
    pub fn generate(self, base: Color) -> Vec<Color> {
        generate(self, base)
    }

    /// Human-readable name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a harmony from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All available harmony kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary, Self::Analogous, Self::Triadic,
            Self::SplitComplementary, Self::Tetradic, Self::Square,
            Self::Monochromatic,
        ]
    }
}

impl std::str::FromStr for HarmonyKind {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| TheoryError::UnknownName {
            kind: "harmony",
            name: s.to_owned(),
        })
    }
}

impl std::fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn generate(kind: HarmonyKind, base: Color) -> Vec<Color> {
    let hsl = base.hsl();
    let mut out = Vec::with_capacity(kind.offsets().len() + 1);
    out.push(base);

    match kind {
        HarmonyKind::Monochromatic => {
            out.extend(
                MONO_STEPS
                    .iter()
                    .map(|d| Color::hsl_components(hsl.h, hsl.s, (hsl.l + d).clamp(5.0, 95.0))),
            );
        }
        _ => {
            out.extend(
                kind.offsets()
                    .iter()
                    .map(|d| Color::hsl_components(hsl.h + d, hsl.s, hsl.l)),
            );
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_color::{Hsl, hue_distance};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn base_is_first() {
        let base = Color::from_hex("#3a7bd5").unwrap();
        for kind in HarmonyKind::all() {
            let colors = kind.generate(base);
            assert_eq!(colors[0], base, "{kind} does not start with base");
        }
    }

    #[test]
    fn sizes_follow_offset_tables() {
        let base = Color::from_hex("#3a7bd5").unwrap();
        assert_eq!(HarmonyKind::Complementary.generate(base).len(), 2);
        assert_eq!(HarmonyKind::Analogous.generate(base).len(), 3);
        assert_eq!(HarmonyKind::Triadic.generate(base).len(), 3);
        assert_eq!(HarmonyKind::SplitComplementary.generate(base).len(), 3);
        assert_eq!(HarmonyKind::Tetradic.generate(base).len(), 4);
        assert_eq!(HarmonyKind::Square.generate(base).len(), 4);
        assert_eq!(HarmonyKind::Monochromatic.generate(base).len(), 5);
    }

    #[test]
    fn complementary_is_exactly_180() {
        // Pure hues survive 8-bit quantization exactly.
        for h in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
            let base = Color::from_hsl(Hsl::new(h, 100.0, 50.0));
            let comp = HarmonyKind::Complementary.generate(base)[1];
            let got = comp.hsl().h;
            let expected = (h + 180.0) % 360.0;
            assert!(approx_eq(got, expected, 1e-9), "base {h}: got {got}");
        }
    }

    #[test]
    fn complementary_offset_near_180_for_any_base() {
        for hex in ["#3a7bd5", "#e67e22", "#16a085", "#8e44ad", "#c0392b"] {
            let base = Color::from_hex(hex).unwrap();
            let comp = HarmonyKind::Complementary.generate(base)[1];
            let d = hue_distance(base.hsl().h, comp.hsl().h);
            assert!(approx_eq(d, 180.0, 1.0), "{hex}: offset {d}");
        }
    }

    #[test]
    fn triadic_spacing() {
        let base = Color::from_hsl(Hsl::new(0.0, 100.0, 50.0));
        let hues: Vec<f64> =
            HarmonyKind::Triadic.generate(base).iter().map(|c| c.hsl().h).collect();
        assert!(approx_eq(hues[1], 120.0, 1e-9));
        assert!(approx_eq(hues[2], 240.0, 1e-9));
    }

    #[test]
    fn rotation_keeps_saturation_and_lightness() {
        let base = Color::from_hex("#3a7bd5").unwrap();
        let b = base.hsl();
        for c in HarmonyKind::Square.generate(base) {
            let h = c.hsl();
            assert!(approx_eq(h.s, b.s, 1.5), "s {} vs {}", h.s, b.s);
            assert!(approx_eq(h.l, b.l, 1.0), "l {} vs {}", h.l, b.l);
        }
    }

    #[test]
    fn monochromatic_keeps_hue_and_clamps() {
        let dark = Color::from_hsl(Hsl::new(200.0, 60.0, 10.0));
        let colors = HarmonyKind::Monochromatic.generate(dark);
        for c in &colors[1..] {
            let hsl = c.hsl();
            assert!(hsl.l >= 4.5 && hsl.l <= 95.5, "l {}", hsl.l);
            assert!(hue_distance(hsl.h, 200.0) < 3.0, "h {}", hsl.h);
        }
    }

    #[test]
    fn name_roundtrip() {
        for &kind in HarmonyKind::all() {
            assert_eq!(HarmonyKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(HarmonyKind::from_name("TRIADIC"), Some(HarmonyKind::Triadic));
        assert!(HarmonyKind::from_name("pentagram").is_none());
        assert!("nope".parse::<HarmonyKind>().is_err());
    }
}
