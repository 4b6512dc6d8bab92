// SPDX-License-Identifier: MIT
//
// HSL — the hue/saturation/lightness cylinder over sRGB.
//
// Hue is in degrees [0, 360); saturation and lightness are percentages
// [0, 100]. Values are kept unrounded so sRGB → HSL → sRGB is lossless up
// to the final 8-bit rounding; `Hsl::rounded` gives the display form.

use std::fmt;

use crate::color::Rgb;

/// A color in HSL coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
    /// Saturation percentage, [0, 100].
    pub s: f64,
    /// Lightness percentage, [0, 100].
    pub l: f64,
}

impl Hsl {
    /// Create an HSL value, wrapping the hue and clamping `s`/`l`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Integer-rounded copy, as shown to users.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.h.round(), self.s.round(), self.l.round())
    }

    /// Whether the color carries no hue information.
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s < 1e-9
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(f, "hsl({}, {}%, {}%)", r.h, r.s, r.l)
    }
}

/// Convert 8-bit sRGB to HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    #[allow(clippy::float_cmp)]
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: normalize_hue(h * 60.0),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Convert HSL to 8-bit sRGB, rounding each channel to nearest.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hp {
        hp if hp < 1.0 => (c, x, 0.0),
        hp if hp < 2.0 => (x, c, 0.0),
        hp if hp < 3.0 => (0.0, c, x),
        hp if hp < 4.0 => (0.0, x, c),
        hp if hp < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-15 % 360 + 360 rounds to exactly 360.0.
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference along the shortest arc, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn channel_diff(a: u8, b: u8) -> u8 {
        a.abs_diff(b)
    }

    #[test]
    fn primaries() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert!(
            approx_eq(red.h, 0.0, 1e-9)
                && approx_eq(red.s, 100.0, 1e-9)
                && approx_eq(red.l, 50.0, 1e-9)
        );

        let green = rgb_to_hsl(Rgb::new(0, 255, 0));
        assert!(approx_eq(green.h, 120.0, 1e-9));

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!(approx_eq(blue.h, 240.0, 1e-9));
    }

    #[test]
    fn magenta_side_of_wheel() {
        // g < b when red is max puts the hue past 300.
        let c = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(c.h > 300.0 && c.h < 360.0, "hue {}", c.h);
    }

    #[test]
    fn grays_are_achromatic() {
        for v in [0u8, 1, 77, 128, 254, 255] {
            let hsl = rgb_to_hsl(Rgb::new(v, v, v));
            assert!(hsl.is_achromatic());
            assert!(approx_eq(hsl.h, 0.0, 1e-12));
        }
    }

    #[test]
    fn known_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(60.0, 100.0, 50.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(210.0, 50.0, 40.0)), Rgb::new(51, 102, 153));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn roundtrip_within_one_unit() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let rgb = Rgb::new(r, g, b);
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    assert!(
                        channel_diff(rgb.r, back.r) <= 1
                            && channel_diff(rgb.g, back.g) <= 1
                            && channel_diff(rgb.b, back.b) <= 1,
                        "{rgb:?} came back as {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn hue_normalization() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-9));
        assert!(approx_eq(normalize_hue(720.0), 0.0, 1e-9));
        assert!(approx_eq(normalize_hue(359.5), 359.5, 1e-9));
        assert!(normalize_hue(-1e-15) < 360.0);
        assert!(approx_eq(normalize_hue(f64::NAN), 0.0, 1e-9));
    }

    #[test]
    fn hue_distance_is_shortest_arc() {
        assert!(approx_eq(hue_distance(10.0, 350.0), 20.0, 1e-9));
        assert!(approx_eq(hue_distance(0.0, 180.0), 180.0, 1e-9));
        assert!(approx_eq(hue_distance(90.0, 30.0), 60.0, 1e-9));
    }

    #[test]
    fn interpolate_hue_wraps() {
        let mid = interpolate_hue(350.0, 10.0, 0.5);
        assert!(approx_eq(mid, 0.0, 1e-9) || approx_eq(mid, 360.0, 1e-9), "mid {mid}");
        assert!(approx_eq(interpolate_hue(0.0, 90.0, 0.5), 45.0, 1e-9));
    }

    #[test]
    fn display_is_rounded() {
        let hsl = Hsl::new(210.4, 49.6, 40.2);
        assert_eq!(hsl.to_string(), "hsl(210, 50%, 40%)");
    }
}
