// SPDX-License-Identifier: MIT
//
// Perceptual color space used for distances and perceptual gradients.
//
// Conversion pipeline:
//
//   sRGB ↔ Linear sRGB ↔ Oklab ↔ OKLCH
//
// Oklab math follows Björn Ottosson's reference:
// https://bottosson.github.io/posts/oklab/
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

use crate::color::Rgb;
use crate::hsl::{normalize_hue, unit_to_u8};

/// A color in the Oklab space: perceptual lightness plus two opponent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    /// Euclidean distance (ΔE in Oklab). Below ~0.02 is imperceptible.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    /// Polar form of this color.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = if c < 1e-8 {
            0.0 // Achromatic: hue is undefined, default to 0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        Oklch { l: self.l, c, h }
    }
}

/// A color in OKLCH: lightness 0–1, chroma 0–~0.37, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Whether this color has no visible chroma.
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-4
    }

    /// Cartesian form of this color.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let h_rad = self.h.to_radians();
        Oklab {
            l: self.l,
            a: self.c * h_rad.cos(),
            b: self.c * h_rad.sin(),
        }
    }

    /// Whether this color is representable in sRGB without clipping.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        const EPS: f64 = 1e-6;
        let (r, g, b) = oklab_to_srgb(self.to_oklab());
        [r, g, b].iter().all(|v| (-EPS..=1.0 + EPS).contains(v))
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search for the maximum in-gamut chroma, keeping hue and
    /// lightness.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0;
        let mut hi = self.c;
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            if (Self { c: mid, ..self }).in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }

    /// Gamut-map and quantize to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = oklab_to_srgb(self.to_gamut().to_oklab());
        Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }
}

/// Convert 8-bit sRGB to Oklab.
#[must_use]
pub fn rgb_to_oklab(rgb: Rgb) -> Oklab {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);
    linear_srgb_to_oklab(r, g, b)
}

/// Convert 8-bit sRGB to OKLCH.
#[must_use]
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    rgb_to_oklab(rgb).to_oklch()
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// The conversion goes through an intermediate LMS (cone response) space.

fn oklab_to_linear_srgb(lab: Oklab) -> (f64, f64, f64) {
    let Oklab { l: l_ok, a, b } = lab;

    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl =
        1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> Oklab {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    Oklab {
        l: 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_)),
        a: 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_))),
        b: 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_)),
    }
}

/// Oklab → gamma-encoded sRGB, unclamped (may be out of gamut).
fn oklab_to_srgb(lab: Oklab) -> (f64, f64, f64) {
    let (r, g, b) = oklab_to_linear_srgb(lab);
    (linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
