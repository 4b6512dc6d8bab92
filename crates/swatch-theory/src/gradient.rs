//! Gradients between palette colors.
//!
//! Endpoints are always reproduced exactly. Interpolation can run in sRGB
//! (what CSS does by default), HSL, or OKLCH (perceptually even steps).
//! The cylindrical spaces take the shortest hue arc, and a gray endpoint
//! borrows the other endpoint's hue so the sweep does not detour via red.

use swatch_color::{Color, Hsl, Oklch, interpolate_hue};

use crate::error::{Result, TheoryError};

/// Color space in which gradient steps are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationSpace {
    #[default]
    Rgb,
    Hsl,
    Oklch,
}

impl InterpolationSpace {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "rgb" | "srgb" => Some(Self::Rgb),
            "hsl" => Some(Self::Hsl),
            "oklch" | "perceptual" => Some(Self::Oklch),
            _ => None,
        }
    }
}

impl std::str::FromStr for InterpolationSpace {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| TheoryError::UnknownName {
            kind: "interpolation space",
            name: s.to_owned(),
        })
    }
}

/// `steps` evenly spaced colors from `start` to `end`, both included.
///
/// # Errors
///
/// [`TheoryError::InvalidSteps`] when `steps < 2`.
pub fn gradient(
    start: Color,
    end: Color,
    steps: usize,
    space: InterpolationSpace,
) -> Result<Vec<Color>> {
    if steps < 2 {
        return Err(TheoryError::InvalidSteps(steps));
    }

    let last = (steps - 1) as f64;
    let colors = (0..steps)
        .map(|i| match i {
            0 => start,
            i if i == steps - 1 => end,
            i => interpolate(start, end, i as f64 / last, space),
        })
        .collect();
    Ok(colors)
}

/// A gradient through several evenly spaced stops.
///
/// # Errors
///
/// [`TheoryError::TooFewStops`] with fewer than two stops and
/// [`TheoryError::InvalidSteps`] when `steps < stops.len()`.
pub fn multi_stop_gradient(
    stops: &[Color],
    steps: usize,
    space: InterpolationSpace,
) -> Result<Vec<Color>> {
    if stops.len() < 2 {
        return Err(TheoryError::TooFewStops(stops.len()));
    }
    if steps < stops.len() {
        return Err(TheoryError::InvalidSteps(steps));
    }

    let segments = stops.len() - 1;
    let last = (steps - 1) as f64;
    let colors = (0..steps)
        .map(|i| {
            // Position along the whole gradient, in segment units.
            let pos = i as f64 / last * segments as f64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seg = (pos.floor() as usize).min(segments - 1);
            let t = pos - seg as f64;
            match t {
                t if t <= 0.0 => stops[seg],
                t if t >= 1.0 => stops[seg + 1],
                t => interpolate(stops[seg], stops[seg + 1], t, space),
            }
        })
        .collect();
    Ok(colors)
}

/// Interpolate one color at `t` in [0, 1].
#[must_use]
pub fn interpolate(a: Color, b: Color, t: f64, space: InterpolationSpace) -> Color {
    match space {
        InterpolationSpace::Rgb => a.mix(b, t),
        InterpolationSpace::Hsl => {
            let (ha, hb) = (a.hsl(), b.hsl());
            let h = match (ha.is_achromatic(), hb.is_achromatic()) {
                (true, false) => hb.h,
                (false, true) => ha.h,
                _ => interpolate_hue(ha.h, hb.h, t),
            };
            Color::from_hsl(Hsl::new(
                h,
                (hb.s - ha.s).mul_add(t, ha.s),
                (hb.l - ha.l).mul_add(t, ha.l),
            ))
        }
        InterpolationSpace::Oklch => {
            let (la, lb) = (a.oklch(), b.oklch());
            let h = match (la.is_achromatic(), lb.is_achromatic()) {
                (true, false) => lb.h,
                (false, true) => la.h,
                _ => interpolate_hue(la.h, lb.h, t),
            };
            Color::from_oklch(Oklch::new(
                (lb.l - la.l).mul_add(t, la.l),
                (lb.c - la.c).mul_add(t, la.c),
                h,
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
