//! # swatch-theory — palette mathematics
//!
//! Everything that reasons about a palette as a whole: WCAG contrast,
//! harmony generation, gradients and shade scales, scoring, and the
//! rule-based recommendations built on top of the scores.
//!
//! # Architecture
//!
//! ```text
//! &[Color]
//!     │
//!     ├──▶ contrast.rs:  WCAG ratios, levels, pair matrix, corrections
//!     ├──▶ harmony.rs:   hue-offset tables (complementary … square)
//!     ├──▶ gradient.rs:  RGB / HSL / OKLCH interpolation
//!     ├──▶ scale.rs:     50…950 shade ramp, tints, shades
//!     ├──▶ tools.rs:     dedupe, sort, bulk adjustments
//!     ├──▶ random.rs:    seeded generation (Xorshift32)
//!     │
//!     ▼
//! analysis.rs:  diversity + harmony + accessibility → overall score
//!     │
//!     ▼
//! recommend.rs: threshold rules → Recommendation list, optimize()
//! ```
//!
//! All functions are pure and stateless. Only the generators that take a
//! user-supplied size or name can fail; they return [`TheoryError`].

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Counts and indices become f64 for averaging.
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/lightness bindings are inherently similar.
#![allow(clippy::similar_names)]
// The recommendation pass is one long sequence of rules.
#![allow(clippy::too_many_lines)]

pub mod analysis;
pub mod contrast;
pub mod error;
pub mod gradient;
pub mod harmony;
pub mod random;
pub mod recommend;
pub mod scale;
pub mod tools;

pub use analysis::{PaletteAnalysis, Temperature, TemperatureBalance, analyze};
pub use contrast::{Compliance, ContrastReport, WcagLevel, contrast_ratio};
pub use error::{Result, TheoryError};
pub use gradient::{InterpolationSpace, gradient, multi_stop_gradient};
pub use harmony::HarmonyKind;
pub use random::{RandomMode, random_palette};
pub use recommend::{Recommendation, RecommendationKind, Severity, optimize, recommend};
pub use scale::{ColorScale, Shade, generate_scale};
pub use tools::{Adjustment, SortKey};
