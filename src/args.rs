// SPDX-License-Identifier: MIT
//
// Command-line surface. Colors, harmony kinds, modes and formats parse
// straight into library types through their `FromStr` impls.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use swatch_color::Color;
use swatch_palette::ExportFormat;
use swatch_theory::{HarmonyKind, InterpolationSpace, RandomMode, SortKey};

/// Color palette toolkit: conversions, harmonies, WCAG scoring, export.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Palette store file (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

/// Colors given inline, or a saved palette by id or name.
#[derive(ClapArgs, Debug, Clone)]
pub struct PaletteInput {
    /// Colors as hex (`#1e90ff`, `1e90ff`, `#fff`)
    #[arg(value_name = "COLOR")]
    pub colors: Vec<Color>,

    /// Use a saved palette (id or name) instead of inline colors
    #[arg(short, long, conflicts_with = "colors")]
    pub palette: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a color as hex, RGB, HSL and OKLCH
    Convert {
        #[arg(required = true, value_name = "COLOR")]
        colors: Vec<Color>,
    },

    /// WCAG contrast between a text color and a background
    Contrast {
        foreground: Color,
        background: Color,

        /// Suggest an adjusted foreground that reaches this ratio
        #[arg(long, value_name = "RATIO")]
        fix: Option<f64>,
    },

    /// Harmonies around a base color (all kinds unless --kind is given)
    Harmony {
        base: Color,

        #[arg(short, long)]
        kind: Option<HarmonyKind>,
    },

    /// Gradient through two or more colors
    Gradient {
        #[arg(required = true, num_args = 2.., value_name = "COLOR")]
        stops: Vec<Color>,

        #[arg(short = 'n', long, default_value_t = 5)]
        steps: usize,

        /// rgb, hsl or oklch
        #[arg(long, default_value = "rgb")]
        space: InterpolationSpace,
    },

    /// 50…950 shade scale, optionally with plain tints and shades
    Scale {
        base: Color,

        /// Plain tints toward white (at most 100)
        #[arg(long, default_value_t = 0)]
        tints: usize,

        /// Plain shades toward black (at most 100)
        #[arg(long, default_value_t = 0)]
        shades: usize,
    },

    /// Score a palette: diversity, harmony, accessibility, temperature
    Analyze {
        #[command(flatten)]
        input: PaletteInput,
    },

    /// Rule-based suggestions for improving a palette
    Recommend {
        #[command(flatten)]
        input: PaletteInput,
    },

    /// Drop near-duplicates and add contrast anchors
    Optimize {
        #[command(flatten)]
        input: PaletteInput,

        /// Save the result as a new palette with this name
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
    },

    /// Sort a palette by hue, saturation, lightness or luminance
    Sort {
        #[command(flatten)]
        input: PaletteInput,

        #[arg(short, long, default_value = "hue")]
        by: SortKey,

        /// Also drop exact duplicates
        #[arg(long)]
        dedupe: bool,
    },

    /// Apply one adjustment to every color
    Adjust {
        operation: AdjustOp,

        #[command(flatten)]
        input: PaletteInput,

        /// Amount in HSL points (degrees for shift-hue)
        #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
        amount: f64,
    },

    /// Generate a seeded random palette
    Random {
        /// Number of colors (1–20, default from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// random, pastel, vibrant, muted, or a harmony name (default from config)
        #[arg(short, long)]
        mode: Option<RandomMode>,

        /// Seed (default: current time)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Save the result as a new palette with this name
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
    },

    /// Save colors as a named palette
    Save {
        name: String,

        #[arg(required = true, value_name = "COLOR")]
        colors: Vec<Color>,
    },

    /// List saved palettes
    List,

    /// Show a saved palette (id or name)
    Show { palette: String },

    /// Rename a saved palette
    Rename { palette: String, name: String },

    /// Delete a saved palette
    Delete { palette: String },

    /// Export a saved palette
    Export {
        palette: String,

        /// css, scss, less, tailwind, json or text (default from config)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import palettes from JSON, or colors from any text (`-` for stdin)
    Import {
        file: PathBuf,

        /// Name for palettes built from a bare color list
        #[arg(short, long, default_value = "Imported")]
        name: String,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOp {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
    ShiftHue,
    Invert,
    Grayscale,
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_library_types() {
        let args = Args::parse_from(["swatch", "harmony", "#1e90ff", "--kind", "triadic"]);
        match args.command {
            Command::Harmony { base, kind } => {
                assert_eq!(base.to_hex(), "#1e90ff");
                assert_eq!(kind, Some(HarmonyKind::Triadic));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn gradient_needs_two_stops() {
        assert!(Args::try_parse_from(["swatch", "gradient", "#000"]).is_err());
        let args = ["swatch", "gradient", "#000", "#fff", "--space", "oklch"];
        assert!(Args::try_parse_from(args).is_ok());
    }

    #[test]
    fn rejects_bad_colors() {
        assert!(Args::try_parse_from(["swatch", "convert", "#12345"]).is_err());
    }

    #[test]
    fn palette_input_is_exclusive() {
        assert!(Args::try_parse_from(["swatch", "analyze", "#000", "-p", "brand"]).is_err());
        assert!(Args::try_parse_from(["swatch", "analyze", "-p", "brand"]).is_ok());
    }

    #[test]
    fn global_options_after_subcommand() {
        let args = Args::parse_from(["swatch", "list", "--store", "/tmp/p.json", "-l", "debug"]);
        assert_eq!(args.store, Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
