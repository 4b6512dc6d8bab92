// SPDX-License-Identifier: MIT
//
// Command handlers. Each subcommand maps onto one or two library calls;
// this module only resolves inputs (inline colors vs. saved palettes,
// config defaults) and formats results for the terminal.
//
// Results go to stdout, diagnostics to stderr through `log`.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

use swatch_color::Color;
use swatch_palette::{
    ExportFormat, Palette, PaletteStore, StoreError, export, import_json, parse_colors,
};
use swatch_theory::contrast::{self, Compliance};
use swatch_theory::gradient::{gradient, multi_stop_gradient};
use swatch_theory::harmony::HarmonyKind;
use swatch_theory::random::{RandomMode, random_palette};
use swatch_theory::scale;
use swatch_theory::tools::{self, Adjustment};
use swatch_theory::{analyze, optimize, recommend};

use crate::args::{AdjustOp, Args, Command, ConfigAction, PaletteInput};
use crate::config::{self, Config};

/// Dispatch the parsed command line.
pub fn run(args: &Args, config: &Config) -> Result<()> {
    let store_path = args.store.clone().unwrap_or_else(|| config.store_path());
    let ctx = Ctx { store_path: &store_path, config, color: io::stdout().is_terminal() };

    match &args.command {
        Command::Convert { colors } => {
            for &c in colors {
                ctx.convert(c);
            }
            Ok(())
        }
        Command::Contrast { foreground, background, fix } => {
            ctx.contrast(*foreground, *background, *fix);
            Ok(())
        }
        Command::Harmony { base, kind } => {
            ctx.harmony(*base, *kind);
            Ok(())
        }
        Command::Gradient { stops, steps, space } => {
            let colors = if stops.len() == 2 {
                gradient(stops[0], stops[1], *steps, *space)?
            } else {
                multi_stop_gradient(stops, *steps, *space)?
            };
            ctx.print_colors(&colors);
            Ok(())
        }
        Command::Scale { base, tints, shades } => {
            ctx.scale(*base, *tints, *shades);
            Ok(())
        }
        Command::Analyze { input } => {
            let colors = ctx.input_colors(input)?;
            ctx.analyze(&colors);
            Ok(())
        }
        Command::Recommend { input } => {
            let colors = ctx.input_colors(input)?;
            ctx.recommend(&colors);
            Ok(())
        }
        Command::Optimize { input, save } => {
            let colors = optimize(&ctx.input_colors(input)?);
            ctx.print_colors(&colors);
            ctx.maybe_save(save.as_deref(), colors)
        }
        Command::Sort { input, by, dedupe } => {
            let mut colors = ctx.input_colors(input)?;
            if *dedupe {
                colors = tools::dedupe(&colors);
            }
            ctx.print_colors(&tools::sort_by(&colors, *by));
            Ok(())
        }
        Command::Adjust { operation, input, amount } => {
            let colors = ctx.input_colors(input)?;
            let adjusted = tools::adjust_all(&colors, adjustment(*operation, *amount));
            ctx.print_colors(&adjusted);
            Ok(())
        }
        Command::Random { count, mode, seed, save } => {
            ctx.random(*count, *mode, *seed, save.as_deref())
        }
        Command::Save { name, colors } => {
            let mut store = ctx.open_store()?;
            let palette = store.create(name.as_str(), colors.clone())?;
            println!("saved {} ({}, {} colors)", palette.name, palette.id, palette.len());
            Ok(())
        }
        Command::List => ctx.list(),
        Command::Show { palette } => {
            let store = ctx.open_store()?;
            ctx.show(find_palette(&store, palette)?);
            Ok(())
        }
        Command::Rename { palette, name } => {
            let mut store = ctx.open_store()?;
            let id = find_palette(&store, palette)?.id;
            store.rename(id, name.as_str())?;
            println!("renamed {id} to {name}");
            Ok(())
        }
        Command::Delete { palette } => {
            let mut store = ctx.open_store()?;
            let id = find_palette(&store, palette)?.id;
            let removed = store.delete(id)?;
            println!("deleted {} ({id})", removed.name);
            Ok(())
        }
        Command::Export { palette, format, output } => {
            ctx.export(palette, *format, output.as_deref())
        }
        Command::Import { file, name } => ctx.import(file, name),
        Command::Config { action } => config_command(action, args.config.as_deref(), config),
    }
}

fn adjustment(op: AdjustOp, amount: f64) -> Adjustment {
    match op {
        AdjustOp::Lighten => Adjustment::Lighten(amount),
        AdjustOp::Darken => Adjustment::Darken(amount),
        AdjustOp::Saturate => Adjustment::Saturate(amount),
        AdjustOp::Desaturate => Adjustment::Desaturate(amount),
        AdjustOp::ShiftHue => Adjustment::ShiftHue(amount),
        AdjustOp::Invert => Adjustment::Invert,
        AdjustOp::Grayscale => Adjustment::Grayscale,
    }
}

/// A saved palette by numeric id, falling back to a name match.
fn find_palette<'a>(store: &'a PaletteStore, reference: &str) -> Result<&'a Palette> {
    reference
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| store.get(id))
        .or_else(|| store.find_by_name(reference))
        .ok_or_else(|| anyhow!("no saved palette matches {reference:?}"))
}

fn config_command(action: &ConfigAction, explicit: Option<&Path>, config: &Config) -> Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(config::default_path)
        .context("no config directory on this platform; pass --config")?;
    match action {
        ConfigAction::Init { force } => {
            config::init(&path, *force)?;
            println!("wrote {}", path.display());
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Show => print!("{}", toml::to_string_pretty(config)?),
    }
    Ok(())
}

// ─── Context ────────────────────────────────────────────────────────────────

struct Ctx<'a> {
    store_path: &'a Path,
    config: &'a Config,
    /// Paint swatches with truecolor escapes.
    color: bool,
}

impl Ctx<'_> {
    fn open_store(&self) -> Result<PaletteStore> {
        PaletteStore::open(self.store_path)
            .with_context(|| format!("failed to open palette store {}", self.store_path.display()))
    }

    fn input_colors(&self, input: &PaletteInput) -> Result<Vec<Color>> {
        if let Some(reference) = &input.palette {
            let store = self.open_store()?;
            return Ok(find_palette(&store, reference)?.colors.clone());
        }
        if input.colors.is_empty() {
            bail!("no colors given (pass colors or --palette)");
        }
        Ok(input.colors.clone())
    }

    fn maybe_save(&self, name: Option<&str>, colors: Vec<Color>) -> Result<()> {
        if let Some(name) = name {
            let mut store = self.open_store()?;
            let palette = store.create(name, colors)?;
            println!("saved {} ({})", palette.name, palette.id);
        }
        Ok(())
    }

    /// Two-cell truecolor block, or nothing when stdout is not a terminal.
    fn swatch(&self, c: Color) -> String {
        if self.color {
            let rgb = c.rgb();
            format!("\x1b[48;2;{};{};{}m  \x1b[0m ", rgb.r, rgb.g, rgb.b)
        } else {
            String::new()
        }
    }

    fn print_colors(&self, colors: &[Color]) {
        for &c in colors {
            println!("{}{c}  {}", self.swatch(c), c.hsl());
        }
    }

    fn inline(&self, colors: &[Color]) -> String {
        colors
            .iter()
            .map(|&c| format!("{}{c}", self.swatch(c)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ─── Single colors ──────────────────────────────────────────────────────

    fn convert(&self, c: Color) {
        let lch = c.oklch();
        println!("{}{c}", self.swatch(c));
        println!("  {}", c.rgb());
        println!("  {}", c.hsl());
        println!("  oklch({:.3} {:.3} {:.1})", lch.l, lch.c, lch.h);
        println!(
            "  luminance {:.4} ({})",
            c.relative_luminance(),
            if c.is_dark() { "dark" } else { "light" }
        );
    }

    fn contrast(&self, fg: Color, bg: Color, fix: Option<f64>) {
        let report = contrast::check(fg, bg);
        println!(
            "{}{fg} on {}{bg}: {:.2}:1 ({})",
            self.swatch(fg),
            self.swatch(bg),
            report.ratio_rounded(),
            report.level.label()
        );
        for (flag, label) in [
            (Compliance::AA_LARGE, "AA large text"),
            (Compliance::AA_NORMAL, "AA normal text"),
            (Compliance::AAA_LARGE, "AAA large text"),
            (Compliance::AAA_NORMAL, "AAA normal text"),
        ] {
            let mark = if report.compliance.contains(flag) { "pass" } else { "fail" };
            println!("  {label:<16} {mark}");
        }
        let best = contrast::best_text_color(bg);
        println!("  best text on {bg}: {}{best}", self.swatch(best));

        if let Some(target) = fix {
            let fixed = contrast::ensure_contrast(fg, bg, target);
            let ratio = contrast::contrast_ratio(fixed, bg);
            println!("  adjusted for {target}:1 → {}{fixed} ({ratio:.2}:1)", self.swatch(fixed));
        }
    }

    fn harmony(&self, base: Color, kind: Option<HarmonyKind>) {
        match kind {
            Some(kind) => self.print_colors(&kind.generate(base)),
            None => {
                for &kind in HarmonyKind::all() {
                    println!("{:<20} {}", kind.name(), self.inline(&kind.generate(base)));
                }
            }
        }
    }

    fn scale(&self, base: Color, tints: usize, shades: usize) {
        let ramp = scale::generate_scale(base);
        let closest = ramp.closest_shade_to_base();
        for shade in ramp.shades() {
            let marker = if shade.key == closest { "  ← base" } else { "" };
            println!("{:>4}  {}{}{marker}", shade.key, self.swatch(shade.color), shade.color);
        }
        if tints > 0 {
            println!("tints   {}", self.inline(&scale::tints(base, tints)));
        }
        if shades > 0 {
            println!("shades  {}", self.inline(&scale::shades(base, shades)));
        }
    }

    // ─── Whole palettes ─────────────────────────────────────────────────────

    fn analyze(&self, colors: &[Color]) {
        let a = analyze(colors);
        println!("{}", self.inline(colors));
        println!("colors          {}", a.count);
        println!("overall         {:.0}/100", a.overall);
        println!("  harmony       {:.0}", a.harmony);
        println!("  diversity     {:.0}", a.diversity);
        println!("  accessibility {:.0}", a.accessibility);
        println!("lightness range {:.0}", a.lightness_range);
        println!("avg saturation  {:.0}%", a.average_saturation);
        println!(
            "temperature     {} warm, {} cool, {} neutral",
            a.temperature.warm, a.temperature.cool, a.temperature.neutral
        );

        let pairs = contrast::accessible_pairs(colors, contrast::AA_LARGE);
        if pairs.is_empty() {
            println!("no pair reaches {}:1", contrast::AA_LARGE);
        } else {
            println!("readable pairs:");
            for p in pairs {
                let (a, b) = (colors[p.i], colors[p.j]);
                println!(
                    "  {}{a} / {}{b}  {:.2}:1 {}",
                    self.swatch(a),
                    self.swatch(b),
                    p.ratio,
                    p.level.label()
                );
            }
        }
    }

    fn recommend(&self, colors: &[Color]) {
        let recs = recommend(colors);
        if recs.is_empty() {
            println!("no recommendations, palette looks balanced");
            return;
        }
        for r in recs {
            println!("[{}] {}: {}", r.severity.label(), r.kind.name(), r.message);
            if !r.suggested.is_empty() {
                println!("    try {}", self.inline(&r.suggested));
            }
        }
    }

    fn random(
        &self,
        count: Option<usize>,
        mode: Option<RandomMode>,
        seed: Option<u32>,
        save: Option<&str>,
    ) -> Result<()> {
        let count = count.unwrap_or(self.config.generate.count);
        let mode = match mode {
            Some(m) => m,
            None => self
                .config
                .generate
                .mode
                .parse()
                .with_context(|| {
                    format!("invalid generate.mode {:?} in config", self.config.generate.mode)
                })?,
        };
        let seed = seed.unwrap_or_else(time_seed);
        info!("random palette: {count} colors, mode {}, seed {seed}", mode.name());

        let colors = random_palette(count, mode, seed);
        println!("seed {seed}");
        self.print_colors(&colors);
        self.maybe_save(save, colors)
    }

    // ─── Store ──────────────────────────────────────────────────────────────

    fn list(&self) -> Result<()> {
        let store = self.open_store()?;
        if store.is_empty() {
            println!("no saved palettes in {}", store.path().display());
            return Ok(());
        }
        for p in store.list() {
            println!(
                "{:>14}  {:<24} {}  {}",
                p.id,
                p.name,
                p.created_at.format("%Y-%m-%d"),
                self.inline(&p.colors)
            );
        }
        Ok(())
    }

    fn show(&self, p: &Palette) {
        println!("{} ({})", p.name, p.id);
        println!("created {}", p.created_at.format("%Y-%m-%d %H:%M UTC"));
        self.print_colors(&p.colors);
    }

    fn export(
        &self,
        reference: &str,
        format: Option<ExportFormat>,
        output: Option<&Path>,
    ) -> Result<()> {
        let format = match format {
            Some(f) => f,
            None => self.config.export.default_format.parse().with_context(|| {
                format!(
                    "invalid export.default_format {:?} in config",
                    self.config.export.default_format
                )
            })?,
        };
        let store = self.open_store()?;
        let text = export(find_palette(&store, reference)?, format);
        match output {
            Some(path) => {
                fs::write(path, &text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote {format} to {}", path.display());
            }
            None => print!("{text}"),
        }
        Ok(())
    }

    fn import(&self, file: &Path, name: &str) -> Result<()> {
        let text = if file.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        } else {
            fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?
        };

        let palettes = parse_import(&text, name)
            .with_context(|| format!("failed to import {}", file.display()))?;
        debug!("import: {} palette(s) parsed", palettes.len());

        let mut store = self.open_store()?;
        for p in palettes {
            let saved = store.create(p.name, p.colors)?;
            println!("imported {} ({}, {} colors)", saved.name, saved.id, saved.len());
        }
        Ok(())
    }
}

/// JSON when the text looks like it and parses; otherwise every color the
/// text mentions, as one palette.
fn parse_import(text: &str, name: &str) -> Result<Vec<Palette>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match import_json(text, name) {
            Err(StoreError::Json(err)) => debug!("import: not JSON ({err}), scanning as text"),
            other => return other.map_err(Into::into),
        }
    }
    let colors = parse_colors(text);
    if colors.is_empty() {
        bail!("no colors found");
    }
    Ok(vec![Palette::new(name, colors)])
}

fn time_seed() -> u32 {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    #[allow(clippy::cast_possible_truncation)]
    let secs = now.as_secs() as u32;
    secs ^ now.subsec_nanos()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn run_args(argv: &[&str]) -> Result<()> {
        let args = Args::parse_from(argv);
        run(&args, &Config::default())
    }

    #[test]
    fn find_palette_by_id_then_name() {
        let dir = tempdir().unwrap();
        let mut store = PaletteStore::open(dir.path().join("p.json")).unwrap();
        let id = store.create("Brand", vec![Color::BLACK]).unwrap().id;

        assert_eq!(find_palette(&store, &id.to_string()).unwrap().name, "Brand");
        assert_eq!(find_palette(&store, "brand").unwrap().id, id);
        assert!(find_palette(&store, "missing").is_err());
    }

    #[test]
    fn save_then_export_to_file() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("p.json");
        let store = store.to_str().unwrap();
        let out = dir.path().join("brand.css");

        run_args(&["swatch", "--store", store, "save", "Brand", "#1e90ff", "#fff"]).unwrap();
        let out_arg = out.to_str().unwrap();
        run_args(&["swatch", "--store", store, "export", "Brand", "-f", "css", "-o", out_arg])
            .unwrap();

        let css = fs::read_to_string(&out).unwrap();
        assert!(css.contains("--brand-1: #1e90ff;"));
        assert!(css.contains("--brand-2: #ffffff;"));
    }

    #[test]
    fn random_save_and_rename_delete() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let store = path.to_str().unwrap();

        run_args(&["swatch", "--store", store, "random", "-n", "4", "-s", "7", "--save", "Draft"])
            .unwrap();
        run_args(&["swatch", "--store", store, "rename", "Draft", "Final"]).unwrap();
        let saved = PaletteStore::open(&path).unwrap();
        let p = saved.find_by_name("Final").unwrap();
        assert_eq!(p.colors, random_palette(4, RandomMode::Random, 7));

        run_args(&["swatch", "--store", store, "delete", "Final"]).unwrap();
        assert!(PaletteStore::open(&path).unwrap().is_empty());
    }

    #[test]
    fn import_text_and_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let store = path.to_str().unwrap();

        let css = dir.path().join("theme.css");
        fs::write(&css, ":root { --a: #112233; --b: #abc; }").unwrap();
        let css_arg = css.to_str().unwrap();
        run_args(&["swatch", "--store", store, "import", css_arg, "-n", "Theme"]).unwrap();

        let json = dir.path().join("list.json");
        fs::write(&json, r##"["#000000", "#ffffff"]"##).unwrap();
        run_args(&["swatch", "--store", store, "import", json.to_str().unwrap()]).unwrap();

        let saved = PaletteStore::open(&path).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved.find_by_name("Theme").unwrap().hex_colors(), vec!["#112233", "#aabbcc"]);
        assert_eq!(saved.find_by_name("Imported").unwrap().len(), 2);
    }

    #[test]
    fn bracketed_text_falls_back_to_scanning() {
        let palettes = parse_import("[#fff, #000]", "Loose").unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].hex_colors(), vec!["#ffffff", "#000000"]);

        assert!(parse_import("[]", "x").is_err());
        assert!(parse_import("{ nothing here", "x").is_err());
        assert_eq!(parse_import(r##"["#123456"]"##, "Json").unwrap()[0].name, "Json");
    }

    #[test]
    fn palette_commands_need_colors() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("p.json");
        let err = run_args(&["swatch", "--store", store.to_str().unwrap(), "analyze"]).unwrap_err();
        assert!(err.to_string().contains("no colors given"));
    }

    #[test]
    fn unknown_palette_reference() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("p.json");
        assert!(run_args(&["swatch", "--store", store.to_str().unwrap(), "show", "nope"]).is_err());
    }

    #[test]
    fn adjust_op_mapping() {
        assert_eq!(adjustment(AdjustOp::ShiftHue, -30.0), Adjustment::ShiftHue(-30.0));
        assert_eq!(adjustment(AdjustOp::Invert, 5.0), Adjustment::Invert);
    }
}
