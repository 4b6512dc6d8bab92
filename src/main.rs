// SPDX-License-Identifier: MIT
//
// swatch — a color palette toolkit for the terminal.
//
// This is the binary that wires the library crates to a command line:
//
//   swatch-color   → hex / RGB / HSL / OKLCH values and conversions
//   swatch-theory  → contrast, harmonies, gradients, scales, scoring
//   swatch-palette → saved palettes, import parsing, export formats
//
// Startup:
//
//   argv → clap → config (TOML) → env_logger → commands::run → stdout

mod args;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;

use crate::args::Args;
use crate::config::Config;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::resolve(args.config.as_deref())?;

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    Builder::from_env(Env::default().default_filter_or(level)).init();
    debug!("config: {config:?}");

    commands::run(&args, &config)
}
