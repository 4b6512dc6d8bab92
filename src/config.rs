// SPDX-License-Identifier: MIT
//
// User configuration — a small TOML file, every key optional.
//
//   [store]    path           → palette store JSON file
//   [export]   default_format → css | scss | less | tailwind | json | text
//   [generate] count, mode    → defaults for `swatch random`
//   [logging]  level          → error | warn | info | debug | trace
//
// Lookup: `--config PATH` if given (must exist), otherwise
// `<config_dir>/swatch/config.toml` if it exists, otherwise defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// The file `swatch config init` writes. Parses to `Config::default()`.
pub const DEFAULT_TEMPLATE: &str = r#"# swatch configuration

[store]
# JSON file holding saved palettes. Defaults to the platform data dir.
# path = "/home/me/.local/share/swatch/palettes.json"

[export]
# css | scss | less | tailwind | json | text
default_format = "css"

[generate]
# Defaults for `swatch random`.
count = 5
# random | pastel | vibrant | muted | any harmony name
mode = "random"

[logging]
# error | warn | info | debug | trace (RUST_LOG overrides)
level = "warn"
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub export: ExportConfig,
    pub generate: GenerateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { default_format: "css".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub count: usize,
    pub mode: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { count: 5, mode: "random".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned() }
    }
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Explicit path if given, else the standard location, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Configured store file, or `<data_dir>/swatch/palettes.json`.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("swatch")
                .join("palettes.json")
        })
    }
}

/// `<config_dir>/swatch/config.toml`, if the platform has a config dir.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("swatch").join("config.toml"))
}

/// Write [`DEFAULT_TEMPLATE`] to `path`. Refuses to overwrite unless `force`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote default config to {}", path.display());
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
