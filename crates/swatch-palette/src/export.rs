//! Palette export — stylesheet variables, Tailwind config, JSON, plain text.
//!
//! Every format names colors `<slug>-<n>` (1-based) where the slug is the
//! palette name lowercased with non-alphanumeric runs collapsed to `-`.

use std::fmt::Write as _;

use serde_json::json;

use crate::error::StoreError;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Less,
    Tailwind,
    Json,
    Text,
}

impl ExportFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::Text => "text",
        }
    }

    /// Parse a format name (case-insensitive, a few aliases).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "css" => Some(Self::Css),
            "scss" | "sass" => Some(Self::Scss),
            "less" => Some(Self::Less),
            "tailwind" | "tw" => Some(Self::Tailwind),
            "json" => Some(Self::Json),
            "text" | "txt" | "hex" => Some(Self::Text),
            _ => None,
        }
    }

    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Tailwind => "js",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Scss, Self::Less, Self::Tailwind, Self::Json, Self::Text]
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StoreError::UnknownFormat(s.to_owned()))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `palette` in `format`. Every emitted line ends with a newline.
#[must_use]
pub fn export(palette: &Palette, format: ExportFormat) -> String {
    let slug = slug(&palette.name);
    let entries: Vec<(String, String)> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| (format!("{slug}-{}", i + 1), c.to_hex()))
        .collect();

    let mut out = String::new();
    // Writing to a String cannot fail.
    match format {
        ExportFormat::Css => {
            out.push_str(":root {\n");
            for (name, hex) in &entries {
                let _ = writeln!(out, "  --{name}: {hex};");
            }
            out.push_str("}\n");
        }
        ExportFormat::Scss => {
            for (name, hex) in &entries {
                let _ = writeln!(out, "${name}: {hex};");
            }
        }
        ExportFormat::Less => {
            for (name, hex) in &entries {
                let _ = writeln!(out, "@{name}: {hex};");
            }
        }
        ExportFormat::Tailwind => {
            out.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
            for (name, hex) in &entries {
                let _ = writeln!(out, "        '{name}': '{hex}',");
            }
            out.push_str("      },\n    },\n  },\n};\n");
        }
        ExportFormat::Json => {
            let colors: Vec<_> = entries
                .into_iter()
                .map(|(name, hex)| json!({ "name": name, "hex": hex }))
                .collect();
            let value = json!({ "name": palette.name, "colors": colors });
            let _ = writeln!(out, "{value:#}");
        }
        ExportFormat::Text => {
            for (_, hex) in &entries {
                out.push_str(hex);
                out.push('\n');
            }
        }
    }
    out
}

/// Lowercase ASCII alphanumerics joined by single dashes. Empty → `color`.
#[must_use]
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() { "color".to_owned() } else { out }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
