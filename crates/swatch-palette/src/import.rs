//! Pulling colors out of free text and JSON.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use swatch_color::Color;

use crate::error::{Result, StoreError};
use crate::palette::Palette;

/// `#rrggbb`, `#rgb`, a bare `rrggbb` word, or `rgb(r, g, b)` / `rgba(...)`.
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \#(?P<hash>[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b
        | \b(?P<bare>[0-9a-fA-F]{6})\b
        | rgba?\(\s*(?P<r>\d{1,3})\s*,\s*(?P<g>\d{1,3})\s*,\s*(?P<b>\d{1,3})",
    )
    .expect("color pattern is valid")
});

/// Every color found in `text`, in order of appearance. Duplicates kept.
///
/// Bare six-digit words are accepted, so English words spelled entirely
/// from `a`–`f` (`facade`) are read as colors too. `rgb()` channels above
/// 255 are skipped.
#[must_use]
pub fn parse_colors(text: &str) -> Vec<Color> {
    COLOR_RE
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(hex) = caps.name("hash").or_else(|| caps.name("bare")) {
                return Color::from_hex(hex.as_str()).ok();
            }
            let channel = |name: &str| caps.name(name)?.as_str().parse::<u8>().ok();
            Some(Color::rgb8(channel("r")?, channel("g")?, channel("b")?))
        })
        .collect()
}

/// Parse a JSON import.
///
/// Accepts an array of hex strings (yielding one palette named `name`),
/// a single palette record, or an array of palette records.
///
/// # Errors
///
/// [`StoreError::Json`] for invalid JSON, [`StoreError::Color`] for a bad
/// hex entry, and [`StoreError::UnrecognizedImport`] for an empty array or
/// any other shape.
pub fn import_json(text: &str, name: &str) -> Result<Vec<Palette>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(items) if items.is_empty() => {
            Err(StoreError::UnrecognizedImport("empty array".to_owned()))
        }
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let colors = items
                .iter()
                .filter_map(Value::as_str)
                .map(Color::from_hex)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(vec![Palette::new(name, colors)])
        }
        Value::Array(items) => items.into_iter().map(record).collect(),
        Value::Object(_) => Ok(vec![record(value)?]),
        other => Err(StoreError::UnrecognizedImport(format!(
            "expected array or object, got {other}"
        ))),
    }
}

fn record(value: Value) -> Result<Palette> {
    if !value.is_object() {
        return Err(StoreError::UnrecognizedImport(format!("expected palette record, got {value}")));
    }
    Ok(serde_json::from_value(value)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
