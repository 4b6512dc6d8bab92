//! The saved palette record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swatch_color::Color;

/// A named, ordered list of colors.
///
/// Serialized as `{ "id", "name", "colors": ["#rrggbb", ...], "createdAt" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Creation time in Unix milliseconds; unique within a store.
    pub id: i64,
    pub name: String,
    pub colors: Vec<Color>,
    pub created_at: DateTime<Utc>,
}

impl Palette {
    /// New palette stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        let created_at = Utc::now();
        Self {
            id: created_at.timestamp_millis(),
            name: name.into(),
            colors,
            created_at,
        }
    }

    /// Colors as lowercase `#rrggbb` strings.
    #[must_use]
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
