// SPDX-License-Identifier: MIT
//
// Errors raised while reading color input.

use thiserror::Error;

/// Failure to interpret user-supplied color data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The string is not `#RGB` / `#RRGGBB` (with or without `#`).
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A numeric component was outside its legal range.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}

/// Result alias for color parsing.
pub type Result<T> = std::result::Result<T, ColorError>;
