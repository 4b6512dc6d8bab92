// SPDX-License-Identifier: MIT
//
// Hex color notation.
//
// Accepted input: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`, any case, with
// surrounding whitespace ignored. Output is always lowercase `#rrggbb`.

use crate::color::Rgb;
use crate::error::{ColorError, Result};

/// Parse a hex color string into 8-bit sRGB.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] when the string is not one of the
/// accepted forms.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let s = input.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();
    let invalid = || ColorError::InvalidHex(input.to_owned());

    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(bytes[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(bytes[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

/// Whether `input` is a color [`parse_hex`] would accept.
#[must_use]
pub fn is_valid_hex(input: &str) -> bool {
    parse_hex(input).is_ok()
}

/// Canonicalize a hex color to lowercase `#rrggbb`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for unparseable input.
pub fn normalize_hex(input: &str) -> Result<String> {
    parse_hex(input).map(format_hex)
}

/// Format 8-bit sRGB as lowercase `#rrggbb`.
#[must_use]
pub fn format_hex(rgb: Rgb) -> String {
    let Rgb { r, g, b } = rgb;
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_long_form() {
        assert_eq!(parse_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(parse_hex("#f80").unwrap(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(parse_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(parse_hex("0f0").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn case_and_whitespace_ignored() {
        assert_eq!(parse_hex("  #AbCdEf\n").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "xyz", "#12345", "#1234567", "#ggg", "##ffffff", "#ff00ff00"] {
            assert_eq!(
                parse_hex(bad),
                Err(ColorError::InvalidHex(bad.to_owned())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn non_ascii_is_rejected_not_panicking() {
        assert!(!is_valid_hex("#ééé"));
        assert!(!is_valid_hex("ü12"));
    }

    #[test]
    fn normalize_lowercases_and_expands() {
        assert_eq!(normalize_hex("#ABC").unwrap(), "#aabbcc");
        assert_eq!(normalize_hex("C86432").unwrap(), "#c86432");
    }

    #[test]
    fn format_pads_with_zeros() {
        assert_eq!(format_hex(Rgb::new(0, 5, 16)), "#000510");
    }
}
