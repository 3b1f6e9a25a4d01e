//! Conversion between `#rrggbb` text and [`RGB8`] colors.

use rgb::RGB8;
use crate::error::{Error, Result};

/// Strip an optional leading `#` and return the 6 hex digits, if the
/// text has the right shape.
fn digits(text: &str) -> Option<&[u8]> {
    let s = text.strip_prefix('#').unwrap_or(text).as_bytes();
    if s.len() == 6 && s.iter().all(u8::is_ascii_hexdigit) { Some(s) }
    else { None }
}

#[inline]
fn nibble(c: u8) -> u8 {
    match c {
        b'0' ..= b'9' => c - b'0',
        b'a' ..= b'f' => c - b'a' + 10,
        _ => c - b'A' + 10, // `digits` only lets hex digits through
    }
}

/// Says whether `text` is a 6-digit hex color, optionally prefixed
/// with `#`.  Letters may be upper or lower case.
///
/// ```
/// use tint_shade::is_valid_hex;
/// assert!(is_valid_hex("4287f5"));
/// assert!(!is_valid_hex("#428"));
/// assert!(!is_valid_hex("zzzzzz"));
/// ```
pub fn is_valid_hex(text: &str) -> bool { digits(text).is_some() }

/// Parse a color accepted by [`is_valid_hex`].
pub fn parse_hex(text: &str) -> Result<RGB8> {
    let d = digits(text).ok_or_else(|| Error::invalid(text))?;
    let byte = |i: usize| (nibble(d[i]) << 4) | nibble(d[i + 1]);
    Ok(RGB8 { r: byte(0), g: byte(2), b: byte(4) })
}

/// Return the canonical form `#rrggbb` (lowercase) of the color.
pub fn format_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_cases_and_prefix() {
        assert_eq!(parse_hex("#4287F5"), Ok(RGB8::new(0x42, 0x87, 0xf5)));
        assert_eq!(parse_hex("4287f5"), Ok(RGB8::new(0x42, 0x87, 0xf5)));
        assert_eq!(parse_hex("#000000"), Ok(RGB8::new(0, 0, 0)));
    }

    #[test]
    fn rejects_malformed() {
        for s in ["", "#", "#428", "zzzzzz", "#4287f5a", "##4287f", " 4287f5",
                  "4287f", "+12345", "#12345é"] {
            assert!(!is_valid_hex(s), "{s:?} accepted");
            assert!(matches!(parse_hex(s),
                             Err(Error::InvalidColorFormat { .. })));
        }
    }

    #[test]
    fn formats_lowercase_padded() {
        assert_eq!(format_hex(RGB8::new(1, 10, 255)), "#010aff");
        assert_eq!(format_hex(parse_hex("ABCDEF").unwrap()), "#abcdef");
    }
}
