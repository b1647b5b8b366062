//! sRGB colour value plus zero-alloc true-colour ANSI escapes.

use std::{fmt, str};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::ColorError;

/// One 8-bit-per-channel colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::new(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// `#RRGGBB`, upper-case.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Hex digits without the leading `#`, the form style sheets expect inside a cycler.
    #[must_use]
    pub fn to_bare_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// True-colour foreground escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ansi_fg(self) -> AnsiCode {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [self.r, self.g, self.b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        AnsiCode::Inline {
            buf,
            len: len as u8,
        }
    }
}

impl str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// style files and JSON carry colours as hex strings
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `Rgb::ansi_fg`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

impl From<Rgb> for AnsiCode {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.ansi_fg()
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#1E90FF"), Ok(Rgb::new(0x1E, 0x90, 0xFF)));
        assert_eq!(Rgb::from_hex("e6a817"), Ok(Rgb::new(0xE6, 0xA8, 0x17)));
    }

    #[test]
    fn rejects_bad_literals() {
        assert!(matches!(
            Rgb::from_hex("#12345"),
            Err(ColorError::InvalidHexLength(_))
        ));
        assert!(matches!(
            Rgb::from_hex("#12345G"),
            Err(ColorError::InvalidHexDigit(_))
        ));
    }

    #[test]
    fn hex_forms() {
        let c = Rgb::new(0, 0x63, 0xA6);
        assert_eq!(c.to_hex(), "#0063A6");
        assert_eq!(c.to_bare_hex(), "0063A6");
        assert_eq!(c.to_string(), "#0063A6");
    }

    #[test]
    fn ansi_escape() {
        assert_eq!(Rgb::new(255, 0, 79).ansi_fg().as_str(), "\x1b[38;2;255;0;79m");
        assert_eq!(Rgb::new(0, 0, 0).ansi_fg().as_str(), "\x1b[38;2;0;0;0m");
        let wrapped = colorize(&Rgb::new(1, 2, 3).into(), "x");
        assert_eq!(wrapped, "\x1b[38;2;1;2;3mx\x1b[0m");
    }
}
