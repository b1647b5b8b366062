//! The fixed ten-colour palette.

use crate::core::{color::Rgb, constants::PALETTE_LEN, error::PaletteError};

/// A palette entry with its human name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Named {
    pub colour: Rgb,
    pub name: &'static str,
}

const fn named(r: u8, g: u8, b: u8, name: &'static str) -> Named {
    Named {
        colour: Rgb::new(r, g, b),
        name,
    }
}

/// Palette order is part of the public contract: series `i` gets entry `i`.
pub const PALETTE: [Named; PALETTE_LEN] = [
    named(0x1E, 0x90, 0xFF, "Dodger blue"),
    named(0xE6, 0xA8, 0x17, "Harvest gold"),
    named(0xFF, 0x63, 0x47, "Tomato"),
    named(0x00, 0xA8, 0x6B, "Jade"),
    named(0x8A, 0x2B, 0xE2, "Blue violet"),
    named(0xFF, 0x6F, 0xFF, "Ultra pink"),
    named(0x00, 0xCC, 0xFF, "Vivid sky blue"),
    named(0x00, 0xFF, 0x40, "Erin"),
    named(0xFF, 0x00, 0x4F, "Folly"),
    named(0x00, 0x63, 0xA6, "Lapis lazuli"),
];

#[inline]
#[must_use]
pub fn palette() -> &'static [Named] {
    &PALETTE
}

/// Palette lookup by index.
pub fn colour(index: usize) -> Result<Rgb, PaletteError> {
    PALETTE
        .get(index)
        .map(|n| n.colour)
        .ok_or(PaletteError::OutOfRange {
            index,
            len: PALETTE_LEN,
        })
}

/// Lookup that wraps around, for more series than colours.
#[inline]
#[must_use]
pub fn colour_wrapping(index: usize) -> Rgb {
    PALETTE[index % PALETTE_LEN].colour
}

/// First `n` colours, `n` capped at the palette length.
#[must_use]
pub fn first(n: usize) -> Vec<Rgb> {
    PALETTE.iter().take(n).map(|p| p.colour).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_index() {
        assert_eq!(colour(0).unwrap().to_hex(), "#1E90FF");
        assert_eq!(colour(1).unwrap().to_hex(), "#E6A817");
        assert_eq!(colour(7).unwrap().to_hex(), "#00FF40");
        assert_eq!(colour(9).unwrap().to_hex(), "#0063A6");
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            colour(10),
            Err(PaletteError::OutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn wrapping_and_prefix() {
        assert_eq!(colour_wrapping(12), colour(2).unwrap());
        assert_eq!(first(3).len(), 3);
        assert_eq!(first(99).len(), PALETTE_LEN);
        assert_eq!(palette().len(), PALETTE_LEN);
    }
}
