/*
 * Colour Module
 *
 * This module defines the HexColor value type used for particles and links,
 * the fixed swarm palette, and the opacity fade applied to link strokes.
 *
 * The fade darkens each channel instead of alpha blending, so a link at
 * opacity 0.4 over a black canvas looks the same as a 40% alpha stroke
 * without needing a blend pass.
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Errors produced while parsing a `#RRGGBB` colour string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have exactly six hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// Swarm colours, picked by `swarm_id % PALETTE.len()`
pub const PALETTE: [HexColor; 7] = [
    HexColor::new(0xFF, 0x60, 0x60),
    HexColor::new(0x60, 0xFF, 0x60),
    HexColor::new(0x60, 0x60, 0xFF),
    HexColor::new(0xFF, 0x60, 0xFF),
    HexColor::new(0x60, 0xFF, 0xFF),
    HexColor::new(0xFF, 0xB0, 0x60),
    HexColor::new(0xB0, 0x60, 0xFF),
];

impl HexColor {
    pub const BLACK: HexColor = HexColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `opacity`, truncating toward zero.
    ///
    /// Values outside `0.0..=1.0` saturate at the byte range, and a NaN
    /// opacity produces black.
    pub fn with_opacity(self, opacity: f32) -> HexColor {
        let scale = |channel: u8| -> u8 {
            let scaled = channel as f32 * opacity;
            if scaled.is_nan() {
                0
            } else {
                // `as` truncates and saturates to 0..=255
                scaled as u8
            }
        };

        HexColor::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;

        if digits.chars().count() != 6 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::BadDigit(s.to_string()))
        };

        Ok(HexColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

// Colour for a swarm, cycling through the palette
pub fn palette_color(swarm_id: usize) -> HexColor {
    PALETTE[swarm_id % PALETTE.len()]
}

/// Darken a `#RRGGBB` colour string by `opacity` and return it re-encoded.
pub fn with_opacity(base_color: &str, opacity: f32) -> Result<String, ColorError> {
    let base: HexColor = base_color.parse()?;
    Ok(base.with_opacity(opacity).to_string())
}
