//! RGBA color type and the crayon palette.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    /// The default paper color of a fresh surface.
    pub const fn paper() -> Self {
        Self::opaque(255, 255, 250)
    }

    /// Parse a hex color string (`#rgb`, `#rrggbb`, or `#rrggbbaa`).
    ///
    /// Returns `None` for anything that doesn't parse; the caller picks
    /// the fallback.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?.trim();
        // Byte-indexed slicing below; non-ASCII input must bail, not panic.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::opaque(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::opaque(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as `#rrggbb` (alpha omitted when fully opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

/// The kid-friendly crayon palette offered by the surface UI.
pub const CRAYON_PALETTE: &[Rgba] = &[
    Rgba::opaque(0, 0, 0),       // black
    Rgba::opaque(228, 26, 28),   // red
    Rgba::opaque(255, 127, 0),   // orange
    Rgba::opaque(255, 211, 0),   // yellow
    Rgba::opaque(77, 175, 74),   // green
    Rgba::opaque(55, 126, 184),  // blue
    Rgba::opaque(152, 78, 163),  // purple
    Rgba::opaque(166, 86, 40),   // brown
    Rgba::opaque(247, 129, 191), // pink
];
