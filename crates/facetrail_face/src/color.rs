//! Palette for the face glyphs.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Solid white (icon body).
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Trail green: every face feature and the page background.
    pub const FACE: Self = Self::hex(0x14C9_A0FF);
    /// Tongue red.
    pub const TONGUE: Self = Self::hex(0xFF5C_5CFF);

    /// Creates a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Creates a color from `0xRRGGBBAA`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(hex: u32) -> Self {
        Self::rgba(
            (hex >> 24) as u8,
            (hex >> 16) as u8,
            (hex >> 8) as u8,
            hex as u8,
        )
    }

    /// True when fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 0xFF
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::FACE
    }
}

/// CSS form: `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}
