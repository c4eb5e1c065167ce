//! Color value type and shading arithmetic
//!
//! Colors are stored as 8-bit sRGB channels plus a floating alpha. Palette
//! derivation works on the integer channels directly so that a shaded color
//! is reproducible bit-for-bit from its seed.

use crate::error::{Result, ThemeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8-bit color channels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a `#RRGGBB` string (hex digits are case-insensitive)
    pub fn parse_hex(input: &str) -> Result<Self> {
        let invalid = || ThemeError::InvalidColorFormat {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parse either form produced by [`Color::to_css`]
    ///
    /// Accepts `#RRGGBB` or `rgba(r,g,b,a)` with `0..=255` channels and alpha
    /// in `0.0..=1.0`. Whitespace around the components is ignored.
    pub fn parse_css(input: &str) -> Result<Self> {
        let Some(body) = input
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Self::parse_hex(input);
        };

        let invalid = || ThemeError::InvalidColorFormat {
            input: input.to_string(),
        };
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return Err(invalid());
        };
        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let alpha = a.parse::<f32>().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }
        Ok(Self::rgba(channel(*r)?, channel(*g)?, channel(*b)?, alpha))
    }

    /// Lowercase `#rrggbb`, alpha is not encoded
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbb` for opaque colors, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        } else {
            self.to_hex()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Lighten (positive) or darken (negative) every channel by `percent`
    ///
    /// Each channel is scaled by `(100 + percent) / 100`, truncated, and
    /// clamped to `0..=255` independently, so shading saturates at white or
    /// black instead of wrapping. Alpha is carried over unchanged.
    pub fn shade(self, percent: f32) -> Self {
        let scale = |channel: u8| {
            (f32::from(channel) * (100.0 + percent) / 100.0)
                .trunc()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// WCAG 2.1 relative luminance in `0.0..=1.0`
    pub fn relative_luminance(&self) -> f32 {
        fn linear(channel: u8) -> f32 {
            let c = f32::from(channel) / 255.0;
            if c <= 0.040_45 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_css(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_css(&s).map_err(serde::de::Error::custom)
    }
}

/// Shade a `#RRGGBB` string by `percent`, returning lowercase `#rrggbb`
pub fn shade(hex: &str, percent: f32) -> Result<String> {
    Ok(Color::parse_hex(hex)?.shade(percent).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_and_format() {
        let c = Color::parse_hex("#F0F3F5").unwrap();
        assert_eq!(c, Color::rgb(0xF0, 0xF3, 0xF5));
        assert_eq!(c.to_hex(), "#f0f3f5");
        assert_eq!(Color::from_hex(0xF0F3F5), c);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "F0F3F5", "#F0F3F", "#F0F3F5A", "#GGGGGG", "#f0f3f5 ", "rgb(1,2,3)"] {
            assert_eq!(
                Color::parse_hex(bad),
                Err(ThemeError::InvalidColorFormat {
                    input: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_shade_zero_is_identity() {
        assert_eq!(shade("#F0F3F5", 0.0).unwrap(), "#f0f3f5");
    }

    #[test]
    fn test_shade_known_values() {
        // 240*1.15 = 276 -> 255, 243 -> 279 -> 255, 245 -> 281 -> 255
        assert_eq!(shade("#F0F3F5", 15.0).unwrap(), "#ffffff");
        // 240*0.85 = 204, 243*0.85 = 206.55, 245*0.85 = 208.25
        assert_eq!(shade("#F0F3F5", -15.0).unwrap(), "#ccced0");
        assert_eq!(shade("#2E3239", 15.0).unwrap(), "#343941");
    }

    #[test]
    fn test_shade_saturates() {
        assert_eq!(shade("#123456", -100.0).unwrap(), "#000000");
        assert_eq!(shade("#123456", -250.0).unwrap(), "#000000");
        assert_eq!(shade("#102030", 10_000.0).unwrap(), "#ffffff");
    }

    #[test]
    fn test_shade_preserves_alpha() {
        let c = Color::rgb(100, 100, 100).with_alpha(0.4).shade(10.0);
        assert_eq!(c, Color::rgba(110, 110, 110, 0.4));
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Color::rgb(1, 2, 3).to_css(), "#010203");
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.5).to_css(), "rgba(1,2,3,0.5)");
    }

    #[test]
    fn test_luminance_ordering() {
        assert!(Color::WHITE.relative_luminance() > 0.99);
        assert!(Color::BLACK.relative_luminance() < 0.01);
        let base = Color::from_hex(0x2E3239);
        assert!(base.shade(15.0).relative_luminance() > base.relative_luminance());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::from_hex(0xABCDEF)).unwrap();
        assert_eq!(json, "\"#abcdef\"");
        let back: Color = serde_json::from_str("\"#ABCDEF\"").unwrap();
        assert_eq!(back, Color::from_hex(0xABCDEF));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_translucent_serde_keeps_alpha() {
        let shadow = Color::rgb(0xA3, 0xB1, 0xC6).with_alpha(0.35);
        let json = serde_json::to_string(&shadow).unwrap();
        assert_eq!(json, "\"rgba(163,177,198,0.35)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shadow);

        assert_eq!(
            "rgba(1, 2, 3, 0.5)".parse::<Color>().unwrap(),
            Color::rgba(1, 2, 3, 0.5)
        );
        for bad in ["rgba(1,2,3)", "rgba(1,2,3,1.5)", "rgba(256,0,0,0.5)", "rgba(1,2,3,x)"] {
            assert!(Color::parse_css(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    fn hex_color() -> impl Strategy<Value = String> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| format!("#{r:02X}{g:02x}{b:02X}"))
    }

    proptest! {
        #[test]
        fn prop_shade_is_well_formed(hex in hex_color(), percent in -150.0f32..300.0) {
            let out = shade(&hex, percent).unwrap();
            prop_assert_eq!(out.len(), 7);
            prop_assert!(Color::parse_hex(&out).is_ok());
        }

        #[test]
        fn prop_shade_zero_roundtrips(hex in hex_color()) {
            prop_assert_eq!(shade(&hex, 0.0).unwrap(), hex.to_ascii_lowercase());
        }

        #[test]
        fn prop_shade_minus_hundred_is_black(hex in hex_color()) {
            prop_assert_eq!(shade(&hex, -100.0).unwrap(), "#000000");
        }

        #[test]
        fn prop_large_percent_saturates_nonzero_channels(
            r in 1u8..=255,
            g in 1u8..=255,
            b in 1u8..=255,
        ) {
            let c = Color::rgb(r, g, b).shade(25_500.0);
            prop_assert_eq!(c, Color::WHITE);
        }

        #[test]
        fn prop_shade_is_monotonic(
            hex in hex_color(),
            lo in -100.0f32..100.0,
            delta in 0.0f32..100.0,
        ) {
            let base = Color::parse_hex(&hex).unwrap();
            let a = base.shade(lo);
            let b = base.shade(lo + delta);
            prop_assert!(a.r <= b.r && a.g <= b.g && a.b <= b.b);
        }
    }
}
