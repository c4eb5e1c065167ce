//! Soft theme: palettes derived from a single base tone per scheme
//!
//! Neumorphic surfaces sit on a background of the same color, so surface,
//! background, borders and the two emboss shadows are all shades of one base
//! tone. Brand and status colors are fixed literals that only differ between
//! schemes for contrast.
//!
//! The light shadow is always lighter than the surface and the dark shadow
//! always darker, in both schemes. Surface-relative slots (border, disabled,
//! tab bar) flip direction in the dark scheme, where stepping away from the
//! surface means getting lighter.

use crate::theme::PaletteRegistry;
use crate::tokens::ColorPalette;
use emboss_core::{Color, Result};

/// Seed color of a scheme's palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseTone(pub &'static str);

impl BaseTone {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Near-white seed for the light scheme
pub const LIGHT_BASE: BaseTone = BaseTone("#F0F3F5");

/// Charcoal seed for the dark scheme
pub const DARK_BASE: BaseTone = BaseTone("#2E3239");

/// Shade percentages applied to the base tone per derived slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneOffsets {
    pub border: f32,
    pub disabled: f32,
    pub shadow_light: f32,
    pub shadow_dark: f32,
    pub tab_bar_background: f32,
    pub tab_bar_border: f32,
}

pub const LIGHT_OFFSETS: ToneOffsets = ToneOffsets {
    border: -10.0,
    disabled: -20.0,
    shadow_light: 15.0,
    shadow_dark: -15.0,
    tab_bar_background: 3.0,
    tab_bar_border: -8.0,
};

pub const DARK_OFFSETS: ToneOffsets = ToneOffsets {
    border: 10.0,
    disabled: 25.0,
    shadow_light: 15.0,
    shadow_dark: -15.0,
    tab_bar_background: -5.0,
    tab_bar_border: 12.0,
};

/// Fixed, non-derived colors for one scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrandColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_primary: Color,
}

pub const LIGHT_BRAND: BrandColors = BrandColors {
    primary: Color::from_hex(0x5B6CFF),
    secondary: Color::from_hex(0x8E9AAF),
    accent: Color::from_hex(0xFF8A5B),
    success: Color::from_hex(0x2ECC71),
    error: Color::from_hex(0xE74C3C),
    warning: Color::from_hex(0xF39C12),
    text_primary: Color::from_hex(0x2D3436),
    text_secondary: Color::from_hex(0x636E72),
    text_on_primary: Color::WHITE,
};

pub const DARK_BRAND: BrandColors = BrandColors {
    primary: Color::from_hex(0x7C8BFF),
    secondary: Color::from_hex(0xA3AEC2),
    accent: Color::from_hex(0xFF9E7A),
    success: Color::from_hex(0x4CD98B),
    error: Color::from_hex(0xFF6B5E),
    warning: Color::from_hex(0xFFB443),
    text_primary: Color::from_hex(0xECEFF1),
    text_secondary: Color::from_hex(0xA4ABB0),
    text_on_primary: Color::WHITE,
};

/// Derive a palette from a `#RRGGBB` base tone
pub fn derive(base: &str, offsets: &ToneOffsets, brand: &BrandColors) -> Result<ColorPalette> {
    let base = Color::parse_hex(base)?;
    Ok(ColorPalette {
        primary: brand.primary,
        secondary: brand.secondary,
        accent: brand.accent,
        background: base,
        surface: base,
        text_primary: brand.text_primary,
        text_secondary: brand.text_secondary,
        text_on_primary: brand.text_on_primary,
        border: base.shade(offsets.border),
        success: brand.success,
        error: brand.error,
        warning: brand.warning,
        shadow_light: base.shade(offsets.shadow_light),
        shadow_dark: base.shade(offsets.shadow_dark),
        disabled: base.shade(offsets.disabled),
        tab_bar_background: base.shade(offsets.tab_bar_background),
        tab_bar_active: brand.primary,
        tab_bar_inactive: brand.text_secondary,
        tab_bar_border: base.shade(offsets.tab_bar_border),
    })
}

/// Light palette from a custom base tone
pub fn light(base: &str) -> Result<ColorPalette> {
    derive(base, &LIGHT_OFFSETS, &LIGHT_BRAND)
}

/// Dark palette from a custom base tone
pub fn dark(base: &str) -> Result<ColorPalette> {
    derive(base, &DARK_OFFSETS, &DARK_BRAND)
}

/// Both built-in palettes
pub fn registry() -> Result<PaletteRegistry> {
    Ok(PaletteRegistry::new(
        "Soft",
        light(LIGHT_BASE.as_str())?,
        dark(DARK_BASE.as_str())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_shadow_slots() {
        let palette = light(LIGHT_BASE.as_str()).unwrap();
        assert_eq!(palette.shadow_light.to_hex(), "#ffffff");
        assert_eq!(palette.shadow_dark.to_hex(), "#ccced0");
        assert_eq!(palette.surface, palette.background);
    }

    #[test]
    fn test_dark_shadow_slots() {
        let palette = dark(DARK_BASE.as_str()).unwrap();
        assert_eq!(palette.surface.to_hex(), "#2e3239");
        assert_eq!(palette.shadow_light.to_hex(), "#343941");
        // 46*0.85 = 39.1, 50*0.85 = 42.5, 57*0.85 = 48.45
        assert_eq!(palette.shadow_dark.to_hex(), "#272a30");
    }

    #[test]
    fn test_dark_border_is_lighter_than_surface() {
        let palette = dark(DARK_BASE.as_str()).unwrap();
        assert!(palette.border.relative_luminance() > palette.surface.relative_luminance());
        let palette = light(LIGHT_BASE.as_str()).unwrap();
        assert!(palette.border.relative_luminance() < palette.surface.relative_luminance());
    }

    #[test]
    fn test_tab_bar_follows_brand() {
        let palette = light(LIGHT_BASE.as_str()).unwrap();
        assert_eq!(palette.tab_bar_active, LIGHT_BRAND.primary);
        assert_eq!(palette.tab_bar_inactive, LIGHT_BRAND.text_secondary);
    }
}
