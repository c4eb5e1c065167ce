//! Color tokens for theming

use emboss_core::{Color, ThemeError};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    Secondary,
    Accent,

    // Surface colors
    Background,
    Surface,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextOnPrimary,

    Border,

    // Semantic colors
    Success,
    Error,
    Warning,

    // Emboss shadows
    ShadowLight,
    ShadowDark,

    Disabled,

    // Tab bar
    TabBarBackground,
    TabBarActive,
    TabBarInactive,
    TabBarBorder,
}

impl ColorToken {
    /// Every token, in palette declaration order
    pub const ALL: [ColorToken; 19] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextOnPrimary,
        ColorToken::Border,
        ColorToken::Success,
        ColorToken::Error,
        ColorToken::Warning,
        ColorToken::ShadowLight,
        ColorToken::ShadowDark,
        ColorToken::Disabled,
        ColorToken::TabBarBackground,
        ColorToken::TabBarActive,
        ColorToken::TabBarInactive,
        ColorToken::TabBarBorder,
    ];

    /// Stable camelCase slot name
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::TextOnPrimary => "textOnPrimary",
            Self::Border => "border",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::ShadowLight => "shadowLight",
            Self::ShadowDark => "shadowDark",
            Self::Disabled => "disabled",
            Self::TabBarBackground => "tabBarBackground",
            Self::TabBarActive => "tabBarActive",
            Self::TabBarInactive => "tabBarInactive",
            Self::TabBarBorder => "tabBarBorder",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| ThemeError::unsupported("color token", s))
    }
}

/// Complete set of semantic colors for one scheme
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    // Brand colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_primary: Color,

    pub border: Color,

    // Semantic colors
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    // Emboss shadows
    pub shadow_light: Color,
    pub shadow_dark: Color,

    pub disabled: Color,

    // Tab bar
    pub tab_bar_background: Color,
    pub tab_bar_active: Color,
    pub tab_bar_inactive: Color,
    pub tab_bar_border: Color,
}

impl ColorPalette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextOnPrimary => self.text_on_primary,
            ColorToken::Border => self.border,
            ColorToken::Success => self.success,
            ColorToken::Error => self.error,
            ColorToken::Warning => self.warning,
            ColorToken::ShadowLight => self.shadow_light,
            ColorToken::ShadowDark => self.shadow_dark,
            ColorToken::Disabled => self.disabled,
            ColorToken::TabBarBackground => self.tab_bar_background,
            ColorToken::TabBarActive => self.tab_bar_active,
            ColorToken::TabBarInactive => self.tab_bar_inactive,
            ColorToken::TabBarBorder => self.tab_bar_border,
        }
    }

    /// Iterate `(token, color)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        ColorToken::ALL.into_iter().map(|token| (token, self.get(token)))
    }

    /// Slot names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        ColorToken::ALL.into_iter().map(ColorToken::name)
    }

    /// Slot name to CSS color string
    ///
    /// Keys match [`ColorToken::name`].
    pub fn to_map(&self) -> FxHashMap<&'static str, String> {
        self.iter()
            .map(|(token, color)| (token.name(), color.to_css()))
            .collect()
    }
}
