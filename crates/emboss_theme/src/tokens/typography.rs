//! Typography tokens for theming

use emboss_core::ThemeError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Font weight on the CSS 100-900 scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize)]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }
}

/// Named text style used by text consumers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    Title,
    Body,
    BodySmall,
    Caption,
    Button,
    Label,
}

impl TypographyVariant {
    pub const ALL: [TypographyVariant; 9] = [
        TypographyVariant::H1,
        TypographyVariant::H2,
        TypographyVariant::H3,
        TypographyVariant::Title,
        TypographyVariant::Body,
        TypographyVariant::BodySmall,
        TypographyVariant::Caption,
        TypographyVariant::Button,
        TypographyVariant::Label,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Title => "title",
            Self::Body => "body",
            Self::BodySmall => "bodySmall",
            Self::Caption => "caption",
            Self::Button => "button",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for TypographyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypographyVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| ThemeError::unsupported("typography variant", s))
    }
}

/// A resolved text style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub size: f32,
    pub line_height: f32,
    pub weight: FontWeight,
    pub letter_spacing: f32,
}

impl TextStyle {
    pub const fn new(size: f32, line_height: f32, weight: FontWeight) -> Self {
        Self {
            size,
            line_height,
            weight,
            letter_spacing: 0.0,
        }
    }

    pub fn tracking(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub font_family: String,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub title: TextStyle,
    pub body: TextStyle,
    pub body_small: TextStyle,
    pub caption: TextStyle,
    pub button: TextStyle,
    pub label: TextStyle,
}

impl TypographyTokens {
    /// Get a text style by variant
    pub fn variant(&self, variant: TypographyVariant) -> &TextStyle {
        match variant {
            TypographyVariant::H1 => &self.h1,
            TypographyVariant::H2 => &self.h2,
            TypographyVariant::H3 => &self.h3,
            TypographyVariant::Title => &self.title,
            TypographyVariant::Body => &self.body,
            TypographyVariant::BodySmall => &self.body_small,
            TypographyVariant::Caption => &self.caption,
            TypographyVariant::Button => &self.button,
            TypographyVariant::Label => &self.label,
        }
    }

    /// Get a text style by its camelCase name
    pub fn variant_named(&self, name: &str) -> Result<&TextStyle, ThemeError> {
        Ok(self.variant(name.parse()?))
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "System".to_string(),
            h1: TextStyle::new(32.0, 40.0, FontWeight::Bold),
            h2: TextStyle::new(24.0, 32.0, FontWeight::Bold),
            h3: TextStyle::new(20.0, 28.0, FontWeight::SemiBold),
            title: TextStyle::new(18.0, 24.0, FontWeight::SemiBold),
            body: TextStyle::new(16.0, 24.0, FontWeight::Regular),
            body_small: TextStyle::new(14.0, 20.0, FontWeight::Regular),
            caption: TextStyle::new(12.0, 16.0, FontWeight::Regular).tracking(0.2),
            button: TextStyle::new(16.0, 20.0, FontWeight::SemiBold).tracking(0.5),
            label: TextStyle::new(14.0, 18.0, FontWeight::Medium),
        }
    }
}
