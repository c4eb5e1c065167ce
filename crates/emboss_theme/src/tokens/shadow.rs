//! Shadow tokens for neumorphic surfaces

use emboss_core::{Color, ThemeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size class of an embossed surface
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeClass {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ThemeError::unsupported("size class", other)),
        }
    }
}

/// Directional shadow offset
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

impl ShadowOffset {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Equal offset on both axes
    pub const fn diagonal(magnitude: f32) -> Self {
        Self::new(magnitude, magnitude)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    pub fn negate(self) -> Self {
        Self::new(-self.width, -self.height)
    }
}

/// Offset magnitude per size class
///
/// Magnitudes grow strictly with size: `small < medium < large`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowSizeSpec {
    pub small: ShadowOffset,
    pub medium: ShadowOffset,
    pub large: ShadowOffset,
}

impl ShadowSizeSpec {
    pub fn get(&self, size: SizeClass) -> ShadowOffset {
        match size {
            SizeClass::Small => self.small,
            SizeClass::Medium => self.medium,
            SizeClass::Large => self.large,
        }
    }

    /// Whether both axes increase strictly from small to large
    pub fn is_monotonic(&self) -> bool {
        self.small.width < self.medium.width
            && self.medium.width < self.large.width
            && self.small.height < self.medium.height
            && self.medium.height < self.large.height
    }
}

impl Default for ShadowSizeSpec {
    fn default() -> Self {
        Self {
            small: ShadowOffset::diagonal(3.0),
            medium: ShadowOffset::diagonal(5.0),
            large: ShadowOffset::diagonal(8.0),
        }
    }
}

/// One rendered shadow
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowSpec {
    pub color: Color,
    pub offset: ShadowOffset,
    pub opacity: f32,
    pub blur_radius: f32,
}

impl ShadowSpec {
    pub const fn new(color: Color, offset: ShadowOffset, opacity: f32, blur_radius: f32) -> Self {
        Self {
            color,
            offset,
            opacity,
            blur_radius,
        }
    }
}

/// Constants the neumorphic style generator derives shadows from
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeumorphicShadowTokens {
    pub sizes: ShadowSizeSpec,
    /// Global baseline opacity for a lone shadow
    pub base_opacity: f32,
    /// Applied to each of the two raised shadows so they do not oversaturate
    pub raised_opacity_factor: f32,
    /// Applied to the pressed-in shadow to emphasize reduced depth
    pub pressed_opacity_factor: f32,
    /// Blur radius as a multiple of the offset magnitude
    pub blur_factor: f32,
    pub flat_offset: f32,
    pub flat_opacity: f32,
    pub flat_blur: f32,
    /// Added to the offset magnitude for elevation-only backends
    pub elevation_base: f32,
}

impl NeumorphicShadowTokens {
    pub fn raised_opacity(&self) -> f32 {
        self.base_opacity * self.raised_opacity_factor
    }

    pub fn pressed_opacity(&self) -> f32 {
        (self.base_opacity * self.pressed_opacity_factor).min(1.0)
    }
}

impl Default for NeumorphicShadowTokens {
    fn default() -> Self {
        Self {
            sizes: ShadowSizeSpec::default(),
            base_opacity: 0.5,
            raised_opacity_factor: 0.7,
            pressed_opacity_factor: 1.3,
            blur_factor: 1.8,
            flat_offset: 1.0,
            flat_opacity: 0.05,
            flat_blur: 2.0,
            elevation_base: 2.0,
        }
    }
}
