//! Neumorphic style generation
//!
//! Maps `(palette, interaction type, size class)` to a renderable
//! [`NeumorphicStyle`]. Generation is pure: the same inputs always produce
//! the same descriptor, so callers may memoize freely, but nothing is cached
//! here.
//!
//! # Interaction types
//!
//! - [`InteractionType::Raised`]: two shadows layered beneath the surface. The
//!   light shadow is offset up-left (negative offset, toward the light source)
//!   and the dark shadow down-right. Both use a reduced opacity so the pair
//!   does not oversaturate, and a blur wider than the offset.
//! - [`InteractionType::PressedIn`]: a single dark shadow at half the size
//!   offset with raised opacity. Most 2D backends cannot draw inset shadows,
//!   so this approximates a debossed surface rather than modelling one.
//! - [`InteractionType::Flat`]: a barely visible 1px shadow for edge
//!   definition against a same-color background.
//!
//! # Backends
//!
//! The [`ShadowBackend`] is fixed when the [`StyleGenerator`] is built. On
//! [`ShadowBackend::ElevationOnly`] every interaction type collapses to a
//! single elevation value; raised surfaces derive it from the size offset.

use crate::tokens::{
    ColorPalette, NeumorphicShadowTokens, RadiusTokens, ShadowOffset, ShadowSpec, ThemeTokens,
};
use emboss_core::{Color, Result, ThemeError};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

pub use crate::tokens::SizeClass;

/// Rendering mode of an embossed surface
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionType {
    Raised,
    PressedIn,
    Flat,
}

impl InteractionType {
    pub const ALL: [InteractionType; 3] = [
        InteractionType::Raised,
        InteractionType::PressedIn,
        InteractionType::Flat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Raised => "raised",
            Self::PressedIn => "pressedIn",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionType {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raised" => Ok(Self::Raised),
            "pressedIn" => Ok(Self::PressedIn),
            "flat" => Ok(Self::Flat),
            other => Err(ThemeError::unsupported("interaction type", other)),
        }
    }
}

/// Shadow capability of the target renderer
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowBackend {
    /// Colored shadows, several per element
    #[default]
    Layered,
    /// A single platform elevation value per element
    #[serde(rename = "elevation")]
    ElevationOnly,
}

impl ShadowBackend {
    pub fn name(self) -> &'static str {
        match self {
            Self::Layered => "layered",
            Self::ElevationOnly => "elevation",
        }
    }
}

impl fmt::Display for ShadowBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShadowBackend {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "layered" => Ok(Self::Layered),
            "elevation" => Ok(Self::ElevationOnly),
            other => Err(ThemeError::unsupported("shadow backend", other)),
        }
    }
}

/// How a surface's depth is rendered
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShadowTreatment {
    /// Light-direction and dark-direction shadows beneath the surface
    Layered { light: ShadowSpec, dark: ShadowSpec },
    /// One shadow, with the elevation to use where shadows are unavailable
    Single { shadow: ShadowSpec, elevation: f32 },
    /// Elevation-only approximation
    Elevation { value: f32 },
}

impl ShadowTreatment {
    /// Shadows to draw, light first
    pub fn shadows(&self) -> SmallVec<[ShadowSpec; 2]> {
        match self {
            Self::Layered { light, dark } => smallvec![*light, *dark],
            Self::Single { shadow, .. } => smallvec![*shadow],
            Self::Elevation { .. } => SmallVec::new(),
        }
    }

    pub fn elevation(&self) -> Option<f32> {
        match self {
            Self::Layered { .. } => None,
            Self::Single { elevation, .. } => Some(*elevation),
            Self::Elevation { value } => Some(*value),
        }
    }
}

/// Computed style for one `(palette, type, size)` triple
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NeumorphicStyle {
    pub background: Color,
    pub radius: f32,
    #[serde(flatten)]
    pub treatment: ShadowTreatment,
}

impl NeumorphicStyle {
    pub fn shadows(&self) -> SmallVec<[ShadowSpec; 2]> {
        self.treatment.shadows()
    }

    pub fn elevation(&self) -> Option<f32> {
        self.treatment.elevation()
    }
}

/// Caller-supplied replacements for generated values
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleOverrides {
    pub background: Option<Color>,
    pub radius: Option<f32>,
}

impl StyleOverrides {
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Neumorphic style generator bound to one shadow backend
#[derive(Clone, Debug, PartialEq)]
pub struct StyleGenerator {
    backend: ShadowBackend,
    shadows: NeumorphicShadowTokens,
    radii: RadiusTokens,
}

impl StyleGenerator {
    /// Generator with the default token tables
    pub fn new(backend: ShadowBackend) -> Self {
        Self {
            backend,
            shadows: NeumorphicShadowTokens::default(),
            radii: RadiusTokens::default(),
        }
    }

    /// Generator reading shadow geometry and radii from `tokens`
    pub fn with_tokens(backend: ShadowBackend, tokens: &ThemeTokens) -> Self {
        Self {
            backend,
            shadows: tokens.shadows.clone(),
            radii: tokens.radii.clone(),
        }
    }

    pub fn backend(&self) -> ShadowBackend {
        self.backend
    }

    pub fn shadow_tokens(&self) -> &NeumorphicShadowTokens {
        &self.shadows
    }

    pub fn generate(
        &self,
        palette: &ColorPalette,
        kind: InteractionType,
        size: SizeClass,
    ) -> NeumorphicStyle {
        self.generate_with(palette, kind, size, &StyleOverrides::default())
    }

    /// Generate from variant names such as `"pressedIn"` and `"small"`
    pub fn generate_named(
        &self,
        palette: &ColorPalette,
        kind: &str,
        size: &str,
    ) -> Result<NeumorphicStyle> {
        Ok(self.generate(palette, kind.parse()?, size.parse()?))
    }

    pub fn generate_with(
        &self,
        palette: &ColorPalette,
        kind: InteractionType,
        size: SizeClass,
        overrides: &StyleOverrides,
    ) -> NeumorphicStyle {
        let (radius, treatment) = match kind {
            InteractionType::Raised => (self.size_radius(size), self.raised(palette, size)),
            InteractionType::PressedIn => {
                (self.size_radius(size), self.pressed_in(palette, size))
            }
            InteractionType::Flat => (self.radii.radius_md, self.flat(palette)),
        };

        NeumorphicStyle {
            background: overrides.background.unwrap_or(palette.surface),
            radius: overrides.radius.unwrap_or(radius),
            treatment,
        }
    }

    fn raised(&self, palette: &ColorPalette, size: SizeClass) -> ShadowTreatment {
        let offset = self.shadows.sizes.get(size);
        match self.backend {
            ShadowBackend::Layered => {
                let opacity = self.shadows.raised_opacity();
                let blur = magnitude(offset) * self.shadows.blur_factor;
                ShadowTreatment::Layered {
                    light: ShadowSpec::new(palette.shadow_light, offset.negate(), opacity, blur),
                    dark: ShadowSpec::new(palette.shadow_dark, offset, opacity, blur),
                }
            }
            ShadowBackend::ElevationOnly => ShadowTreatment::Elevation {
                value: magnitude(offset) + self.shadows.elevation_base,
            },
        }
    }

    fn pressed_in(&self, palette: &ColorPalette, size: SizeClass) -> ShadowTreatment {
        let elevation = self.shadows.elevation_base;
        match self.backend {
            ShadowBackend::Layered => {
                let full = self.shadows.sizes.get(size);
                // Half the offset, but the blur of the full size class
                ShadowTreatment::Single {
                    shadow: ShadowSpec::new(
                        palette.shadow_dark,
                        full.scale(0.5),
                        self.shadows.pressed_opacity(),
                        magnitude(full),
                    ),
                    elevation,
                }
            }
            ShadowBackend::ElevationOnly => ShadowTreatment::Elevation { value: elevation },
        }
    }

    fn flat(&self, palette: &ColorPalette) -> ShadowTreatment {
        match self.backend {
            ShadowBackend::Layered => ShadowTreatment::Single {
                shadow: ShadowSpec::new(
                    palette.shadow_dark,
                    ShadowOffset::diagonal(self.shadows.flat_offset),
                    self.shadows.flat_opacity,
                    self.shadows.flat_blur,
                ),
                elevation: 0.0,
            },
            ShadowBackend::ElevationOnly => ShadowTreatment::Elevation { value: 0.0 },
        }
    }

    fn size_radius(&self, size: SizeClass) -> f32 {
        match size {
            SizeClass::Small => self.radii.radius_sm,
            SizeClass::Medium => self.radii.radius_md,
            SizeClass::Large => self.radii.radius_lg,
        }
    }
}

impl Default for StyleGenerator {
    fn default() -> Self {
        Self::new(ShadowBackend::default())
    }
}

/// Generate a style for a layered-shadow backend with default tokens
pub fn generate_style(
    palette: &ColorPalette,
    kind: InteractionType,
    size: SizeClass,
) -> NeumorphicStyle {
    StyleGenerator::default().generate(palette, kind, size)
}

fn magnitude(offset: ShadowOffset) -> f32 {
    offset.width.abs().max(offset.height.abs())
}
