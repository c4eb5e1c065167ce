//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (one palette per scheme)
//! - Typography (sizes, weights, line heights)
//! - Spacing (4px unit multiples)
//! - Corner radii and border widths
//! - Neumorphic shadow geometry
//!
//! Everything except colors is scheme independent.

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

use serde::Serialize;

/// Scheme-independent token tables consumed alongside a palette
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ThemeTokens {
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub borders: BorderTokens,
    pub shadows: NeumorphicShadowTokens,
}
