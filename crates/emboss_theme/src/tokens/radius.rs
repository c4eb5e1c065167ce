//! Corner radius and border width tokens

use serde::Serialize;

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Full => self.radius_full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 8.0,
            radius_md: 12.0,
            radius_lg: 20.0,
            radius_xl: 30.0,
            radius_full: 9999.0,
        }
    }
}

/// Border widths
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderTokens {
    pub thin: f32,
    pub thick: f32,
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            thin: 1.0,
            thick: 2.0,
        }
    }
}
