//! Spacing tokens based on a 4px unit

use serde::Serialize;

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Complete set of spacing tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpacingTokens {
    pub unit: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl SpacingTokens {
    /// Build the scale from a base unit (1, 2, 4, 6, 8, 12 units)
    pub fn with_unit(unit: f32) -> Self {
        Self {
            unit,
            xs: unit,
            sm: unit * 2.0,
            md: unit * 4.0,
            lg: unit * 6.0,
            xl: unit * 8.0,
            xxl: unit * 12.0,
        }
    }

    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
        }
    }

    /// Arbitrary multiple of the base unit
    pub fn units(&self, n: f32) -> f32 {
        self.unit * n
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::with_unit(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let s = SpacingTokens::default();
        assert_eq!(s.get(SpacingToken::Xs), 4.0);
        assert_eq!(s.get(SpacingToken::Md), 16.0);
        assert_eq!(s.get(SpacingToken::Xxl), 48.0);
        assert_eq!(s.units(3.0), 12.0);
    }
}
