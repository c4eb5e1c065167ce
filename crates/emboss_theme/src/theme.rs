//! Color schemes and the light/dark palette pair

use crate::themes::soft;
use crate::tokens::ColorPalette;
use emboss_core::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Light or dark color mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::unsupported("color scheme", other)),
        }
    }
}

/// Built-in registry, derived once per process
static BUILTIN: OnceLock<PaletteRegistry> = OnceLock::new();

/// The two precomputed palettes, one per scheme
///
/// Palettes are shared behind `Arc` and never mutated after construction.
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    name: String,
    light: Arc<ColorPalette>,
    dark: Arc<ColorPalette>,
}

impl PaletteRegistry {
    pub fn new(name: impl Into<String>, light: ColorPalette, dark: ColorPalette) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    /// Derive both palettes from `#RRGGBB` base tones
    pub fn from_seeds(light_base: &str, dark_base: &str) -> Result<Self> {
        Ok(Self::new(
            "Custom",
            soft::light(light_base)?,
            soft::dark(dark_base)?,
        ))
    }

    /// The built-in Soft palettes
    pub fn builtin() -> &'static PaletteRegistry {
        BUILTIN.get_or_init(|| {
            soft::registry().expect("built-in base tones are valid #RRGGBB colors")
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Arc<ColorPalette> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &ColorPalette {
        &self.light
    }

    pub fn dark(&self) -> &ColorPalette {
        &self.dark
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
