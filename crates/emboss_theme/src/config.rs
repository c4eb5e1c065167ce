//! Theme configuration (`[scheme]`, `[palette]` and `[shadows]` tables)
//!
//! ```toml
//! [scheme]
//! initial = "system"   # "system" | "light" | "dark"
//!
//! [palette]
//! light_base = "#F0F3F5"
//! dark_base = "#2E3239"
//!
//! [shadows]
//! backend = "auto"     # "auto" | "layered" | "elevation"
//! ```
//!
//! Every table and key is optional.

use crate::context::ThemeProvider;
use crate::neumorphic::ShadowBackend;
use crate::platform::Platform;
use crate::source::{PollingSource, SchemeSource, StaticSource};
use crate::theme::{ColorScheme, PaletteRegistry};
use crate::themes::{DARK_BASE, LIGHT_BASE};
use emboss_core::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Top-level theme configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub scheme: SchemeConfig,
    pub palette: PaletteConfig,
    pub shadows: ShadowConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SchemeConfig {
    pub initial: InitialScheme,
}

/// Where the starting scheme comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialScheme {
    /// Follow the host preference
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub light_base: String,
    pub dark_base: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            light_base: LIGHT_BASE.as_str().to_string(),
            dark_base: DARK_BASE.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub backend: BackendChoice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendChoice {
    /// Decided by the host platform
    #[default]
    Auto,
    Layered,
    Elevation,
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| ThemeError::Config(err.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| ThemeError::Config(err.to_string()))
    }

    /// Palettes for the configured base tones
    ///
    /// Shares the built-in palettes when the defaults are kept.
    pub fn registry(&self) -> Result<PaletteRegistry> {
        if self.palette == PaletteConfig::default() {
            return Ok(PaletteRegistry::builtin().clone());
        }
        PaletteRegistry::from_seeds(&self.palette.light_base, &self.palette.dark_base)
    }

    pub fn backend(&self, platform: Platform) -> ShadowBackend {
        match self.shadows.backend {
            BackendChoice::Auto => platform.shadow_backend(),
            BackendChoice::Layered => ShadowBackend::Layered,
            BackendChoice::Elevation => ShadowBackend::ElevationOnly,
        }
    }

    /// Device source matching `[scheme] initial`
    ///
    /// A fixed scheme yields a source that never notifies.
    pub fn source(&self) -> Arc<dyn SchemeSource> {
        match self.scheme.initial {
            InitialScheme::System => Arc::new(PollingSource::system()),
            InitialScheme::Light => Arc::new(StaticSource::new(Some(ColorScheme::Light))),
            InitialScheme::Dark => Arc::new(StaticSource::new(Some(ColorScheme::Dark))),
        }
    }

    /// Provider for the current platform built from this configuration
    pub fn provider(&self) -> Result<ThemeProvider> {
        Ok(ThemeProvider::builder()
            .source(self.source())
            .registry(self.registry()?)
            .backend(self.backend(Platform::current()))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.palette.light_base, "#F0F3F5");
        assert_eq!(config.backend(Platform::Android), ShadowBackend::ElevationOnly);
        assert_eq!(config.backend(Platform::Ios), ShadowBackend::Layered);
    }

    #[test]
    fn test_partial_tables() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [scheme]
            initial = "dark"

            [palette]
            dark_base = "#202428"

            [shadows]
            backend = "elevation"
            "##,
        )
        .unwrap();

        assert_eq!(config.scheme.initial, InitialScheme::Dark);
        assert_eq!(config.palette.light_base, "#F0F3F5");
        assert_eq!(config.backend(Platform::Desktop), ShadowBackend::ElevationOnly);
        assert_eq!(config.source().preferred_scheme(), Some(ColorScheme::Dark));

        let registry = config.registry().unwrap();
        assert_eq!(registry.name(), "Custom");
        assert_eq!(registry.dark().surface.to_hex(), "#202428");
    }

    #[test]
    fn test_unknown_values_rejected() {
        let err = ThemeConfig::from_toml_str("[shadows]\nbackend = \"blurry\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn test_bad_base_tone_surfaces_on_registry() {
        let config = ThemeConfig::from_toml_str("[palette]\nlight_base = \"white\"").unwrap();
        assert!(matches!(
            config.registry(),
            Err(ThemeError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = ThemeConfig::default();
        config.shadows.backend = BackendChoice::Layered;
        let text = config.to_toml_string().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
    }
}
