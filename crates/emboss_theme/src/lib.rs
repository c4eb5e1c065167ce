//! Emboss Theme System
//!
//! An adaptive theming engine for soft-UI ("neumorphic") interfaces, where
//! surfaces appear extruded from or pressed into a background of the same
//! color.
//!
//! # Overview
//!
//! - **Palettes**: a light and a dark [`ColorPalette`], each derived from one
//!   base tone and computed once
//! - **Design tokens**: typography, spacing, radii and shadow
//!   geometry, shared by both schemes
//! - **Style generation**: shadow treatments for raised, pressed-in and flat
//!   surfaces, adapted to whether the renderer supports colored shadows
//! - **Scheme state**: follows the device light/dark preference until the
//!   user picks a scheme
//! - **Context**: a provider that hands components a consistent snapshot
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use emboss_theme::{use_theme, InteractionType, PollingSource, SizeClass, ThemeProvider};
//! use std::sync::Arc;
//!
//! let provider = ThemeProvider::new(Arc::new(PollingSource::system()));
//! let _scope = provider.enter();
//!
//! let theme = use_theme()?;
//! let button = theme.generate_style(InteractionType::Raised, SizeClass::Small);
//! let text = theme.current_colors().text_primary;
//!
//! // Pin the scheme; device changes are ignored from now on
//! theme.toggle_scheme();
//! ```
//!
//! # Shadow backends
//!
//! Renderers with colored shadow support ([`ShadowBackend::Layered`]) get a
//! light shadow toward the top-left and a dark one toward the bottom-right.
//! Elevation-only renderers (Android) get a single elevation value instead.
//! The backend is chosen once per provider from [`Platform::shadow_backend`].

pub mod config;
pub mod context;
pub mod neumorphic;
pub mod platform;
pub mod source;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::{BackendChoice, InitialScheme, ThemeConfig};
pub use context::{
    try_use_theme, use_theme, ProviderScope, ThemeContext, ThemeProvider, ThemeProviderBuilder,
    ThemeSnapshot,
};
pub use neumorphic::{
    generate_style, InteractionType, NeumorphicStyle, ShadowBackend, ShadowTreatment,
    StyleGenerator, StyleOverrides,
};
pub use platform::{detect_system_color_scheme, Platform};
pub use source::{
    ManualSource, PollingSource, PreferenceCallback, SchemeSource, SourceToken, StaticSource,
};
pub use state::{ChangeOrigin, SchemeChange, SchemeController};
pub use theme::{ColorScheme, PaletteRegistry};
pub use themes::{BaseTone, DARK_BASE, LIGHT_BASE};
pub use tokens::*;

pub use emboss_core::{shade, Color, ObserverId, Result, ThemeError};
