//! Host platform detection
//!
//! Determines the shadow capability of the host renderer and reads the
//! system's light/dark preference where the host exposes one.

use crate::neumorphic::ShadowBackend;
use crate::theme::ColorScheme;
use std::env;

/// Host platform family
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Android views take a single elevation rather than colored shadows
    pub fn shadow_backend(self) -> ShadowBackend {
        match self {
            Self::Android => ShadowBackend::ElevationOnly,
            Self::Ios | Self::Web | Self::Desktop => ShadowBackend::Layered,
        }
    }
}

/// Read the system color scheme preference from the environment
///
/// Checked in order:
/// - `EMBOSS_COLOR_SCHEME` (`light` or `dark`), an explicit host override
/// - `GTK_THEME`, dark when the theme name or variant says so
/// - `COLORFGBG`, dark when the terminal background is a dark ANSI color
///
/// Returns `None` when the host reports nothing.
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    scheme_from_env(|key| env::var(key).ok())
}

pub(crate) fn scheme_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<ColorScheme> {
    if let Some(value) = lookup("EMBOSS_COLOR_SCHEME") {
        match value.trim().to_ascii_lowercase().parse() {
            Ok(scheme) => return Some(scheme),
            Err(err) => tracing::warn!("ignoring EMBOSS_COLOR_SCHEME: {err}"),
        }
    }

    if let Some(theme) = lookup("GTK_THEME") {
        let theme = theme.to_ascii_lowercase();
        return Some(if theme.ends_with(":dark") || theme.contains("-dark") {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        });
    }

    // "fg;bg" or "fg;default;bg"; only the background matters
    let colorfgbg = lookup("COLORFGBG")?;
    let background: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(match background {
        0..=6 | 8 => ColorScheme::Dark,
        _ => ColorScheme::Light,
    })
}
