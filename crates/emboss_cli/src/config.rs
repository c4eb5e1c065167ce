//! Emboss configuration file handling

use anyhow::{Context, Result};
use emboss_theme::ThemeConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "emboss.toml";

/// Load theme configuration
///
/// An explicit path must exist. Without one, `emboss.toml` in the current
/// directory is used if present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<ThemeConfig> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(DEFAULT_CONFIG_FILE)
            } else {
                path.to_path_buf()
            };
            if !path.exists() {
                anyhow::bail!("No config found at {}", path.display());
            }
            path
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} in working directory, using defaults");
                return Ok(ThemeConfig::default());
            }
            path
        }
    };

    load_file(&path)
}

fn load_file(path: &Path) -> Result<ThemeConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let config = ThemeConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("loaded theme config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emboss_theme::InitialScheme;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(path, "[scheme]\ninitial = \"light\"\n").unwrap();

        let config = load(Some(dir.path())).unwrap();
        assert_eq!(config.scheme.initial, InitialScheme::Light);
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[shadows]\nbackend = 3\n").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
