use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ImgtreeConfig {
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Use ASCII connectors and marks instead of box-drawing glyphs
    pub ascii: bool,
    /// Allow colors on a terminal
    pub color: bool,
    /// Fixed table width instead of the terminal's
    pub width: Option<usize>,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: true,
            width: None,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<ImgtreeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Load the config, falling back to defaults when the file does not exist.
///
/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ImgtreeConfig> {
    let path = match explicit {
        Some(path) => return read_config(path),
        None => default_config_path()?,
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ImgtreeConfig::default());
    }
    read_config(&path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("imgtree"));
        }
    }
    Ok(home_dir()?.join(".config").join("imgtree"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
