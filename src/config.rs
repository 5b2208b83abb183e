use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode error: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Joins recipient names in the cell and in the tooltip.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Marker appended after the visible prefix when names are hidden.
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
    /// Capture mouse motion for hover tooltips.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_separator() -> String {
    ", ".to_string()
}

fn default_ellipsis() -> String {
    ", ...".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            ellipsis: default_ellipsis(),
            mouse: default_mouse(),
        }
    }
}

impl AppConfig {
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("maildeck");
        std::fs::create_dir_all(&path).ok();
        path.push("config.toml");
        path
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load() -> Self {
        let path = Self::get_config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("falling back to default config: {e}");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(Self::get_config_path(), content)?;
        Ok(())
    }
}
