//! Configuration for the console core

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Size, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// Initial terminal state. Loadable from JSON; missing fields fall back
/// to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Buffer width in columns
    pub width: usize,
    /// Buffer height in rows
    pub height: usize,
    /// Window width in columns
    pub window_width: usize,
    /// Window height in rows
    pub window_height: usize,
    /// Default foreground color
    pub foreground: Color,
    /// Default background color
    pub background: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            window_width: 80,
            window_height: 25,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl Config {
    /// The configured buffer size.
    pub fn buffer_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The configured window size.
    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.buffer_size(), Size::new(80, 25));
        assert_eq!(config.window_size(), Size::new(80, 25));
        assert_eq!(config.foreground, Color::White);
        assert_eq!(config.background, Color::Black);
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canterm.json");

        let config = Config {
            width: 120,
            height: 40,
            window_width: 100,
            window_height: 30,
            foreground: Color::Green,
            background: Color::DarkBlue,
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"width": 132}"#).unwrap();
        assert_eq!(config.width, 132);
        assert_eq!(config.height, 25);
        assert_eq!(config.background, Color::Black);
    }
}
