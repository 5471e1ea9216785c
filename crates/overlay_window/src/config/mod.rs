//! Configuration system
//!
//! Window creation parameters, loadable from TOML or RON files.

use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// File-format dispatch is by extension; TOML is the primary format, RON
/// is accepted for parity with hand-written asset files.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Overlay window creation parameters
///
/// `opaque = false` requests a transparent framebuffer with no OS chrome;
/// `click_through` lets mouse events fall through to the windows beneath.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Client-area width in pixels
    pub width: u32,
    /// Client-area height in pixels
    pub height: u32,
    /// Title bar text (visible only on decorated windows)
    pub title: String,
    /// Opaque decorated window, or transparent undecorated overlay
    pub opaque: bool,
    /// Whether mouse events pass through to the windows beneath
    pub click_through: bool,
}

impl WindowConfig {
    /// Create a configuration with the given client-area size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Choose between an opaque decorated window and a transparent overlay
    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    /// Let mouse events pass through to the windows beneath
    pub fn with_click_through(mut self, click_through: bool) -> Self {
        self.click_through = click_through;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Overlay".to_string(),
            opaque: true,
            click_through: false,
        }
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_config() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.opaque);
        assert!(!config.click_through);
    }

    #[test]
    fn test_builder_methods() {
        let config = WindowConfig::new(1280, 720)
            .with_title("HUD")
            .with_opaque(false)
            .with_click_through(true);
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert_eq!(config.title, "HUD");
        assert!(!config.opaque);
        assert!(config.click_through);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = WindowConfig::new(1024, 768).with_title("Overlay Demo");
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: WindowConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.width, 1024);
        assert_eq!(parsed.height, 768);
        assert_eq!(parsed.title, "Overlay Demo");
    }

    #[test]
    fn test_file_round_trip_and_format_dispatch() {
        let path = std::env::temp_dir().join("overlay_window_config_test.toml");
        let path = path.to_string_lossy().to_string();

        let config = WindowConfig::new(320, 240).with_click_through(true);
        config.save_to_file(&path).expect("save");
        let loaded = WindowConfig::load_from_file(&path).expect("load");
        assert_eq!(loaded.width, 320);
        assert!(loaded.click_through);
        let _ = std::fs::remove_file(&path);

        let err = config.save_to_file("config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
