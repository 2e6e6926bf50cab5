//! Configuration management for the PermitPro demo.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI/TUI settings
    pub ui: UiConfig,

    /// Demo flow settings
    pub demo: DemoConfig,
}

/// UI/TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (built-in: dark, light, high-contrast)
    pub theme: String,

    /// Custom theme color overrides (hex format: "#RRGGBB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColorsConfig>,
}

/// Custom color configuration for theme overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomColorsConfig {
    /// Primary accent color (headers, selected cards)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary accent color (fees, success indicators)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Main text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Warning banner color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Demo flow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How long the scripted "analysis" runs before showing results
    pub processing_delay_ms: u64,

    /// Fictional address shown on the intro screen
    pub location: String,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.permitpro.toml` in current directory
    /// 2. `~/.config/permitpro/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        // Try local config first
        let local_config = PathBuf::from(".permitpro.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        // Try global config
        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("permitpro").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        // Return defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the global config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let permitpro_dir = config_dir.join("permitpro");
        std::fs::create_dir_all(&permitpro_dir)?;

        let config_path = permitpro_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("permitpro"))
    }

    /// The processing delay as a `Duration`.
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.demo.processing_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { ui: UiConfig::default(), demo: DemoConfig::default() }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "dark".to_string(), custom_colors: None }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
            location: "123 Demo Street, Demo City, ST 12345".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.demo.processing_delay_ms, 2000);
        assert_eq!(config.processing_delay(), Duration::from_millis(2000));
        assert!(config.demo.location.contains("Demo City"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[demo]\nprocessing_delay_ms = 50\n").unwrap();
        assert_eq!(config.demo.processing_delay_ms, 50);
        assert_eq!(config.ui.theme, "dark");
        assert!(config.demo.location.contains("Demo City"));
    }

    #[test]
    fn test_custom_colors_parse() {
        let toml_str = r##"
            [ui]
            theme = "light"

            [ui.custom_colors]
            primary = "#6366f1"
            border = "#4b5563"
        "##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.theme, "light");
        let colors = config.ui.custom_colors.unwrap();
        assert_eq!(colors.primary.as_deref(), Some("#6366f1"));
        assert_eq!(colors.border.as_deref(), Some("#4b5563"));
        assert!(colors.text.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"high-contrast\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.ui.theme, "high-contrast");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.ui.theme, config.ui.theme);
        assert_eq!(parsed.demo.processing_delay_ms, config.demo.processing_delay_ms);
    }
}
