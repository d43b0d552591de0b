//! Preview and export configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Terminal preview settings
    #[serde(default)]
    pub preview: PreviewConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Terminal preview configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Character printed for a lit pixel
    #[serde(default = "default_on")]
    pub on: char,

    /// Character printed for an unlit pixel
    #[serde(default = "default_off")]
    pub off: char,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            on: default_on(),
            off: default_off(),
        }
    }
}

/// PNG export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Integer upscale factor (1-16)
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Lit pixel color, "#RRGGBB"
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Background color, "#RRGGBB"
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

impl ExportConfig {
    /// Parsed foreground color.
    pub fn foreground_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.foreground)
            .with_context(|| format!("Invalid foreground color: {}", self.foreground))
    }

    /// Parsed background color.
    pub fn background_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.background)
            .with_context(|| format!("Invalid background color: {}", self.background))
    }
}

// Default value functions
fn default_on() -> char {
    '#'
}

fn default_off() -> char {
    '.'
}

fn default_scale() -> u32 {
    4
}

fn default_foreground() -> String {
    "#000000".to_string()
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path.as_ref(), content).context("Failed to write configuration file")?;
        Ok(())
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(1..=16).contains(&self.export.scale) {
            bail!("Export scale must be between 1 and 16, got {}", self.export.scale);
        }
        self.export.foreground_rgb()?;
        self.export.background_rgb()?;
        Ok(())
    }
}

/// Parses a "#RRGGBB" hex color.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.preview.on, '#');
        assert_eq!(config.preview.off, '.');
        assert_eq!(config.export.scale, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("[export]\nscale = 2\n").unwrap();
        assert_eq!(config.export.scale, 2);
        assert_eq!(config.export.foreground, "#000000");
        assert_eq!(config.preview, PreviewConfig::default());
    }

    #[test]
    fn test_roundtrip_toml() {
        let mut config = Config::default();
        config.preview.on = '@';
        config.export.background = "#A0C0A0".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_ranges() {
        let mut config = Config::default();
        config.export.scale = 0;
        assert!(config.validate().is_err());
        config.export.scale = 16;
        assert!(config.validate().is_ok());
        config.export.foreground = "green".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("00ff00"), Some([0, 255, 0]));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("aéxyz"), None);
    }
}
