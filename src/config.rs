use anyhow::{bail, Context, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{output, palette, sizes};
use crate::icon::Palette;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from(output::DEFAULT_DIR)
}

fn default_file_name() -> String {
    output::DEFAULT_FILE_NAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: default_dir(),
            file_name: default_file_name(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconsConfig {
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_primary")]
    pub primary: Color,
    #[serde(default = "default_secondary")]
    pub secondary: Color,
}

fn default_sizes() -> Vec<u32> {
    sizes::DEFAULT_SIZES.to_vec()
}

fn default_primary() -> Color {
    Color(palette::PRIMARY)
}

fn default_secondary() -> Color {
    Color(palette::SECONDARY)
}

impl Default for IconsConfig {
    fn default() -> Self {
        IconsConfig {
            sizes: default_sizes(),
            primary: default_primary(),
            secondary: default_secondary(),
        }
    }
}

impl IconsConfig {
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.primary.into(),
            secondary: self.secondary.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            icons: IconsConfig::default(),
        }
    }
}

/// RGBA color written as `#RRGGBB` or `#RRGGBBAA` in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 4]);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digits in color {0:?}")]
    BadDigit(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorParseError::BadLength(hex.chars().count()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(Color([channel(0)?, channel(1)?, channel(2)?, alpha]))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl Config {
    /// Load settings from `path`, or the built-in defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.icons.sizes.is_empty() {
            bail!("at least one icon size is required");
        }

        let mut seen = HashSet::new();
        for &size in &self.icons.sizes {
            if size == 0 {
                bail!("icon sizes must be greater than 0");
            }
            if size > sizes::MAX_ICON_SIZE {
                bail!("icon size {} exceeds the maximum of {}", size, sizes::MAX_ICON_SIZE);
            }
            if !seen.insert(size) {
                bail!("icon size {} is listed more than once", size);
            }
        }

        if self.output.dir.as_os_str().is_empty() {
            bail!("output dir cannot be empty");
        }
        if !self.output.file_name.contains(output::SIZE_PLACEHOLDER) {
            bail!(
                "output file_name must contain {} so sizes don't overwrite each other",
                output::SIZE_PLACEHOLDER
            );
        }

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}
