use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Output file defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how images are written
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Stego image path when `hide` gets no `--output`
    #[serde(default = "default_stego_path")]
    pub stego: PathBuf,

    /// Difference image path when `diff` gets no `--output`
    #[serde(default = "default_difference_path")]
    pub difference: PathBuf,

    /// Recompress written PNGs with oxipng
    #[serde(default)]
    pub optimize: bool,
}

fn default_stego_path() -> PathBuf {
    PathBuf::from("stego_image.png")
}

fn default_difference_path() -> PathBuf {
    PathBuf::from("difference_image.png")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            stego: default_stego_path(),
            difference: default_difference_path(),
            optimize: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        optimize = config.output.optimize,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an optional path (CLI flag or LSBSTEGO_CONFIG)
    pub fn load_optional(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path),
            None => Self::default(),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
