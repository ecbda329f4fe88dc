//! Driver run configuration.
//!
//! TOML-loadable settings for the demo binary: which preset to configure and
//! how many frames to run. The library's entry points take these values
//! directly; this file format just bundles them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sensor::presets::{JpegResolution, PresetError, QvgaPreset};

/// Capture mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Compressed capture at a fixed JPEG resolution.
    Jpeg,
    /// Uncompressed capture at a QVGA scale-down level.
    Raw,
}

/// Preset selection for a driver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture mode.
    pub mode: CaptureMode,
    /// JPEG resolution (compressed mode only).
    pub resolution: JpegResolution,
    /// Power-of-two scale-down exponent (raw mode only).
    pub scaledown: u8,
    /// One-byte-per-pixel sensor output (raw mode only).
    pub grayscale: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            mode: CaptureMode::Jpeg,
            resolution: JpegResolution::R320x240,
            scaledown: 0,
            grayscale: false,
        }
    }
}

impl CaptureConfig {
    /// Validates the selected preset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == CaptureMode::Raw {
            QvgaPreset::new(self.scaledown, self.grayscale)?;
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid preset: {0}")]
    InvalidPreset(#[from] PresetError),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Run-loop settings for the demo binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Run until interrupted (true) or capture a fixed number of frames.
    pub continuous: bool,
    /// Number of frames to capture if not continuous.
    pub frame_count: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            frame_count: 1,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.capture.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(CaptureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_oversized_scaledown_invalid() {
        let config = CaptureConfig {
            mode: CaptureMode::Raw,
            scaledown: 7,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPreset(_))
        ));
    }

    #[test]
    fn test_scaledown_ignored_in_jpeg_mode() {
        let config = CaptureConfig {
            mode: CaptureMode::Jpeg,
            scaledown: 7,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FileConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.capture.mode, CaptureMode::Jpeg);
        assert_eq!(parsed.capture.resolution, JpegResolution::R320x240);
        assert_eq!(parsed.run.frame_count, 1);
    }
}
