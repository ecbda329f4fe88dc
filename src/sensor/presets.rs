//! Capture presets and frame sizing.
//!
//! The sensor supports a discrete set of output configurations: nine fixed
//! JPEG resolutions and a raw QVGA mode at a handful of power-of-two
//! scale-down levels. Preset validation happens at configuration time, so
//! capture ticks never see an unsupported combination.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of supported raw scale-down levels (exponents `0..LEVELS`).
pub const QVGA_SCALEDOWN_LEVELS: usize = 3;

/// Base raw-mode output dimensions at scale-down 0.
pub const QVGA_WIDTH: u32 = 320;
pub const QVGA_HEIGHT: u32 = 240;

/// Preset validation errors.
#[derive(Debug, Clone, Error)]
pub enum PresetError {
    #[error("unsupported scale-down exponent {0}")]
    UnsupportedScaledown(u8),
}

/// Fixed JPEG output resolutions.
///
/// Discriminant order matches the resolution-list order in
/// [`crate::sensor::SensorTables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JpegResolution {
    #[serde(rename = "160x120")]
    R160x120,
    #[serde(rename = "176x144")]
    R176x144,
    #[serde(rename = "320x240")]
    R320x240,
    #[serde(rename = "352x288")]
    R352x288,
    #[serde(rename = "640x480")]
    R640x480,
    #[serde(rename = "800x600")]
    R800x600,
    #[serde(rename = "1024x768")]
    R1024x768,
    #[serde(rename = "1280x1024")]
    R1280x1024,
    #[serde(rename = "1600x1200")]
    R1600x1200,
}

impl JpegResolution {
    /// Number of supported JPEG resolutions.
    pub const COUNT: usize = 9;

    /// Output dimensions in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::R160x120 => (160, 120),
            Self::R176x144 => (176, 144),
            Self::R320x240 => (320, 240),
            Self::R352x288 => (352, 288),
            Self::R640x480 => (640, 480),
            Self::R800x600 => (800, 600),
            Self::R1024x768 => (1024, 768),
            Self::R1280x1024 => (1280, 1024),
            Self::R1600x1200 => (1600, 1200),
        }
    }
}

impl std::fmt::Display for JpegResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{}x{}", w, h)
    }
}

/// Raw-mode preset: a power-of-two scale-down exponent and a grayscale flag.
///
/// The grayscale flag selects the sensor's one-byte-per-pixel output format;
/// no pixel conversion happens in the driver. It only changes the byte count
/// expected from the FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QvgaPreset {
    scaledown: u8,
    grayscale: bool,
}

impl QvgaPreset {
    /// Creates a preset, rejecting scale-down levels the sensor cannot
    /// produce.
    pub fn new(scaledown: u8, grayscale: bool) -> Result<Self, PresetError> {
        if scaledown as usize >= QVGA_SCALEDOWN_LEVELS {
            return Err(PresetError::UnsupportedScaledown(scaledown));
        }
        Ok(Self {
            scaledown,
            grayscale,
        })
    }

    /// Returns the scale-down exponent.
    #[inline]
    pub fn scaledown(&self) -> u8 {
        self.scaledown
    }

    /// Returns the grayscale flag.
    #[inline]
    pub fn grayscale(&self) -> bool {
        self.grayscale
    }

    /// Output dimensions after scale-down.
    pub fn dimensions(&self) -> (u32, u32) {
        (QVGA_WIDTH >> self.scaledown, QVGA_HEIGHT >> self.scaledown)
    }

    /// Exact frame length in bytes: one byte per pixel in grayscale format,
    /// two otherwise.
    pub fn frame_length(&self) -> u32 {
        let (w, h) = self.dimensions();
        let bytes_per_pixel = if self.grayscale { 1 } else { 2 };
        w * h * bytes_per_pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_qvga_color_length() {
        let preset = QvgaPreset::new(0, false).unwrap();
        assert_eq!(preset.dimensions(), (320, 240));
        assert_eq!(preset.frame_length(), 153_600);
    }

    #[test]
    fn test_grayscale_halves_length() {
        let preset = QvgaPreset::new(0, true).unwrap();
        assert_eq!(preset.frame_length(), 76_800);
    }

    #[test]
    fn test_scaledown_quarters_length() {
        let preset = QvgaPreset::new(1, false).unwrap();
        assert_eq!(preset.dimensions(), (160, 120));
        assert_eq!(preset.frame_length(), 160 * 120 * 2);
    }

    #[test]
    fn test_unsupported_scaledown_rejected() {
        assert!(matches!(
            QvgaPreset::new(3, false),
            Err(PresetError::UnsupportedScaledown(3))
        ));
    }

    #[test]
    fn test_jpeg_dimensions_cover_all_presets() {
        let all = [
            JpegResolution::R160x120,
            JpegResolution::R176x144,
            JpegResolution::R320x240,
            JpegResolution::R352x288,
            JpegResolution::R640x480,
            JpegResolution::R800x600,
            JpegResolution::R1024x768,
            JpegResolution::R1280x1024,
            JpegResolution::R1600x1200,
        ];
        assert_eq!(all.len(), JpegResolution::COUNT);
        for r in all {
            let (w, h) = r.dimensions();
            assert!(w > 0 && h > 0);
        }
    }
}
