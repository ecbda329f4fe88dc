//! Sensor register configuration tables.
//!
//! The driver treats register tables as opaque data: ordered lists of
//! (register, value) pairs terminated by a sentinel, supplied by the
//! integrator for the specific sensor revision. Only the list structure is
//! interpreted here.

use crate::bus::{RegAddr, RegVal};
use crate::sensor::presets::{JpegResolution, QVGA_SCALEDOWN_LEVELS};

/// One sensor register initialization pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegPair {
    /// Register address on the sensor plane.
    pub reg: RegAddr,
    /// Value to write.
    pub val: RegVal,
}

impl RegPair {
    /// Creates a register pair.
    pub const fn new(reg: RegAddr, val: RegVal) -> Self {
        Self { reg, val }
    }

    /// Returns true if this pair is the list terminator.
    pub fn is_sentinel(&self) -> bool {
        *self == REG_SENTINEL
    }
}

/// List terminator. Never written to the sensor.
pub const REG_SENTINEL: RegPair = RegPair::new(0xFF, 0xFF);

/// The full set of configuration lists for one sensor, externally supplied.
///
/// Each list is sentinel-terminated. The driver applies `base_init` and
/// the format list once per `begin_*` call, followed by the list for the
/// selected preset.
#[derive(Debug, Clone, Copy)]
pub struct SensorTables<'a> {
    /// Common initialization applied after soft reset.
    pub base_init: &'a [RegPair],
    /// Pixel-format setup for compressed captures (YUV tap + JPEG engine).
    pub jpeg_format: &'a [RegPair],
    /// Per-resolution lists for compressed captures, indexed by
    /// [`JpegResolution`] discriminant order.
    pub jpeg_resolution: [&'a [RegPair]; JpegResolution::COUNT],
    /// Raw-format setup (uncompressed sensor output).
    pub raw_format: &'a [RegPair],
    /// Per-scale-down lists for raw captures, index = scale-down exponent.
    pub qvga: [&'a [RegPair]; QVGA_SCALEDOWN_LEVELS],
}

impl<'a> SensorTables<'a> {
    /// Returns the resolution list for a compressed preset.
    pub fn jpeg_list(&self, resolution: JpegResolution) -> &'a [RegPair] {
        self.jpeg_resolution[resolution as usize]
    }

    /// Returns the list for a raw scale-down level, if supported.
    pub fn qvga_list(&self, scaledown: u8) -> Option<&'a [RegPair]> {
        self.qvga.get(scaledown as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_detection() {
        assert!(RegPair::new(0xFF, 0xFF).is_sentinel());
        assert!(!RegPair::new(0xFF, 0x00).is_sentinel());
        assert!(!RegPair::new(0x12, 0x80).is_sentinel());
    }

    #[test]
    fn test_qvga_list_bounds() {
        let empty: &[RegPair] = &[REG_SENTINEL];
        let tables = SensorTables {
            base_init: empty,
            jpeg_format: empty,
            jpeg_resolution: [empty; JpegResolution::COUNT],
            raw_format: empty,
            qvga: [empty; QVGA_SCALEDOWN_LEVELS],
        };

        assert!(tables.qvga_list(0).is_some());
        assert!(tables.qvga_list(QVGA_SCALEDOWN_LEVELS as u8).is_none());
    }
}
