//! Sensor configuration.
//!
//! Register tables are opaque, externally supplied data; this module only
//! knows how to apply a sentinel-terminated list to the sensor plane and how
//! the discrete output presets map to expected frame sizes.

mod loader;
pub mod presets;
mod tables;

pub use loader::{apply_registers, soft_reset, SensorError};
pub use presets::{JpegResolution, PresetError, QvgaPreset};
pub use tables::{RegPair, SensorTables, REG_SENTINEL};
