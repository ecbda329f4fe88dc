//! Sensor configuration loader.
//!
//! Applies a sentinel-terminated register list to the sensor plane, reading
//! each register back to confirm the sensor acknowledged the write. The
//! driver does not retry a failed list; retry policy belongs to the caller.

use thiserror::Error;

use crate::bus::registers::{SENSOR_BANK_SELECT, SENSOR_RESET_CMD, SENSOR_RESET_REG};
use crate::bus::{Bus, RegAddr, RegVal};
use crate::sensor::tables::RegPair;

/// Errors raised while configuring the sensor.
#[derive(Debug, Clone, Error)]
pub enum SensorError {
    #[error("sensor register {reg:#04x} did not acknowledge write: wrote {wrote:#04x}, read back {read:#04x}")]
    RegisterMismatch {
        reg: RegAddr,
        wrote: RegVal,
        read: RegVal,
    },
}

/// Applies a register list, stopping at the sentinel pair.
///
/// Every write except bank selects is read back; a mismatch aborts the list
/// and surfaces as [`SensorError::RegisterMismatch`].
pub fn apply_registers<B: Bus>(bus: &mut B, list: &[RegPair]) -> Result<(), SensorError> {
    for pair in list {
        if pair.is_sentinel() {
            break;
        }

        bus.write_sensor_reg(pair.reg, pair.val);
        tracing::trace!(reg = pair.reg, val = pair.val, "sensor register write");

        // Bank selects switch the visible register file and do not read
        // back stably.
        if pair.reg == SENSOR_BANK_SELECT {
            continue;
        }

        let read = bus.read_sensor_reg(pair.reg);
        if read != pair.val {
            return Err(SensorError::RegisterMismatch {
                reg: pair.reg,
                wrote: pair.val,
                read,
            });
        }
    }
    Ok(())
}

/// Issues the sensor soft-reset sequence preceding every configuration.
pub fn soft_reset<B: Bus>(bus: &mut B) {
    bus.write_sensor_reg(SENSOR_BANK_SELECT, 0x01);
    bus.write_sensor_reg(SENSOR_RESET_REG, SENSOR_RESET_CMD);
    tracing::debug!("sensor soft reset issued");
}
