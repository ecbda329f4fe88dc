//! Bus transaction layer.
//!
//! This module defines the contract the driver consumes for talking to the
//! camera module: single-register reads and writes on the control plane (the
//! ArduChip side of the SPI link) and the sensor plane (the imaging sensor's
//! own register file), chip-select toggling, and raw byte transfers for the
//! FIFO burst-read path. The physical transaction primitives live in a
//! host-specific adapter; an in-memory [`MockBus`] is provided for
//! deterministic tests and the demo binary.

mod mock;
pub mod registers;

pub use mock::MockBus;
pub use registers::{RegAddr, RegVal};

/// Hardware bus capability consumed by the driver.
///
/// Operations complete synchronously; transport-level retries and timeouts
/// are the adapter's concern. The driver never toggles chip select per byte:
/// a burst read holds CS low across the whole frame (see
/// [`crate::fifo::BurstReader`]).
pub trait Bus {
    /// Writes a control-plane register.
    fn write_reg(&mut self, addr: RegAddr, value: RegVal);

    /// Reads a control-plane register.
    fn read_reg(&mut self, addr: RegAddr) -> RegVal;

    /// Asserts chip select (active low).
    fn cs_low(&mut self);

    /// Releases chip select.
    fn cs_high(&mut self);

    /// Clocks one raw byte over the bus, returning the byte clocked in.
    ///
    /// Used for the burst-read path only; valid while chip select is low.
    fn transfer(&mut self, byte: u8) -> u8;

    /// Writes a sensor-plane register.
    ///
    /// Settling time after reset writes is the adapter's responsibility.
    fn write_sensor_reg(&mut self, reg: RegAddr, value: RegVal);

    /// Reads a sensor-plane register.
    fn read_sensor_reg(&mut self, reg: RegAddr) -> RegVal;
}

/// Returns true if all bits of `mask` are set in the control register.
pub(crate) fn get_bit<B: Bus>(bus: &mut B, addr: RegAddr, mask: RegVal) -> bool {
    bus.read_reg(addr) & mask == mask
}
