//! FIFO controller.
//!
//! Manages the module's onboard capture buffer through the control plane:
//! arming a capture, polling the completion flag, reading the captured
//! length, and entering burst-read mode to drain the buffer.

use crate::bus::registers::*;
use crate::bus::{get_bit, Bus};

/// Resets the FIFO read/write pointers. Idempotent.
pub fn flush<B: Bus>(bus: &mut B) {
    bus.write_reg(REG_FIFO_CONTROL, FIFO_CLEAR_MASK);
}

/// Clears the capture-done flag. Idempotent.
pub fn clear_flag<B: Bus>(bus: &mut B) {
    bus.write_reg(REG_FIFO_CONTROL, FIFO_CLEAR_MASK);
}

/// Sets the capture-start bit, beginning a new exposure.
pub fn start_capture<B: Bus>(bus: &mut B) {
    bus.write_reg(REG_FIFO_CONTROL, FIFO_START_MASK);
}

/// Polls the capture-done flag.
pub fn capture_done<B: Bus>(bus: &mut B) -> bool {
    get_bit(bus, REG_TRIGGER, CAPTURE_DONE_MASK)
}

/// Reads the captured length from the three 8-bit size registers.
///
/// The composed value is 24 bits wide by construction; callers must still
/// validate it against [`MAX_FIFO_LENGTH`] before draining.
pub fn read_length<B: Bus>(bus: &mut B) -> u32 {
    let low = bus.read_reg(REG_FIFO_SIZE1) as u32;
    let mid = bus.read_reg(REG_FIFO_SIZE2) as u32;
    let high = bus.read_reg(REG_FIFO_SIZE3) as u32;
    ((high << 16) | (mid << 8) | low) & 0x7F_FFFF
}

/// A burst-read scope over the FIFO.
///
/// Chip select is asserted for the lifetime of the reader and released on
/// drop — the whole frame is drained in one scope. Releasing chip select
/// mid-frame corrupts the FIFO read pointer, so the API offers no way to
/// do it.
pub struct BurstReader<'a, B: Bus> {
    bus: &'a mut B,
}

impl<'a, B: Bus> BurstReader<'a, B> {
    /// Asserts chip select and issues the burst-read command.
    pub fn begin(bus: &'a mut B) -> Self {
        bus.cs_low();
        bus.transfer(BURST_FIFO_READ);
        Self { bus }
    }

    /// Clocks out the next FIFO byte.
    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        self.bus.transfer(0x00)
    }
}

impl<B: Bus> Drop for BurstReader<'_, B> {
    fn drop(&mut self) {
        self.bus.cs_high();
    }
}
