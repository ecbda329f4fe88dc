//! In-memory bus implementation for tests and demonstration.

use super::registers::*;
use super::{Bus, RegAddr, RegVal};

/// Mock bus emulating the camera module's control plane, sensor plane, and
/// capture FIFO.
///
/// A capture is scripted by loading a frame payload and, optionally, a
/// reported length and a completion latency measured in trigger-register
/// polls. Control-plane writes and burst entries are recorded so tests can
/// assert on bus activity.
#[derive(Debug)]
pub struct MockBus {
    regs: [RegVal; 256],
    sensor_regs: [RegVal; 256],
    /// Sensor registers forced to a fixed read-back value.
    stuck_sensor: Vec<(RegAddr, RegVal)>,
    frame: Vec<u8>,
    reported_length: Option<u32>,
    /// Trigger-register polls remaining before the done flag sets.
    capture_latency: u32,
    polls_remaining: u32,
    exposing: bool,
    burst_pos: usize,
    in_burst: bool,
    cs_asserted: bool,
    /// Log of every control-plane write, in order.
    pub writes: Vec<(RegAddr, RegVal)>,
    /// Number of burst-read commands issued.
    pub burst_entries: u32,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            regs: [0; 256],
            sensor_regs: [0; 256],
            stuck_sensor: Vec::new(),
            frame: Vec::new(),
            reported_length: None,
            capture_latency: 0,
            polls_remaining: 0,
            exposing: false,
            burst_pos: 0,
            in_burst: false,
            cs_asserted: false,
            writes: Vec::new(),
            burst_entries: 0,
        }
    }

    /// Loads the payload the next capture will produce.
    pub fn load_frame(&mut self, frame: Vec<u8>) {
        self.frame = frame;
    }

    /// Overrides the length reported by the FIFO size registers.
    ///
    /// Used to emulate padding past the true payload, or a degenerate
    /// hardware report. Defaults to the loaded frame's length.
    pub fn set_reported_length(&mut self, length: u32) {
        self.reported_length = Some(length);
    }

    /// Sets how many trigger-register polls elapse before a started capture
    /// reads as done.
    pub fn set_capture_latency(&mut self, polls: u32) {
        self.capture_latency = polls;
    }

    /// Forces a sensor register to a fixed read-back value, emulating a
    /// sensor that does not acknowledge writes.
    pub fn stick_sensor_reg(&mut self, reg: RegAddr, value: RegVal) {
        self.stuck_sensor.push((reg, value));
    }

    /// Directly sets a control register, bypassing the write log.
    pub fn poke_reg(&mut self, addr: RegAddr, value: RegVal) {
        self.regs[addr as usize] = value;
    }

    /// Count of control-plane writes matching the given register and value.
    pub fn writes_of(&self, addr: RegAddr, value: RegVal) -> usize {
        self.writes.iter().filter(|w| **w == (addr, value)).count()
    }

    fn reported(&self) -> u32 {
        self.reported_length.unwrap_or(self.frame.len() as u32)
    }

    fn complete_capture(&mut self) {
        self.exposing = false;
        self.regs[REG_TRIGGER as usize] |= CAPTURE_DONE_MASK;
        let len = self.reported();
        self.regs[REG_FIFO_SIZE1 as usize] = (len & 0xFF) as u8;
        self.regs[REG_FIFO_SIZE2 as usize] = ((len >> 8) & 0xFF) as u8;
        self.regs[REG_FIFO_SIZE3 as usize] = ((len >> 16) & 0xFF) as u8;
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for MockBus {
    fn write_reg(&mut self, addr: RegAddr, value: RegVal) {
        self.writes.push((addr, value));
        self.regs[addr as usize] = value;

        if addr == REG_FIFO_CONTROL {
            if value & FIFO_CLEAR_MASK != 0 {
                self.regs[REG_TRIGGER as usize] &= !CAPTURE_DONE_MASK;
                self.burst_pos = 0;
            }
            if value & FIFO_START_MASK != 0 {
                self.exposing = true;
                self.polls_remaining = self.capture_latency;
            }
        }
    }

    fn read_reg(&mut self, addr: RegAddr) -> RegVal {
        if addr == REG_TRIGGER && self.exposing {
            if self.polls_remaining == 0 {
                self.complete_capture();
            } else {
                self.polls_remaining -= 1;
            }
        }
        self.regs[addr as usize]
    }

    fn cs_low(&mut self) {
        self.cs_asserted = true;
    }

    fn cs_high(&mut self) {
        self.cs_asserted = false;
        self.in_burst = false;
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        debug_assert!(self.cs_asserted, "transfer with chip select released");

        if !self.in_burst {
            if byte == BURST_FIFO_READ {
                self.in_burst = true;
                self.burst_entries += 1;
            }
            return 0;
        }

        let out = self.frame.get(self.burst_pos).copied().unwrap_or(0);
        self.burst_pos += 1;
        out
    }

    fn write_sensor_reg(&mut self, reg: RegAddr, value: RegVal) {
        self.sensor_regs[reg as usize] = value;
    }

    fn read_sensor_reg(&mut self, reg: RegAddr) -> RegVal {
        if let Some(&(_, v)) = self.stuck_sensor.iter().find(|(r, _)| *r == reg) {
            return v;
        }
        self.sensor_regs[reg as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_latency_delays_done_flag() {
        let mut bus = MockBus::new();
        bus.load_frame(vec![1, 2, 3]);
        bus.set_capture_latency(2);

        bus.write_reg(REG_FIFO_CONTROL, FIFO_START_MASK);
        assert_eq!(bus.read_reg(REG_TRIGGER) & CAPTURE_DONE_MASK, 0);
        assert_eq!(bus.read_reg(REG_TRIGGER) & CAPTURE_DONE_MASK, 0);
        assert_ne!(bus.read_reg(REG_TRIGGER) & CAPTURE_DONE_MASK, 0);
    }

    #[test]
    fn test_length_registers_report_frame_size() {
        let mut bus = MockBus::new();
        bus.load_frame(vec![0u8; 0x01_02_03]);
        bus.write_reg(REG_FIFO_CONTROL, FIFO_START_MASK);
        bus.read_reg(REG_TRIGGER);

        assert_eq!(bus.read_reg(REG_FIFO_SIZE1), 0x03);
        assert_eq!(bus.read_reg(REG_FIFO_SIZE2), 0x02);
        assert_eq!(bus.read_reg(REG_FIFO_SIZE3), 0x01);
    }

    #[test]
    fn test_burst_serves_frame_bytes_in_order() {
        let mut bus = MockBus::new();
        bus.load_frame(vec![0xAA, 0xBB, 0xCC]);

        bus.cs_low();
        bus.transfer(BURST_FIFO_READ);
        assert_eq!(bus.transfer(0), 0xAA);
        assert_eq!(bus.transfer(0), 0xBB);
        assert_eq!(bus.transfer(0), 0xCC);
        // Exhausted FIFO reads as zero.
        assert_eq!(bus.transfer(0), 0x00);
        bus.cs_high();

        assert_eq!(bus.burst_entries, 1);
    }

    #[test]
    fn test_fifo_clear_resets_read_pointer_and_done_flag() {
        let mut bus = MockBus::new();
        bus.load_frame(vec![0x11, 0x22]);
        bus.write_reg(REG_FIFO_CONTROL, FIFO_START_MASK);
        bus.read_reg(REG_TRIGGER);

        bus.cs_low();
        bus.transfer(BURST_FIFO_READ);
        assert_eq!(bus.transfer(0), 0x11);
        bus.cs_high();

        bus.write_reg(REG_FIFO_CONTROL, FIFO_CLEAR_MASK);
        assert_eq!(bus.read_reg(REG_TRIGGER) & CAPTURE_DONE_MASK, 0);

        bus.cs_low();
        bus.transfer(BURST_FIFO_READ);
        assert_eq!(bus.transfer(0), 0x11);
        bus.cs_high();
    }

    #[test]
    fn test_stuck_sensor_register_ignores_writes() {
        let mut bus = MockBus::new();
        bus.stick_sensor_reg(0x12, 0x00);
        bus.write_sensor_reg(0x12, 0x80);
        assert_eq!(bus.read_sensor_reg(0x12), 0x00);
    }
}
