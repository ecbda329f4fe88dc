//! Control-register map for the camera module's SPI control plane.
//!
//! These are the registers the driver consumes; the full map belongs to the
//! hardware documentation. Addresses and masks follow the ArduChip layout
//! used by the Mini 2MP module.

/// Register address width for the control plane.
///
/// Selected per target hardware generation; the Mini 2MP exposes an 8-bit
/// address space on both the control and sensor planes.
pub type RegAddr = u8;

/// Register value width for the control plane.
pub type RegVal = u8;

/// FIFO control register.
pub const REG_FIFO_CONTROL: RegAddr = 0x04;

/// FIFO control: clear the capture-done flag and reset read/write pointers.
pub const FIFO_CLEAR_MASK: RegVal = 0x01;

/// FIFO control: start a capture.
pub const FIFO_START_MASK: RegVal = 0x02;

/// Trigger/status register.
pub const REG_TRIGGER: RegAddr = 0x41;

/// Trigger register: capture-done flag.
pub const CAPTURE_DONE_MASK: RegVal = 0x08;

/// Captured-length register, bits 0..8.
pub const REG_FIFO_SIZE1: RegAddr = 0x42;

/// Captured-length register, bits 8..16.
pub const REG_FIFO_SIZE2: RegAddr = 0x43;

/// Captured-length register, bits 16..24.
pub const REG_FIFO_SIZE3: RegAddr = 0x44;

/// Burst-read command byte. Sent once with chip select held low; every
/// subsequent transfer clocks out the next FIFO byte without re-addressing.
pub const BURST_FIFO_READ: RegVal = 0x3C;

/// Write-direction bit for raw SPI register transactions.
///
/// Concrete bus adapters OR this into the address byte when writing a control
/// register; it is not part of the register-level `Bus` contract.
pub const REG_WRITE_MASK: RegAddr = 0x80;

/// Largest frame the onboard FIFO can hold, in bytes.
///
/// The 24-bit length registers can report more; anything above this is a
/// degenerate read and must not be drained.
pub const MAX_FIFO_LENGTH: u32 = 0x5FFFF;

/// Sensor-plane bank-select register.
///
/// Written during configuration but never read back; bank switches are not
/// stable read-back targets.
pub const SENSOR_BANK_SELECT: RegAddr = 0xFF;

/// Sensor-plane soft-reset register (valid after selecting bank 1).
pub const SENSOR_RESET_REG: RegAddr = 0x12;

/// Soft-reset command value for [`SENSOR_RESET_REG`].
pub const SENSOR_RESET_CMD: RegVal = 0x80;
