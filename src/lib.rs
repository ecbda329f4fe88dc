//! spicam — tick-driven capture driver for SPI camera modules.
//!
//! Drives a camera sensor module over a register-based control bus with an
//! onboard frame FIFO, producing an ordered byte stream for a host. The
//! driver is polymorphic over the physical bus and the host transport, so
//! the whole capture protocol runs deterministically against in-memory
//! fakes.
//!
//! # Architecture
//!
//! ```text
//! host controller → capture (state machine) → fifo (arm/poll)
//!                                           → extract (drain) → host sink
//!                        sensor (configuration) ─ bus (transactions)
//! ```
//!
//! # Design Principles
//!
//! - **Tick-driven**: one state transition per [`capture::CaptureDriver::tick`]
//!   call; the host's loop provides all scheduling. No threads, no yielding
//!   mid-frame.
//! - **Locally recoverable**: degenerate frame lengths skip the frame and
//!   return to idle; nothing is fatal to the driver.
//! - **Structural chip-select discipline**: a burst read holds chip select
//!   low for the whole frame through an RAII scope.
//! - **Opaque byte mover**: no image decoding or pixel conversion.
//!
//! # Example
//!
//! ```
//! use spicam::{
//!     bus::MockBus,
//!     capture::{CaptureDriver, CaptureState},
//!     host::MemoryHost,
//!     sensor::{JpegResolution, RegPair, SensorTables, REG_SENTINEL},
//! };
//!
//! const EMPTY: &[RegPair] = &[REG_SENTINEL];
//! let tables = SensorTables {
//!     base_init: EMPTY,
//!     jpeg_format: EMPTY,
//!     jpeg_resolution: [EMPTY; JpegResolution::COUNT],
//!     raw_format: EMPTY,
//!     qvga: [EMPTY; 3],
//! };
//!
//! let mut bus = MockBus::new();
//! bus.load_frame(vec![0xFF, 0xD8, 0x42, 0xFF, 0xD9]);
//!
//! let mut driver = CaptureDriver::new(bus, MemoryHost::new());
//! driver.begin_jpeg_320x240(&tables).unwrap();
//!
//! driver.host_mut().push_start(true);
//! while {
//!     driver.tick();
//!     driver.state() != CaptureState::Idle
//! } {}
//!
//! assert_eq!(driver.host_mut().received(), &[0xFF, 0xD8, 0x42, 0xFF, 0xD9]);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod bus;
pub mod capture;
pub(crate) mod extract;
pub mod fifo;
pub mod host;
pub mod sensor;

// Re-export commonly used types at crate root
pub use bus::{Bus, MockBus};
pub use capture::{BeginError, CaptureDriver, CaptureState, FileConfig, Session};
pub use host::{Host, MemoryHost};
pub use sensor::{JpegResolution, QvgaPreset, RegPair, SensorTables, REG_SENTINEL};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
