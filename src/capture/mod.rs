//! Capture state machine.
//!
//! Orchestrates the whole per-frame protocol: consumes start/stop signals
//! from the host, arms the FIFO, polls for completion, and drives the frame
//! extractor matching the configured preset. One state transition per
//! [`CaptureDriver::tick`] call; the host's driver loop calls `tick`
//! repeatedly and forever.

mod config;
mod session;

pub use config::{CaptureConfig, CaptureMode, ConfigError, FileConfig, RunConfig};
pub use session::Session;

use thiserror::Error;

use crate::bus::registers::MAX_FIFO_LENGTH;
use crate::bus::Bus;
use crate::extract;
use crate::fifo;
use crate::host::Host;
use crate::sensor::{
    apply_registers, soft_reset, JpegResolution, PresetError, QvgaPreset, SensorError,
    SensorTables,
};

/// Errors raised by the `begin_*` entry points.
#[derive(Debug, Clone, Error)]
pub enum BeginError {
    /// The requested preset is not supported by the sensor.
    #[error("preset: {0}")]
    Preset(#[from] PresetError),
    /// The sensor did not acknowledge a configuration write.
    #[error("sensor configuration: {0}")]
    Sensor(#[from] SensorError),
}

/// Driver states. One session loops `Idle → Starting → Capturing → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for a start request.
    Idle,
    /// Start request seen; FIFO not yet armed.
    Starting,
    /// Exposure in flight; polling the completion flag.
    Capturing,
}

/// Tick-driven capture driver for one camera module.
///
/// Owns the bus and the host adapter exclusively; the hardware FIFO is a
/// singleton, so at most one session is ever active by construction.
pub struct CaptureDriver<B: Bus, H: Host> {
    bus: B,
    host: H,
    state: CaptureState,
    session: Option<Session>,
}

impl<B: Bus, H: Host> CaptureDriver<B, H> {
    /// Creates an unconfigured driver. A `begin_*` entry point must run
    /// before the driver responds to start requests.
    pub fn new(bus: B, host: H) -> Self {
        Self {
            bus,
            host,
            state: CaptureState::Idle,
            session: None,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Session plan recorded by the last `begin_*` call, if any.
    #[inline]
    pub fn session(&self) -> Option<Session> {
        self.session
    }

    /// Host adapter access, for scripted hosts.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Bus access, for inspection.
    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the driver, returning the bus and host adapter.
    pub fn into_parts(self) -> (B, H) {
        (self.bus, self.host)
    }

    /// Configures raw QVGA capture at the given scale-down exponent.
    ///
    /// The grayscale flag selects the sensor's one-byte-per-pixel output
    /// format and halves the expected frame length; no pixel conversion
    /// happens in the driver. Any session in flight is abandoned.
    pub fn begin_qvga(
        &mut self,
        tables: &SensorTables<'_>,
        scaledown: u8,
        grayscale: bool,
    ) -> Result<(), BeginError> {
        let preset = QvgaPreset::new(scaledown, grayscale)?;
        let list = tables
            .qvga_list(preset.scaledown())
            .ok_or(PresetError::UnsupportedScaledown(scaledown))?;

        soft_reset(&mut self.bus);
        apply_registers(&mut self.bus, tables.base_init)?;
        apply_registers(&mut self.bus, tables.raw_format)?;
        apply_registers(&mut self.bus, list)?;
        fifo::clear_flag(&mut self.bus);

        let length = preset.frame_length();
        self.session = Some(Session::Raw { length });
        self.state = CaptureState::Idle;
        let (width, height) = preset.dimensions();
        tracing::info!(width, height, grayscale, length, "configured raw capture");
        Ok(())
    }

    /// Configures compressed capture at a fixed JPEG resolution.
    ///
    /// Any session in flight is abandoned.
    pub fn begin_jpeg(
        &mut self,
        tables: &SensorTables<'_>,
        resolution: JpegResolution,
    ) -> Result<(), BeginError> {
        soft_reset(&mut self.bus);
        apply_registers(&mut self.bus, tables.base_init)?;
        apply_registers(&mut self.bus, tables.jpeg_format)?;
        apply_registers(&mut self.bus, tables.jpeg_list(resolution))?;
        fifo::clear_flag(&mut self.bus);

        self.session = Some(Session::Compressed);
        self.state = CaptureState::Idle;
        tracing::info!(%resolution, "configured compressed capture");
        Ok(())
    }

    /// Runs one state transition.
    ///
    /// Call repeatedly from the host's driver loop. A tick in `Idle` or
    /// `Capturing` (flag clear) only polls; the tick that observes the
    /// completion flag drains the whole frame before returning.
    pub fn tick(&mut self) {
        let Some(session) = self.session else {
            return;
        };

        match self.state {
            CaptureState::Idle => {
                if self.host.got_start_request() {
                    tracing::debug!(mode = session.mode_name(), "start request received");
                    self.state = CaptureState::Starting;
                }
            }
            CaptureState::Starting => {
                fifo::flush(&mut self.bus);
                fifo::clear_flag(&mut self.bus);
                fifo::start_capture(&mut self.bus);
                tracing::debug!("capture armed");
                self.state = CaptureState::Capturing;
            }
            CaptureState::Capturing => {
                if fifo::capture_done(&mut self.bus) {
                    self.drain_frame();
                    self.state = CaptureState::Idle;
                } else if self.host.got_stop_request() {
                    tracing::debug!("stop request received, session aborted");
                    self.state = CaptureState::Idle;
                }
            }
        }
    }

    fn drain_frame(&mut self) {
        match self.session {
            Some(Session::Raw { length }) => {
                if length == 0 || length > MAX_FIFO_LENGTH {
                    tracing::warn!(length, "degenerate raw frame length, frame skipped");
                } else {
                    extract::raw::extract(&mut self.bus, &mut self.host, length);
                    tracing::info!(length, "raw frame emitted");
                }
            }
            Some(Session::Compressed) => {
                let length = fifo::read_length(&mut self.bus);
                if length == 0 || length > MAX_FIFO_LENGTH {
                    tracing::warn!(length, "degenerate compressed frame length, frame skipped");
                } else {
                    let emitted = extract::jpeg::extract(&mut self.bus, &mut self.host, length);
                    tracing::info!(reported = length, emitted, "compressed frame emitted");
                }
            }
            None => {}
        }
        fifo::clear_flag(&mut self.bus);
    }
}

macro_rules! jpeg_entry_points {
    ($(($method:ident, $variant:ident, $doc:literal)),+ $(,)?) => {
        impl<B: Bus, H: Host> CaptureDriver<B, H> {
            $(
                #[doc = $doc]
                pub fn $method(&mut self, tables: &SensorTables<'_>) -> Result<(), BeginError> {
                    self.begin_jpeg(tables, JpegResolution::$variant)
                }
            )+
        }
    };
}

jpeg_entry_points! {
    (begin_jpeg_160x120, R160x120, "Configures 160x120 JPEG capture."),
    (begin_jpeg_176x144, R176x144, "Configures 176x144 JPEG capture."),
    (begin_jpeg_320x240, R320x240, "Configures 320x240 JPEG capture."),
    (begin_jpeg_352x288, R352x288, "Configures 352x288 JPEG capture."),
    (begin_jpeg_640x480, R640x480, "Configures 640x480 JPEG capture."),
    (begin_jpeg_800x600, R800x600, "Configures 800x600 JPEG capture."),
    (begin_jpeg_1024x768, R1024x768, "Configures 1024x768 JPEG capture."),
    (begin_jpeg_1280x1024, R1280x1024, "Configures 1280x1024 JPEG capture."),
    (begin_jpeg_1600x1200, R1600x1200, "Configures 1600x1200 JPEG capture."),
}
