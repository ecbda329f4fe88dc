//! spicam CLI
//!
//! Demonstration driver loop against the in-memory mock bus. Selects a
//! capture preset from flags or a TOML config file, runs the tick-driven
//! state machine, and reports the bytes each session emitted.
//!
//! Real deployments swap [`MockBus`] for a hardware bus adapter, the
//! [`MemoryHost`] for a serial or network transport, and the placeholder
//! register tables for the sensor vendor's tables.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use spicam::capture::{CaptureMode, FileConfig};
use spicam::sensor::presets::QVGA_SCALEDOWN_LEVELS;
use spicam::{
    CaptureDriver, CaptureState, JpegResolution, MemoryHost, MockBus, QvgaPreset, RegPair,
    SensorTables, REG_SENTINEL,
};

/// Placeholder configuration lists. A real build supplies the vendor's
/// sentinel-terminated tables for the target sensor revision.
const DEMO_LIST: &[RegPair] = &[
    RegPair::new(0x2C, 0xFF),
    RegPair::new(0x2E, 0xDF),
    REG_SENTINEL,
];

fn demo_tables() -> SensorTables<'static> {
    SensorTables {
        base_init: DEMO_LIST,
        jpeg_format: DEMO_LIST,
        jpeg_resolution: [DEMO_LIST; JpegResolution::COUNT],
        raw_format: DEMO_LIST,
        qvga: [DEMO_LIST; QVGA_SCALEDOWN_LEVELS],
    }
}

#[derive(Debug, Parser)]
#[command(name = "spicam", version, about = "SPI camera capture driver demo")]
struct Args {
    /// TOML config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Capture mode: jpeg or raw.
    #[arg(long)]
    mode: Option<String>,

    /// JPEG resolution, e.g. 640x480.
    #[arg(long)]
    resolution: Option<String>,

    /// Raw-mode power-of-two scale-down exponent.
    #[arg(long)]
    scaledown: Option<u8>,

    /// Raw-mode one-byte-per-pixel sensor output.
    #[arg(long)]
    grayscale: bool,

    /// Number of frames to capture.
    #[arg(long)]
    frames: Option<u32>,

    /// Capture until interrupted.
    #[arg(long)]
    continuous: bool,
}

fn parse_mode(s: &str) -> Option<CaptureMode> {
    match s {
        "jpeg" => Some(CaptureMode::Jpeg),
        "raw" => Some(CaptureMode::Raw),
        _ => None,
    }
}

fn parse_resolution(s: &str) -> Option<JpegResolution> {
    Some(match s {
        "160x120" => JpegResolution::R160x120,
        "176x144" => JpegResolution::R176x144,
        "320x240" => JpegResolution::R320x240,
        "352x288" => JpegResolution::R352x288,
        "640x480" => JpegResolution::R640x480,
        "800x600" => JpegResolution::R800x600,
        "1024x768" => JpegResolution::R1024x768,
        "1280x1024" => JpegResolution::R1280x1024,
        "1600x1200" => JpegResolution::R1600x1200,
        _ => return None,
    })
}

/// Builds a synthetic frame for the mock bus matching the selected preset.
fn synthetic_frame(config: &spicam::capture::CaptureConfig) -> Vec<u8> {
    match config.mode {
        CaptureMode::Jpeg => {
            // Entropy-coded stand-in payload ending with the end-of-image
            // marker, plus padding the hardware would report past it.
            let mut frame = vec![0xFF, 0xD8];
            frame.extend((0..2048u32).map(|i| {
                let b = (i * 31 + 7) as u8;
                // Keep the payload free of accidental marker pairs.
                if b == 0xFF {
                    0xFE
                } else {
                    b
                }
            }));
            frame.extend([0xFF, 0xD9, 0x00, 0x00, 0x00, 0x00]);
            frame
        }
        CaptureMode::Raw => {
            let length = QvgaPreset::new(config.scaledown, config.grayscale)
                .map(|p| p.frame_length())
                .unwrap_or(0);
            (0..length).map(|i| (i % 251) as u8).collect()
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("spicam v{}", spicam::VERSION);
    info!("This is a demonstration using the in-memory mock bus");

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => match FileConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    if let Some(ref mode) = args.mode {
        match parse_mode(mode) {
            Some(m) => config.capture.mode = m,
            None => {
                eprintln!("Unknown mode: {} (expected jpeg or raw)", mode);
                std::process::exit(1);
            }
        }
    }
    if let Some(ref resolution) = args.resolution {
        match parse_resolution(resolution) {
            Some(r) => config.capture.resolution = r,
            None => {
                eprintln!("Unknown resolution: {}", resolution);
                std::process::exit(1);
            }
        }
    }
    if let Some(scaledown) = args.scaledown {
        config.capture.scaledown = scaledown;
    }
    config.capture.grayscale = config.capture.grayscale || args.grayscale;
    if let Some(frames) = args.frames {
        config.run.frame_count = frames;
    }
    config.run.continuous = config.run.continuous || args.continuous;

    if let Err(e) = config.capture.validate() {
        eprintln!("Invalid capture configuration: {}", e);
        std::process::exit(1);
    }

    // Script the mock hardware
    let mut bus = MockBus::new();
    bus.load_frame(synthetic_frame(&config.capture));
    bus.set_capture_latency(3);

    let mut driver = CaptureDriver::new(bus, MemoryHost::new());
    let tables = demo_tables();

    let result = match config.capture.mode {
        CaptureMode::Jpeg => driver.begin_jpeg(&tables, config.capture.resolution),
        CaptureMode::Raw => {
            driver.begin_qvga(&tables, config.capture.scaledown, config.capture.grayscale)
        }
    };
    if let Err(e) = result {
        eprintln!("Failed to configure sensor: {}", e);
        std::process::exit(1);
    }

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        if let Err(e) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
            warn!("Could not install Ctrl-C handler: {}", e);
        }
    }

    info!("Running driver loop...");

    let mut frames_captured = 0u32;
    while running.load(Ordering::SeqCst)
        && (config.run.continuous || frames_captured < config.run.frame_count)
    {
        if driver.state() == CaptureState::Idle {
            driver.host_mut().push_start(true);
        }

        let before = driver.state();
        driver.tick();

        if before == CaptureState::Capturing && driver.state() == CaptureState::Idle {
            frames_captured += 1;
            let received = driver.host_mut().received().to_vec();
            let preview: String = received
                .iter()
                .take(16)
                .map(|b| format!("{:02x}", b))
                .collect();
            info!(
                frame = frames_captured,
                bytes = received.len(),
                "frame complete, first bytes: {}",
                preview
            );
            driver.host_mut().clear_received();
        }
    }

    info!("Done. Frames captured: {}", frames_captured);
}
