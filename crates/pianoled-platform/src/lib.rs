//! Platform layer for the piano LED visualizer.
//!
//! Host-specific operations (SPI setup, system services, power control and the
//! disabled Wi-Fi/hotspot surface) sit behind the [`Platform`] trait. A
//! variant is chosen once at startup with [`select_platform`] and kept for the
//! life of the process.

pub mod config;
pub mod hal;
pub mod logging;
pub mod platform;

pub use config::PlatformConfig;
pub use hal::{FakeHal, LinuxHal, SystemHal};
pub use pianoled_error::{PlatformError, PlatformResult};
pub use platform::{
    dispatch, select_platform, Capability, CapabilityStatus, DefaultPlatform, FallbackMode,
    Hotspot, LocalAddress, NullPlatform, Outcome, Platform, PlatformKind, RaspberryPiPlatform,
    Request, Response, WifiNetwork,
};
