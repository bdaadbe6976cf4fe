//! World-touching operations (process spawning, device probes, host info).
//!
//! Platform variants only reach the OS through these traits so the hardware
//! variant can be exercised against [`FakeHal`] in tests and dry runs.

pub mod device_ops;
pub mod fake_hal;
pub mod host_info_ops;
pub mod linux_hal;
pub mod process_ops;

pub use device_ops::DeviceOps;
pub use fake_hal::{FakeHal, Operation};
pub use host_info_ops::HostInfoOps;
pub use linux_hal::LinuxHal;
pub use process_ops::ProcessOps;

/// Everything a hardware platform needs from the host.
pub trait SystemHal: ProcessOps + DeviceOps + HostInfoOps + Send + Sync {}

impl<T> SystemHal for T where T: ProcessOps + DeviceOps + HostInfoOps + Send + Sync {}
