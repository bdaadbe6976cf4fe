//! Host information (read-only).
//!
//! Used to pick a platform variant; reads `/proc`.

use pianoled_error::PlatformResult;

pub trait HostInfoOps {
    /// Device-tree model string, e.g. `Raspberry Pi 4 Model B Rev 1.4`.
    fn device_model(&self) -> PlatformResult<Option<String>>;
    fn proc_cpuinfo(&self) -> PlatformResult<String>;
}
