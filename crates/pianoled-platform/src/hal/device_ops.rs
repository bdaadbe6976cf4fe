use std::path::Path;

/// Device node probes (e.g. `/dev/spidev0.0`).
pub trait DeviceOps {
    fn path_exists(&self, path: &Path) -> bool;
}
