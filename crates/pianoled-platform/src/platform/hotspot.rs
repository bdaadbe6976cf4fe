/// Handle to the Wi-Fi hotspot controller.
///
/// Hotspot control is disabled; the handle exists so callers can keep
/// passing it to [`super::Platform::manage_hotspot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Hotspot;

impl Hotspot {
    pub fn disabled() -> Self {
        log::info!("Hotspot module disabled; no Wi-Fi control will be attempted.");
        Self
    }
}
