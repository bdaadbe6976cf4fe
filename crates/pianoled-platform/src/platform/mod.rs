//! Platform capability facade.
//!
//! [`Platform`] lists every capability the visualizer may ask of its host.
//! Each method has a default body that defers to [`Platform::fallback_mode`],
//! so a variant only implements what it actually supports:
//!
//! - [`DefaultPlatform`] implements nothing; every call reports
//!   "Method '<name>' is not supported on this platform".
//! - [`NullPlatform`] silences the fallback; every call is a no-op.
//! - [`RaspberryPiPlatform`] runs real commands through a [`crate::hal::SystemHal`].
//!
//! No method returns an error. Failures inside a capability are logged and
//! folded into its result.

pub mod capability;
pub mod default;
pub mod dispatch;
pub mod hotspot;
pub mod kind;
pub mod null;
pub mod raspberry;
pub mod types;

pub use capability::Capability;
pub use default::DefaultPlatform;
pub use dispatch::{dispatch, Request, Response};
pub use hotspot::Hotspot;
pub use kind::{select_platform, PlatformKind};
pub use null::NullPlatform;
pub use raspberry::RaspberryPiPlatform;
pub use types::{CapabilityStatus, FallbackMode, LocalAddress, Outcome, WifiNetwork};

pub trait Platform: Send + Sync {
    /// Answer given by every capability this platform does not override.
    fn fallback_mode(&self) -> FallbackMode {
        FallbackMode::Unsupported
    }

    /// Make sure the SPI interface is enabled. `true` only when it is usable right now.
    fn check_and_enable_spi(&self) -> Outcome<bool> {
        self.fallback_mode().outcome(Capability::CheckAndEnableSpi)
    }

    /// Stop and disable the system MIDI service (best effort).
    fn disable_system_midi_scripts(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::DisableSystemMidiScripts)
    }

    fn install_midi2abc(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::InstallMidi2abc)
    }

    fn update_visualizer(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::UpdateVisualizer)
    }

    fn shutdown(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::Shutdown)
    }

    fn reboot(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::Reboot)
    }

    fn restart_visualizer(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::RestartVisualizer)
    }

    fn create_hotspot_profile(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::CreateHotspotProfile)
    }

    fn change_hotspot_password(&self, _new_password: &str) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::ChangeHotspotPassword)
    }

    fn enable_hotspot(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::EnableHotspot)
    }

    fn disable_hotspot(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::DisableHotspot)
    }

    fn manage_hotspot(&self, _hotspot: &Hotspot) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::ManageHotspot)
    }

    fn connect_to_wifi(&self, _ssid: &str, _password: &str) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::ConnectToWifi)
    }

    fn disconnect_from_wifi(&self) -> Outcome<()> {
        self.fallback_mode().outcome(Capability::DisconnectFromWifi)
    }

    fn get_wifi_networks(&self) -> Outcome<Vec<WifiNetwork>> {
        self.fallback_mode().outcome(Capability::GetWifiNetworks)
    }

    fn is_hotspot_running(&self) -> Outcome<bool> {
        self.fallback_mode().outcome(Capability::IsHotspotRunning)
    }

    fn get_current_connections(&self) -> Outcome<CapabilityStatus> {
        self.fallback_mode().outcome(Capability::GetCurrentConnections)
    }

    fn get_local_address(&self) -> Outcome<LocalAddress> {
        self.fallback_mode().outcome(Capability::GetLocalAddress)
    }

    fn change_local_address(&self, _new_name: &str) -> Outcome<bool> {
        self.fallback_mode().outcome(Capability::ChangeLocalAddress)
    }
}
