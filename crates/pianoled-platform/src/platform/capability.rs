use std::fmt;
use std::str::FromStr;

/// Every named operation a platform can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    CheckAndEnableSpi,
    DisableSystemMidiScripts,
    InstallMidi2abc,
    UpdateVisualizer,
    Shutdown,
    Reboot,
    RestartVisualizer,
    CreateHotspotProfile,
    ChangeHotspotPassword,
    EnableHotspot,
    DisableHotspot,
    ManageHotspot,
    ConnectToWifi,
    DisconnectFromWifi,
    GetWifiNetworks,
    IsHotspotRunning,
    GetCurrentConnections,
    GetLocalAddress,
    ChangeLocalAddress,
}

impl Capability {
    pub const ALL: [Capability; 19] = [
        Capability::CheckAndEnableSpi,
        Capability::DisableSystemMidiScripts,
        Capability::InstallMidi2abc,
        Capability::UpdateVisualizer,
        Capability::Shutdown,
        Capability::Reboot,
        Capability::RestartVisualizer,
        Capability::CreateHotspotProfile,
        Capability::ChangeHotspotPassword,
        Capability::EnableHotspot,
        Capability::DisableHotspot,
        Capability::ManageHotspot,
        Capability::ConnectToWifi,
        Capability::DisconnectFromWifi,
        Capability::GetWifiNetworks,
        Capability::IsHotspotRunning,
        Capability::GetCurrentConnections,
        Capability::GetLocalAddress,
        Capability::ChangeLocalAddress,
    ];

    /// Stable method name used in messages and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Capability::CheckAndEnableSpi => "check_and_enable_spi",
            Capability::DisableSystemMidiScripts => "disable_system_midi_scripts",
            Capability::InstallMidi2abc => "install_midi2abc",
            Capability::UpdateVisualizer => "update_visualizer",
            Capability::Shutdown => "shutdown",
            Capability::Reboot => "reboot",
            Capability::RestartVisualizer => "restart_visualizer",
            Capability::CreateHotspotProfile => "create_hotspot_profile",
            Capability::ChangeHotspotPassword => "change_hotspot_password",
            Capability::EnableHotspot => "enable_hotspot",
            Capability::DisableHotspot => "disable_hotspot",
            Capability::ManageHotspot => "manage_hotspot",
            Capability::ConnectToWifi => "connect_to_wifi",
            Capability::DisconnectFromWifi => "disconnect_from_wifi",
            Capability::GetWifiNetworks => "get_wifi_networks",
            Capability::IsHotspotRunning => "is_hotspot_running",
            Capability::GetCurrentConnections => "get_current_connections",
            Capability::GetLocalAddress => "get_local_address",
            Capability::ChangeLocalAddress => "change_local_address",
        }
    }

    /// Number of positional arguments the capability takes.
    pub fn arity(self) -> usize {
        match self {
            Capability::ChangeHotspotPassword | Capability::ChangeLocalAddress => 1,
            Capability::ConnectToWifi => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Capability::ALL
            .iter()
            .copied()
            .find(|cap| cap.name() == wanted)
            .ok_or_else(|| format!("unknown capability: {s}"))
    }
}
