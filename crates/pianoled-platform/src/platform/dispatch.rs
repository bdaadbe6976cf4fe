//! Invoke a capability from a runtime value (CLI, remote control).

use super::{Capability, CapabilityStatus, Hotspot, LocalAddress, Outcome, Platform, WifiNetwork};
use serde::Serialize;

/// A capability call together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CheckAndEnableSpi,
    DisableSystemMidiScripts,
    InstallMidi2abc,
    UpdateVisualizer,
    Shutdown,
    Reboot,
    RestartVisualizer,
    CreateHotspotProfile,
    ChangeHotspotPassword { new_password: String },
    EnableHotspot,
    DisableHotspot,
    ManageHotspot,
    ConnectToWifi { ssid: String, password: String },
    DisconnectFromWifi,
    GetWifiNetworks,
    IsHotspotRunning,
    GetCurrentConnections,
    GetLocalAddress,
    ChangeLocalAddress { new_name: String },
}

impl Request {
    /// Build a request from a capability and positional arguments.
    pub fn from_args(capability: Capability, args: &[String]) -> Result<Self, String> {
        if args.len() != capability.arity() {
            return Err(format!(
                "{} takes {} argument(s), got {}",
                capability,
                capability.arity(),
                args.len()
            ));
        }
        let arg = |i: usize| args[i].clone();
        Ok(match capability {
            Capability::CheckAndEnableSpi => Request::CheckAndEnableSpi,
            Capability::DisableSystemMidiScripts => Request::DisableSystemMidiScripts,
            Capability::InstallMidi2abc => Request::InstallMidi2abc,
            Capability::UpdateVisualizer => Request::UpdateVisualizer,
            Capability::Shutdown => Request::Shutdown,
            Capability::Reboot => Request::Reboot,
            Capability::RestartVisualizer => Request::RestartVisualizer,
            Capability::CreateHotspotProfile => Request::CreateHotspotProfile,
            Capability::ChangeHotspotPassword => Request::ChangeHotspotPassword {
                new_password: arg(0),
            },
            Capability::EnableHotspot => Request::EnableHotspot,
            Capability::DisableHotspot => Request::DisableHotspot,
            Capability::ManageHotspot => Request::ManageHotspot,
            Capability::ConnectToWifi => Request::ConnectToWifi {
                ssid: arg(0),
                password: arg(1),
            },
            Capability::DisconnectFromWifi => Request::DisconnectFromWifi,
            Capability::GetWifiNetworks => Request::GetWifiNetworks,
            Capability::IsHotspotRunning => Request::IsHotspotRunning,
            Capability::GetCurrentConnections => Request::GetCurrentConnections,
            Capability::GetLocalAddress => Request::GetLocalAddress,
            Capability::ChangeLocalAddress => Request::ChangeLocalAddress { new_name: arg(0) },
        })
    }

    pub fn capability(&self) -> Capability {
        match self {
            Request::CheckAndEnableSpi => Capability::CheckAndEnableSpi,
            Request::DisableSystemMidiScripts => Capability::DisableSystemMidiScripts,
            Request::InstallMidi2abc => Capability::InstallMidi2abc,
            Request::UpdateVisualizer => Capability::UpdateVisualizer,
            Request::Shutdown => Capability::Shutdown,
            Request::Reboot => Capability::Reboot,
            Request::RestartVisualizer => Capability::RestartVisualizer,
            Request::CreateHotspotProfile => Capability::CreateHotspotProfile,
            Request::ChangeHotspotPassword { .. } => Capability::ChangeHotspotPassword,
            Request::EnableHotspot => Capability::EnableHotspot,
            Request::DisableHotspot => Capability::DisableHotspot,
            Request::ManageHotspot => Capability::ManageHotspot,
            Request::ConnectToWifi { .. } => Capability::ConnectToWifi,
            Request::DisconnectFromWifi => Capability::DisconnectFromWifi,
            Request::GetWifiNetworks => Capability::GetWifiNetworks,
            Request::IsHotspotRunning => Capability::IsHotspotRunning,
            Request::GetCurrentConnections => Capability::GetCurrentConnections,
            Request::GetLocalAddress => Capability::GetLocalAddress,
            Request::ChangeLocalAddress { .. } => Capability::ChangeLocalAddress,
        }
    }
}

/// Type-erased result of a dispatched capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Done,
    Skipped,
    Flag { value: bool },
    Status(CapabilityStatus),
    Networks { networks: Vec<WifiNetwork> },
    Address(LocalAddress),
    Unsupported(CapabilityStatus),
}

impl Response {
    fn from_outcome<T>(outcome: Outcome<T>, completed: impl FnOnce(T) -> Response) -> Self {
        match outcome {
            Outcome::Completed(value) => completed(value),
            Outcome::Skipped => Response::Skipped,
            Outcome::Unsupported(status) => Response::Unsupported(status),
        }
    }

    fn done(outcome: Outcome<()>) -> Self {
        Self::from_outcome(outcome, |()| Response::Done)
    }

    fn flag(outcome: Outcome<bool>) -> Self {
        Self::from_outcome(outcome, |value| Response::Flag { value })
    }
}

pub fn dispatch(platform: &dyn Platform, request: Request) -> Response {
    log::debug!("dispatch {}", request.capability());
    match request {
        Request::CheckAndEnableSpi => Response::flag(platform.check_and_enable_spi()),
        Request::DisableSystemMidiScripts => Response::done(platform.disable_system_midi_scripts()),
        Request::InstallMidi2abc => Response::done(platform.install_midi2abc()),
        Request::UpdateVisualizer => Response::done(platform.update_visualizer()),
        Request::Shutdown => Response::done(platform.shutdown()),
        Request::Reboot => Response::done(platform.reboot()),
        Request::RestartVisualizer => Response::done(platform.restart_visualizer()),
        Request::CreateHotspotProfile => Response::done(platform.create_hotspot_profile()),
        Request::ChangeHotspotPassword { new_password } => {
            Response::done(platform.change_hotspot_password(&new_password))
        }
        Request::EnableHotspot => Response::done(platform.enable_hotspot()),
        Request::DisableHotspot => Response::done(platform.disable_hotspot()),
        Request::ManageHotspot => Response::done(platform.manage_hotspot(&Hotspot::disabled())),
        Request::ConnectToWifi { ssid, password } => {
            Response::done(platform.connect_to_wifi(&ssid, &password))
        }
        Request::DisconnectFromWifi => Response::done(platform.disconnect_from_wifi()),
        Request::GetWifiNetworks => Response::from_outcome(platform.get_wifi_networks(), |networks| {
            Response::Networks { networks }
        }),
        Request::IsHotspotRunning => Response::flag(platform.is_hotspot_running()),
        Request::GetCurrentConnections => {
            Response::from_outcome(platform.get_current_connections(), Response::Status)
        }
        Request::GetLocalAddress => {
            Response::from_outcome(platform.get_local_address(), Response::Address)
        }
        Request::ChangeLocalAddress { new_name } => {
            Response::flag(platform.change_local_address(&new_name))
        }
    }
}
