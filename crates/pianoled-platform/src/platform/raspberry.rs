//! Raspberry Pi platform: the only variant that touches the OS.

use super::{CapabilityStatus, Hotspot, LocalAddress, Outcome, Platform, WifiNetwork};
use crate::config::PlatformConfig;
use crate::hal::SystemHal;
use pianoled_error::PlatformResult;
use std::sync::Arc;

const SPI_ENABLE_ARGS: [&str; 3] = ["nonint", "do_spi", "0"];

pub struct RaspberryPiPlatform {
    hal: Arc<dyn SystemHal>,
    config: PlatformConfig,
}

impl std::fmt::Debug for RaspberryPiPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaspberryPiPlatform")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RaspberryPiPlatform {
    pub fn new(hal: Arc<dyn SystemHal>, config: PlatformConfig) -> Self {
        Self { hal, config }
    }

    /// Run `program args...`, prefixed with the escalation program when configured.
    fn run_privileged(&self, program: &str, args: &[&str]) -> PlatformResult<()> {
        let timeout = self.config.command_timeout();
        let commands = &self.config.commands;
        if !commands.use_sudo {
            return self.hal.command_status(program, args, timeout);
        }
        let mut full: Vec<&str> = Vec::with_capacity(args.len() + 1);
        full.push(program);
        full.extend_from_slice(args);
        self.hal.command_status(&commands.sudo, &full, timeout)
    }

    fn systemctl(&self, action: &str, unit: &str) -> PlatformResult<()> {
        self.run_privileged(&self.config.commands.systemctl, &[action, unit])
    }

    /// Fire a power/service command; the outcome is only logged.
    fn fire_and_forget(&self, what: &str, result: PlatformResult<()>) -> Outcome<()> {
        match result {
            Ok(()) => log::info!("{what} requested"),
            Err(err) => log::warn!("{what} failed: {err}"),
        }
        Outcome::Completed(())
    }
}

impl Platform for RaspberryPiPlatform {
    fn check_and_enable_spi(&self) -> Outcome<bool> {
        if self.hal.path_exists(&self.config.spi.device) {
            return Outcome::Completed(true);
        }

        log::info!("SPI not enabled. Attempting to enable SPI...");
        match self.run_privileged(&self.config.commands.raspi_config, &SPI_ENABLE_ARGS) {
            Ok(()) => log::info!("SPI enabled (reboot may be required)."),
            Err(err) => log::warn!("SPI check/enable failed: {err}"),
        }
        // The device node only appears after a reboot.
        Outcome::Completed(false)
    }

    fn disable_system_midi_scripts(&self) -> Outcome<()> {
        let service = &self.config.services.midi;
        let mut clean = true;
        for action in ["disable", "stop"] {
            if let Err(err) = self.systemctl(action, service) {
                log::warn!("Error disabling MIDI scripts ({action} {service}): {err}");
                clean = false;
            }
        }
        if clean {
            log::info!("Disabled MIDI system service (if present).");
        }
        Outcome::Completed(())
    }

    fn install_midi2abc(&self) -> Outcome<()> {
        log::info!("Skipping automatic abcmidi installation (handled manually).");
        Outcome::Completed(())
    }

    fn update_visualizer(&self) -> Outcome<()> {
        log::info!("Visualizer auto-update skipped (manual only).");
        Outcome::Completed(())
    }

    fn shutdown(&self) -> Outcome<()> {
        let result = self.run_privileged(&self.config.commands.shutdown, &["-h", "now"]);
        self.fire_and_forget("System shutdown", result)
    }

    fn reboot(&self) -> Outcome<()> {
        let result = self.run_privileged(&self.config.commands.reboot, &["now"]);
        self.fire_and_forget("System reboot", result)
    }

    fn restart_visualizer(&self) -> Outcome<()> {
        let result = self.systemctl("restart", &self.config.services.visualizer);
        self.fire_and_forget("Visualizer restart", result)
    }

    // Wi-Fi and hotspot control is disabled on this platform; these only
    // return fixed values.

    fn create_hotspot_profile(&self) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn change_hotspot_password(&self, _new_password: &str) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn enable_hotspot(&self) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn disable_hotspot(&self) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn manage_hotspot(&self, _hotspot: &Hotspot) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn connect_to_wifi(&self, _ssid: &str, _password: &str) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn disconnect_from_wifi(&self) -> Outcome<()> {
        Outcome::Completed(())
    }

    fn get_wifi_networks(&self) -> Outcome<Vec<WifiNetwork>> {
        Outcome::Completed(Vec::new())
    }

    fn is_hotspot_running(&self) -> Outcome<bool> {
        Outcome::Completed(false)
    }

    fn get_current_connections(&self) -> Outcome<CapabilityStatus> {
        Outcome::Completed(CapabilityStatus::new(
            true,
            "Stubbed connection",
            "00:00:00:00:00:00",
        ))
    }

    fn get_local_address(&self) -> Outcome<LocalAddress> {
        Outcome::Completed(LocalAddress {
            success: true,
            local_address: "stub.local".to_string(),
            ip_address: "127.0.0.1".to_string(),
        })
    }

    fn change_local_address(&self, _new_name: &str) -> Outcome<bool> {
        Outcome::Completed(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::FakeHal;

    fn platform(hal: &FakeHal, config: PlatformConfig) -> RaspberryPiPlatform {
        RaspberryPiPlatform::new(Arc::new(hal.clone()), config)
    }

    #[test]
    fn privileged_commands_are_prefixed_with_sudo() {
        let hal = FakeHal::new();
        platform(&hal, PlatformConfig::default()).restart_visualizer();
        assert_eq!(
            hal.command_lines(),
            vec!["sudo systemctl restart pianoled".to_string()]
        );
    }

    #[test]
    fn sudo_can_be_turned_off() {
        let hal = FakeHal::new();
        let mut config = PlatformConfig::default();
        config.commands.use_sudo = false;

        platform(&hal, config).reboot();

        assert_eq!(hal.command_lines(), vec!["/sbin/reboot now".to_string()]);
    }

    #[test]
    fn commands_use_configured_timeout() {
        let hal = FakeHal::new();
        let mut config = PlatformConfig::default();
        config.commands.timeout_secs = 7;

        platform(&hal, config).shutdown();

        assert!(hal.has_operation(|op| matches!(
            op,
            crate::hal::Operation::Command { timeout_secs: 7, .. }
        )));
    }
}
