//! Platform configuration (device paths, service names, command programs).
//!
//! Every field has a default matching a stock Raspberry Pi install of the
//! visualizer, so an absent config file is not an error.

use anyhow::{Context, Result};
use pianoled_error::PlatformError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the config file location when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "PIANOLED_PLATFORM_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpiConfig {
    /// Device node that exists once SPI is enabled.
    pub device: PathBuf,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from("/dev/spidev0.0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServicesConfig {
    /// System MIDI service that competes with the visualizer for the ports.
    pub midi: String,
    /// systemd unit running the visualizer itself.
    pub visualizer: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            midi: "midi.service".to_string(),
            visualizer: "pianoled".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandsConfig {
    pub use_sudo: bool,
    pub sudo: String,
    pub systemctl: String,
    pub raspi_config: String,
    pub shutdown: String,
    pub reboot: String,
    pub timeout_secs: u64,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            use_sudo: true,
            sudo: "sudo".to_string(),
            systemctl: "systemctl".to_string(),
            raspi_config: "raspi-config".to_string(),
            shutdown: "/sbin/shutdown".to_string(),
            reboot: "/sbin/reboot".to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    pub spi: SpiConfig,
    pub services: ServicesConfig,
    pub commands: CommandsConfig,
}

impl PlatformConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: PlatformConfig = toml::from_str(raw).context("failed to parse platform config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load `path`, else the file named by [`CONFIG_PATH_ENV`], else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(env_path) if !env_path.is_empty() => Self::load(Path::new(&env_path)),
            _ => {
                log::debug!("no platform config given; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), PlatformError> {
        if self.spi.device.as_os_str().is_empty() {
            return Err(PlatformError::Config("spi.device must not be empty".into()));
        }
        let names = [
            ("services.midi", &self.services.midi),
            ("services.visualizer", &self.services.visualizer),
            ("commands.systemctl", &self.commands.systemctl),
            ("commands.raspi_config", &self.commands.raspi_config),
            ("commands.shutdown", &self.commands.shutdown),
            ("commands.reboot", &self.commands.reboot),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(PlatformError::Config(format!("{field} must not be empty")));
            }
        }
        if self.commands.use_sudo && self.commands.sudo.trim().is_empty() {
            return Err(PlatformError::Config(
                "commands.sudo must not be empty when use_sudo is set".into(),
            ));
        }
        if self.commands.timeout_secs == 0 {
            return Err(PlatformError::Config(
                "commands.timeout_secs must be >= 1".into(),
            ));
        }
        Ok(())
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.commands.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EnvGuard {
        key: &'static str,
        previous: Option<std::ffi::OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
            let previous = std::env::var_os(key);
            std::env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = self.previous.take() {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    // Both env cases live in one test so parallel tests never race on the variable.
    #[test]
    fn load_or_default_consults_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platform.toml");
        std::fs::write(&path, "[services]\nvisualizer = \"visualizer.service\"\n").unwrap();

        {
            let _guard = EnvGuard::set(CONFIG_PATH_ENV, &path);
            let cfg = PlatformConfig::load_or_default(None).unwrap();
            assert_eq!(cfg.services.visualizer, "visualizer.service");

            // An explicit path still wins over the environment.
            let other = dir.path().join("other.toml");
            std::fs::write(&other, "[services]\nvisualizer = \"other\"\n").unwrap();
            let cfg = PlatformConfig::load_or_default(Some(&other)).unwrap();
            assert_eq!(cfg.services.visualizer, "other");
        }

        {
            let _guard = EnvGuard::set(CONFIG_PATH_ENV, "");
            let cfg = PlatformConfig::load_or_default(None).unwrap();
            assert_eq!(cfg, PlatformConfig::default());
        }

        {
            let _guard = EnvGuard::set(CONFIG_PATH_ENV, dir.path().join("missing.toml"));
            assert!(PlatformConfig::load_or_default(None).is_err());
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = PlatformConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PlatformConfig::default());
        assert_eq!(cfg.spi.device, PathBuf::from("/dev/spidev0.0"));
        assert_eq!(cfg.services.visualizer, "pianoled");
        assert_eq!(cfg.command_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = PlatformConfig::from_toml_str(
            r#"
            [services]
            visualizer = "visualizer.service"

            [commands]
            use_sudo = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.services.visualizer, "visualizer.service");
        assert_eq!(cfg.services.midi, "midi.service");
        assert!(!cfg.commands.use_sudo);
        assert_eq!(cfg.commands.reboot, "/sbin/reboot");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = PlatformConfig::from_toml_str("[commands]\ntimeout_secs = 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("timeout_secs"));
    }

    #[test]
    fn empty_service_name_is_rejected() {
        let err = PlatformConfig::from_toml_str("[services]\nmidi = \"  \"\n").unwrap_err();
        assert!(format!("{err:#}").contains("services.midi"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PlatformConfig::from_toml_str("[spi]\nbus = 1\n").is_err());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platform.toml");
        std::fs::write(&path, "[spi]\ndevice = \"/dev/spidev1.0\"\n").unwrap();

        let cfg = PlatformConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(cfg.spi.device, PathBuf::from("/dev/spidev1.0"));
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = PlatformConfig::load(Path::new("/nonexistent/platform.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/platform.toml"));
    }
}
