//! Platform variant selection.

use super::{DefaultPlatform, NullPlatform, Platform, RaspberryPiPlatform};
use crate::config::PlatformConfig;
use crate::hal::{HostInfoOps, SystemHal};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const RASPBERRY_PI_MARKER: &str = "raspberry pi";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Default,
    Null,
    RaspberryPi,
}

impl PlatformKind {
    /// Pick a variant from host information: Raspberry Pi hardware, else default.
    ///
    /// Read errors count as "not a Pi".
    pub fn detect(host: &dyn HostInfoOps) -> Self {
        let model = match host.device_model() {
            Ok(model) => model,
            Err(err) => {
                log::debug!("device-tree model unavailable: {err}");
                None
            }
        };
        if model.is_some_and(|m| is_raspberry_pi(&m)) {
            return PlatformKind::RaspberryPi;
        }

        match host.proc_cpuinfo() {
            Ok(cpuinfo) if cpuinfo_is_raspberry_pi(&cpuinfo) => PlatformKind::RaspberryPi,
            Ok(_) => PlatformKind::Default,
            Err(err) => {
                log::debug!("cpuinfo unavailable: {err}");
                PlatformKind::Default
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformKind::Default => "default",
            PlatformKind::Null => "null",
            PlatformKind::RaspberryPi => "rpi",
        }
    }
}

fn is_raspberry_pi(text: &str) -> bool {
    text.to_lowercase().contains(RASPBERRY_PI_MARKER)
}

fn cpuinfo_is_raspberry_pi(cpuinfo: &str) -> bool {
    cpuinfo.lines().any(|line| {
        let Some((key, value)) = line.split_once(':') else {
            return false;
        };
        matches!(key.trim(), "Model" | "Hardware") && is_raspberry_pi(value)
    })
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(PlatformKind::Default),
            "null" | "none" => Ok(PlatformKind::Null),
            "rpi" | "raspberry" | "raspberrypi" | "hardware" => Ok(PlatformKind::RaspberryPi),
            other => Err(format!("unknown platform variant: {other}")),
        }
    }
}

/// Build the platform for `kind`. Only the Raspberry Pi variant uses `hal`/`config`.
pub fn select_platform(
    kind: PlatformKind,
    config: PlatformConfig,
    hal: Arc<dyn SystemHal>,
) -> Box<dyn Platform> {
    log::info!("Using {kind} platform");
    match kind {
        PlatformKind::Default => Box::new(DefaultPlatform),
        PlatformKind::Null => Box::new(NullPlatform),
        PlatformKind::RaspberryPi => Box::new(RaspberryPiPlatform::new(hal, config)),
    }
}
