//! Result shapes returned by platform capabilities.

use super::Capability;
use serde::Serialize;

/// `(success, message, extra)` status triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityStatus {
    pub success: bool,
    pub message: String,
    pub extra: String,
}

impl CapabilityStatus {
    pub fn new(success: bool, message: impl Into<String>, extra: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            extra: extra.into(),
        }
    }

    /// The uniform failure returned for a capability the platform lacks.
    pub fn unsupported(capability: Capability) -> Self {
        Self::new(
            false,
            format!(
                "Method '{}' is not supported on this platform",
                capability.name()
            ),
            "",
        )
    }

    pub fn as_tuple(&self) -> (bool, &str, &str) {
        (self.success, &self.message, &self.extra)
    }
}

/// Local network identity (hostname and address).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalAddress {
    pub success: bool,
    pub local_address: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub signal_strength: i32,
    pub security: String,
}

/// What a platform did with a capability call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The platform handled the call and produced a value.
    Completed(T),
    /// Silently ignored (null platform).
    Skipped,
    /// The platform does not provide this capability.
    Unsupported(CapabilityStatus),
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            _ => None,
        }
    }
}

/// How a platform answers capabilities it does not implement itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    Unsupported,
    Silent,
}

impl FallbackMode {
    pub fn outcome<T>(self, capability: Capability) -> Outcome<T> {
        match self {
            FallbackMode::Unsupported => {
                Outcome::Unsupported(CapabilityStatus::unsupported(capability))
            }
            FallbackMode::Silent => Outcome::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_status_names_the_method() {
        let status = CapabilityStatus::unsupported(Capability::EnableHotspot);
        assert_eq!(
            status.as_tuple(),
            (
                false,
                "Method 'enable_hotspot' is not supported on this platform",
                ""
            )
        );
    }

    #[test]
    fn silent_fallback_skips() {
        let outcome: Outcome<bool> = FallbackMode::Silent.outcome(Capability::IsHotspotRunning);
        assert!(outcome.is_skipped());
        assert_eq!(outcome.completed(), None);
    }
}
