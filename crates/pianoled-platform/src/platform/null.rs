use super::{FallbackMode, Platform};

/// Platform that accepts every capability and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

impl Platform for NullPlatform {
    fn fallback_mode(&self) -> FallbackMode {
        FallbackMode::Silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Hotspot;

    #[test]
    fn calls_are_skipped() {
        assert!(NullPlatform.reboot().is_skipped());
        assert!(NullPlatform.check_and_enable_spi().is_skipped());
        assert!(NullPlatform.manage_hotspot(&Hotspot::disabled()).is_skipped());
        assert!(NullPlatform.change_local_address("piano").is_skipped());
    }
}
