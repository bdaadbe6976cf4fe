use super::Platform;

/// Platform for hosts with no supported hardware.
///
/// Every capability returns the "not supported" status.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPlatform;

impl Platform for DefaultPlatform {}
