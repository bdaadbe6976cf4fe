//! External command runner.
//!
//! Every shell-out goes through this trait; nothing in the platform layer
//! calls `std::process::Command` directly.

use pianoled_error::PlatformResult;
use std::process::Output;
use std::time::Duration;

pub trait ProcessOps {
    /// Run `program` with `args`, capturing stdout/stderr.
    ///
    /// A non-zero exit status is *not* an error here; callers inspect `Output::status`.
    fn command_output(&self, program: &str, args: &[&str], timeout: Duration)
        -> PlatformResult<Output>;

    /// Run `program` with `args` and require a zero exit status.
    fn command_status(&self, program: &str, args: &[&str], timeout: Duration) -> PlatformResult<()>;
}
