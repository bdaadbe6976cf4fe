//! Fake HAL implementation for testing and dry runs.
//!
//! Records every command without executing it, so platform behaviour can be
//! verified in CI without root, sudo, or a Raspberry Pi.

use super::{DeviceOps, HostInfoOps, ProcessOps};
use pianoled_error::{PlatformError, PlatformResult};
use std::collections::HashSet;
#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command {
        program: String,
        args: Vec<String>,
        timeout_secs: u64,
    },
}

impl Operation {
    /// The full command line, e.g. `sudo systemctl stop midi.service`.
    pub fn command_line(&self) -> String {
        match self {
            Operation::Command { program, args, .. } => {
                let mut line = program.clone();
                for arg in args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FakeHalState {
    operations: Vec<Operation>,
    existing_paths: HashSet<PathBuf>,
    /// Command lines (or bare program names) that should fail.
    failing: HashSet<String>,
    /// Command lines (or bare program names) that should hit their timeout.
    hanging: HashSet<String>,
    device_model: Option<String>,
    cpuinfo: String,
}

/// Fake HAL that records operations instead of executing them.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another test thread panicked; the state is still usable.
    fn lock(&self) -> MutexGuard<'_, FakeHalState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Pretend `path` exists on the host.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        self.lock().existing_paths.insert(path.into());
        self
    }

    /// Make every command whose program or full command line equals `pattern` fail.
    pub fn fail_command(self, pattern: impl Into<String>) -> Self {
        self.lock().failing.insert(pattern.into());
        self
    }

    /// Make every command matching `pattern` report a timeout instead of running.
    pub fn time_out_command(self, pattern: impl Into<String>) -> Self {
        self.lock().hanging.insert(pattern.into());
        self
    }

    pub fn with_device_model(self, model: impl Into<String>) -> Self {
        self.lock().device_model = Some(model.into());
        self
    }

    pub fn with_cpuinfo(self, cpuinfo: impl Into<String>) -> Self {
        self.lock().cpuinfo = cpuinfo.into();
        self
    }

    /// Recorded operations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.lock()
            .operations
            .iter()
            .map(Operation::command_line)
            .collect()
    }

    pub fn operation_count(&self) -> usize {
        self.lock().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.lock().operations.iter().any(check)
    }

    fn record_command(&self, program: &str, args: &[&str], timeout: Duration) -> Operation {
        let op = Operation::Command {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            timeout_secs: timeout.as_secs(),
        };
        self.lock().operations.push(op.clone());
        op
    }

    fn matches(set: &HashSet<String>, program: &str, op: &Operation) -> bool {
        set.contains(program) || set.contains(&op.command_line())
    }

    fn should_fail(&self, program: &str, op: &Operation) -> bool {
        Self::matches(&self.lock().failing, program, op)
    }

    fn check_timeout(&self, program: &str, op: &Operation, timeout: Duration) -> PlatformResult<()> {
        if Self::matches(&self.lock().hanging, program, op) {
            return Err(PlatformError::CommandTimeout {
                program: program.to_string(),
                timeout,
            });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> std::process::ExitStatus {
    std::process::ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code as u32)
}

impl ProcessOps for FakeHal {
    fn command_output(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> PlatformResult<Output> {
        let op = self.record_command(program, args, timeout);
        self.check_timeout(program, &op, timeout)?;
        if self.should_fail(program, &op) {
            return Ok(Output {
                status: exit_status(1),
                stdout: Vec::new(),
                stderr: b"simulated failure".to_vec(),
            });
        }
        Ok(Output {
            status: exit_status(0),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }

    fn command_status(&self, program: &str, args: &[&str], timeout: Duration) -> PlatformResult<()> {
        let op = self.record_command(program, args, timeout);
        self.check_timeout(program, &op, timeout)?;
        if self.should_fail(program, &op) {
            return Err(PlatformError::CommandFailed {
                program: program.to_string(),
                code: Some(1),
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl DeviceOps for FakeHal {
    fn path_exists(&self, path: &Path) -> bool {
        self.lock().existing_paths.contains(path)
    }
}

impl HostInfoOps for FakeHal {
    fn device_model(&self) -> PlatformResult<Option<String>> {
        Ok(self.lock().device_model.clone())
    }

    fn proc_cpuinfo(&self) -> PlatformResult<String> {
        Ok(self.lock().cpuinfo.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_secs(30);

    #[test]
    fn fake_hal_records_commands() {
        let hal = FakeHal::new();
        hal.command_status("sudo", &["systemctl", "stop", "midi.service"], T)
            .unwrap();

        assert_eq!(hal.operation_count(), 1);
        assert_eq!(
            hal.command_lines(),
            vec!["sudo systemctl stop midi.service".to_string()]
        );
        assert!(hal.has_operation(|op| matches!(
            op,
            Operation::Command { timeout_secs: 30, .. }
        )));
    }

    #[test]
    fn fake_hal_fails_scripted_command_line() {
        let hal = FakeHal::new().fail_command("sudo systemctl disable midi.service");

        let err = hal
            .command_status("sudo", &["systemctl", "disable", "midi.service"], T)
            .unwrap_err();
        assert!(matches!(err, PlatformError::CommandFailed { .. }));

        hal.command_status("sudo", &["systemctl", "stop", "midi.service"], T)
            .unwrap();
        assert_eq!(hal.operation_count(), 2);
    }

    #[test]
    fn fake_hal_output_reports_non_zero_exit() {
        let hal = FakeHal::new().fail_command("sudo");
        let output = hal.command_output("sudo", &["/sbin/reboot", "now"], T).unwrap();
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn fake_hal_knows_only_registered_paths() {
        let hal = FakeHal::new().with_path("/dev/spidev0.0");
        assert!(hal.path_exists(Path::new("/dev/spidev0.0")));
        assert!(!hal.path_exists(Path::new("/dev/spidev0.1")));
    }

    #[test]
    fn fake_hal_times_out_scripted_command() {
        let hal = FakeHal::new().time_out_command("sudo /sbin/shutdown -h now");

        let err = hal
            .command_status("sudo", &["/sbin/shutdown", "-h", "now"], T)
            .unwrap_err();
        assert!(matches!(err, PlatformError::CommandTimeout { timeout, .. } if timeout == T));

        let err = hal
            .command_output("sudo", &["/sbin/shutdown", "-h", "now"], T)
            .unwrap_err();
        assert!(matches!(err, PlatformError::CommandTimeout { .. }));

        // Timed-out commands are still recorded.
        assert_eq!(hal.operation_count(), 2);
    }
}
