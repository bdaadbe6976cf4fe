//! Linux HAL implementation using real processes and the real filesystem.

use super::{DeviceOps, HostInfoOps, ProcessOps};
use pianoled_error::{PlatformError, PlatformResult};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

const DEVICE_TREE_MODEL: &str = "/proc/device-tree/model";
const PROC_CPUINFO: &str = "/proc/cpuinfo";

/// How long to wait for pipe EOF once the child has exited.
const PIPE_GRACE: Duration = Duration::from_millis(250);

/// Real HAL implementation for Linux hosts.
#[derive(Debug, Clone, Default)]
pub struct LinuxHal;

impl LinuxHal {
    pub fn new() -> Self {
        Self
    }
}

fn map_spawn_err(program: &str, err: io::Error) -> PlatformError {
    if err.kind() == io::ErrorKind::NotFound {
        return PlatformError::CommandNotFound(program.to_string());
    }
    PlatformError::Io(err)
}

fn output_failed(program: &str, output: &Output) -> PlatformError {
    PlatformError::CommandFailed {
        program: program.to_string(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

/// Read a pipe to EOF on its own thread; the buffer arrives on the returned channel.
///
/// A backgrounded grandchild can hold the pipe open long after the child exits,
/// so callers only wait on the channel for a bounded time.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send(buf);
    });
    rx
}

fn output_with_timeout(program: &str, cmd: &mut Command, timeout: Duration) -> PlatformResult<Output> {
    // sudo must never sit on a password prompt.
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let started = Instant::now();
    let mut child = cmd.spawn().map_err(|e| map_spawn_err(program, e))?;

    let stdout_rx = drain(child.stdout.take());
    let stderr_rx = drain(child.stderr.take());

    let status = match child.wait_timeout(timeout)? {
        Some(status) => status,
        None => {
            // Only the direct child is killed. Its descendants may keep the pipes
            // open, so the drain threads are left to finish on their own.
            let _ = child.kill();
            let _ = child.wait();
            return Err(PlatformError::CommandTimeout {
                program: program.to_string(),
                timeout,
            });
        }
    };

    let grace = timeout
        .saturating_sub(started.elapsed())
        .max(PIPE_GRACE);
    let stdout = stdout_rx.recv_timeout(grace).unwrap_or_else(|_| {
        log::debug!("{program}: stdout still held open after exit; output dropped");
        Vec::new()
    });
    let stderr = stderr_rx.recv_timeout(PIPE_GRACE).unwrap_or_default();
    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

impl ProcessOps for LinuxHal {
    fn command_output(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> PlatformResult<Output> {
        log::debug!("exec: {} {}", program, args.join(" "));
        let mut cmd = Command::new(program);
        cmd.args(args);
        output_with_timeout(program, &mut cmd, timeout)
    }

    fn command_status(&self, program: &str, args: &[&str], timeout: Duration) -> PlatformResult<()> {
        let output = self.command_output(program, args, timeout)?;
        if !output.status.success() {
            return Err(output_failed(program, &output));
        }
        Ok(())
    }
}

impl DeviceOps for LinuxHal {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl HostInfoOps for LinuxHal {
    fn device_model(&self) -> PlatformResult<Option<String>> {
        match fs::read(DEVICE_TREE_MODEL) {
            // The device-tree string is NUL terminated.
            Ok(raw) => {
                let model = String::from_utf8_lossy(&raw)
                    .trim_end_matches('\0')
                    .trim()
                    .to_string();
                Ok((!model.is_empty()).then_some(model))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn proc_cpuinfo(&self) -> PlatformResult<String> {
        Ok(fs::read_to_string(PROC_CPUINFO)?)
    }
}
