//! Runner backed by `std::process`

use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::{CommandRunner, CommandSpec, RunStatus};
use crate::interrupt::InterruptFlag;

/// How often a running child is polled. The signal handler is installed with
/// restartable semantics, so a blocking wait would not notice interrupts.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs commands as child processes with inherited stdio.
///
/// After an interrupt the child gets `grace` to exit on its own (it normally
/// received the same SIGINT through the terminal's process group). Past that
/// it is sent SIGTERM, and after a second `grace` it is killed.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    grace: Duration,
    interrupt: InterruptFlag,
}

impl SystemRunner {
    pub fn new(grace: Duration, interrupt: InterruptFlag) -> Self {
        Self { grace, interrupt }
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus> {
        let mut interrupted_at: Option<Instant> = None;
        let mut escalation = 0u8;

        loop {
            if let Some(status) = child.try_wait().context("Failed to wait for child")? {
                return Ok(status);
            }

            if self.interrupt.is_raised() {
                let elapsed = interrupted_at.get_or_insert_with(Instant::now).elapsed();
                if escalation == 0 && elapsed >= self.grace {
                    tracing::warn!(pid = child.id(), "child outlived interrupt, terminating");
                    terminate(child);
                    escalation = 1;
                } else if escalation == 1 && elapsed >= self.grace * 2 {
                    tracing::warn!(pid = child.id(), "child ignored termination, killing");
                    if let Err(e) = child.kill() {
                        tracing::debug!("kill failed: {}", e);
                    }
                    escalation = 2;
                }
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    fn classify(&self, status: ExitStatus) -> RunStatus {
        if self.interrupt.is_raised() {
            return RunStatus::Interrupted;
        }

        if let Some(code) = status.code() {
            return RunStatus::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                if signal == libc::SIGINT {
                    return RunStatus::Interrupted;
                }
                return RunStatus::Signaled(signal);
            }
        }

        // Neither an exit code nor a signal
        RunStatus::Exited(1)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<RunStatus> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "spawning");

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to run {}", command))?;

        let status = self.wait(&mut child)?;
        let run_status = self.classify(status);
        tracing::debug!(command = %command, ?status, ?run_status, "child exited");
        Ok(run_status)
    }

    fn is_available(&self, program: &str, cwd: &Path) -> bool {
        which::which_in(program, env::var_os("PATH"), cwd).is_ok()
    }
}

#[cfg(unix)]
fn terminate(child: &mut Child) {
    // SAFETY: kill(2) has no memory-safety preconditions
    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGTERM) };
    if rc != 0 {
        tracing::debug!("SIGTERM failed: {}", std::io::Error::last_os_error());
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!("kill failed: {}", e);
    }
}
