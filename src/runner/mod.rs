//! Command runner - how the launcher executes its two external commands
//!
//! [`CommandRunner`] is the seam between the launch sequence and the OS.
//! [`SystemRunner`] is the real implementation; tests substitute recorders.

mod system;

use anyhow::Result;
use std::fmt;
use std::path::Path;

use crate::error::StepError;

pub use system::SystemRunner;

/// The two steps of the launch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Install,
    Dev,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Install => f.write_str("install"),
            Step::Dev => f.write_str("dev"),
        }
    }
}

/// An external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build from a config argv (`["pnpm", "install"]`).
    pub fn from_argv(step: Step, argv: &[String]) -> Result<Self, StepError> {
        match argv.split_first() {
            Some((program, args)) if !program.trim().is_empty() => Ok(Self {
                program: program.clone(),
                args: args.to_vec(),
            }),
            _ => Err(StepError::EmptyCommand { step }),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exited normally with this code
    Exited(i32),
    /// Killed by a signal other than an interrupt
    Signaled(i32),
    /// Ended by (or during) a user interrupt
    Interrupted,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        matches!(self, RunStatus::Exited(0))
    }

    /// Exit code to propagate, using the shell's 128+signal convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Exited(code) => *code,
            RunStatus::Signaled(signal) => 128 + signal,
            RunStatus::Interrupted => 0,
        }
    }
}

/// Executes launcher commands
pub trait CommandRunner {
    /// Run `command` in `cwd` and block until it ends.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<RunStatus>;

    /// Check whether `program` can be executed from `cwd`
    fn is_available(&self, program: &str, cwd: &Path) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argv() {
        let argv = vec!["pnpm".to_string(), "install".to_string()];
        let cmd = CommandSpec::from_argv(Step::Install, &argv).unwrap();
        assert_eq!(cmd, CommandSpec::new("pnpm", &["install"]));
        assert_eq!(cmd.to_string(), "pnpm install");
    }

    #[test]
    fn test_from_argv_rejects_empty() {
        assert_eq!(
            CommandSpec::from_argv(Step::Dev, &[]),
            Err(StepError::EmptyCommand { step: Step::Dev })
        );
        assert_eq!(
            CommandSpec::from_argv(Step::Install, &["  ".to_string()]),
            Err(StepError::EmptyCommand {
                step: Step::Install
            })
        );
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(RunStatus::Exited(0).exit_code(), 0);
        assert_eq!(RunStatus::Exited(3).exit_code(), 3);
        assert_eq!(RunStatus::Signaled(9).exit_code(), 137);
        assert!(RunStatus::Exited(0).success());
        assert!(!RunStatus::Interrupted.success());
    }
}
