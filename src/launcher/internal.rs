//! Internal implementation for launch command
//!
//! Handles the launch flow: marker check → install → dev → outcome

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use super::{LaunchOutcome, PlannedStep};
use crate::config::LauncherConfig;
use crate::console::Console;
use crate::error::StepError;
use crate::interrupt::InterruptFlag;
use crate::paths;
use crate::runner::{CommandRunner, CommandSpec, RunStatus, Step};

/// Runs the bootstrap sequence against a resolved root
pub struct Launcher<R> {
    config: LauncherConfig,
    root: PathBuf,
    runner: R,
    interrupt: InterruptFlag,
}

impl<R: CommandRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, root: PathBuf, runner: R, interrupt: InterruptFlag) -> Self {
        Self {
            config,
            root,
            runner,
            interrupt,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Steps a launch would run right now: install only if the marker is missing.
    pub fn plan(&self) -> Result<Vec<PlannedStep>> {
        let mut plan = Vec::with_capacity(2);

        if paths::marker_present(&self.root, &self.config.install.marker) {
            tracing::debug!(marker = %self.config.install.marker, "dependency marker present, skipping install");
        } else {
            plan.push(PlannedStep {
                step: Step::Install,
                command: CommandSpec::from_argv(Step::Install, &self.config.install.command)?,
            });
        }

        plan.push(PlannedStep {
            step: Step::Dev,
            command: CommandSpec::from_argv(Step::Dev, &self.config.dev.command)?,
        });

        Ok(plan)
    }

    /// Run the full sequence, printing banners, and return the outcome.
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> LaunchOutcome {
        console.start(&self.config.project);

        let outcome = match self.sequence(console) {
            Ok(outcome) => outcome,
            // An interrupt outranks whatever failure it caused
            Err(_) if self.interrupt.is_raised() => LaunchOutcome::Interrupted,
            Err(err) => LaunchOutcome::Failed(err),
        };

        tracing::info!(?outcome, "launch finished");
        console.report(&outcome, &self.config.project);
        outcome
    }

    /// Print the plan without executing anything.
    pub fn dry_run<W: Write>(&self, console: &mut Console<W>) -> LaunchOutcome {
        console.start(&self.config.project);

        let outcome = match self.plan() {
            Ok(plan) => {
                console.dry_run(&plan, &self.root);
                LaunchOutcome::Completed { code: 0 }
            }
            Err(err) => LaunchOutcome::Failed(err),
        };

        console.report(&outcome, &self.config.project);
        outcome
    }

    fn sequence<W: Write>(&self, console: &mut Console<W>) -> Result<LaunchOutcome> {
        let mut outcome = LaunchOutcome::Completed { code: 0 };

        for planned in self.plan()? {
            match planned.step {
                Step::Install => console.installing(),
                Step::Dev => console.launching(&self.config.dev),
            }

            let status = self.execute_step(&planned)?;

            match (planned.step, status) {
                (_, RunStatus::Interrupted) => return Ok(LaunchOutcome::Interrupted),
                (Step::Install, RunStatus::Exited(0)) => {}
                (Step::Install, RunStatus::Exited(code)) => {
                    return Err(StepError::NonZeroExit {
                        step: Step::Install,
                        code,
                    }
                    .into());
                }
                (Step::Install, RunStatus::Signaled(signal)) => {
                    return Err(StepError::Signaled {
                        step: Step::Install,
                        signal,
                    }
                    .into());
                }
                (Step::Dev, status) => {
                    outcome = LaunchOutcome::Completed {
                        code: status.exit_code(),
                    };
                }
            }
        }

        Ok(outcome)
    }

    fn execute_step(&self, planned: &PlannedStep) -> Result<RunStatus> {
        if self.interrupt.is_raised() {
            return Ok(RunStatus::Interrupted);
        }

        if !self
            .runner
            .is_available(&planned.command.program, &self.root)
        {
            return Err(StepError::ProgramNotFound {
                program: planned.command.program.clone(),
            }
            .into());
        }

        tracing::info!(step = %planned.step, command = %planned.command, cwd = %self.root.display(), "running step");
        let status = self.runner.run(&planned.command, &self.root)?;
        tracing::info!(step = %planned.step, ?status, "step finished");

        if self.interrupt.is_raised() {
            return Ok(RunStatus::Interrupted);
        }
        Ok(status)
    }
}
