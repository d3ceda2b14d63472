//! Console banners - the launcher's human-facing output
//!
//! Plain lines on stdout, one per phase transition. Diagnostics go through
//! `tracing` on stderr instead, so the two never interleave mid-line.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{DevSection, ProjectSection};
use crate::launcher::{LaunchOutcome, PlannedStep};

pub struct Console<W: Write = io::Stdout> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self, project: &ProjectSection) {
        self.line(
            format!("{} – Starting the revolution...", project.name)
                .bold()
                .blue(),
        );
        self.line(format!("{}\n", project.tagline).dimmed());
    }

    pub fn installing(&mut self) {
        self.line("Installing dependencies...".yellow());
    }

    pub fn launching(&mut self, dev: &DevSection) {
        self.line(format!("Launching {}...", dev.label).green());
        for note in &dev.notes {
            self.line(note);
        }
    }

    pub fn dry_run(&mut self, plan: &[PlannedStep], root: &Path) {
        self.line("Dry run - nothing will be executed".yellow().bold());
        for planned in plan {
            self.line(format!(
                "Would run: {} (in {})",
                planned.command,
                root.display()
            ));
        }
    }

    pub fn interrupted(&mut self, project: &ProjectSection) {
        self.line(format!("\n{} stopped. {}", project.name, project.farewell).bold());
    }

    pub fn error(&mut self, err: &anyhow::Error) {
        self.line(format!("Error: {:#}", err).red());
    }

    /// Print the terminal banner for `outcome`, if it has one.
    pub fn report(&mut self, outcome: &LaunchOutcome, project: &ProjectSection) {
        match outcome {
            LaunchOutcome::Completed { .. } => {}
            LaunchOutcome::Interrupted => self.interrupted(project),
            LaunchOutcome::Failed(err) => self.error(err),
        }
    }

    // Output is best-effort; a closed stdout must not turn into a launch failure.
    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::debug!("console write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn captured(f: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
        let mut console = Console::new(Vec::new());
        f(&mut console);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_start_banner() {
        let out = captured(|c| c.start(&ProjectSection::default()));
        assert!(out.contains("SkateHubba™ – Starting the revolution..."));
        assert!(out.contains("One shot. Own it."));
    }

    #[test]
    fn test_launch_banner_includes_notes() {
        let out = captured(|c| c.launching(&DevSection::default()));
        assert!(out.contains("Launching Mobile (Expo) + Web (Next.js)..."));
        assert!(out.contains("Mobile → Expo QR code"));
        assert!(out.contains("Web → https://your-repl.replit.app"));
    }

    #[test]
    fn test_report_interrupted() {
        let out = captured(|c| c.report(&LaunchOutcome::Interrupted, &ProjectSection::default()));
        assert!(out.contains("SkateHubba™ stopped. Keep pushing."));
        assert!(!out.contains("Error:"));
    }

    #[test]
    fn test_report_failed_shows_context_chain() {
        let err = anyhow!("exit status 1").context("install failed");
        let out = captured(|c| c.report(&LaunchOutcome::Failed(err), &ProjectSection::default()));
        assert!(out.contains("Error: install failed: exit status 1"));
        assert!(!out.contains("stopped"));
    }

    #[test]
    fn test_report_completed_is_silent() {
        let out = captured(|c| {
            c.report(
                &LaunchOutcome::Completed { code: 0 },
                &ProjectSection::default(),
            )
        });
        assert!(out.is_empty());
    }
}
