//! Launch command - bootstrap dependencies, then hand off to the dev task
//!
//! The whole lifecycle is one linear sequence:
//!
//! ```text
//! resolve root → [install if marker missing] → dev (blocks) → outcome
//! ```
//!
//! # Usage
//!
//! ```bash
//! skatehubba                  # Launch from the launcher's own directory
//! skatehubba --root ~/repo    # Launch another checkout
//! skatehubba --dry-run        # Show what would run
//! ```

mod internal;

use std::path::PathBuf;

use crate::config::{self, LauncherConfig, ProjectSection};
use crate::console::Console;
use crate::interrupt::{self, InterruptFlag};
use crate::paths;
use crate::runner::{CommandSpec, Step, SystemRunner};

pub use internal::Launcher;

/// Launch options
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Repository root (default: directory containing the launcher)
    pub root: Option<String>,
    /// Config file (default: `{root}/launcher.toml` if present)
    pub config: Option<PathBuf>,
    /// Print the plan instead of running it
    pub dry_run: bool,
}

/// How a launch ended
#[derive(Debug)]
pub enum LaunchOutcome {
    /// The dev command ran and exited with this code
    Completed { code: i32 },
    /// The user interrupted the launch
    Interrupted,
    /// Anything else went wrong
    Failed(anyhow::Error),
}

impl LaunchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Completed { code } => *code,
            LaunchOutcome::Interrupted => 0,
            LaunchOutcome::Failed(_) => 1,
        }
    }
}

/// A step the launcher intends to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub step: Step,
    pub command: CommandSpec,
}

/// Execute the launch with the real runner and stdout banners
pub fn execute(options: LaunchOptions) -> LaunchOutcome {
    interrupt::install();
    let interrupt = InterruptFlag::process();
    let mut console = Console::stdout();

    let (root, config) = match prepare(&options) {
        Ok(prepared) => prepared,
        Err(err) => {
            let outcome = if interrupt.is_raised() {
                LaunchOutcome::Interrupted
            } else {
                LaunchOutcome::Failed(err)
            };
            console.report(&outcome, &ProjectSection::default());
            return outcome;
        }
    };

    let runner = SystemRunner::new(config.dev.interrupt_grace(), interrupt.clone());
    let launcher = Launcher::new(config, root, runner, interrupt);

    if options.dry_run {
        launcher.dry_run(&mut console)
    } else {
        launcher.run(&mut console)
    }
}

/// Resolve the root and load its config
fn prepare(options: &LaunchOptions) -> anyhow::Result<(PathBuf, LauncherConfig)> {
    let root = paths::resolve_root(options.root.as_deref())?;
    let config = match &options.config {
        Some(path) => config::load_from(path)?,
        None => config::load(&root)?,
    };
    tracing::info!(root = %root.display(), "resolved repository root");
    Ok((root, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_default_options() {
        let opts = LaunchOptions::default();
        assert!(opts.root.is_none());
        assert!(opts.config.is_none());
        assert!(!opts.dry_run);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LaunchOutcome::Completed { code: 0 }.exit_code(), 0);
        assert_eq!(LaunchOutcome::Completed { code: 42 }.exit_code(), 42);
        assert_eq!(LaunchOutcome::Interrupted.exit_code(), 0);
        assert_eq!(LaunchOutcome::Failed(anyhow!("boom")).exit_code(), 1);
    }

    #[test]
    fn test_prepare_with_missing_root() {
        let opts = LaunchOptions {
            root: Some("/definitely/not/a/real/root".to_string()),
            ..Default::default()
        };
        assert!(prepare(&opts).is_err());
    }

    #[test]
    fn test_prepare_uses_explicit_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        let custom = tmp.path().join("custom.toml");
        std::fs::write(&custom, "[install]\nmarker = \".pnpm-store\"\n").unwrap();

        let opts = LaunchOptions {
            root: Some(tmp.path().to_str().unwrap().to_string()),
            config: Some(custom),
            dry_run: false,
        };
        let (root, config) = prepare(&opts).unwrap();
        assert!(root.is_absolute());
        assert_eq!(config.install.marker, ".pnpm-store");
    }
}
