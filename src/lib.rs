pub mod config;
pub mod console;
pub mod error;
pub mod interrupt;
pub mod launcher;
pub mod paths;
pub mod runner;

// Re-export commonly used types
pub use config::LauncherConfig;
pub use launcher::{LaunchOptions, LaunchOutcome, Launcher};
pub use runner::{CommandRunner, CommandSpec, RunStatus, Step, SystemRunner};
