//! Config module - launcher settings from `launcher.toml`
//!
//! Every field has a default matching the stock SkateHubba setup, so the
//! file is optional and may be partial.
//!
//! # Example
//!
//! ```toml
//! [install]
//! marker = "node_modules"
//! command = ["pnpm", "install", "--frozen-lockfile"]
//!
//! [dev]
//! command = ["pnpm", "dev"]
//! interrupt_grace_ms = 5000
//! ```

mod internal;

use anyhow::Result;
use std::path::Path;

pub use internal::{DevSection, InstallSection, LauncherConfig, ProjectSection};

/// Load config from `{root}/launcher.toml`
///
/// Returns default config if the file doesn't exist.
pub fn load(root: &Path) -> Result<LauncherConfig> {
    internal::load(root)
}

/// Load config from an explicit file, which must exist.
pub fn load_from(path: &Path) -> Result<LauncherConfig> {
    internal::load_from(path)
}
