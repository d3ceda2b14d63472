//! Internal implementation for config module

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::StepError;
use crate::paths;
use crate::runner::Step;

// =============================================================================
// Config Types
// =============================================================================

/// Launcher configuration stored in launcher.toml
/// All sections are optional with defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub install: InstallSection,
    #[serde(default)]
    pub dev: DevSection,
}

impl LauncherConfig {
    /// Reject settings the launcher cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.install.marker.trim().is_empty() {
            bail!("install.marker must name a directory");
        }
        if self.install.command.is_empty() {
            return Err(StepError::EmptyCommand {
                step: Step::Install,
            }
            .into());
        }
        if self.dev.command.is_empty() {
            return Err(StepError::EmptyCommand { step: Step::Dev }.into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Display name used in banners
    #[serde(default = "default_name")]
    pub name: String,
    /// Printed under the start banner
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Appended to the "stopped" banner on interrupt
    #[serde(default = "default_farewell")]
    pub farewell: String,
}

fn default_name() -> String {
    "SkateHubba™".to_string()
}
fn default_tagline() -> String {
    "One shot. Own it.".to_string()
}
fn default_farewell() -> String {
    "Keep pushing.".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            farewell: default_farewell(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallSection {
    /// Directory whose presence means dependencies are installed
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Install command (program followed by args)
    #[serde(default = "default_install_command")]
    pub command: Vec<String>,
}

fn default_marker() -> String {
    "node_modules".to_string()
}
fn default_install_command() -> Vec<String> {
    vec!["pnpm".to_string(), "install".to_string()]
}

impl Default for InstallSection {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            command: default_install_command(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevSection {
    /// Dev command (program followed by args)
    #[serde(default = "default_dev_command")]
    pub command: Vec<String>,
    /// What the dev command starts, for the launch banner
    #[serde(default = "default_label")]
    pub label: String,
    /// Extra lines printed after the launch banner
    #[serde(default = "default_notes")]
    pub notes: Vec<String>,
    /// How long a child may outlive an interrupt before it is terminated
    #[serde(default = "default_interrupt_grace_ms")]
    pub interrupt_grace_ms: u64,
}

fn default_dev_command() -> Vec<String> {
    vec!["pnpm".to_string(), "dev".to_string()]
}
fn default_label() -> String {
    "Mobile (Expo) + Web (Next.js)".to_string()
}
fn default_notes() -> Vec<String> {
    vec![
        "Mobile → Expo QR code".to_string(),
        "Web → https://your-repl.replit.app".to_string(),
    ]
}
fn default_interrupt_grace_ms() -> u64 {
    2000
}

impl DevSection {
    pub fn interrupt_grace(&self) -> Duration {
        Duration::from_millis(self.interrupt_grace_ms)
    }
}

impl Default for DevSection {
    fn default() -> Self {
        Self {
            command: default_dev_command(),
            label: default_label(),
            notes: default_notes(),
            interrupt_grace_ms: default_interrupt_grace_ms(),
        }
    }
}

// =============================================================================
// Config Load
// =============================================================================

/// Load config from {root}/launcher.toml, defaults if absent
pub fn load(root: &Path) -> Result<LauncherConfig> {
    let path = paths::config_path(root);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no launcher config, using defaults");
        return Ok(LauncherConfig::default());
    }

    load_from(&path)
}

/// Load config from an explicit path
pub fn load_from(path: &Path) -> Result<LauncherConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read launcher config: {}", path.display()))?;

    let config: LauncherConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse launcher config: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Invalid launcher config: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded launcher config");
    Ok(config)
}
