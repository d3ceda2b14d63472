//! Single source of truth for the launcher's filesystem layout.
//!
//! Everything the launcher touches lives under the repository root:
//!
//! ```text
//! <root>/
//! ├── launcher.toml      # Optional launcher config
//! ├── node_modules/      # Dependency marker (name configurable)
//! ├── apps/              # Mobile + web apps (opaque to the launcher)
//! └── skatehubba         # The launcher itself (entrypoint)
//! ```
//!
//! The root defaults to the directory containing the entrypoint, so the
//! launcher behaves the same no matter where it is invoked from.

use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Launcher config file name, relative to the root.
pub const CONFIG_FILE: &str = "launcher.toml";

// =============================================================================
// Root Resolution
// =============================================================================

/// Directory containing the running launcher executable (canonicalized).
pub fn entrypoint_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate launcher executable")?;
    let exe = fs::canonicalize(&exe)
        .with_context(|| format!("Failed to resolve launcher path: {}", exe.display()))?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Launcher has no parent directory: {}", exe.display()))
}

/// Resolve the repository root.
///
/// Uses `root_override` when given (with `~` expansion), otherwise the
/// entrypoint directory. The result is absolute and must be a directory.
pub fn resolve_root(root_override: Option<&str>) -> Result<PathBuf> {
    let path = match root_override {
        Some(p) => PathBuf::from(shellexpand::tilde(p).as_ref()),
        None => entrypoint_dir()?,
    };

    // Canonicalize to resolve symlinks and relative segments
    let canonical = fs::canonicalize(&path)
        .with_context(|| format!("Repository root does not exist: {}", path.display()))?;

    if !canonical.is_dir() {
        bail!("Repository root is not a directory: {}", canonical.display());
    }

    Ok(canonical)
}

// =============================================================================
// Root-Relative Paths
// =============================================================================

/// Launcher config: `{root}/launcher.toml`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Dependency marker: `{root}/{marker}`
pub fn marker_path(root: &Path, marker: &str) -> PathBuf {
    root.join(marker)
}

/// Whether the dependency marker directory exists.
///
/// Only a directory counts; a stray file with the same name does not.
pub fn marker_present(root: &Path, marker: &str) -> bool {
    marker_path(root, marker).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entrypoint_dir_is_absolute() {
        let dir = entrypoint_dir().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_resolve_root_defaults_to_entrypoint() {
        let root = resolve_root(None).unwrap();
        assert_eq!(root, entrypoint_dir().unwrap());
    }

    #[test]
    fn test_resolve_root_override() {
        let tmp = TempDir::new().unwrap();
        let root = resolve_root(Some(tmp.path().to_str().unwrap())).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, fs::canonicalize(tmp.path()).unwrap());
    }

    #[test]
    fn test_resolve_root_normalizes_relative_segments() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("apps")).unwrap();
        let dotted = tmp.path().join("apps").join("..");

        let root = resolve_root(Some(dotted.to_str().unwrap())).unwrap();
        assert_eq!(root, fs::canonicalize(tmp.path()).unwrap());
    }

    #[test]
    fn test_resolve_root_missing() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = resolve_root(Some(missing.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_root_rejects_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("main.py");
        fs::write(&file, "").unwrap();
        let err = resolve_root(Some(file.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path(Path::new("/repo"));
        assert_eq!(path, PathBuf::from("/repo/launcher.toml"));
    }

    #[test]
    fn test_marker_present_requires_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(!marker_present(tmp.path(), "node_modules"));

        fs::write(marker_path(tmp.path(), "node_modules"), "").unwrap();
        assert!(!marker_present(tmp.path(), "node_modules"));

        fs::remove_file(marker_path(tmp.path(), "node_modules")).unwrap();
        fs::create_dir(marker_path(tmp.path(), "node_modules")).unwrap();
        assert!(marker_present(tmp.path(), "node_modules"));
    }
}
