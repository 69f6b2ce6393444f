//! Data directory resolution (`~/.local/share/petlog` on Linux).

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Canonical XDG app name
pub const APP_NAME: &str = "petlog";

/// Resolve the default data directory for persisted state.
pub fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().to_path_buf())
}
