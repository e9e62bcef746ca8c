//! Local-model dependency installation.
//!
//! Mirrors the game repo's bootstrap step: Bark and its Python dependencies
//! are installed with pip from a requirements file.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors that can occur while installing dependencies.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Requirements file not found: {0}")]
    RequirementsNotFound(String),

    #[error("Failed to run {python}: {source}")]
    Spawn {
        python: String,
        source: std::io::Error,
    },

    #[error("pip exited with {0}")]
    PipFailed(std::process::ExitStatus),
}

/// Install the Bark dependencies with pip.
///
/// Runs `<python> -m pip install -r <requirements>` and inherits its
/// stdout/stderr, so pip's own progress output reaches the console.
pub fn install_dependencies(python: &str, requirements: &Path) -> Result<(), InstallError> {
    if !requirements.exists() {
        return Err(InstallError::RequirementsNotFound(
            requirements.display().to_string(),
        ));
    }

    let status = Command::new(python)
        .args(["-m", "pip", "install", "-r"])
        .arg(requirements)
        .status()
        .map_err(|source| InstallError::Spawn {
            python: python.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(InstallError::PipFailed(status));
    }

    Ok(())
}
