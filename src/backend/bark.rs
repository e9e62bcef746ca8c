//! Local Bark backend.
//!
//! Drives the game repo's Python wrapper script: the wrapper loads the Bark
//! model, renders the prompt, and writes a WAV file that this backend reads
//! back as the payload.

use std::path::PathBuf;
use std::process::Command;

use super::SynthesisBackend;
use super::types::{BackendError, SynthesisRequest};

/// Subprocess backend for a locally installed Bark model.
pub struct BarkBackend {
    python: String,
    wrapper: PathBuf,
    voice_preset: Option<String>,
    scratch_dir: PathBuf,
}

impl BarkBackend {
    /// Create a backend around the given wrapper script.
    pub fn new(
        python: impl Into<String>,
        wrapper: impl Into<PathBuf>,
        voice_preset: Option<String>,
    ) -> Self {
        Self {
            python: python.into(),
            wrapper: wrapper.into(),
            voice_preset,
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Redirect the scratch WAV to another directory.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }
}

impl SynthesisBackend for BarkBackend {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        if !self.wrapper.exists() {
            return Err(BackendError::Process(format!(
                "Wrapper script not found: {}",
                self.wrapper.display()
            )));
        }

        // One request in flight at a time, so a fixed scratch name is safe.
        let scratch = self.scratch_dir.join("bark-scratch.wav");

        let mut cmd = Command::new(&self.python);
        cmd.arg(&self.wrapper).arg(&request.text).arg(&scratch);
        if let Some(preset) = &self.voice_preset {
            cmd.arg(preset);
        }

        let output = cmd.output().map_err(|e| {
            BackendError::Process(format!("Failed to run {}: {e}", self.python))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::Process(format!(
                "Wrapper exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        // The wrapper reports some failures on stdout with a zero exit, in
        // which case no WAV is written and the read below surfaces it.
        let payload = std::fs::read(&scratch)?;
        let _ = std::fs::remove_file(&scratch);

        Ok(payload)
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }
}
