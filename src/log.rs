//! Run logging.
//!
//! Every message goes to stdout and to a flat log file, prefixed with a
//! HH:MM:SS timestamp, so the console session and the on-disk record stay
//! in sync.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use thiserror::Error;

/// Errors that can occur when opening the run log.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
}

/// Console-plus-file logger for one generation run.
#[derive(Debug)]
pub struct RunLog {
    file: File,
}

impl RunLog {
    /// Create the log file (truncating a previous run's) and write the
    /// run header.
    pub fn create(path: &Path) -> Result<Self, LogError> {
        let file = File::create(path).map_err(|source| LogError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let mut log = Self { file };
        log.raw("=== Audio Generation Log ===");
        log.raw(&format!(
            "Started at: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        log.raw("");
        Ok(log)
    }

    /// Write one timestamped line to stdout and the log file.
    pub fn line(&mut self, message: &str) {
        self.write(&format!(
            "[{}] {message}",
            Local::now().format("%H:%M:%S")
        ));
    }

    /// Write one line without a timestamp (headers, spacing).
    pub fn raw(&mut self, message: &str) {
        self.write(message);
    }

    fn write(&mut self, line: &str) {
        println!("{line}");
        // A log write failure must not abort the batch.
        let _ = writeln!(self.file, "{line}");
    }
}

/// Render a credential as its first and last four characters.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
