//! Runtime configuration.
//!
//! The API key is never compiled in: it comes from the command line, the
//! environment, or a key file under the user's config directory.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{DEFAULT_MODEL_ID, DEFAULT_VOICE_ID};

/// Environment variable holding the ElevenLabs API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Environment variable overriding the default voice.
pub const VOICE_ID_ENV: &str = "ELEVENLABS_VOICE_ID";

/// Environment variable overriding the default model.
pub const MODEL_ID_ENV: &str = "ELEVENLABS_MODEL_ID";

/// Errors that can occur while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key found: pass --api-key, set {API_KEY_ENV}, or create {0}")]
    MissingApiKey(String),
}

/// Path of the on-disk key file, if a config directory exists.
pub fn key_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ember-audio-rs").join("api_key"))
}

/// Resolve the API key: CLI flag, then environment, then key file.
pub fn resolve_api_key(cli_key: Option<String>) -> Result<String, ConfigError> {
    resolve_key_from(cli_key, env::var(API_KEY_ENV).ok(), key_file_path())
}

fn resolve_key_from(
    cli_key: Option<String>,
    env_key: Option<String>,
    key_file: Option<PathBuf>,
) -> Result<String, ConfigError> {
    if let Some(key) = cli_key.filter(|k| !k.trim().is_empty()) {
        return Ok(key);
    }

    if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
        return Ok(key);
    }

    if let Some(path) = &key_file
        && let Ok(contents) = std::fs::read_to_string(path)
    {
        let key = contents.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    let described = key_file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "a key file".to_string());
    Err(ConfigError::MissingApiKey(described))
}

/// Default voice id, honouring the environment override.
pub fn default_voice_id() -> String {
    or_default(env::var(VOICE_ID_ENV).ok(), DEFAULT_VOICE_ID)
}

/// Default model id, honouring the environment override.
pub fn default_model_id() -> String {
    or_default(env::var(MODEL_ID_ENV).ok(), DEFAULT_MODEL_ID)
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
