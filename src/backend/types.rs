//! Backend request types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during audio synthesis.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Synthesis process failed: {0}")]
    Process(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Voice rendering settings sent with every ElevenLabs request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// Request for one synthesized clip.
///
/// Serializes to the ElevenLabs request body; the voice id rides in the
/// request URL, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    #[serde(skip)]
    pub voice_id: String,
}

impl SynthesisRequest {
    /// Create a request with the default model and voice settings.
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: super::DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
            voice_id: voice_id.into(),
        }
    }

    /// Set the model id.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the voice settings.
    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = settings;
        self
    }
}
