//! ElevenLabs HTTP backend.

use super::SynthesisBackend;
use super::types::{BackendError, SynthesisRequest};

/// Hosted ElevenLabs API endpoint.
pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// Voice used when neither the run nor the item names one.
pub const DEFAULT_VOICE_ID: &str = "onwK4e9ZLuTAKqWW03F9";

/// Model used when none is configured.
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

/// Client for the ElevenLabs text-to-speech API.
pub struct ElevenLabsBackend {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl ElevenLabsBackend {
    /// Create a backend against the hosted API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, ELEVENLABS_BASE_URL)
    }

    /// Create a backend against a custom endpoint (tests, gateways).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key: api_key.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SynthesisBackend for ElevenLabsBackend {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, request.voice_id);

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(request)
            .send()
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Keep the body: it carries the API's error detail for the log.
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable response body>".to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn file_extension(&self) -> &'static str {
        "mp3"
    }
}
