//! Synthesis backends.
//!
//! Provides the trait the batch fetcher talks to, with an HTTP
//! implementation for the ElevenLabs API and a subprocess implementation
//! for a locally installed Bark model.

mod bark;
mod eleven;
mod types;

pub use bark::BarkBackend;
pub use eleven::{DEFAULT_MODEL_ID, DEFAULT_VOICE_ID, ELEVENLABS_BASE_URL, ElevenLabsBackend};
pub use types::{BackendError, SynthesisRequest, VoiceSettings};

/// Trait for audio synthesis.
///
/// Abstracts the ElevenLabs HTTP calls and the local Bark wrapper so the
/// batch fetcher can be tested against a mock.
#[cfg_attr(test, mockall::automock)]
pub trait SynthesisBackend: Send + Sync {
    /// Synthesize one clip, returning the complete encoded payload.
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError>;

    /// File extension for payloads produced by this backend.
    fn file_extension(&self) -> &'static str;
}
