//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Batch audio asset generator for The Ember Throne Chronicles.
#[derive(Parser, Debug)]
#[command(name = "ember-audio-rs")]
#[command(about = "Generate game audio assets from a manifest of text prompts")]
#[command(version)]
pub struct Args {
    /// Synthesis backend: "eleven" (ElevenLabs API) or "bark" (local model)
    #[arg(short, long, value_enum, default_value = "eleven")]
    pub backend: BackendKind,

    /// JSON manifest of items; the built-in Ember Throne list when omitted
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long, default_value = "media/audio")]
    pub output: PathBuf,

    /// Run log file
    #[arg(long, default_value = "audio-generation-log.txt")]
    pub log_file: PathBuf,

    /// Voice id for items that don't carry their own
    #[arg(long)]
    pub voice: Option<String>,

    /// Model id sent with every request
    #[arg(long)]
    pub model_id: Option<String>,

    /// ElevenLabs API key (prefer ELEVENLABS_API_KEY or the key file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// ElevenLabs endpoint override
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to the Bark wrapper script
    #[arg(long, default_value = "scripts/bark_wrapper.py")]
    pub bark_script: PathBuf,

    /// Bark voice preset (e.g. "v2/en_speaker_6")
    #[arg(long)]
    pub bark_voice: Option<String>,

    /// Python interpreter for the local backend and installer
    #[arg(long, default_value = "python3")]
    pub python: String,

    /// Requirements file for --install-deps
    #[arg(long, default_value = "scripts/requirements.txt")]
    pub requirements: PathBuf,

    /// Install the local model dependencies and exit
    #[arg(long)]
    pub install_deps: bool,

    /// Print the resolved manifest and exit without generating
    #[arg(long)]
    pub list_items: bool,
}

/// Synthesis backend selection.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// ElevenLabs hosted API
    #[default]
    #[value(name = "eleven")]
    Eleven,

    /// Locally installed Bark model
    #[value(name = "bark")]
    Bark,
}

impl BackendKind {
    /// Returns the CLI argument string for this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Eleven => "eleven",
            BackendKind::Bark => "bark",
        }
    }

    /// Returns the human-readable name of the backend.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Eleven => "ElevenLabs",
            BackendKind::Bark => "Bark (local)",
        }
    }
}
