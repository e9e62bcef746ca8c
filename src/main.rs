//! ember-audio-rs CLI entry point.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use ember_audio_rs::backend::{
    BarkBackend, ELEVENLABS_BASE_URL, ElevenLabsBackend, SynthesisBackend, VoiceSettings,
};
use ember_audio_rs::cli::{Args, BackendKind};
use ember_audio_rs::config;
use ember_audio_rs::fetcher::{BatchFetcher, FetchOptions, RunSummary};
use ember_audio_rs::install;
use ember_audio_rs::log::{RunLog, mask_key};
use ember_audio_rs::manifest::{self, AudioItem};

fn main() -> Result<()> {
    let args = Args::parse();

    // Installer mode: the exit code is the only signal.
    if args.install_deps {
        install::install_dependencies(&args.python, &args.requirements)
            .context("Failed to install dependencies")?;
        println!("Dependencies installed successfully.");
        return Ok(());
    }

    let items = match &args.manifest {
        Some(path) => manifest::load(path)
            .with_context(|| format!("Failed to load manifest {}", path.display()))?,
        None => manifest::builtin(),
    };

    if args.list_items {
        return list_items(&items);
    }

    let voice_id = args.voice.clone().unwrap_or_else(config::default_voice_id);
    let model_id = args
        .model_id
        .clone()
        .unwrap_or_else(config::default_model_id);

    let (backend, description): (Box<dyn SynthesisBackend>, String) = match args.backend {
        BackendKind::Eleven => {
            let api_key = config::resolve_api_key(args.api_key.clone())?;
            let base_url = args.base_url.as_deref().unwrap_or(ELEVENLABS_BASE_URL);
            let description = format!(
                "{} (key {}, voice {voice_id})",
                args.backend.name(),
                mask_key(&api_key)
            );
            (
                Box::new(ElevenLabsBackend::with_base_url(api_key, base_url)),
                description,
            )
        }
        BackendKind::Bark => {
            let description = format!(
                "{} via {}",
                args.backend.name(),
                args.bark_script.display()
            );
            (
                Box::new(BarkBackend::new(
                    &args.python,
                    &args.bark_script,
                    args.bark_voice.clone(),
                )),
                description,
            )
        }
    };

    // Failures past this point are per-item; a missing output root is fatal.
    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output root {}", args.output.display()))?;

    let mut log = RunLog::create(&args.log_file)
        .with_context(|| format!("Failed to open log file {}", args.log_file.display()))?;

    log.line("Starting audio generation...");
    log.line(&format!("Backend: {description}"));
    log.line(&format!("Output directory: {}", args.output.display()));
    log.line(&format!("Audio files to generate: {}", items.len()));

    let fetcher = BatchFetcher::new(
        backend.as_ref(),
        FetchOptions {
            output_root: args.output.clone(),
            voice_id,
            model_id,
            voice_settings: VoiceSettings::default(),
        },
    );

    let results = fetcher.run(&items, &mut log);
    let summary = RunSummary::from_results(&results);

    log.raw("");
    log.line("=== GENERATION SUMMARY ===");
    log.line(&format!("Total assets: {}", summary.total));
    log.line(&format!("Successfully generated: {}", summary.succeeded));
    log.line(&format!("Failed: {}", summary.failed));
    log.line("Audio generation process complete!");

    Ok(())
}

fn list_items(items: &[AudioItem]) -> Result<()> {
    println!("Manifest items:");
    for item in items {
        match &item.voice_id {
            Some(voice) => println!("  {} [{}] (voice {voice})", item.id, item.category),
            None => println!("  {} [{}]", item.id, item.category),
        }
        println!("    Text: {}", item.text);
    }
    println!("{} items total.", items.len());

    Ok(())
}
