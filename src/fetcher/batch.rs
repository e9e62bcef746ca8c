//! Batch generation loop.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio;
use crate::backend::{SynthesisBackend, SynthesisRequest, VoiceSettings};
use crate::log::RunLog;
use crate::manifest::AudioItem;

/// Outcome of one manifest item.
#[derive(Debug)]
pub struct GenerationResult {
    pub id: String,
    pub path: PathBuf,
    /// Written byte count on success, failure detail otherwise.
    pub outcome: Result<u64, String>,
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Aggregate counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Tally a result list.
    pub fn from_results(results: &[GenerationResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }
}

/// Settings shared by every request in a run.
pub struct FetchOptions {
    pub output_root: PathBuf,
    pub voice_id: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

/// Runs a manifest through a synthesis backend, one item at a time.
///
/// Each item is isolated: a synthesis or write failure is logged and
/// counted, and the loop moves on to the next item. Nothing short of an
/// external kill stops the batch.
pub struct BatchFetcher<'a> {
    backend: &'a dyn SynthesisBackend,
    options: FetchOptions,
}

impl<'a> BatchFetcher<'a> {
    pub fn new(backend: &'a dyn SynthesisBackend, options: FetchOptions) -> Self {
        Self { backend, options }
    }

    /// Destination path for an item:
    /// `<output_root>/<category>/<id>.<ext>`.
    pub fn destination(&self, item: &AudioItem) -> PathBuf {
        self.options
            .output_root
            .join(item.category.dir_name())
            .join(format!("{}.{}", item.id, self.backend.file_extension()))
    }

    /// Process every item in order, returning one result per item.
    pub fn run(&self, items: &[AudioItem], log: &mut RunLog) -> Vec<GenerationResult> {
        let mut results = Vec::with_capacity(items.len());

        for item in items {
            let path = self.destination(item);
            log.line(&format!(
                "Generating {} in {}...",
                item.id,
                item.category.dir_name()
            ));

            let outcome = match self.fetch_item(item, &path) {
                Ok((bytes, duration)) => {
                    match duration {
                        Some(seconds) => log.line(&format!(
                            "✅ Successfully generated {} ({bytes} bytes, {seconds:.2}s)",
                            item.id
                        )),
                        None => log.line(&format!(
                            "✅ Successfully generated {} ({bytes} bytes)",
                            item.id
                        )),
                    }
                    Ok(bytes)
                }
                Err(reason) => {
                    log.line(&format!("❌ Failed to generate {}: {reason}", item.id));
                    Err(reason)
                }
            };

            results.push(GenerationResult {
                id: item.id.clone(),
                path,
                outcome,
            });
        }

        results
    }

    /// Fetch and persist one item. Returns the written byte count and, for
    /// WAV payloads, the clip duration.
    fn fetch_item(&self, item: &AudioItem, path: &Path) -> Result<(u64, Option<f32>), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        }

        let voice = item.voice_id.as_deref().unwrap_or(&self.options.voice_id);
        let request = SynthesisRequest::new(&item.text, voice)
            .with_model(&self.options.model_id)
            .with_settings(self.options.voice_settings.clone());

        let payload = self
            .backend
            .synthesize(&request)
            .map_err(|e| e.to_string())?;

        fs::write(path, &payload)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

        let duration = match self.backend.file_extension() {
            "wav" => audio::wav_duration(&payload),
            _ => None,
        };

        Ok((payload.len() as u64, duration))
    }
}
