//! Batch audio fetcher.
//!
//! The core loop: walk the manifest in order, synthesize each item, write
//! the payload under the category directory, and collect per-item outcomes
//! into a run summary. A single failing item never aborts the batch.

mod batch;

pub use batch::{BatchFetcher, FetchOptions, GenerationResult, RunSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, MockSynthesisBackend, VoiceSettings};
    use crate::log::RunLog;
    use crate::manifest::{AudioItem, Category};
    use std::path::Path;
    use tempfile::TempDir;

    fn item(id: &str, text: &str, category: Category) -> AudioItem {
        AudioItem {
            id: id.to_string(),
            text: text.to_string(),
            category,
            voice_id: None,
        }
    }

    fn options(root: &Path) -> FetchOptions {
        FetchOptions {
            output_root: root.to_path_buf(),
            voice_id: "onwK4e9ZLuTAKqWW03F9".to_string(),
            model_id: "eleven_monolingual_v1".to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }

    fn test_log(dir: &TempDir) -> RunLog {
        RunLog::create(&dir.path().join("run.log")).unwrap()
    }

    /// Mock that succeeds with a fixed payload for every request.
    fn all_success_backend(payload: &'static [u8]) -> MockSynthesisBackend {
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize()
            .returning(move |_| Ok(payload.to_vec()));
        mock
    }

    // ===========================================
    // Happy path
    // ===========================================

    #[test]
    fn test_success_writes_exact_payload() {
        let dir = TempDir::new().unwrap();
        let mock = all_success_backend(b"ID3fake mp3 payload");
        let fetcher = BatchFetcher::new(&mock, options(dir.path()));

        let items = vec![item("button_click", "[soft click sound]", Category::Sfx)];
        let results = fetcher.run(&items, &mut test_log(&dir));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].outcome, Ok(19));

        let written = std::fs::read(dir.path().join("sfx/button_click.mp3")).unwrap();
        assert_eq!(written, b"ID3fake mp3 payload");
    }

    #[test]
    fn test_one_result_per_item_in_input_order() {
        let dir = TempDir::new().unwrap();
        let mock = all_success_backend(b"audio");
        let fetcher = BatchFetcher::new(&mock, options(dir.path()));

        let items = vec![
            item("intro_narration", "Welcome.", Category::Voice),
            item("button_click", "[soft click sound]", Category::Sfx),
            item("title_theme", "[gentle fantasy music]", Category::Music),
        ];
        let results = fetcher.run(&items, &mut test_log(&dir));

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["intro_narration", "button_click", "title_theme"]);
    }

    #[test]
    fn test_category_directories_are_created() {
        let dir = TempDir::new().unwrap();
        let mock = all_success_backend(b"audio");
        let fetcher = BatchFetcher::new(&mock, options(dir.path()));

        let items = vec![
            item("intro_narration", "Welcome.", Category::Voice),
            item("forest_ambience", "[forest sounds]", Category::Ambient),
        ];
        fetcher.run(&items, &mut test_log(&dir));

        assert!(dir.path().join("voice/intro_narration.mp3").exists());
        assert!(dir.path().join("ambient/forest_ambience.mp3").exists());
    }

    #[test]
    fn test_rerun_overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let items = vec![item("button_click", "[soft click sound]", Category::Sfx)];

        let first = all_success_backend(b"first payload");
        BatchFetcher::new(&first, options(dir.path())).run(&items, &mut test_log(&dir));

        let second = all_success_backend(b"second payload");
        let results =
            BatchFetcher::new(&second, options(dir.path())).run(&items, &mut test_log(&dir));

        assert!(results[0].is_success());
        let written = std::fs::read(dir.path().join("sfx/button_click.mp3")).unwrap();
        assert_eq!(written, b"second payload");
    }

    // ===========================================
    // Failure isolation
    // ===========================================

    #[test]
    fn test_failing_item_does_not_abort_the_batch() {
        let dir = TempDir::new().unwrap();
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize().returning(|req| {
            if req.text.contains("unreachable") {
                Err(BackendError::Connection("connection refused".to_string()))
            } else {
                Ok(b"audio".to_vec())
            }
        });

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let items = vec![
            item("first", "fine", Category::Sfx),
            item("second", "unreachable", Category::Sfx),
            item("third", "also fine", Category::Sfx),
        ];
        let results = fetcher.run(&items, &mut test_log(&dir));

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[2].is_success());
        assert!(dir.path().join("sfx/third.mp3").exists());
    }

    #[test]
    fn test_api_failure_leaves_no_file_and_records_status() {
        let dir = TempDir::new().unwrap();
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize().returning(|_| {
            Err(BackendError::Api {
                status: 429,
                body: "{\"detail\":\"rate limited\"}".to_string(),
            })
        });

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let items = vec![item("page_turn", "[page turning sound]", Category::Sfx)];
        let results = fetcher.run(&items, &mut test_log(&dir));

        assert!(!dir.path().join("sfx/page_turn.mp3").exists());
        let reason = results[0].outcome.as_ref().unwrap_err();
        assert!(reason.contains("429"));
        assert!(reason.contains("rate limited"));
    }

    #[test]
    fn test_api_failure_does_not_clobber_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("sfx")).unwrap();
        std::fs::write(dir.path().join("sfx/page_turn.mp3"), b"previous run").unwrap();

        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize().returning(|_| {
            Err(BackendError::Api {
                status: 500,
                body: "server error".to_string(),
            })
        });

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let items = vec![item("page_turn", "[page turning sound]", Category::Sfx)];
        fetcher.run(&items, &mut test_log(&dir));

        let kept = std::fs::read(dir.path().join("sfx/page_turn.mp3")).unwrap();
        assert_eq!(kept, b"previous run");
    }

    // ===========================================
    // Request construction
    // ===========================================

    #[test]
    fn test_item_voice_override_beats_run_default() {
        let dir = TempDir::new().unwrap();
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize()
            .withf(|req| req.voice_id == "pNInz6obpgDQGcFmaJgB")
            .times(1)
            .returning(|_| Ok(b"audio".to_vec()));

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let items = vec![AudioItem {
            id: "village_elder_greeting".to_string(),
            text: "Ah, young one.".to_string(),
            category: Category::Voice,
            voice_id: Some("pNInz6obpgDQGcFmaJgB".to_string()),
        }];

        let results = fetcher.run(&items, &mut test_log(&dir));
        assert!(results[0].is_success());
    }

    #[test]
    fn test_run_default_voice_applies_without_override() {
        let dir = TempDir::new().unwrap();
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize()
            .withf(|req| {
                req.voice_id == "onwK4e9ZLuTAKqWW03F9"
                    && req.model_id == "eleven_monolingual_v1"
            })
            .times(1)
            .returning(|_| Ok(b"audio".to_vec()));

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let items = vec![item("footsteps", "[footsteps on stone path]", Category::Sfx)];

        let results = fetcher.run(&items, &mut test_log(&dir));
        assert!(results[0].is_success());
    }

    #[test]
    fn test_destination_uses_backend_extension() {
        let dir = TempDir::new().unwrap();
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("wav");

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let path = fetcher.destination(&item("door_open", "[heavy door opening]", Category::Sfx));

        assert_eq!(path, dir.path().join("sfx/door_open.wav"));
    }

    // ===========================================
    // Summary
    // ===========================================

    #[test]
    fn test_summary_counts_always_balance() {
        let dir = TempDir::new().unwrap();
        let mut mock = MockSynthesisBackend::new();
        mock.expect_file_extension().return_const("mp3");
        mock.expect_synthesize().returning(|req| {
            if req.text.contains("bad") {
                Err(BackendError::Connection("down".to_string()))
            } else {
                Ok(b"audio".to_vec())
            }
        });

        let fetcher = BatchFetcher::new(&mock, options(dir.path()));
        let items = vec![
            item("a", "good", Category::Sfx),
            item("b", "bad", Category::Sfx),
            item("c", "good", Category::Sfx),
            item("d", "bad", Category::Sfx),
        ];
        let results = fetcher.run(&items, &mut test_log(&dir));
        let summary = RunSummary::from_results(&results);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = RunSummary::from_results(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
    }
}
