//! Audio item definitions and manifest loading.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output category for a generated asset.
///
/// Determines the subdirectory under the output root the asset is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Voice,
    Sfx,
    Ambient,
    Music,
}

impl Category {
    /// All categories, in the order their directories are laid out.
    pub const ALL: [Category; 4] = [
        Category::Voice,
        Category::Sfx,
        Category::Ambient,
        Category::Music,
    ];

    /// Returns the subdirectory name for this category.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Voice => "voice",
            Category::Sfx => "sfx",
            Category::Ambient => "ambient",
            Category::Music => "music",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A single audio asset to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioItem {
    /// Unique key; becomes the output file stem.
    pub id: String,
    /// Prompt sent to the synthesis backend. Non-speech assets use bracketed
    /// descriptions like "[soft click sound]".
    pub text: String,
    /// Output subdirectory.
    pub category: Category,
    /// Per-item voice override; the run default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}

/// Errors that can occur when loading a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Manifest contains no items")]
    Empty,

    #[error("Manifest contains an item with an empty id")]
    EmptyId,

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("Item '{0}' has empty text")]
    EmptyText(String),
}

/// Load and validate a manifest from a JSON file.
///
/// The file holds a JSON array of items:
/// `[{"id": "button_click", "text": "[soft click sound]", "category": "sfx"}]`
pub fn load(path: &Path) -> Result<Vec<AudioItem>, ManifestError> {
    let data = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let items: Vec<AudioItem> =
        serde_json::from_str(&data).map_err(|source| ManifestError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    validate(&items)?;
    Ok(items)
}

/// Validate that ids are unique and non-empty and every item has text.
pub fn validate(items: &[AudioItem]) -> Result<(), ManifestError> {
    if items.is_empty() {
        return Err(ManifestError::Empty);
    }

    let mut seen = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(ManifestError::EmptyId);
        }
        if item.text.trim().is_empty() {
            return Err(ManifestError::EmptyText(item.id.clone()));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ManifestError::DuplicateId(item.id.clone()));
        }
    }

    Ok(())
}

/// The default Ember Throne Chronicles asset list, used when no manifest
/// file is given.
pub fn builtin() -> Vec<AudioItem> {
    fn item(id: &str, text: &str, category: Category) -> AudioItem {
        AudioItem {
            id: id.to_string(),
            text: text.to_string(),
            category,
            voice_id: None,
        }
    }

    vec![
        item(
            "intro_narration",
            "Welcome to The Ember Throne Chronicles, a tale of mystery and adventure.",
            Category::Voice,
        ),
        item(
            "village_elder_greeting",
            "Ah, young one. The Ember Throne calls to you, as it once called to your mentor.",
            Category::Voice,
        ),
        item(
            "mysterious_messenger",
            "The path you seek lies beyond the northern woods. Few return from that journey.",
            Category::Voice,
        ),
        item("button_click", "[soft click sound]", Category::Sfx),
        item("page_turn", "[page turning sound]", Category::Sfx),
        item("item_pickup", "[magical item pickup sound]", Category::Sfx),
        item("door_open", "[heavy door opening]", Category::Sfx),
        item("footsteps", "[footsteps on stone path]", Category::Sfx),
        item(
            "magic_spell",
            "[magical spell casting with energy build-up and release]",
            Category::Sfx,
        ),
        item("sword_slash", "[quick sword slash through air]", Category::Sfx),
        item("treasure_found", "[short triumphant fanfare]", Category::Sfx),
        item(
            "forest_ambience",
            "[forest ambient sounds with birds chirping and leaves rustling]",
            Category::Ambient,
        ),
        item(
            "village_ambience",
            "[medieval village ambient sounds with distant chatter and animals]",
            Category::Ambient,
        ),
        item(
            "title_theme",
            "[gentle fantasy music with strings and flute]",
            Category::Music,
        ),
    ]
}
