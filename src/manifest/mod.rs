//! Audio asset manifest.
//!
//! An ordered list of (id, text, category) items describing every asset a
//! run should produce. The built-in Ember Throne list covers the shipped
//! game; a JSON manifest file can replace it for other asset batches.

mod items;

pub use items::{AudioItem, Category, ManifestError, builtin, load, validate};
