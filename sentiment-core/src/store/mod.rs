//! Local persistence for the mood log and favorites.
//!
//! Each store keeps its whole collection in memory and rewrites one JSON
//! document on every mutation (temp file + rename). Reads that fail for
//! any reason yield an empty collection.

pub mod favorites;
pub mod mood_log;

use std::path::Path;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Emotion, FavoriteMark, MoodLogEntry};

pub use favorites::FavoritesStore;
pub use mood_log::MoodLogStore;

/// Capacity of each store's notification channel.
const EVENT_CAPACITY: usize = 64;

/// Emitted after a store mutation has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    MoodRecorded { id: Uuid, emotion: Emotion },
    MoodsDeleted { ids: Vec<Uuid> },
    FavoriteAdded { content_id: String },
    FavoriteRemoved { content_id: String },
}

pub fn encode_moods(entries: &[MoodLogEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn decode_moods(json: &str) -> Result<Vec<MoodLogEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn encode_favorites(marks: &[FavoriteMark]) -> Result<String> {
    Ok(serde_json::to_string_pretty(marks)?)
}

pub fn decode_favorites(json: &str) -> Result<Vec<FavoriteMark>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads `path` and decodes it with `decode`. A missing, unreadable or
/// undecodable document yields an empty collection.
fn read_document<T>(path: &Path, decode: fn(&str) -> Result<Vec<T>>) -> Vec<T> {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match decode(&data) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Failed to decode {}, starting empty: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Replaces the document at `path` with `json` via a temp file and rename.
fn write_document(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, json)?;
    std::fs::rename(&temp_path, path)?;

    tracing::debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}
