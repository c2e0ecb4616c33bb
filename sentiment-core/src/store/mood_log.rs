use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use tokio::sync::broadcast;
use uuid::Uuid;

use super::{
    decode_moods, encode_moods, read_document, write_document, StoreEvent, EVENT_CAPACITY,
};
use crate::error::Result;
use crate::models::{Emotion, MoodLogEntry};

/// Append-only mood history, newest entry first.
#[derive(Debug)]
pub struct MoodLogStore {
    path: PathBuf,
    entries: Vec<MoodLogEntry>,
    events: broadcast::Sender<StoreEvent>,
}

impl MoodLogStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = read_document(&path, decode_moods);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { path, entries, events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records `emotion` now, at the head of the log.
    pub fn record(&mut self, emotion: Emotion) -> Result<MoodLogEntry> {
        let entry = MoodLogEntry::new(emotion);
        self.entries.insert(0, entry.clone());
        if let Err(e) = self.persist() {
            self.entries.remove(0);
            return Err(e);
        }

        tracing::info!("Logged mood {} ({})", emotion, entry.id);
        let _ = self.events.send(StoreEvent::MoodRecorded {
            id: entry.id,
            emotion,
        });
        Ok(entry)
    }

    pub fn list(&self) -> &[MoodLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deletes entries by id. Unknown ids are ignored. Returns the number
    /// of entries removed.
    pub fn delete_ids(&mut self, ids: &[Uuid]) -> Result<usize> {
        let targets: HashSet<Uuid> = ids.iter().copied().collect();
        let before = self.entries.clone();
        self.entries.retain(|e| !targets.contains(&e.id));

        let removed: Vec<Uuid> = before
            .iter()
            .filter(|e| targets.contains(&e.id))
            .map(|e| e.id)
            .collect();
        if removed.is_empty() {
            return Ok(0);
        }

        if let Err(e) = self.persist() {
            self.entries = before;
            return Err(e);
        }

        let count = removed.len();
        let _ = self.events.send(StoreEvent::MoodsDeleted { ids: removed });
        Ok(count)
    }

    /// Deletes the entries at `indices` of `snapshot`, the list the caller
    /// displayed. Positions are turned into ids first, so the store may have
    /// changed since the snapshot was taken.
    pub fn delete_at(&mut self, snapshot: &[MoodLogEntry], indices: &[usize]) -> Result<usize> {
        let ids: Vec<Uuid> = indices
            .iter()
            .filter_map(|&i| snapshot.get(i))
            .map(|e| e.id)
            .collect();
        self.delete_ids(&ids)
    }

    fn persist(&self) -> Result<()> {
        write_document(&self.path, &encode_moods(&self.entries)?)
    }

    /// Number of entries per emotion, in canonical emotion order. Emotions
    /// never logged are omitted.
    pub fn summary(&self) -> Vec<(Emotion, usize)> {
        let mut counts: BTreeMap<Emotion, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.emotion).or_default() += 1;
        }
        counts.into_iter().collect()
    }
}
