use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::sync::broadcast;

use super::{
    decode_favorites, encode_favorites, read_document, write_document, StoreEvent, EVENT_CAPACITY,
};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{ContentEntry, FavoriteMark};

/// Set of favorited catalog entry ids, independent of the catalog itself.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    marks: Vec<FavoriteMark>,
    events: broadcast::Sender<StoreEvent>,
}

impl FavoritesStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut marks = read_document(&path, decode_favorites);
        // A hand-edited document may repeat an id; keep the first mark.
        let mut seen = HashSet::new();
        marks.retain(|m| seen.insert(m.content_id.clone()));
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { path, marks, events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn is_favorite(&self, content_id: &str) -> bool {
        self.marks.iter().any(|m| m.content_id == content_id)
    }

    /// Flips membership of `content_id` and returns the new state.
    pub fn toggle(&mut self, content_id: &str) -> Result<bool> {
        let before = self.marks.clone();
        let now_favorite = match self.marks.iter().position(|m| m.content_id == content_id) {
            Some(idx) => {
                self.marks.remove(idx);
                false
            }
            None => {
                self.marks.push(FavoriteMark::new(content_id));
                true
            }
        };

        if let Err(e) = self.persist() {
            self.marks = before;
            return Err(e);
        }

        let event = if now_favorite {
            StoreEvent::FavoriteAdded {
                content_id: content_id.to_string(),
            }
        } else {
            StoreEvent::FavoriteRemoved {
                content_id: content_id.to_string(),
            }
        };
        let _ = self.events.send(event);
        Ok(now_favorite)
    }

    fn persist(&self) -> Result<()> {
        write_document(&self.path, &encode_favorites(&self.marks)?)
    }

    pub fn marks(&self) -> &[FavoriteMark] {
        &self.marks
    }

    /// Catalog entries currently marked favorite, most recently favorited
    /// first. Marks whose entry is no longer in the catalog are skipped.
    pub fn list_favorite_content<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ContentEntry> {
        let mut marks: Vec<&FavoriteMark> = self.marks.iter().collect();
        marks.sort_by(|a, b| b.favorited_at.cmp(&a.favorited_at));
        marks
            .into_iter()
            .filter_map(|m| catalog.get(&m.content_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, Emotion};
    use chrono::{Duration, Utc};

    fn entry(id: &str) -> ContentEntry {
        ContentEntry {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            url: format!("https://example.com/{}", id),
            content_type: ContentType::Article,
            emotion: Emotion::Lost,
        }
    }

    fn temp_store() -> (tempfile::TempDir, FavoritesStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::open(dir.path().join("favorites.json"));
        (dir, store)
    }

    #[test]
    fn test_toggle_twice_returns_to_not_favorite() {
        let (_dir, mut store) = temp_store();
        assert!(!store.is_favorite("a"));
        assert!(store.toggle("a").unwrap());
        assert!(store.is_favorite("a"));
        assert!(!store.toggle("a").unwrap());
        assert!(!store.is_favorite("a"));
    }

    #[test]
    fn test_toggle_once_on_favorite_removes_it() {
        let (dir, mut store) = temp_store();
        store.toggle("a").unwrap();

        let mut reopened = FavoritesStore::open(dir.path().join("favorites.json"));
        assert!(reopened.is_favorite("a"));
        reopened.toggle("a").unwrap();
        assert!(reopened.marks().is_empty());
    }

    #[test]
    fn test_list_sorted_by_favorited_time_desc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let now = Utc::now();
        let marks = vec![
            FavoriteMark { content_id: "old".into(), favorited_at: now - Duration::hours(2) },
            FavoriteMark { content_id: "new".into(), favorited_at: now },
            FavoriteMark { content_id: "gone".into(), favorited_at: now - Duration::hours(1) },
        ];
        std::fs::write(&path, serde_json::to_string(&marks).unwrap()).unwrap();

        let store = FavoritesStore::open(&path);
        let catalog = Catalog::from_entries(vec![entry("old"), entry("new"), entry("other")]);
        let ids: Vec<&str> = store
            .list_favorite_content(&catalog)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_open_drops_repeated_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let marks = vec![FavoriteMark::new("a"), FavoriteMark::new("a")];
        std::fs::write(&path, serde_json::to_string(&marks).unwrap()).unwrap();

        let store = FavoritesStore::open(&path);
        assert_eq!(store.marks().len(), 1);
    }

    #[test]
    fn test_events_emitted() {
        let (_dir, mut store) = temp_store();
        let mut rx = store.subscribe();
        store.toggle("x").unwrap();
        store.toggle("x").unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreEvent::FavoriteAdded { content_id: "x".into() }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreEvent::FavoriteRemoved { content_id: "x".into() }
        );
    }
}
