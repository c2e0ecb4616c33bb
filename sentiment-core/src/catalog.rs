//! Content catalog and recommendation selection.
//!
//! The catalog is a bundled, read-only JSON array of [`ContentEntry`]
//! records loaded once per session. A missing or undecodable file degrades
//! to an empty catalog rather than an error.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::sync::oneshot;

use crate::error::Result;
use crate::models::{ContentEntry, ContentType, Emotion};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ContentEntry>,
}

/// A data-quality finding from [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    DuplicateId { id: String, count: usize },
    DuplicateUrl { url: String, count: usize },
    MissingContent { emotion: Emotion, content_type: ContentType },
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ContentEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<ContentEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Loads the catalog, treating any failure as "no content available".
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                tracing::warn!("Catalog unavailable at {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// First entry, in catalog order, tagged with both `emotion` and
    /// `content_type`. Every call scans afresh; nothing is cached.
    pub fn select(&self, emotion: Emotion, content_type: ContentType) -> Option<&ContentEntry> {
        self.entries.iter().find(|e| e.matches(emotion, content_type))
    }

    /// One selection per content type, in display order.
    pub fn select_all_types(&self, emotion: Emotion) -> Vec<(ContentType, Option<&ContentEntry>)> {
        ContentType::ALL
            .into_iter()
            .map(|t| (t, self.select(emotion, t)))
            .collect()
    }

    pub fn for_emotion(&self, emotion: Emotion) -> Vec<&ContentEntry> {
        self.entries.iter().filter(|e| e.emotion == emotion).collect()
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut urls: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *ids.entry(entry.id.as_str()).or_default() += 1;
            *urls.entry(entry.url.as_str()).or_default() += 1;
        }

        // Report in catalog order so output is stable.
        let mut seen_ids = HashSet::new();
        let mut seen_urls = HashSet::new();
        for entry in &self.entries {
            let id_count = ids[entry.id.as_str()];
            if id_count > 1 && seen_ids.insert(entry.id.as_str()) {
                issues.push(CatalogIssue::DuplicateId {
                    id: entry.id.clone(),
                    count: id_count,
                });
            }
            let url_count = urls[entry.url.as_str()];
            if url_count > 1 && seen_urls.insert(entry.url.as_str()) {
                issues.push(CatalogIssue::DuplicateUrl {
                    url: entry.url.clone(),
                    count: url_count,
                });
            }
        }

        for emotion in Emotion::ALL {
            for content_type in ContentType::ALL {
                if self.select(emotion, content_type).is_none() {
                    issues.push(CatalogIssue::MissingContent { emotion, content_type });
                }
            }
        }

        issues
    }
}

/// Reads the catalog on a blocking worker and hands it to `reply`.
///
/// If the receiving side has gone away by the time loading finishes, the
/// result is dropped without complaint.
pub fn load_in_background(path: PathBuf, reply: oneshot::Sender<Catalog>) {
    tokio::task::spawn_blocking(move || {
        let catalog = Catalog::load(&path);
        if reply.send(catalog).is_err() {
            tracing::debug!("Catalog load finished after requester went away; discarding");
        }
    });
}

pub async fn load_async(path: PathBuf) -> Catalog {
    let (tx, rx) = oneshot::channel();
    load_in_background(path, tx);
    rx.await.unwrap_or_default()
}
