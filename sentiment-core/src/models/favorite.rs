use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookmark of a catalog entry, keyed by the entry's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteMark {
    pub content_id: String,
    pub favorited_at: DateTime<Utc>,
}

impl FavoriteMark {
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            favorited_at: Utc::now(),
        }
    }
}
