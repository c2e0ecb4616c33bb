use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Emotion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    pub id: Uuid,
    pub emotion: Emotion,
    pub timestamp: DateTime<Utc>,
}

impl MoodLogEntry {
    pub fn new(emotion: Emotion) -> Self {
        Self {
            id: Uuid::new_v4(),
            emotion,
            timestamp: Utc::now(),
        }
    }
}
