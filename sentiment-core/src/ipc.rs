use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Emotion;

const PROTOCOL_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SentimentRequest {
    Ping,
    Classify {
        text: String,
    },
    Suggest {
        emotion: Emotion,
        /// Select content for the mood's suggested counterpart instead of the
        /// mood itself.
        #[serde(default)]
        redirect: bool,
    },
    ForEmotion {
        emotion: Emotion,
    },
    LogMood {
        emotion: Emotion,
    },
    History,
    DeleteMoods {
        ids: Vec<Uuid>,
    },
    /// Delete by position in the history as currently listed, newest first.
    DeleteMoodsAt {
        indices: Vec<usize>,
    },
    ToggleFavorite {
        content_id: String,
    },
    IsFavorite {
        content_id: String,
    },
    Favorites,
    ValidateCatalog,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SentimentResponse {
    pub status: String,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub version: String,
}

impl SentimentResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            status: "ok".to_string(),
            data: Some(data),
            error: None,
            version: PROTOCOL_VERSION.to_string(),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(msg.into()),
            version: PROTOCOL_VERSION.to_string(),
        }
    }

    pub fn pong() -> Self {
        Self::ok(serde_json::json!({"pong": true}))
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
