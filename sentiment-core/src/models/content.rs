use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::models::Emotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Quote,
    Song,
    Article,
}

impl ContentType {
    /// Display order on the suggestions screen.
    pub const ALL: [ContentType; 4] = [
        ContentType::Video,
        ContentType::Quote,
        ContentType::Song,
        ContentType::Article,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Quote => "quote",
            ContentType::Song => "song",
            ContentType::Article => "article",
        }
    }

    /// Call-to-action label for the entry's "open" button.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Video => "Watch",
            ContentType::Quote => "Read",
            ContentType::Song => "Listen",
            ContentType::Article => "Read",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ContentType::Video => "play.rectangle.fill",
            ContentType::Quote => "quote.bubble.fill",
            ContentType::Song => "music.note.list",
            ContentType::Article => "doc.richtext.fill",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| SentimentError::UnknownContentType(s.to_string()))
    }
}

/// A single recommendable item from the bundled catalog. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Opaque unique identifier; also the favorites identity key.
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub emotion: Emotion,
}

impl ContentEntry {
    pub fn matches(&self, emotion: Emotion, content_type: ContentType) -> bool {
        self.emotion == emotion && self.content_type == content_type
    }
}
