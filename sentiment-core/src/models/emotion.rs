use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// The nine mood categories that drive content selection and theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Scared,
    Romantic,
    Relaxed,
    Lost,
    Stressed,
    Sleepy,
}

impl Emotion {
    /// All categories in their canonical order. Classification rules and
    /// selection grids iterate in this order.
    pub const ALL: [Emotion; 9] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Scared,
        Emotion::Romantic,
        Emotion::Relaxed,
        Emotion::Lost,
        Emotion::Stressed,
        Emotion::Sleepy,
    ];

    /// Lowercase tag used in the catalog and the persisted mood log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Scared => "scared",
            Emotion::Romantic => "romantic",
            Emotion::Relaxed => "relaxed",
            Emotion::Lost => "lost",
            Emotion::Stressed => "stressed",
            Emotion::Sleepy => "sleepy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Scared => "Scared",
            Emotion::Romantic => "Romantic",
            Emotion::Relaxed => "Relaxed",
            Emotion::Lost => "Lost",
            Emotion::Stressed => "Stressed",
            Emotion::Sleepy => "Sleepy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Emotion::Happy => "face.smiling",
            Emotion::Sad => "cloud.rain",
            Emotion::Angry => "flame",
            Emotion::Scared => "exclamationmark.triangle",
            Emotion::Romantic => "heart",
            Emotion::Relaxed => "leaf",
            Emotion::Lost => "map",
            Emotion::Stressed => "bolt",
            Emotion::Sleepy => "moon.zzz",
        }
    }

    /// Presentation-only accent colour name.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Emotion::Happy => "yellow",
            Emotion::Sad => "blue",
            Emotion::Angry => "red",
            Emotion::Scared => "purple",
            Emotion::Romantic => "pink",
            Emotion::Relaxed => "green",
            Emotion::Lost => "gray",
            Emotion::Stressed => "orange",
            Emotion::Sleepy => "indigo",
        }
    }

    /// The category whose content is most likely to lift this mood.
    ///
    /// Negative moods are steered toward uplifting or calming content; an
    /// already relaxed user is offered happy content rather than more calm.
    pub fn suggested_content_emotion(&self) -> Emotion {
        match self {
            Emotion::Sad | Emotion::Lost => Emotion::Happy,
            Emotion::Angry | Emotion::Scared | Emotion::Stressed => Emotion::Relaxed,
            Emotion::Relaxed => Emotion::Happy,
            Emotion::Happy | Emotion::Romantic | Emotion::Sleepy => *self,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == needle)
            .ok_or_else(|| SentimentError::UnknownEmotion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_nine_distinct_categories() {
        let mut tags: Vec<&str> = Emotion::ALL.iter().map(|e| e.as_str()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), 9);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("  Happy ".parse::<Emotion>().unwrap(), Emotion::Happy);
        assert_eq!("SLEEPY".parse::<Emotion>().unwrap(), Emotion::Sleepy);
        assert!(matches!(
            "bored".parse::<Emotion>(),
            Err(SentimentError::UnknownEmotion(_))
        ));
    }

    #[test]
    fn test_display_matches_serde_tag() {
        for emotion in Emotion::ALL {
            let json = serde_json::to_string(&emotion).unwrap();
            assert_eq!(json, format!("\"{}\"", emotion));
        }
    }

    #[test]
    fn test_suggested_content_emotion() {
        assert_eq!(Emotion::Sad.suggested_content_emotion(), Emotion::Happy);
        assert_eq!(Emotion::Lost.suggested_content_emotion(), Emotion::Happy);
        assert_eq!(Emotion::Angry.suggested_content_emotion(), Emotion::Relaxed);
        assert_eq!(Emotion::Stressed.suggested_content_emotion(), Emotion::Relaxed);
        assert_eq!(Emotion::Relaxed.suggested_content_emotion(), Emotion::Happy);
        assert_eq!(Emotion::Romantic.suggested_content_emotion(), Emotion::Romantic);
    }

    #[test]
    fn test_title_capitalises_tag() {
        for emotion in Emotion::ALL {
            let tag = emotion.as_str();
            let expected = format!("{}{}", tag[..1].to_uppercase(), &tag[1..]);
            assert_eq!(emotion.title(), expected);
        }
    }
}
