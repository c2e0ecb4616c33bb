//! Keyword classifier: maps free text to an [`Emotion`].
//!
//! Rules are checked in [`Emotion::ALL`] order and the first rule with any
//! keyword contained in the lowercased input wins. There is no tokenisation,
//! so a keyword matches anywhere inside a word ("unhappy" contains "happy").

use thiserror::Error;

use crate::models::Emotion;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("input is empty")]
    EmptyInput,

    #[error("Couldn't determine mood. Please try other words, or select a mood from the options.")]
    NoMatch,
}

const RULES: [(Emotion, &[&str]); 9] = [
    (Emotion::Happy, &["happy", "joy", "excited", "good"]),
    (Emotion::Sad, &["sad", "down", "blue", "unhappy"]),
    (Emotion::Angry, &["angry", "mad", "furious", "pissed"]),
    (Emotion::Scared, &["scared", "afraid", "anxious", "worried"]),
    (Emotion::Romantic, &["love", "romantic"]),
    (Emotion::Relaxed, &["relaxed", "calm", "peaceful"]),
    (Emotion::Lost, &["lost", "confused", "unsure"]),
    (Emotion::Stressed, &["stressed", "overwhelmed", "burnt out"]),
    (Emotion::Sleepy, &["sleepy", "tired", "exhausted"]),
];

/// Keywords that classify to `emotion`.
pub fn keywords(emotion: Emotion) -> &'static [&'static str] {
    RULES
        .iter()
        .find(|(e, _)| *e == emotion)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

pub fn classify(text: &str) -> Result<Emotion, ClassifyError> {
    if text.trim().is_empty() {
        return Err(ClassifyError::EmptyInput);
    }

    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(emotion, _)| *emotion)
        .ok_or(ClassifyError::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_has_a_matching_phrase() {
        let cases = [
            ("I feel so happy today", Emotion::Happy),
            ("Feeling a bit sad", Emotion::Sad),
            ("I'm furious with my landlord", Emotion::Angry),
            ("I'm afraid of tomorrow", Emotion::Scared),
            ("I'm in love", Emotion::Romantic),
            ("Very calm this evening", Emotion::Relaxed),
            ("I'm confused about everything", Emotion::Lost),
            ("Totally overwhelmed at work", Emotion::Stressed),
            ("I'm totally exhausted", Emotion::Sleepy),
        ];
        for (text, expected) in cases {
            assert_eq!(classify(text), Ok(expected), "input: {}", text);
        }
    }

    #[test]
    fn test_every_keyword_reaches_some_category() {
        for emotion in Emotion::ALL {
            for word in keywords(emotion) {
                assert!(classify(word).is_ok(), "keyword {} did not classify", word);
            }
        }
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(classify(""), Err(ClassifyError::EmptyInput));
        assert_eq!(classify("   \n\t "), Err(ClassifyError::EmptyInput));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("the weather is mild"), Err(ClassifyError::NoMatch));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SO TIRED"), Ok(Emotion::Sleepy));
        assert_eq!(classify("Burnt Out again"), Ok(Emotion::Stressed));
    }

    #[test]
    fn test_first_rule_in_fixed_order_wins() {
        // "unhappy" contains "happy", and happy is checked before sad.
        assert_eq!(classify("unhappy"), Ok(Emotion::Happy));
        // both sad and sleepy keywords present; sad comes first.
        assert_eq!(classify("sad and tired"), Ok(Emotion::Sad));
    }

    #[test]
    fn test_no_match_message_is_user_facing() {
        assert!(ClassifyError::NoMatch.to_string().starts_with("Couldn't determine mood"));
    }
}
