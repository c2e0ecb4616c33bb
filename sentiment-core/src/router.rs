use serde_json::json;

use crate::app::SentimentApp;
use crate::classifier::{self, ClassifyError};
use crate::ipc::{SentimentRequest, SentimentResponse};
use crate::models::Emotion;

pub const NO_CONTENT: &str = "No content available";

pub fn handle_request(request: SentimentRequest, app: &mut SentimentApp) -> SentimentResponse {
    match request {
        SentimentRequest::Ping => SentimentResponse::pong(),
        SentimentRequest::Classify { text } => match classifier::classify(&text) {
            Ok(emotion) => SentimentResponse::ok(emotion_json(emotion)),
            Err(ClassifyError::EmptyInput) => SentimentResponse::err("Please describe how you feel"),
            Err(e @ ClassifyError::NoMatch) => SentimentResponse::err(e.to_string()),
        },
        SentimentRequest::Suggest { emotion, redirect } => handle_suggest(emotion, redirect, app),
        SentimentRequest::ForEmotion { emotion } => {
            let entries = app.catalog.for_emotion(emotion);
            SentimentResponse::ok(json!({
                "emotion": emotion,
                "entries": entries,
                "count": entries.len(),
            }))
        }
        SentimentRequest::LogMood { emotion } => match app.moods.record(emotion) {
            Ok(entry) => SentimentResponse::ok(json!({ "logged": true, "entry": entry })),
            Err(e) => SentimentResponse::err(format!("Failed to log mood: {}", e)),
        },
        SentimentRequest::History => {
            let summary: Vec<_> = app
                .moods
                .summary()
                .into_iter()
                .map(|(emotion, count)| json!({ "emotion": emotion, "count": count }))
                .collect();
            SentimentResponse::ok(json!({
                "entries": app.moods.list(),
                "count": app.moods.len(),
                "summary": summary,
            }))
        }
        SentimentRequest::DeleteMoods { ids } => match app.moods.delete_ids(&ids) {
            Ok(deleted) => SentimentResponse::ok(json!({ "deleted": deleted })),
            Err(e) => SentimentResponse::err(format!("Failed to delete moods: {}", e)),
        },
        SentimentRequest::DeleteMoodsAt { indices } => {
            // Positions refer to the history as currently listed.
            let snapshot = app.moods.list().to_vec();
            match app.moods.delete_at(&snapshot, &indices) {
                Ok(deleted) => SentimentResponse::ok(json!({ "deleted": deleted })),
                Err(e) => SentimentResponse::err(format!("Failed to delete moods: {}", e)),
            }
        }
        SentimentRequest::ToggleFavorite { content_id } => {
            match handle_toggle_favorite(&content_id, app) {
                Ok(data) => SentimentResponse::ok(data),
                Err(e) => SentimentResponse::err(e.to_string()),
            }
        }
        SentimentRequest::IsFavorite { content_id } => SentimentResponse::ok(json!({
            "content_id": content_id,
            "favorite": app.favorites.is_favorite(&content_id),
        })),
        SentimentRequest::Favorites => {
            let entries = app.favorites.list_favorite_content(&app.catalog);
            SentimentResponse::ok(json!({
                "entries": entries,
                "count": entries.len(),
            }))
        }
        SentimentRequest::ValidateCatalog => {
            let issues = app.catalog.validate();
            SentimentResponse::ok(json!({
                "entries": app.catalog.len(),
                "issues": issues,
            }))
        }
    }
}

fn emotion_json(emotion: Emotion) -> serde_json::Value {
    json!({
        "emotion": emotion,
        "title": emotion.title(),
        "icon": emotion.icon(),
        "color": emotion.accent_color(),
    })
}

fn handle_suggest(emotion: Emotion, redirect: bool, app: &SentimentApp) -> SentimentResponse {
    if app.catalog.is_empty() {
        return SentimentResponse::err(NO_CONTENT);
    }

    let target = if redirect {
        emotion.suggested_content_emotion()
    } else {
        emotion
    };

    let suggestions: Vec<_> = app
        .catalog
        .select_all_types(target)
        .into_iter()
        .map(|(content_type, entry)| {
            json!({
                "type": content_type,
                "label": content_type.label(),
                "entry": entry,
                "favorite": entry.map(|e| app.favorites.is_favorite(&e.id)).unwrap_or(false),
            })
        })
        .collect();

    SentimentResponse::ok(json!({
        "emotion": emotion,
        "content_emotion": target,
        "suggestions": suggestions,
    }))
}

fn handle_toggle_favorite(content_id: &str, app: &mut SentimentApp) -> anyhow::Result<serde_json::Value> {
    // Removal never needs the catalog; it may be empty or no longer list the entry.
    let adding = !app.favorites.is_favorite(content_id);
    if adding && app.catalog.get(content_id).is_none() {
        return Err(anyhow::anyhow!("Unknown content id: {}", content_id));
    }
    let favorite = app.favorites.toggle(content_id)?;
    Ok(json!({ "content_id": content_id, "favorite": favorite }))
}
