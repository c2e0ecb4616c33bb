pub mod app;
pub mod breathing;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod ipc;
pub mod models;
pub mod router;
pub mod store;

pub use app::SentimentApp;
pub use breathing::{BreathingPhase, BreathingSession, BreathingState};
pub use catalog::{Catalog, CatalogIssue};
pub use classifier::{classify, ClassifyError};
pub use config::SentimentConfig;
pub use error::{Result, SentimentError};
pub use models::{ContentEntry, ContentType, Emotion, FavoriteMark, MoodLogEntry};
pub use store::{FavoritesStore, MoodLogStore, StoreEvent};
