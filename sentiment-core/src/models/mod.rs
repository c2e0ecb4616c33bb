pub mod content;
pub mod emotion;
pub mod favorite;
pub mod mood_log;

pub use content::{ContentEntry, ContentType};
pub use emotion::Emotion;
pub use favorite::FavoriteMark;
pub use mood_log::MoodLogEntry;
