use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
