use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SentimentConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServiceConfig {
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of content entries, bundled with the application.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/content.json"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the mood log and favorites documents. Falls back to
    /// the platform data directory when unset.
    pub data_dir: Option<PathBuf>,
    pub mood_log_file: String,
    pub favorites_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            mood_log_file: "mood-logs.json".to_string(),
            favorites_file: "favorites.json".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sentiment"),
        }
    }

    pub fn mood_log_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.mood_log_file)
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.favorites_file)
    }
}

impl SentimentConfig {
    /// Loads `path` (if it exists) layered under `SENTIMENT_*` environment
    /// overrides, e.g. `SENTIMENT_STORAGE__DATA_DIR=/tmp/moods`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("SENTIMENT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        s.try_deserialize()
    }

    /// Loads a config file that must exist.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(path))
            .build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SentimentConfig::default();
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.catalog.path, PathBuf::from("data/content.json"));
        assert_eq!(config.storage.mood_log_file, "mood-logs.json");
        assert_eq!(config.storage.favorites_file, "favorites.json");
    }

    #[test]
    fn test_explicit_data_dir_is_used() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/var/lib/moods")),
            ..StorageConfig::default()
        };
        assert_eq!(
            storage.mood_log_path(),
            PathBuf::from("/var/lib/moods/mood-logs.json")
        );
        assert_eq!(
            storage.favorites_path(),
            PathBuf::from("/var/lib/moods/favorites.json")
        );
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[service]
log_level = "debug"

[catalog]
path = "/opt/sentiment/content.json"

[storage]
data_dir = "/tmp/sentiment-test"
mood_log_file = "moods.json"
favorites_file = "favs.json"
"#
        )
        .unwrap();

        let config = SentimentConfig::load_required(&path).unwrap();
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(
            config.catalog.path,
            PathBuf::from("/opt/sentiment/content.json")
        );
        assert_eq!(
            config.storage.mood_log_path(),
            PathBuf::from("/tmp/sentiment-test/moods.json")
        );
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[service]\nlog_level = \"warn\"\n").unwrap();

        let config = SentimentConfig::load_required(&path).unwrap();
        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.storage.favorites_file, "favorites.json");
    }
}
