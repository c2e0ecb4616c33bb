use crate::catalog::{self, Catalog};
use crate::config::SentimentConfig;
use crate::store::{FavoritesStore, MoodLogStore};

/// Process-wide state: the read-only catalog plus the two local stores.
#[derive(Debug)]
pub struct SentimentApp {
    pub catalog: Catalog,
    pub moods: MoodLogStore,
    pub favorites: FavoritesStore,
}

impl SentimentApp {
    pub fn new(catalog: Catalog, moods: MoodLogStore, favorites: FavoritesStore) -> Self {
        Self {
            catalog,
            moods,
            favorites,
        }
    }

    pub fn from_config(config: &SentimentConfig) -> Self {
        let catalog = Catalog::load(&config.catalog.path);
        Self::with_catalog(config, catalog)
    }

    /// Like [`SentimentApp::from_config`], reading the catalog off the
    /// calling task.
    pub async fn from_config_async(config: &SentimentConfig) -> Self {
        let catalog = catalog::load_async(config.catalog.path.clone()).await;
        Self::with_catalog(config, catalog)
    }

    fn with_catalog(config: &SentimentConfig, catalog: Catalog) -> Self {
        let moods = MoodLogStore::open(config.storage.mood_log_path());
        let favorites = FavoritesStore::open(config.storage.favorites_path());
        tracing::debug!(
            "Opened stores: {} mood entries, {} favorites",
            moods.len(),
            favorites.marks().len()
        );
        Self::new(catalog, moods, favorites)
    }
}
