//! Genre and game queries over a [`CatalogSource`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use gamehub_core::{Game, GameQuery, Genre, Page};
use tokio::runtime::Handle;

use crate::cache::{QueryClient, Subscription};
use crate::config::Config;
use crate::source::{CatalogSource, JsonCatalog};

const GENRES_KEY: &str = "genres";

pub type GenreSubscription = Subscription<&'static str, Page<Genre>>;
pub type GameSubscription = Subscription<GameQuery, Page<Game>>;

/// The data-provider collaborator handed to the presentation layer.
#[derive(Clone)]
pub struct CatalogQueries {
    source: Arc<dyn CatalogSource>,
    genres: QueryClient<&'static str, Page<Genre>>,
    games: QueryClient<GameQuery, Page<Game>>,
}

impl CatalogQueries {
    pub fn new(source: Arc<dyn CatalogSource>, runtime: Handle, stale_after: Duration) -> Self {
        Self {
            source,
            genres: QueryClient::new(runtime.clone(), stale_after),
            games: QueryClient::new(runtime, stale_after),
        }
    }

    /// Queries over the JSON catalog named in `config`.
    pub fn from_config(config: &Config, runtime: Handle) -> Self {
        let source = Arc::new(JsonCatalog::new(&config.catalog_path));
        Self::new(source, runtime, config.stale_after())
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Subscribe to the genre listing.
    pub fn genres(&self) -> GenreSubscription {
        let source = Arc::clone(&self.source);
        self.genres
            .fetch(GENRES_KEY, move || async move { source.genres().await })
    }

    /// Subscribe to the game listing for `query`.
    pub fn games(&self, query: GameQuery) -> GameSubscription {
        let source = Arc::clone(&self.source);
        let key = query.clone();
        self.games
            .fetch(key, move || async move { source.games(&query).await })
    }

    /// Force the genre listing to reload on its next subscription.
    pub fn refresh_genres(&self) {
        self.genres.invalidate(&GENRES_KEY);
    }
}

impl fmt::Debug for CatalogQueries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogQueries")
            .field("source", &self.source.name())
            .field("genres", &self.genres)
            .field("games", &self.games)
            .finish()
    }
}
