//! Catalog sources backing the query cache.

use std::path::{Path, PathBuf};

use gamehub_core::{CatalogFile, Game, GameQuery, Genre, Page};

use crate::error::{QueryError, QueryOutcome};

/// Something that can produce genre and game listings.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable name used in log and error messages.
    fn name(&self) -> &str;

    /// All genres, in catalog order.
    async fn genres(&self) -> QueryOutcome<Page<Genre>>;

    /// Games matching `query`, filtered and ordered.
    async fn games(&self, query: &GameQuery) -> QueryOutcome<Page<Game>>;
}

/// Catalog snapshot read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> QueryOutcome<CatalogFile> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| QueryError::Source {
                source_name: self.name().to_string(),
                message: format!("cannot read {}: {}", self.path.display(), e),
            })?;
        let catalog = CatalogFile::from_json(&content)?;
        log::debug!(
            "Read {} genres and {} games from {}",
            catalog.genres.len(),
            catalog.games.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonCatalog {
    fn name(&self) -> &str {
        "JSON catalog"
    }

    async fn genres(&self) -> QueryOutcome<Page<Genre>> {
        let catalog = self.read().await?;
        Ok(Page::new(catalog.genres))
    }

    async fn games(&self, query: &GameQuery) -> QueryOutcome<Page<Game>> {
        let catalog = self.read().await?;
        Ok(Page::new(query.apply(&catalog.games)))
    }
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: CatalogFile,
}

impl StaticCatalog {
    pub fn new(catalog: CatalogFile) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static catalog"
    }

    async fn genres(&self) -> QueryOutcome<Page<Genre>> {
        Ok(Page::new(self.catalog.genres.clone()))
    }

    async fn games(&self, query: &GameQuery) -> QueryOutcome<Page<Game>> {
        Ok(Page::new(query.apply(&self.catalog.games)))
    }
}
