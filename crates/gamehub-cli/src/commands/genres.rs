use std::time::Duration;

use anyhow::{Context, Result};
use gamehub_core::view::{GenreList, GenreListView};
use gamehub_core::{DisplayAliases, GenreId};
use gamehub_query::{CatalogQueries, Config};
use tokio::runtime::Handle;

const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Print the genre list the way the browser renders it.
///
/// A catalog that fails to load prints nothing; the failure is logged.
pub async fn show_genres(config: &Config, selected: Option<i64>) -> Result<()> {
    let queries = CatalogQueries::from_config(config, Handle::current());
    let aliases = DisplayAliases::genres().extended(config.genre_aliases.clone());

    let genres = queries.genres();
    let result = tokio::time::timeout(LOAD_TIMEOUT, genres.settled(Duration::from_millis(20)))
        .await
        .with_context(|| format!("Timed out reading {}", config.catalog_path.display()))?;

    if let Some(error) = &result.error {
        log::error!("Genre list unavailable: {}", error);
    }

    let view = GenreList::new(&aliases, selected.map(GenreId::new)).render(&result);
    match view {
        GenreListView::Hidden | GenreListView::Loading => {}
        GenreListView::Entries(entries) => {
            for entry in entries {
                let marker = if entry.emphasized { "*" } else { " " };
                println!(
                    "{} {:>6}  {:<24} {}",
                    marker, entry.genre.id, entry.label, entry.image_url
                );
            }
        }
    }

    Ok(())
}
