use anyhow::{Context, Result};
use gamehub_query::Config;
use tokio::runtime::Handle;

/// Run the interactive browser.
///
/// The terminal loop blocks, so it runs on a blocking thread while catalog
/// loads keep running on the async runtime.
pub async fn run_browse(config: Config) -> Result<()> {
    let runtime = Handle::current();
    tokio::task::spawn_blocking(move || crate::tui::run_tui(&config, runtime))
        .await
        .context("Browser thread panicked")?
}
