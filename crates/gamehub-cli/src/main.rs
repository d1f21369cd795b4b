use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use gamehub_query::{logging, Config};

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "gamehub", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog snapshot (default: ~/.local/share/gamehub/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Browse the catalog interactively
    ///
    /// Opens a terminal browser with three parts:
    ///
    /// - A genre list on the left; Enter filters games by the genre under
    ///   the cursor, which is then shown in bold. `a` shows all genres again.
    /// - A game list on the right for the current genre and sort order.
    /// - A sort menu opened with `o`, listing Relevance, Date added, Name,
    ///   Release date, Popularity and Average rating.
    ///
    /// Listings are cached; `r` reloads the genre list from the catalog.
    Browse,
    /// Print the genre list as the browser shows it
    Genres {
        /// Genre id to mark as selected
        #[arg(long)]
        selected: Option<i64>,
    },
    /// Print the available sort orders
    Sorts {
        /// Active sort value to resolve (e.g. "-rating")
        #[arg(long, default_value = "")]
        active: String,
    },
    /// Print the cropped preview URL for an image URL
    Crop {
        /// Raw image URL; omit for the placeholder
        url: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example configuration file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_catalog_path(cli.catalog)?;

    // The browser owns the terminal; log output would corrupt the screen.
    if !matches!(cli.command, Commands::Browse) {
        logging::init(config.level_filter());
    }

    match cli.command {
        Commands::Browse => {
            commands::run_browse(config).await?;
        }
        Commands::Genres { selected } => {
            commands::show_genres(&config, selected).await?;
        }
        Commands::Sorts { active } => {
            commands::show_sorts(&active);
        }
        Commands::Crop { url } => {
            commands::show_crop(url.as_deref());
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
