use anyhow::Result;
use gamehub_query::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  catalog_path: {}", config.catalog_path.display());
    println!("  stale_after_secs: {}", config.stale_after_secs);
    println!("  log_level: {}", config.log_level);
    if config.genre_aliases.is_empty() {
        println!("  genre_aliases: <none>");
    } else {
        println!("  genre_aliases:");
        for (name, label) in &config.genre_aliases {
            println!("    {} -> {}", name, label);
        }
    }

    println!("\nPriority: CLI args > ENV vars (GAMEHUB_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure gamehub.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
