use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for gamehub.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (GAMEHUB_* prefix)
/// 3. Config file (~/.config/gamehub/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON catalog snapshot.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.json
    /// - ENV: GAMEHUB_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.json"
    /// - Default: ~/.local/share/gamehub/catalog.json
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Seconds before cached query data is considered stale.
    ///
    /// Environment values arrive as strings, so both `300` and `"300"` are
    /// accepted.
    #[serde(
        default = "default_stale_after_secs",
        deserialize_with = "deserialize_secs"
    )]
    pub stale_after_secs: u64,

    /// Log level for commands that write to the terminal (`error` .. `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extra genre display aliases, merged over the built-in ones.
    #[serde(default)]
    pub genre_aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            stale_after_secs: default_stale_after_secs(),
            log_level: default_log_level(),
            genre_aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/gamehub/config.toml
    /// Reads environment variables with GAMEHUB_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("gamehub");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, overriding the catalog path when one is given.
    ///
    /// This is used when the --catalog CLI flag is provided.
    pub fn load_with_catalog_path(catalog_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(path) = catalog_path {
            config.catalog_path = path;
        }
        Ok(config)
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    /// Parsed log level; unknown names fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

fn default_stale_after_secs() -> u64 {
    300
}

fn deserialize_secs<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Secs {
        Number(u64),
        Text(String),
    }

    match Secs::deserialize(deserializer)? {
        Secs::Number(secs) => Ok(secs),
        Secs::Text(text) => text.trim().parse().map_err(|e| {
            serde::de::Error::custom(format!("invalid stale_after_secs {text:?}: {e}"))
        }),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Get the default catalog path.
///
/// Returns: ~/.local/share/gamehub/catalog.json (or platform equivalent)
fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamehub")
        .join("catalog.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/gamehub/config.toml
/// - macOS: ~/Library/Application Support/gamehub/config.toml
/// - Windows: %APPDATA%\gamehub\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamehub")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# gamehub Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (GAMEHUB_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the JSON catalog snapshot
#
# The file holds {"genres": [...], "games": [...]} in the provider's format.
#
# Can also be set via:
# - CLI: gamehub --catalog /custom/catalog.json browse
# - Environment: GAMEHUB_CATALOG_PATH=/custom/catalog.json
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/catalog.json"

# Seconds before cached genre and game listings are reloaded
stale_after_secs = 300

# Log level: error, warn, info, debug, trace
log_level = "info"

# Extra display names for genres, merged over the built-in ones
# ("Massively Multiplayer" is always shown as "Multiplayer" unless overridden)
[genre_aliases]
#"Role Playing Games" = "RPG"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
