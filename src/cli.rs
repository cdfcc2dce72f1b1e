//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::borrow::Cow;
use std::path::PathBuf;

/// Environment variable naming the dataset file when `--data` is not given.
pub const DATA_ENV_VAR: &str = "AIRPORT_LOOKUP_DATA";

#[derive(Debug, Parser)]
#[command(
    name = "airport-lookup",
    version,
    about = "Type-ahead lookup of airports and metropolitan areas"
)]
pub struct Cli {
    /// Dataset file: a JSON array of location records
    #[arg(short = 'd', long = "data", global = true, env = DATA_ENV_VAR)]
    pub data: Option<String>,

    /// Lookup tuning file (TOML)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve lookups as MCP tools over stdio (default)
    Serve,

    /// Run a ranked lookup with metropolitan expansion
    Lookup {
        query: String,
        /// Re-sort for display: metropolitan areas, then weight, then airport name
        #[arg(long)]
        display_order: bool,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every location matching the prefix on any field
    Aggregate {
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Dataset to load: `--data`/env var, else the bundled sample dataset.
    pub fn dataset_path(&self) -> PathBuf {
        self.data
            .as_deref()
            .map_or_else(default_dataset_path, |path| PathBuf::from(expand_tilde(path).as_ref()))
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .as_deref()
            .map(|path| PathBuf::from(expand_tilde(path).as_ref()))
    }
}

/// The sample dataset shipped in `data/` next to the manifest.
pub fn default_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("airports.json")
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
