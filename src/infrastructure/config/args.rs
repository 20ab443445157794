use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::app_config::LogLevel;
use crate::domain::entities::Category;

#[derive(Debug, Parser)]
#[command(
    name = "wanderlens",
    version,
    about = "Cached travel photo lookups backed by Pexels and Unsplash",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Image cache directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Hours a cached image stays fresh.
    #[arg(long, global = true)]
    pub ttl_hours: Option<u64>,

    /// Pexels API key.
    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true, global = true)]
    pub pexels_key: Option<String>,

    /// Unsplash access key.
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true, global = true)]
    pub unsplash_key: Option<String>,

    /// Keep cached images in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one image, from cache when fresh.
    Get {
        /// Free-text image subject, e.g. "Bali turquoise beach aerial".
        query: String,

        /// Write the decoded image to this file.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the base64 payload.
        #[arg(long)]
        base64: bool,
    },

    /// Warm the cache for several queries at once.
    Prime {
        /// Queries to look up.
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Look up category thumbnails for a country.
    Category {
        /// Country name, e.g. "Indonesia".
        country: String,

        /// Category, e.g. "beaches" or "top cafes".
        #[arg(required_unless_present = "all")]
        category: Option<Category>,

        /// Prime every category.
        #[arg(long, conflicts_with = "category")]
        all: bool,
    },

    /// Print the URL of a matching photo without downloading or caching it.
    Url {
        /// Free-text image subject.
        query: String,
    },

    /// Show the cache state of a query without any network access.
    Inspect {
        /// Free-text image subject.
        query: String,
    },
}
