use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render a feed of videos and articles with Popular/New badges
#[derive(Parser)]
#[command(name = "mediafeed")]
#[command(version, about = "Render a media feed to HTML", long_about = None)]
pub struct Cli {
    /// Config file (defaults to config.toml in the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the feed as an HTML page or as a JSON node tree
    Render {
        /// Feed file (.json or .toml); the built-in feed is used otherwise
        #[arg(short, long, value_name = "PATH")]
        feed: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Print one line per item with its badge
    List {
        #[arg(short, long, value_name = "PATH")]
        feed: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Print the badge for each view count
    Classify {
        #[arg(required = true)]
        views: Vec<u64>,
    },
    /// Print the feed in feed-file JSON form
    Export {
        #[arg(short, long, value_name = "PATH")]
        feed: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}
