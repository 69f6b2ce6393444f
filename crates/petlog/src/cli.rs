use std::path::PathBuf;

use clap::{Parser, Subcommand};
use petlog_core::{Category, OutputFormat, Reaction};

#[derive(Parser)]
#[command(name = "petlog")]
#[command(about = "Pet food log: track which foods Kodee and Eda will actually eat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Data directory override (defaults to the platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new food item
    Add {
        /// Food name
        name: String,

        /// Brand
        #[arg(short, long, default_value = "")]
        brand: String,

        /// Category (wet, puree, treat)
        #[arg(short, long, value_enum, default_value = "wet")]
        category: Category,

        /// Kodee's reaction (like, neutral, dislike)
        #[arg(long, value_enum, default_value = "like")]
        kodee: Reaction,

        /// Eda's reaction (like, neutral, dislike)
        #[arg(long, value_enum, default_value = "like")]
        eda: Reaction,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Image file to embed as a data URL
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Edit an existing record; only supplied fields change
    Edit {
        /// Record ID (ULID or unique prefix)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long, value_enum)]
        category: Option<Category>,

        #[arg(long, value_enum)]
        kodee: Option<Reaction>,

        #[arg(long, value_enum)]
        eda: Option<Reaction>,

        #[arg(long)]
        notes: Option<String>,

        /// Replace the embedded image
        #[arg(long)]
        image: Option<PathBuf>,

        /// Remove the embedded image
        #[arg(long, conflicts_with = "image")]
        clear_image: bool,
    },

    /// Browse records (newest first)
    List {
        /// Case-insensitive substring match on name or brand
        #[arg(short, long, default_value = "")]
        search: String,

        /// Restrict to one category
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },

    /// Show one record in full
    Show {
        /// Record ID (ULID or unique prefix)
        id: String,
    },

    /// Show or set the log title
    Title {
        /// New title; omit to print the current one
        title: Option<String>,
    },

    /// Reaction and category statistics
    Stats,

    /// Analyze a recorded food with the configured analysis backend
    Analyze {
        /// Record ID (ULID or unique prefix)
        id: String,
    },
}
