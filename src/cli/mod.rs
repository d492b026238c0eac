use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod handlers;

pub use handlers::handle_command;

/// `nameplate` - Dish-name suggestion engine that learns your naming taste.
#[derive(Parser, Debug)]
#[command(name = "nameplate")]
#[command(version = "0.1.0")]
#[command(about = "Suggest names for a photographed dish.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest 3 names for a dish
    Suggest {
        /// Photo of the dish (jpeg, png, webp, or gif)
        image: Option<PathBuf>,

        /// Describe the dish in words instead of (or as well as) a photo
        #[arg(short, long)]
        describe: Option<String>,
    },

    /// Record which suggested name you went with
    Accept {
        /// The chosen name, verbatim
        name: String,

        /// Photo to keep alongside the history entry
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Show previously accepted names, most recent first
    History {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
