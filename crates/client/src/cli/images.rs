//! Image CLI commands.

use clap::{Parser, Subcommand};

/// Saved image commands.
#[derive(Debug, Parser)]
pub struct ImagesCommand {
    #[command(subcommand)]
    pub action: ImagesAction,
}

/// Available image actions.
#[derive(Debug, Subcommand)]
pub enum ImagesAction {
    /// List all saved images.
    List,
    /// Save an image URL.
    Save {
        /// Image URL.
        image_url: String,
        /// Display label. Derived from the URL when omitted.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an image URL.
    Delete {
        /// Image URL.
        image_url: String,
    },
}
