//! Feedback CLI commands.

use clap::{Parser, Subcommand};

/// Feedback commands.
#[derive(Debug, Parser)]
pub struct FeedbackCommand {
    #[command(subcommand)]
    pub action: FeedbackAction,
}

/// Available feedback actions.
#[derive(Debug, Subcommand)]
pub enum FeedbackAction {
    /// Submit feedback for an image.
    Submit {
        /// Image URL.
        #[arg(long)]
        image_url: String,
        /// Rating.
        #[arg(long, allow_negative_numbers = true)]
        rating: i32,
        /// Tag (repeatable).
        #[arg(long)]
        tag: Vec<String>,
        /// Free-text comments.
        #[arg(long)]
        comments: Option<String>,
    },
    /// List feedback for an image.
    List {
        /// Image URL.
        image_url: String,
    },
}
