//! Prompt CLI commands.

use clap::{Args, Parser, Subcommand};

/// Prompt commands.
#[derive(Debug, Parser)]
pub struct PromptCommand {
    #[command(subcommand)]
    pub action: PromptAction,
}

/// Arguments shared by every prompt action.
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Product type, e.g. "PC case".
    #[arg(long)]
    pub product_type: String,
    /// Free-text prompt.
    pub prompt: String,
}

/// Available prompt actions.
#[derive(Debug, Subcommand)]
pub enum PromptAction {
    /// Refine a prompt and extract keywords.
    Refine(PromptArgs),
    /// Generate images from a prompt.
    Image(PromptArgs),
}
