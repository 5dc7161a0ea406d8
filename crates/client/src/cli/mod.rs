//! CLI command definitions.

pub mod feedback;
pub mod health;
pub mod images;
pub mod prompt;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the caseforge API.
#[derive(Debug, Parser)]
#[command(name = "caseforge-client")]
#[command(about = "CLI client for the caseforge API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CASEFORGE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Saved image management.
    Images(images::ImagesCommand),
    /// Prompt refinement and image generation.
    Prompt(prompt::PromptCommand),
    /// Image feedback.
    Feedback(feedback::FeedbackCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_base_url_flag_reaches_client() {
        let cli = Cli::try_parse_from([
            "caseforge-client",
            "--base-url",
            "http://caseforge.internal:8000/",
            "health",
            "live",
        ])
        .unwrap();

        let client = crate::CaseforgeClient::new(&cli.base_url);

        assert_eq!(client.base_url(), "http://caseforge.internal:8000");
    }

    #[test]
    fn test_parses_feedback_submit_with_tags() {
        let cli = Cli::try_parse_from([
            "caseforge-client",
            "--format",
            "json",
            "feedback",
            "submit",
            "--image-url",
            "https://b/x.png",
            "--rating",
            "4",
            "--tag",
            "rgb",
            "--tag",
            "mesh",
        ])
        .unwrap();

        match cli.command {
            Commands::Feedback(cmd) => match cmd.action {
                feedback::FeedbackAction::Submit { rating, tag, .. } => {
                    assert_eq!(rating, 4);
                    assert_eq!(tag, vec!["rgb".to_string(), "mesh".to_string()]);
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
