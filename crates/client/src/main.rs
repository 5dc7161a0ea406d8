//! caseforge-client CLI entry point.

use caseforge_client::cli::{Cli, Commands, OutputFormat};
use caseforge_client::client::CaseforgeClient;
use caseforge_client::output::{format_output, pretty};
use caseforge_core::feedback::FeedbackRequest;
use caseforge_core::inference::PromptRequest;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = CaseforgeClient::new(&cli.base_url);

    match cli.command {
        Commands::Images(images_cmd) => {
            use caseforge_client::cli::images::ImagesAction;
            match images_cmd.action {
                ImagesAction::List => {
                    let images = client.list_images().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&images, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_images(&images)),
                    }
                }
                ImagesAction::Save {
                    image_url,
                    description,
                } => {
                    let image = client.save_favorite(&image_url, description).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&image, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Saved:\n{}", pretty::format_image(&image))
                        }
                    }
                }
                ImagesAction::Delete { image_url } => {
                    let result = client.delete_favorite(&image_url).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&result, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Deleted {} row(s) for {}", result.deleted, image_url);
                            }
                        }
                    }
                }
            }
        }
        Commands::Prompt(prompt_cmd) => {
            use caseforge_client::cli::prompt::PromptAction;
            match prompt_cmd.action {
                PromptAction::Refine(args) => {
                    let refined = client
                        .refine_prompt(&PromptRequest {
                            product_type: args.product_type,
                            prompt: args.prompt,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&refined, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_refined(&refined)),
                    }
                }
                PromptAction::Image(args) => {
                    if !cli.quiet {
                        eprintln!("Generating images for {}...", args.product_type);
                    }
                    let generated = client
                        .generate_image(&PromptRequest {
                            product_type: args.product_type,
                            prompt: args.prompt,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&generated, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_urls(&generated.image_urls))
                        }
                    }
                }
            }
        }
        Commands::Feedback(feedback_cmd) => {
            use caseforge_client::cli::feedback::FeedbackAction;
            match feedback_cmd.action {
                FeedbackAction::Submit {
                    image_url,
                    rating,
                    tag,
                    comments,
                } => {
                    let status = client
                        .submit_feedback(&FeedbackRequest {
                            image_url,
                            rating,
                            tags: (!tag.is_empty()).then_some(tag),
                            comments,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&status, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("{}", status.message);
                            }
                        }
                    }
                }
                FeedbackAction::List { image_url } => {
                    let records = client.list_feedback(&image_url).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&records, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_feedback_list(&image_url, &records))
                        }
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use caseforge_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("Server is live at {}", client.base_url());
                    }
                }
                HealthAction::Ready => {
                    let readiness = client.readyz().await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&readiness, cli.format))
                        }
                        OutputFormat::Pretty => match &readiness.error {
                            None => println!("Ready"),
                            Some(error) => println!("Not ready: {}", error),
                        },
                    }
                    if !readiness.healthy {
                        std::process::exit(1);
                    }
                }
            }
        }
    }

    Ok(())
}
