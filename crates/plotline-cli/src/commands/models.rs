//! Models command - list the models the backend's provider exposes.

use anyhow::Result;
use clap::Args;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the models command.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Filter models by name pattern
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Execute the models command.
pub async fn execute(args: ModelsArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching models...");
        let result = client.ai().models().await;
        spinner.finish_and_clear();

        match result {
            Ok(mut models) => {
                if let Some(ref filter) = args.filter {
                    models.retain(|m| m.to_lowercase().contains(&filter.to_lowercase()));
                }
                models.sort();

                if models.is_empty() {
                    output::warning("No models found");
                } else {
                    output::success(&format!("Found {} models", models.len()));
                    for model in &models {
                        println!("  {}", model);
                    }
                }
            }
            Err(e) => {
                output::error(&format!("Failed to fetch models: {}", e.message()));
            }
        }
    } else {
        match client.ai().models().await {
            Ok(mut models) => {
                if let Some(ref filter) = args.filter {
                    models.retain(|m| m.to_lowercase().contains(&filter.to_lowercase()));
                }
                CommandResult::success(models).print(format)?;
            }
            Err(e) => {
                let result: CommandResult<Vec<String>> = CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}
