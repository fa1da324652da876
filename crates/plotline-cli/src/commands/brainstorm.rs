//! Brainstorm command - keyword-driven idea generation.

use anyhow::Result;
use clap::Args;
use plotline_sdk::{BrainstormRequest, GenerationMode};
use serde::Serialize;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the brainstorm command.
#[derive(Args, Debug)]
pub struct BrainstormArgs {
    /// Keywords to build on
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Brainstorm template (outline, character, plot_twist, world_building, ...)
    #[arg(short = 't', long = "type", default_value = "outline")]
    pub kind: GenerationMode,

    /// AI provider override
    #[arg(long)]
    pub provider: Option<String>,

    /// Model override
    #[arg(short = 'M', long)]
    pub model: Option<String>,

    /// Provider API key
    #[arg(long, env = "PLOTLINE_AI_KEY")]
    pub api_key: Option<String>,

    /// Provider endpoint override
    #[arg(long)]
    pub provider_url: Option<String>,
}

/// Brainstorm result for output.
#[derive(Debug, Serialize)]
pub struct BrainstormOutput {
    pub kind: String,
    pub keywords: Vec<String>,
    pub content: String,
}

/// Execute the brainstorm command.
pub async fn execute(args: BrainstormArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    let mut request = BrainstormRequest::new(args.kind, args.keywords.iter().cloned());
    request.provider = args.provider.clone();
    request.model = args.model.clone();
    request.api_key = args.api_key.clone();
    request.base_url = args.provider_url.clone();

    if !json {
        let spinner = output::spinner("Brainstorming...");
        let result = client.ai().brainstorm(&request).await;
        spinner.finish_and_clear();

        match result {
            Ok(generation) => println!("{}", generation.content),
            Err(e) => output::error(&format!("Brainstorming failed: {}", e.message())),
        }
    } else {
        match client.ai().brainstorm(&request).await {
            Ok(generation) => {
                let brainstorm_output = BrainstormOutput {
                    kind: args.kind.to_string(),
                    keywords: args.keywords,
                    content: generation.content,
                };
                CommandResult::success(brainstorm_output).print(format)?;
            }
            Err(e) => {
                let result: CommandResult<BrainstormOutput> = CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}
