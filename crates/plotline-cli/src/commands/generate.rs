//! Generate command - AI prose generation, streamed or in one shot.

use anyhow::Result;
use clap::Args;
use futures::StreamExt;
use plotline_sdk::{GenerateRequest, GenerationMode};
use serde::Serialize;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Prompt template (continue, rewrite, polish, outline, character,
    /// plot_twist, story_fragment, world_building, mimic)
    #[arg(short, long, default_value = "continue")]
    pub mode: GenerationMode,

    /// Text immediately before the cursor
    #[arg(long)]
    pub previous_text: Option<String>,

    /// Passage to rewrite, polish, or mimic
    #[arg(long)]
    pub target_text: Option<String>,

    /// Requested prose style
    #[arg(short, long)]
    pub style: Option<String>,

    /// Keywords to build on
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Novel whose stored chapters and characters seed the context
    #[arg(short, long)]
    pub novel_id: Option<i64>,

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

    /// Stream fragments as they are generated
    #[arg(long)]
    pub stream: bool,
}

/// Generation result for output.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub mode: String,
    pub content: String,
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;
    let request = build_request(&args);

    if args.stream && !json {
        let mut stream = match client.ai().generate_stream(request).await {
            Ok(stream) => stream,
            Err(e) => {
                output::error(&format!("Generation failed: {}", e.message()));
                return Ok(());
            }
        };

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => output::stream_text(&chunk.content),
                Err(e) => {
                    output::stream_newline();
                    output::error(&format!("Stream error: {}", e.message()));
                    break;
                }
            }
        }
        output::stream_newline();
    } else if !json {
        let spinner = output::spinner("Generating...");
        let result = client.ai().generate(request).await;
        spinner.finish_and_clear();

        match result {
            Ok(generation) => println!("{}", generation.content),
            Err(e) => output::error(&format!("Generation failed: {}", e.message())),
        }
    } else {
        match client.ai().generate(request).await {
            Ok(generation) => {
                let generate_output = GenerateOutput {
                    mode: args.mode.to_string(),
                    content: generation.content,
                };
                CommandResult::success(generate_output).print(format)?;
            }
            Err(e) => {
                let result: CommandResult<GenerateOutput> = CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}

fn build_request(args: &GenerateArgs) -> GenerateRequest {
    let mut builder = GenerateRequest::builder(args.mode);

    if let Some(ref text) = args.previous_text {
        builder = builder.previous_text(text);
    }
    if let Some(ref text) = args.target_text {
        builder = builder.target_text(text);
    }
    if let Some(ref style) = args.style {
        builder = builder.style(style);
    }
    if !args.keywords.is_empty() {
        builder = builder.keywords(args.keywords.iter().cloned());
    }
    if let Some(novel_id) = args.novel_id {
        builder = builder.novel_id(novel_id);
    }
    if let Some(ref provider) = args.provider {
        builder = builder.provider(provider);
    }
    if let Some(ref model) = args.model {
        builder = builder.model(model);
    }
    if let Some(ref api_key) = args.api_key {
        builder = builder.api_key(api_key);
    }
    if let Some(ref provider_url) = args.provider_url {
        builder = builder.base_url(provider_url);
    }

    builder.build()
}
