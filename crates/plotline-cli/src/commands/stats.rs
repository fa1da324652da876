//! Writing statistics command.

use anyhow::Result;
use clap::Args;
use plotline_sdk::WritingStats;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Execute the stats command.
pub async fn execute(_args: StatsArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching statistics...");
        let result = client.stats().await;
        spinner.finish_and_clear();

        match result {
            Ok(stats) => {
                output::section("Writing Statistics");
                output::key_value("Novels", &stats.novel_count.to_string());
                output::key_value("Chapters", &stats.chapter_count.to_string());
                output::key_value("Characters", &stats.character_count.to_string());
                output::key_value("Words", &stats.word_count.to_string());
            }
            Err(e) => {
                output::error(&format!("Failed to fetch statistics: {}", e.message()));
            }
        }
    } else {
        match client.stats().await {
            Ok(stats) => CommandResult::success(stats).print(format)?,
            Err(e) => {
                let result: CommandResult<WritingStats> = CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}
