//! Health check command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the health command.
#[derive(Args, Debug)]
pub struct HealthArgs {}

/// Health check response for output.
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub status: String,
    pub response_time_ms: u64,
}

/// Execute the health command.
pub async fn execute(_args: HealthArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Checking backend...");

        let start = std::time::Instant::now();
        let result = client.health().await;
        let elapsed = start.elapsed();

        spinner.finish_and_clear();

        match result {
            Ok(health) if health.is_ok() => {
                output::success("Backend is healthy");
                output::key_value("URL", base_url);
                output::key_value("Response Time", &format!("{}ms", elapsed.as_millis()));
            }
            Ok(health) => {
                output::error(&format!("Backend reported status: {}", health.code));
            }
            Err(e) => {
                output::error(&format!("Backend unreachable: {}", e.message()));
            }
        }
    } else {
        let start = std::time::Instant::now();
        let result = client.health().await;
        let elapsed = start.elapsed();

        match result {
            Ok(health) => {
                let health_output = HealthOutput {
                    status: if health.is_ok() {
                        "healthy".to_string()
                    } else {
                        "unhealthy".to_string()
                    },
                    response_time_ms: elapsed.as_millis() as u64,
                };
                CommandResult::success(health_output).print(format)?;
            }
            Err(e) => {
                let result: CommandResult<HealthOutput> =
                    CommandResult::failure(format!("Backend unreachable: {}", e.message()));
                result.print(format)?;
            }
        }
    }

    Ok(())
}
