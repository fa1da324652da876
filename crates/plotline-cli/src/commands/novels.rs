//! Novel commands - list, create, update, delete, export.

use anyhow::Result;
use clap::{Args, Subcommand};
use plotline_sdk::{NewNovel, Novel, UpdateNovel};
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Novel management subcommands.
#[derive(Subcommand, Debug)]
pub enum NovelsCommand {
    /// List all novels
    List(ListArgs),

    /// Create a novel
    Create(CreateArgs),

    /// Update a novel's metadata
    Update(UpdateArgs),

    /// Delete a novel and everything in it
    Delete(DeleteArgs),

    /// Export a novel's manuscript as plain text
    Export(ExportArgs),
}

/// Arguments for listing novels.
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for creating a novel.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Novel title
    pub title: String,

    /// Synopsis
    #[arg(short, long)]
    pub summary: Option<String>,

    /// Comma-separated tags
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for updating a novel.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Novel ID
    pub id: i64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New synopsis
    #[arg(short, long)]
    pub summary: Option<String>,

    /// New comma-separated tags
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for deleting a novel.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Novel ID
    pub id: i64,
}

/// Arguments for exporting a novel.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Novel ID
    pub id: i64,

    /// Write the manuscript to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Novel row for table display.
#[derive(Debug, Tabled, Serialize)]
pub struct NovelRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Summary")]
    pub summary: String,
    #[tabled(rename = "Updated")]
    pub updated: String,
}

impl From<&Novel> for NovelRow {
    fn from(novel: &Novel) -> Self {
        Self {
            id: novel.id,
            title: novel.title.clone(),
            summary: output::shorten(novel.summary.as_deref().unwrap_or("-"), 40),
            updated: output::format_timestamp(novel.updated_at),
        }
    }
}

/// Execute a novel subcommand.
pub async fn execute(command: NovelsCommand, base_url: &str, json: bool) -> Result<()> {
    match command {
        NovelsCommand::List(args) => list(args, base_url, json).await,
        NovelsCommand::Create(args) => create(args, base_url, json).await,
        NovelsCommand::Update(args) => update(args, base_url, json).await,
        NovelsCommand::Delete(args) => delete(args, base_url, json).await,
        NovelsCommand::Export(args) => export(args, base_url, json).await,
    }
}

async fn list(_args: ListArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching novels...");
        let result = client.novels().list().await;
        spinner.finish_and_clear();

        match result {
            Ok(novels) => {
                let rows: Vec<NovelRow> = novels.iter().map(NovelRow::from).collect();
                output::table(&rows);
            }
            Err(e) => output::error(&format!("Failed to fetch novels: {}", e.message())),
        }
    } else {
        match client.novels().list().await {
            Ok(novels) => CommandResult::success(novels).print(format)?,
            Err(e) => {
                let result: CommandResult<Vec<Novel>> = CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}

async fn create(args: CreateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    let new_novel = NewNovel {
        title: args.title,
        summary: args.summary,
        tags: args.tags,
    };

    match client.novels().create(&new_novel).await {
        Ok(novel) => {
            if json {
                CommandResult::success(novel).print(format)?;
            } else {
                output::success(&format!("Created novel {} ({})", novel.title, novel.id));
            }
        }
        Err(e) => {
            let result: CommandResult<Novel> =
                CommandResult::failure(format!("Failed to create novel: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn update(args: UpdateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    if args.title.is_none() && args.summary.is_none() && args.tags.is_none() {
        let result: CommandResult<()> = CommandResult::failure("Nothing to update");
        result.print(format)?;
        return Ok(());
    }

    let client = commands::client(base_url)?;
    let update = UpdateNovel {
        title: args.title,
        summary: args.summary,
        tags: args.tags,
    };

    match client.novels().update(args.id, &update).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Updated novel {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to update novel: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn delete(args: DeleteArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client.novels().delete(args.id).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Deleted novel {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to delete novel: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn export(args: ExportArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    let spinner = if json {
        None
    } else {
        Some(output::spinner("Exporting manuscript..."))
    };
    let result = client.novels().export_text(args.id).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(manuscript) => match args.output {
            Some(path) => {
                std::fs::write(&path, manuscript)?;
                let result: CommandResult<()> =
                    CommandResult::success_message(format!("Exported to {}", path.display()));
                result.print(format)?;
            }
            None => {
                if json {
                    CommandResult::success(manuscript).print(format)?;
                } else {
                    println!("{}", manuscript);
                }
            }
        },
        Err(e) => {
            let result: CommandResult<String> =
                CommandResult::failure(format!("Failed to export novel: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}
