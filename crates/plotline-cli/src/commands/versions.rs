//! Chapter version history commands - list, create, restore, delete.

use anyhow::Result;
use clap::{Args, Subcommand};
use plotline_sdk::{ChapterVersion, Created, NewVersion};
use serde::Serialize;
use tabled::Tabled;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Version history subcommands.
#[derive(Subcommand, Debug)]
pub enum VersionsCommand {
    /// List a chapter's saved versions
    List(ListArgs),

    /// Snapshot a chapter's current content as a new version
    Create(CreateArgs),

    /// Overwrite a chapter's content with a saved version
    Restore(RestoreArgs),

    /// Delete a saved version
    Delete(DeleteArgs),
}

/// Arguments for listing versions.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Chapter ID
    pub chapter_id: i64,
}

/// Arguments for creating a version.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Chapter ID
    pub chapter_id: i64,

    /// Note describing the snapshot
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments for restoring a version.
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Chapter ID
    pub chapter_id: i64,

    /// Version ID to restore
    pub version_id: i64,
}

/// Arguments for deleting a version.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Version ID
    pub id: i64,
}

/// Version row for table display.
#[derive(Debug, Tabled, Serialize)]
pub struct VersionRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Note")]
    pub note: String,
    #[tabled(rename = "Words")]
    pub words: usize,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&ChapterVersion> for VersionRow {
    fn from(version: &ChapterVersion) -> Self {
        Self {
            id: version.id,
            note: version.note.clone().unwrap_or_else(|| "-".to_string()),
            words: version.content.chars().count(),
            created: output::format_timestamp(version.created_at),
        }
    }
}

/// Execute a version subcommand.
pub async fn execute(command: VersionsCommand, base_url: &str, json: bool) -> Result<()> {
    match command {
        VersionsCommand::List(args) => list(args, base_url, json).await,
        VersionsCommand::Create(args) => create(args, base_url, json).await,
        VersionsCommand::Restore(args) => restore(args, base_url, json).await,
        VersionsCommand::Delete(args) => delete(args, base_url, json).await,
    }
}

async fn list(args: ListArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching versions...");
        let result = client.versions().list(args.chapter_id).await;
        spinner.finish_and_clear();

        match result {
            Ok(versions) => {
                let rows: Vec<VersionRow> = versions.iter().map(VersionRow::from).collect();
                output::table(&rows);
            }
            Err(e) => output::error(&format!("Failed to fetch versions: {}", e.message())),
        }
    } else {
        match client.versions().list(args.chapter_id).await {
            Ok(versions) => CommandResult::success(versions).print(format)?,
            Err(e) => {
                let result: CommandResult<Vec<ChapterVersion>> =
                    CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}

async fn create(args: CreateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    let version = NewVersion { note: args.note };

    match client.versions().create(args.chapter_id, &version).await {
        Ok(created) => {
            if json {
                CommandResult::success(created).print(format)?;
            } else {
                output::success(&format!("Saved version {}", created.id));
            }
        }
        Err(e) => {
            let result: CommandResult<Created> =
                CommandResult::failure(format!("Failed to save version: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn restore(args: RestoreArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client
        .versions()
        .restore(args.chapter_id, args.version_id)
        .await
    {
        Ok(()) => {
            let result: CommandResult<()> = CommandResult::success_message(format!(
                "Restored chapter {} to version {}",
                args.chapter_id, args.version_id
            ));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to restore version: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn delete(args: DeleteArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client.versions().delete(args.id).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Deleted version {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to delete version: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}
