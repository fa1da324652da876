//! Chapter commands - list, create, show, update, delete.

use anyhow::Result;
use clap::{Args, Subcommand};
use plotline_sdk::{Chapter, ChapterSummary, Created, NewChapter, UpdateChapter};
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Chapter management subcommands.
#[derive(Subcommand, Debug)]
pub enum ChaptersCommand {
    /// List a novel's chapters in manuscript order
    List(ListArgs),

    /// Add a chapter at the end of a novel
    Create(CreateArgs),

    /// Print a chapter with its content
    Show(ShowArgs),

    /// Update a chapter's title or content
    Update(UpdateArgs),

    /// Delete a chapter
    Delete(DeleteArgs),
}

/// Arguments for listing chapters.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Novel ID
    pub novel_id: i64,
}

/// Arguments for creating a chapter.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Novel ID
    pub novel_id: i64,

    /// Chapter title
    pub title: String,
}

/// Arguments for showing a chapter.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Chapter ID
    pub id: i64,
}

/// Arguments for updating a chapter.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Chapter ID
    pub id: i64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,

    /// Read the new content from this file
    #[arg(long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,
}

/// Arguments for deleting a chapter.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Chapter ID
    pub id: i64,
}

/// Chapter row for table display.
#[derive(Debug, Tabled, Serialize)]
pub struct ChapterRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "#")]
    pub order: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Updated")]
    pub updated: String,
}

impl From<&ChapterSummary> for ChapterRow {
    fn from(chapter: &ChapterSummary) -> Self {
        Self {
            id: chapter.id,
            order: chapter.order_index,
            title: chapter.title.clone(),
            updated: output::format_timestamp(chapter.updated_at),
        }
    }
}

/// Execute a chapter subcommand.
pub async fn execute(command: ChaptersCommand, base_url: &str, json: bool) -> Result<()> {
    match command {
        ChaptersCommand::List(args) => list(args, base_url, json).await,
        ChaptersCommand::Create(args) => create(args, base_url, json).await,
        ChaptersCommand::Show(args) => show(args, base_url, json).await,
        ChaptersCommand::Update(args) => update(args, base_url, json).await,
        ChaptersCommand::Delete(args) => delete(args, base_url, json).await,
    }
}

async fn list(args: ListArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching chapters...");
        let result = client.chapters().list(args.novel_id).await;
        spinner.finish_and_clear();

        match result {
            Ok(chapters) => {
                let rows: Vec<ChapterRow> = chapters.iter().map(ChapterRow::from).collect();
                output::table(&rows);
            }
            Err(e) => output::error(&format!("Failed to fetch chapters: {}", e.message())),
        }
    } else {
        match client.chapters().list(args.novel_id).await {
            Ok(chapters) => CommandResult::success(chapters).print(format)?,
            Err(e) => {
                let result: CommandResult<Vec<ChapterSummary>> =
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

    match client
        .chapters()
        .create(args.novel_id, &NewChapter::new(args.title))
        .await
    {
        Ok(created) => {
            if json {
                CommandResult::success(created).print(format)?;
            } else {
                output::success(&format!("Created chapter {}", created.id));
            }
        }
        Err(e) => {
            let result: CommandResult<Created> =
                CommandResult::failure(format!("Failed to create chapter: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn show(args: ShowArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client.chapters().get(args.id).await {
        Ok(chapter) => {
            if json {
                CommandResult::success(chapter).print(format)?;
            } else {
                output::section(&chapter.title);
                println!("{}", chapter.content);
            }
        }
        Err(e) => {
            let result: CommandResult<Chapter> =
                CommandResult::failure(format!("Failed to fetch chapter: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn update(args: UpdateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    let content = match args.content_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => args.content,
    };

    if args.title.is_none() && content.is_none() {
        let result: CommandResult<()> = CommandResult::failure("Nothing to update");
        result.print(format)?;
        return Ok(());
    }

    let client = commands::client(base_url)?;
    let update = UpdateChapter {
        title: args.title,
        content,
    };

    match client.chapters().update(args.id, &update).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Updated chapter {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to update chapter: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn delete(args: DeleteArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client.chapters().delete(args.id).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Deleted chapter {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to delete chapter: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}
