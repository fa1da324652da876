//! Inspiration note commands - list, create, delete.

use anyhow::Result;
use clap::{Args, Subcommand};
use plotline_sdk::{Created, Idea, NewIdea};
use serde::Serialize;
use tabled::Tabled;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Idea management subcommands.
#[derive(Subcommand, Debug)]
pub enum IdeasCommand {
    /// List a novel's saved ideas
    List(ListArgs),

    /// Save an idea against a novel
    Create(CreateArgs),

    /// Delete an idea
    Delete(DeleteArgs),
}

/// Arguments for listing ideas.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Novel ID
    pub novel_id: i64,
}

/// Arguments for creating an idea.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Novel ID
    pub novel_id: i64,

    /// The idea itself
    pub content: String,

    /// Idea kind (general, outline, character, plot_twist, ...)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
}

/// Arguments for deleting an idea.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Idea ID
    pub id: i64,
}

/// Idea row for table display.
#[derive(Debug, Tabled, Serialize)]
pub struct IdeaRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Content")]
    pub content: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&Idea> for IdeaRow {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id,
            kind: idea.idea_type.clone().unwrap_or_else(|| "general".to_string()),
            content: output::shorten(&idea.content, 60),
            created: output::format_timestamp(idea.created_at),
        }
    }
}

/// Execute an idea subcommand.
pub async fn execute(command: IdeasCommand, base_url: &str, json: bool) -> Result<()> {
    match command {
        IdeasCommand::List(args) => list(args, base_url, json).await,
        IdeasCommand::Create(args) => create(args, base_url, json).await,
        IdeasCommand::Delete(args) => delete(args, base_url, json).await,
    }
}

async fn list(args: ListArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching ideas...");
        let result = client.ideas().list(args.novel_id).await;
        spinner.finish_and_clear();

        match result {
            Ok(ideas) => {
                let rows: Vec<IdeaRow> = ideas.iter().map(IdeaRow::from).collect();
                output::table(&rows);
            }
            Err(e) => output::error(&format!("Failed to fetch ideas: {}", e.message())),
        }
    } else {
        match client.ideas().list(args.novel_id).await {
            Ok(ideas) => CommandResult::success(ideas).print(format)?,
            Err(e) => {
                let result: CommandResult<Vec<Idea>> = CommandResult::failure(e.message());
                result.print(format)?;
            }
        }
    }

    Ok(())
}

async fn create(args: CreateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    let idea = NewIdea {
        content: args.content,
        idea_type: args.kind,
    };

    match client.ideas().create(args.novel_id, &idea).await {
        Ok(created) => {
            if json {
                CommandResult::success(created).print(format)?;
            } else {
                output::success(&format!("Saved idea {}", created.id));
            }
        }
        Err(e) => {
            let result: CommandResult<Created> =
                CommandResult::failure(format!("Failed to save idea: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn delete(args: DeleteArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client.ideas().delete(args.id).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Deleted idea {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to delete idea: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}
