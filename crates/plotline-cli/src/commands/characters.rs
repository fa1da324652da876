//! Character card commands - list, create, update, delete.

use anyhow::Result;
use clap::{Args, Subcommand};
use plotline_sdk::{CharacterCard, Created, NewCharacter, UpdateCharacter};
use serde::Serialize;
use tabled::Tabled;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Character management subcommands.
#[derive(Subcommand, Debug)]
pub enum CharactersCommand {
    /// List a novel's character cards
    List(ListArgs),

    /// Add a character card to a novel
    Create(CreateArgs),

    /// Update a character card
    Update(UpdateArgs),

    /// Delete a character card
    Delete(DeleteArgs),
}

/// Arguments for listing characters.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Novel ID
    pub novel_id: i64,
}

/// Arguments for creating a character.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Novel ID
    pub novel_id: i64,

    /// Character name
    pub name: String,

    /// Character profile (appearance, motivation, secrets)
    #[arg(short, long)]
    pub profile: Option<String>,
}

/// Arguments for updating a character.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Character ID
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New profile
    #[arg(short, long)]
    pub profile: Option<String>,
}

/// Arguments for deleting a character.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Character ID
    pub id: i64,
}

/// Character row for table display.
#[derive(Debug, Tabled, Serialize)]
pub struct CharacterRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Profile")]
    pub profile: String,
}

impl From<&CharacterCard> for CharacterRow {
    fn from(character: &CharacterCard) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            profile: output::shorten(character.profile.as_deref().unwrap_or("-"), 50),
        }
    }
}

/// Execute a character subcommand.
pub async fn execute(command: CharactersCommand, base_url: &str, json: bool) -> Result<()> {
    match command {
        CharactersCommand::List(args) => list(args, base_url, json).await,
        CharactersCommand::Create(args) => create(args, base_url, json).await,
        CharactersCommand::Update(args) => update(args, base_url, json).await,
        CharactersCommand::Delete(args) => delete(args, base_url, json).await,
    }
}

async fn list(args: ListArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    if !json {
        let spinner = output::spinner("Fetching characters...");
        let result = client.characters().list(args.novel_id).await;
        spinner.finish_and_clear();

        match result {
            Ok(characters) => {
                let rows: Vec<CharacterRow> = characters.iter().map(CharacterRow::from).collect();
                output::table(&rows);
            }
            Err(e) => output::error(&format!("Failed to fetch characters: {}", e.message())),
        }
    } else {
        match client.characters().list(args.novel_id).await {
            Ok(characters) => CommandResult::success(characters).print(format)?,
            Err(e) => {
                let result: CommandResult<Vec<CharacterCard>> =
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

    let character = NewCharacter {
        name: args.name,
        profile: args.profile,
    };

    match client.characters().create(args.novel_id, &character).await {
        Ok(created) => {
            if json {
                CommandResult::success(created).print(format)?;
            } else {
                output::success(&format!("Created character {}", created.id));
            }
        }
        Err(e) => {
            let result: CommandResult<Created> =
                CommandResult::failure(format!("Failed to create character: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn update(args: UpdateArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    if args.name.is_none() && args.profile.is_none() {
        let result: CommandResult<()> = CommandResult::failure("Nothing to update");
        result.print(format)?;
        return Ok(());
    }

    let client = commands::client(base_url)?;
    let update = UpdateCharacter {
        name: args.name,
        profile: args.profile,
    };

    match client.characters().update(args.id, &update).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Updated character {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to update character: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}

async fn delete(args: DeleteArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let client = commands::client(base_url)?;

    match client.characters().delete(args.id).await {
        Ok(()) => {
            let result: CommandResult<()> =
                CommandResult::success_message(format!("Deleted character {}", args.id));
            result.print(format)?;
        }
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Failed to delete character: {}", e.message()));
            result.print(format)?;
        }
    }

    Ok(())
}
