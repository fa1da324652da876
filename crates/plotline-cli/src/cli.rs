//! CLI argument definitions using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Plotline - an AI-assisted novel-writing workbench
#[derive(Parser, Debug)]
#[command(name = "plotline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend server URL
    #[arg(short = 'u', long, env = "PLOTLINE_API_BASE", default_value = "http://127.0.0.1:5000", global = true)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check backend health
    Health(commands::health::HealthArgs),

    /// Show aggregate writing statistics
    Stats(commands::stats::StatsArgs),

    /// Create an account
    Register(commands::auth::RegisterArgs),

    /// Log in and print a session token
    Login(commands::auth::LoginArgs),

    /// Generate prose with AI
    Generate(commands::generate::GenerateArgs),

    /// Brainstorm outlines, characters, twists, or settings
    Brainstorm(commands::brainstorm::BrainstormArgs),

    /// List available AI models
    Models(commands::models::ModelsArgs),

    /// Manage novels
    #[command(subcommand)]
    Novels(commands::novels::NovelsCommand),

    /// Manage chapters
    #[command(subcommand)]
    Chapters(commands::chapters::ChaptersCommand),

    /// Manage character cards
    #[command(subcommand)]
    Characters(commands::characters::CharactersCommand),

    /// Manage inspiration notes
    #[command(subcommand)]
    Ideas(commands::ideas::IdeasCommand),

    /// Manage chapter version history
    #[command(subcommand)]
    Versions(commands::versions::VersionsCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Health(args) => commands::health::execute(args, &self.url, self.json).await,
            Commands::Stats(args) => commands::stats::execute(args, &self.url, self.json).await,
            Commands::Register(args) => commands::auth::register(args, &self.url, self.json).await,
            Commands::Login(args) => commands::auth::login(args, &self.url, self.json).await,
            Commands::Generate(args) => commands::generate::execute(args, &self.url, self.json).await,
            Commands::Brainstorm(args) => commands::brainstorm::execute(args, &self.url, self.json).await,
            Commands::Models(args) => commands::models::execute(args, &self.url, self.json).await,
            Commands::Novels(command) => commands::novels::execute(command, &self.url, self.json).await,
            Commands::Chapters(command) => commands::chapters::execute(command, &self.url, self.json).await,
            Commands::Characters(command) => commands::characters::execute(command, &self.url, self.json).await,
            Commands::Ideas(command) => commands::ideas::execute(command, &self.url, self.json).await,
            Commands::Versions(command) => commands::versions::execute(command, &self.url, self.json).await,
        }
    }
}
