//! Account commands - register and login.

use anyhow::Result;
use clap::Args;
use plotline_sdk::{AuthSession, Credentials};
use serde::Serialize;

use crate::commands;
use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the register command.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(short = 'U', long)]
    pub username: String,

    /// Password for the new account
    #[arg(short, long)]
    pub password: String,
}

/// Arguments for the login command.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username
    #[arg(short = 'U', long)]
    pub username: String,

    /// Password
    #[arg(short, long)]
    pub password: String,
}

/// Session details for output.
#[derive(Debug, Serialize)]
pub struct SessionOutput {
    pub user_id: i64,
    pub username: String,
    pub token: String,
}

impl From<AuthSession> for SessionOutput {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user.id,
            username: session.user.username,
            token: session.token,
        }
    }
}

/// Execute the register command.
pub async fn register(args: RegisterArgs, base_url: &str, json: bool) -> Result<()> {
    let client = commands::client(base_url)?;
    let credentials = Credentials::new(args.username, args.password);

    let result = client.auth().register(&credentials).await;
    print_session("Account created", result, json)
}

/// Execute the login command.
pub async fn login(args: LoginArgs, base_url: &str, json: bool) -> Result<()> {
    let client = commands::client(base_url)?;
    let credentials = Credentials::new(args.username, args.password);

    let result = client.auth().login(&credentials).await;
    print_session("Logged in", result, json)
}

fn print_session(
    headline: &str,
    result: plotline_sdk::Result<AuthSession>,
    json: bool,
) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    match result {
        Ok(session) => {
            if json {
                CommandResult::success(SessionOutput::from(session)).print(format)?;
            } else {
                output::success(headline);
                output::key_value("User", &session.user.username);
                output::key_value("Token", &session.token);
            }
        }
        Err(e) => {
            if json {
                let result: CommandResult<SessionOutput> = CommandResult::failure(e.message());
                result.print(format)?;
            } else {
                output::error(&e.message());
            }
        }
    }

    Ok(())
}
