mod client;
mod commands;
mod table;
mod util;

use crate::{
    client::TrakClient,
    commands::{
        create_command, delete_command, list_command, show_command, update_command, CreateArgs,
        DeleteArgs, ShowArgs, UpdateArgs,
    },
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;
use url::Url;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[clap(
        long,
        default_value = "http://127.0.0.1:1337",
        use_value_delimiter = true,
        env = "TRAK_SERVER",
        help = "Comma-separated list of API endpoints"
    )]
    server: Vec<Url>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new task
    Create(CreateArgs),
    /// List all tasks
    List,
    /// Show specific tasks
    Show(ShowArgs),
    /// Update fields of a task
    Update(UpdateArgs),
    /// Delete tasks
    Delete(DeleteArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let trak = TrakClient::new(cli.server)?;

    let result = match cli.command {
        Command::Create(args) => create_command(args, trak).await,
        Command::List => list_command(trak).await,
        Command::Show(args) => show_command(args, trak).await,
        Command::Update(args) => update_command(args, trak).await,
        Command::Delete(args) => delete_command(args, trak).await,
    };

    if let Err(error) = result {
        eprintln!("{} {}", "✖".red().bold(), error);
        process::exit(1);
    }

    Ok(())
}
