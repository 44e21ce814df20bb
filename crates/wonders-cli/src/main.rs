//! `field-of-wonders`: run the game server or connect to one as a player.

mod cli;
mod config;
mod logging;

use std::sync::Arc;

use clap::Parser;
use wonders_game::{run_server, Wordlist};

use cli::{Cli, ClientArgs, Command, ServerArgs};
use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    match cli.command {
        Command::Server(args) => serve(&args).await,
        Command::Client(args) => play(&args).await,
    }
}

async fn serve(args: &ServerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::resolve(args)?;
    let wordlist = match &config.wordlist {
        Some(path) => Wordlist::load(path)?,
        None => Wordlist::builtin()?,
    };

    run_server(&config.addr, Arc::new(wordlist), config.game).await?;
    Ok(())
}

async fn play(args: &ClientArgs) -> Result<(), Box<dyn std::error::Error>> {
    let end = wonders::run_client(args.addr.as_str()).await?;
    tracing::info!(reason = ?end, "disconnected from server");
    Ok(())
}
