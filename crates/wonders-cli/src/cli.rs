//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "field-of-wonders")]
#[command(about = "The \"Field of Wonders\"-inspired server-based game of guessing words")]
pub struct Cli {
    /// Only log warnings and errors (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Host games for any number of clients
    Server(ServerArgs),
    /// Connect to a server and play
    Client(ClientArgs),
}

#[derive(Debug, Args)]
pub struct ServerArgs {
    /// Address to listen on [default: 127.0.0.1:8080]
    #[arg(short, long)]
    pub addr: Option<String>,

    /// Wrong guesses allowed per round [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: Option<u32>,

    /// Word list file, one word per line
    #[arg(short, long)]
    pub wordlist: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Server address to connect to
    #[arg(short, long, default_value = wonders::DEFAULT_BIND_ADDR)]
    pub addr: String,
}
