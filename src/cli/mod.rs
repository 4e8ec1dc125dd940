//! CLI module for Agora
//!
//! Provides interactive commands:
//! - `serve`: run the HTTP server
//! - `seed`: load bill data into the store

use clap::{Parser, Subcommand};

pub mod seed;

/// Agora civic platform CLI
#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(about = "Civic law discussion platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve,
    /// Load bill data into the store
    Seed(seed::SeedArgs),
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve) => crate::server::run().await,
        Some(Commands::Seed(args)) => seed::run(args).await,
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
