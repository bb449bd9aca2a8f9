//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::clients::ClientsCommand;
use crate::config::ServiceArgs;

/// Browse and edit client records.
#[derive(Parser, Debug)]
#[command(name = "clientele")]
#[command(author, version = env!("CLIENTELE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub service: ServiceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Client record operations
    Clients(ClientsCommand),
}
