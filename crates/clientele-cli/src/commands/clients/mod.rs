//! Client record subcommands.

mod countries;
mod create;
mod delete;
mod form;
mod list;
mod toggle;
mod update;

use anyhow::{Result, anyhow, bail};
use clap::{Args, Subcommand};
use tracing::debug;

use clientele_core::{ClientId, ClientRecord, ClientService, CollectionManager, Error, LoadMore};

use crate::config::ServiceArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ClientsCommand {
    #[command(subcommand)]
    pub command: ClientsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientsSubcommand {
    /// List or search clients, page by page
    List(list::ListArgs),

    /// Register a new client
    Create(create::CreateArgs),

    /// Edit an existing client
    Update(update::UpdateArgs),

    /// Delete a client
    Delete(delete::DeleteArgs),

    /// Enable a disabled client or disable an enabled one
    Toggle(toggle::ToggleArgs),

    /// List country names for the country field
    Countries(countries::CountriesArgs),
}

pub async fn handle(cmd: ClientsCommand, service: &ServiceArgs) -> Result<()> {
    match cmd.command {
        ClientsSubcommand::List(args) => list::run(args, service).await,
        ClientsSubcommand::Create(args) => create::run(args, service).await,
        ClientsSubcommand::Update(args) => update::run(args, service).await,
        ClientsSubcommand::Delete(args) => delete::run(args, service).await,
        ClientsSubcommand::Toggle(args) => toggle::run(args, service).await,
        ClientsSubcommand::Countries(args) => countries::run(args, service).await,
    }
}

/// Convert a library error for display, printing per-field validation
/// messages first.
fn report(err: Error, action: &str) -> anyhow::Error {
    match err {
        Error::Validation(errors) => {
            output::validation(&errors);
            anyhow!("{action}: invalid client data")
        }
        other => anyhow!("{action}: {}", other.message()),
    }
}

/// Find a record by id, loading further pages until it shows up.
async fn locate<S: ClientService>(
    manager: &CollectionManager<S>,
    id: ClientId,
) -> Result<ClientRecord> {
    manager
        .fetch_all()
        .await
        .map_err(|e| report(e, "Failed to load clients"))?;

    loop {
        if let Some(record) = manager.find(id) {
            return Ok(record);
        }
        match manager
            .load_more()
            .await
            .map_err(|e| report(e, "Failed to load clients"))?
        {
            LoadMore::Fetched(added) if added > 0 => {
                debug!(loaded = manager.len(), "Searching further pages");
            }
            LoadMore::Fetched(_) | LoadMore::Exhausted | LoadMore::Busy => {
                bail!("Client {id} not found")
            }
        }
    }
}

/// Warn when the reload after a mutation failed.
fn report_refresh(refresh: &clientele_core::Result<()>) {
    if let Err(err) = refresh {
        output::warning(&format!("Client list could not be refreshed: {}", err.message()));
    }
}
