//! Delete client command implementation.

use anyhow::{Context, Result};
use clap::Args;

use clientele_core::ClientId;

use crate::config::ServiceArgs;
use crate::output;

use super::{locate, report, report_refresh};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Client ID
    pub id: String,
}

pub async fn run(args: DeleteArgs, service: &ServiceArgs) -> Result<()> {
    let id: ClientId = args.id.parse().context("Invalid client ID")?;

    let manager = service.manager()?;
    let record = locate(&manager, id).await?;

    let outcome = manager
        .remove(&record)
        .await
        .map_err(|e| report(e, "Failed to delete client"))?;

    report_refresh(&outcome.refresh);
    output::success(&format!("Deleted client {}: {}", record.id, record.full_name()));

    Ok(())
}
