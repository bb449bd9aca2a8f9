//! Toggle client status command implementation.

use anyhow::{Context, Result};
use clap::Args;

use clientele_core::ClientId;

use crate::config::ServiceArgs;
use crate::output;

use super::{locate, report, report_refresh};

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Client ID
    pub id: String,
}

pub async fn run(args: ToggleArgs, service: &ServiceArgs) -> Result<()> {
    let id: ClientId = args.id.parse().context("Invalid client ID")?;

    let manager = service.manager()?;
    let record = locate(&manager, id).await?;

    let outcome = manager
        .toggle_status(&record)
        .await
        .map_err(|e| report(e, "Failed to change client status"))?;

    report_refresh(&outcome.refresh);

    let updated = outcome.into_value();
    let state = if updated.enabled { "Enabled" } else { "Disabled" };
    output::success(&format!("{state} client {}: {}", updated.id, updated.full_name()));

    Ok(())
}
