//! Update client command implementation.

use anyhow::{Context, Result};
use clap::Args;

use clientele_core::{ClientFormInput, ClientId};

use crate::config::ServiceArgs;
use crate::output;

use super::form::FormArgs;
use super::{locate, report, report_refresh};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Client ID
    pub id: String,

    #[command(flatten)]
    pub form: FormArgs,
}

pub async fn run(args: UpdateArgs, service: &ServiceArgs) -> Result<()> {
    let id: ClientId = args.id.parse().context("Invalid client ID")?;

    let manager = service.manager()?;
    let current = locate(&manager, id).await?;

    let mut form = ClientFormInput::from_record(&current);
    args.form.apply(&mut form);

    let outcome = manager
        .update(id, &form)
        .await
        .map_err(|e| report(e, "Failed to update client"))?;

    report_refresh(&outcome.refresh);

    let record = outcome.into_value();
    output::success(&format!("Updated client {}: {}", record.id, record.full_name()));
    output::record_detail(&record);

    Ok(())
}
