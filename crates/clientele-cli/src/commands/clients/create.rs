//! Create client command implementation.

use anyhow::Result;
use clap::Args;

use clientele_core::ClientFormInput;

use crate::config::ServiceArgs;
use crate::output;

use super::form::FormArgs;
use super::{report, report_refresh};

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub async fn run(args: CreateArgs, service: &ServiceArgs) -> Result<()> {
    let mut form = ClientFormInput::default();
    args.form.apply(&mut form);

    let manager = service.manager()?;
    let outcome = manager
        .create(&form)
        .await
        .map_err(|e| report(e, "Failed to create client"))?;

    report_refresh(&outcome.refresh);

    let record = outcome.into_value();
    output::success(&format!("Created client {}: {}", record.id, record.full_name()));
    output::record_detail(&record);

    Ok(())
}
