//! Countries command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use clientele_core::{CountryDirectory, filter_countries};

use crate::config::ServiceArgs;

use super::report;

#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Case-insensitive substring to match
    #[arg(long, short)]
    pub filter: Option<String>,
}

pub async fn run(args: CountriesArgs, service: &ServiceArgs) -> Result<()> {
    let directory = service.countries()?;
    let countries = directory
        .list_countries()
        .await
        .map_err(|e| report(e, "Failed to fetch countries"))?;

    let matches = filter_countries(&countries, args.filter.as_deref().unwrap_or_default());
    if matches.is_empty() {
        eprintln!("{}", "No countries match.".dimmed());
        return Ok(());
    }

    for name in matches {
        println!("{name}");
    }

    Ok(())
}
