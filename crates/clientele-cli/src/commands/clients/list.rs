//! List clients command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::warn;

use clientele_core::LoadMore;

use crate::config::ServiceArgs;
use crate::output;

use super::report;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only clients matching this term
    #[arg(long, short)]
    pub search: Option<String>,

    /// Number of pages to load
    #[arg(long, default_value_t = 1, conflicts_with = "all")]
    pub pages: u32,

    /// Keep loading pages until every match is shown
    #[arg(long)]
    pub all: bool,

    /// Print the loaded records as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, service: &ServiceArgs) -> Result<()> {
    let manager = service.manager()?;

    manager
        .search(args.search.as_deref().unwrap_or_default())
        .await
        .map_err(|e| report(e, "Failed to list clients"))?;

    let mut loaded_pages = 1;
    while args.all || loaded_pages < args.pages {
        let step = manager
            .load_more()
            .await
            .map_err(|e| report(e, "Failed to load more clients"))?;
        match step {
            LoadMore::Fetched(0) => {
                warn!(loaded = manager.len(), "Backend served an empty page; stopping");
                break;
            }
            LoadMore::Fetched(_) => {}
            LoadMore::Exhausted | LoadMore::Busy => break,
        }
        loaded_pages += 1;
    }

    let records = manager.items();

    if args.json {
        return output::json_pretty(&records);
    }

    if records.is_empty() {
        eprintln!("{}", "No clients found.".dimmed());
        return Ok(());
    }

    for record in &records {
        output::record_row(record);
    }

    eprintln!();
    eprintln!(
        "{}",
        format!("showing {} of {}", records.len(), manager.total_count()).dimmed()
    );
    if manager.has_more() {
        eprintln!("{}", "more available: use --pages or --all".dimmed());
    }

    Ok(())
}
