//! Command line client that prints a property's waste collection schedule.

#![allow(clippy::print_stdout, reason = "terminal output is this binary's job")]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;

use kerbside_core::{
    catalog,
    model::{CouncilId, PropertyId},
    plugin::PluginRegistry,
    service::KerbsideService,
};
use kerbside_provider_pembrokeshire as pembrokeshire;

// The council site is a third party outside our control; without a bound
// a stalled connection would hang the lookup indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Look up kerbside waste collection dates by property reference.
#[derive(Debug, Parser)]
#[command(name = "kerbside", version, about)]
struct Cli {
    /// Property reference number (UPRN) as used by the council.
    property_ref: String,

    /// Council to query.
    #[arg(long, default_value = "pembrokeshire")]
    council: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let client = Client::builder()
        .user_agent("kerbside/0.1")
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let registry = Arc::new(PluginRegistry::new(vec![pembrokeshire::plugin(client)]));
    let service = KerbsideService::new(registry);

    let council = CouncilId(cli.council);
    let property = PropertyId(cli.property_ref);

    // Never fails: lookups degrade to an "Unknown" day with no pickups,
    // which is a valid answer, not an error.
    let result = service.collection_for(council, &property).await;

    println!("Collection day: {}", result.collection_day_label);

    if result.bins.is_empty() {
        println!("No scheduled pickups found.");
    } else {
        for bin in &result.bins {
            let display = catalog::resolve(&bin.raw_name);
            println!("  {}: {}", display.short_name, bin.date_label);
        }
    }

    Ok(())
}
