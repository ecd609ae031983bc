//! Pinsweep CLI - sweep delivery availability across pincodes
//!
//! Usage:
//!   pinsweep check --region Maharashtra      Check all Maharashtra cities
//!   pinsweep check --all --tier1-only        Check tier-1 cities everywhere
//!   pinsweep regions                         List known regions
//!   pinsweep saved add 560103 Bellandur Karnataka
//!   pinsweep saved list

mod store;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pinsweep_browser::{SurfaceConfig, SurfaceSession};
use pinsweep_core::{Location, StartRequest, SweepConfig};
use pinsweep_orchestrator::{CheckEvent, CheckOrchestrator};
use std::path::PathBuf;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use crate::store::PincodeStore;

#[derive(Parser)]
#[command(name = "pinsweep")]
#[command(author, version, about = "Sweep delivery availability across pincodes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding config and the saved-pincode store
    #[arg(long, default_value = ".pinsweep")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an availability sweep against the active product page
    Check {
        /// Region to include (repeatable)
        #[arg(short, long)]
        region: Vec<String>,

        /// Include every known region
        #[arg(long)]
        all: bool,

        /// Only tier-1 cities
        #[arg(long)]
        tier1_only: bool,

        /// One extra location as PINCODE:City:Region
        #[arg(long, value_name = "PIN:CITY:REGION")]
        custom: Option<String>,

        /// Connect to a running browser on this DevTools port instead of
        /// launching one (e.g. chrome --remote-debugging-port=9222)
        #[arg(long, value_name = "PORT")]
        connect: Option<u16>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,
    },

    /// List known regions and their city counts
    Regions,

    /// Manage saved custom pincodes
    Saved {
        #[command(subcommand)]
        action: SavedCommands,
    },
}

#[derive(Subcommand)]
enum SavedCommands {
    /// Save a custom pincode
    Add {
        pincode: String,
        city: String,
        region: String,
    },
    /// List saved pincodes
    List,
    /// Remove a saved pincode
    Remove { pincode: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match cli.command {
        Commands::Check {
            region,
            all,
            tier1_only,
            custom,
            connect,
            headed,
        } => {
            cmd_check(
                &cli.data_dir,
                region,
                all,
                tier1_only,
                custom,
                connect,
                headed,
            )
            .await
        }
        Commands::Regions => cmd_regions(),
        Commands::Saved { action } => cmd_saved(&cli.data_dir, action).await,
    }
}

async fn cmd_check(
    data_dir: &PathBuf,
    regions: Vec<String>,
    all: bool,
    tier1_only: bool,
    custom: Option<String>,
    connect: Option<u16>,
    headed: bool,
) -> Result<()> {
    if regions.is_empty() && !all && custom.is_none() {
        bail!("Nothing to check: pass --region, --all, or --custom");
    }

    let sweep = SweepConfig::load_or_default(data_dir.join("config.toml"))
        .context("Failed to load sweep config")?;

    let mut store = PincodeStore::new(data_dir.clone());
    store.load().await.context("Failed to load saved pincodes")?;

    // Reference data plus saved entries; the orchestrator dedups by pincode
    let mut locations: Vec<Location> = Vec::new();
    if all {
        for name in pinsweep_data::region_names() {
            locations.extend(pinsweep_data::locations_for(name, tier1_only));
        }
        locations.extend(store.all_locations());
    } else {
        for name in &regions {
            let from_data = pinsweep_data::locations_for(name, tier1_only);
            if from_data.is_empty() {
                debug!("No reference cities for region '{}'", name);
            }
            locations.extend(from_data);
            locations.extend(store.locations_for(name));
        }
    }

    let mut request = StartRequest::new(locations);
    if let Some(raw) = custom {
        request = request.with_custom(parse_custom(&raw)?);
    }

    let surface_config = SurfaceConfig {
        headless: !headed,
        sweep: sweep.clone(),
        ..SurfaceConfig::default()
    };
    let session = match connect {
        Some(port) => SurfaceSession::connect(port, surface_config).await?,
        None => SurfaceSession::launch_with_config(surface_config).await?,
    };
    let agent = session.page_agent();

    let orchestrator = CheckOrchestrator::new(session, agent, sweep);
    let mut events = orchestrator.subscribe();

    let ack = orchestrator.start(request).await;
    println!("{}", ack.status);
    if ack.is_error() {
        bail!("{}", ack.status);
    }

    loop {
        match events.recv().await {
            Ok(CheckEvent::UpdateSingleStatus {
                pincode,
                status,
                message,
                update,
            }) => {
                debug!("{}", update);
                println!("  [{}] {} - {}", status, pincode, message);
            }
            Ok(CheckEvent::UpdateStatus { status }) => println!("{}", status),
            Ok(CheckEvent::CheckComplete { status }) => {
                println!("{}", status);
                break;
            }
            Ok(CheckEvent::CheckError { error }) => {
                bail!("{}", error);
            }
            // Slow terminal; skip what we missed and keep going
            Err(RecvError::Lagged(missed)) => {
                debug!("Dropped {} events while printing", missed);
            }
            Err(RecvError::Closed) => break,
        }
    }

    Ok(())
}

fn cmd_regions() -> Result<()> {
    for name in pinsweep_data::region_names() {
        // Every region in the table resolves
        if let Some(cities) = pinsweep_data::cities_for(name) {
            println!(
                "{} ({} tier-1, {} tier-2)",
                name,
                cities.tier1.len(),
                cities.tier2.len()
            );
        }
    }
    Ok(())
}

async fn cmd_saved(data_dir: &PathBuf, action: SavedCommands) -> Result<()> {
    let mut store = PincodeStore::new(data_dir.clone());
    store.load().await.context("Failed to load saved pincodes")?;

    match action {
        SavedCommands::Add {
            pincode,
            city,
            region,
        } => {
            store.add(&region, &city, &pincode)?;
            store.save().await?;
            println!("Saved {} ({}) for {}.", pincode, city, region);
        }
        SavedCommands::List => {
            if store.entries().is_empty() {
                println!("No saved pincodes.");
            }
            for (region, entries) in store.entries() {
                println!("{}:", region);
                for entry in entries {
                    println!("  {} - {}", entry.pincode, entry.city);
                }
            }
        }
        SavedCommands::Remove { pincode } => {
            if store.remove(&pincode) {
                store.save().await?;
                println!("Removed {}.", pincode);
            } else {
                println!("Pincode {} is not saved.", pincode);
            }
        }
    }
    Ok(())
}

/// Parse `PINCODE:City:Region` into a location
fn parse_custom(raw: &str) -> Result<Location> {
    let parts: Vec<&str> = raw.splitn(3, ':').collect();
    match parts.as_slice() {
        [pincode, city, region] if !pincode.is_empty() && !city.is_empty() && !region.is_empty() => {
            Ok(Location::new(*pincode, *city, *region))
        }
        _ => bail!("Invalid --custom value '{}': expected PIN:CITY:REGION", raw),
    }
}
