//! Operator CLI for the vehicle service.
//!
//! Loads an in-memory store from a seed file and prints enriched vehicles
//! as JSON.
//!
//! ```text
//! vehicles --seed demos/vehicles.json list
//! vehicles --config demos/vehicles.toml get 2
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vehicle_aggregation::config::Settings;
use vehicle_aggregation::infrastructure::persistence::in_memory::InMemoryVehicleRepository;
use vehicle_aggregation::{VehicleId, VehicleService, telemetry};

#[derive(Debug, Parser)]
#[command(name = "vehicles", version, about = "Query enriched vehicle information")]
struct Cli {
    /// Settings file (defaults to ./vehicles.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed file overriding `store.seed_path`.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all vehicles with price and address.
    List,
    /// Show one vehicle with price and address.
    Get {
        /// Vehicle id.
        id: VehicleId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    telemetry::init_tracing(&settings.logging).context("initialising tracing")?;

    let repository = match cli.seed.as_ref().or(settings.store.seed_path.as_ref()) {
        Some(path) => InMemoryVehicleRepository::from_seed_file(path)
            .await
            .with_context(|| format!("seeding store from {}", path.display()))?,
        None => {
            tracing::warn!("no seed file configured, store is empty");
            InMemoryVehicleRepository::new()
        }
    };

    let service = VehicleService::from_settings(&settings, Arc::new(repository))?;

    let output = match cli.command {
        Command::List => serde_json::to_string_pretty(&service.list().await?)?,
        Command::Get { id } => serde_json::to_string_pretty(&service.find_by_id(id).await?)?,
    };
    println!("{}", output);
    Ok(())
}
