#![forbid(unsafe_code)]

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use faunatrack_api::SubmitSightingRequest;
use faunatrack_dash::{render, ApiClient, DashboardState, Phase};
use faunatrack_model::{Coordinates, SpeciesId};
use faunatrack_query::StatusFilter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "faunatrack")]
#[command(about = "Faunatrack conservation dashboard CLI")]
struct Cli {
    /// Base URL of the faunatrack server.
    #[arg(long, global = true, env = "FAUNA_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,
    /// Emit raw JSON instead of tables.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full dashboard: region summary plus the species catalog.
    Overview {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Species catalog, optionally filtered.
    Species {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Recorded sightings feed.
    Sightings,
    /// Region statistics only.
    Report,
    /// Record a new sighting.
    Submit {
        #[arg(long, default_value = "")]
        species: String,
        #[arg(long)]
        animal_id: Option<u64>,
        #[arg(long)]
        location: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        observer: String,
        #[arg(long, default_value = "")]
        behavior: String,
        #[arg(long, default_value_t = 1)]
        group_size: u32,
        #[arg(long, default_value = "Good")]
        health: String,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long)]
        forest_range: Option<String>,
        #[arg(long)]
        weather: Option<String>,
    },
}

fn parse_status(raw: &str) -> Result<StatusFilter> {
    StatusFilter::parse(raw).map_err(|err| anyhow!("invalid --status value {raw:?}: {err}"))
}

async fn loaded_state(client: &ApiClient) -> Result<DashboardState> {
    let state = DashboardState::new();
    let state = match client.fetch_dashboard().await {
        Ok(data) => state.loaded(data),
        Err(err) => state.failed(err.to_string()),
    };
    if let Phase::Failed(message) = state.phase() {
        return Err(anyhow!("dashboard fetch failed: {message}"));
    }
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url).context("building api client")?;
    debug!(base_url = %cli.base_url, "dashboard client ready");

    match cli.command {
        Commands::Overview { search, status } => {
            let state = loaded_state(&client)
                .await?
                .with_search(search)
                .with_status_filter(parse_status(&status)?);
            let Phase::Ready(data) = state.phase() else {
                unreachable!("loaded_state only returns ready states");
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "stats": data.stats,
                        "species": state.visible_species(),
                        "sightings": data.sightings,
                    })
                );
            } else {
                print!("{}", render::stats_report(&data.stats));
                println!();
                print!("{}", render::species_table(&state.visible_species()));
            }
        }
        Commands::Species { search, status } => {
            let filter = parse_status(&status)?;
            let species = client
                .fetch_species()
                .await
                .map_err(|err| anyhow!("fetching species: {err}"))?;
            let visible = faunatrack_query::filter_species(&species, &search, filter);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!("{}", render::species_table(&visible));
            }
        }
        Commands::Sightings => {
            let sightings = client
                .fetch_sightings()
                .await
                .map_err(|err| anyhow!("fetching sightings: {err}"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sightings)?);
            } else {
                print!("{}", render::sightings_table(&sightings));
            }
        }
        Commands::Report => {
            let stats = client
                .fetch_stats()
                .await
                .map_err(|err| anyhow!("fetching stats: {err}"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render::stats_report(&stats));
            }
        }
        Commands::Submit {
            species,
            animal_id,
            location,
            lat,
            lng,
            date,
            observer,
            behavior,
            group_size,
            health,
            notes,
            forest_range,
            weather,
        } => {
            let animal_id = animal_id
                .map(SpeciesId::new)
                .transpose()
                .map_err(|err| anyhow!("invalid --animal-id: {err}"))?;
            let coordinates = Coordinates::new(lat, lng)
                .map_err(|err| anyhow!("invalid coordinates: {err}"))?;
            let request = SubmitSightingRequest {
                species,
                animal_id,
                location,
                coordinates: Some(coordinates),
                date,
                observer,
                behavior,
                group_size,
                health_status: health,
                notes,
                forest_range,
                weather,
            };

            match client.submit_sighting(&request).await {
                Ok(record) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    } else {
                        println!(
                            "recorded sighting #{} of {} at {}",
                            record.id.get(),
                            record.species,
                            record.location
                        );
                    }
                }
                Err(err) => return Err(anyhow!("submission failed: {err}")),
            }
        }
    }
    Ok(())
}
