pub mod co2;
pub mod config;
pub mod models;
pub mod rng;
pub mod simulators;
pub mod snapshot;

mod dashboard;
mod renderer;

use crate::config::AppConfig;
use crate::models::plant::PlantCatalog;
use crate::models::sensor::SensorState;
use crate::rng::SimRng;
use anyhow::Context;
use chrono::Local;
use log::{error, info, warn};
use std::time::Duration;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting plant watering dashboard");

    tokio::select! {
        result = main_loop(config) => {
            match result {
                Ok(_) => info!("Application completed successfully"),
                Err(e) => {
                    error!("Application error: {e:#}");
                    // Print chain of error causes
                    let mut source = e.source();
                    while let Some(e) = source {
                        error!("Caused by: {e}");
                        source = e.source();
                    }
                    return Err(e).context("Application failed to run");
                }
            }
        }
    }

    Ok(())
}

async fn main_loop(config: AppConfig) -> anyhow::Result<()> {
    let catalog = PlantCatalog::default();

    let mut rng = match config.simulation.seed {
        Some(seed) => {
            info!("Seeding simulation with {}", seed);
            SimRng::seed_from_u64(seed)
        }
        None => SimRng::from_entropy(),
    };

    let history = simulators::history::generate(Local::now(), &mut rng);
    let mut state = SensorState::new();

    let selected = config.plant.selected.trim();
    if !selected.is_empty() {
        match catalog.get(selected) {
            Some(plant) => {
                info!("Plant '{}' selected", plant.id);
                state.select_plant(Some(plant.id.clone()));
            }
            None => warn!(
                "Unknown plant '{}' in config, expected one of: {}",
                selected,
                catalog.ids().join(", ")
            ),
        }
    }

    let fonts = renderer::fonts::FontSet::load(&config.dashboard.font)
        .context("Failed to load dashboard font")?;

    // A zero interval would busy-loop; clamp to one second.
    let mut water_interval =
        tokio::time::interval(Duration::from_secs(config.simulation.water_interval.max(1)));
    let mut temp_interval =
        tokio::time::interval(Duration::from_secs(config.simulation.temp_interval.max(1)));

    let mut was_low = false;

    loop {
        // Whichever simulator fires, its state change lands before the
        // matching display refresh below.
        let changed = tokio::select! {
            _ = water_interval.tick() => {
                simulators::tank::simulate_water_usage(&mut state, &mut rng)
            }
            _ = temp_interval.tick() => {
                simulators::temperature::simulate_temperature(&mut state, &mut rng);
                true
            }
        };

        if !changed {
            continue;
        }

        let info = snapshot::build(&catalog, &state, &history, &config.room, Local::now());

        if info.tank.low_alert && !was_low {
            warn!("Water level low: {}", info.tank.level_display);
        }
        was_low = info.tank.low_alert;

        if config.dashboard.enabled {
            let img = dashboard::create_image(&config, &fonts, &info);
            if config.dashboard.save_to_file {
                if let Err(e) = dashboard::save_image(&config, &img) {
                    error!("Failed to save dashboard: {e:#}");
                }
            }
        }
    }
}
