use chrono::{DateTime, Local};
use log::debug;

use crate::co2;
use crate::config::RoomConfig;
use crate::models::plant::PlantCatalog;
use crate::models::sensor::{SensorState, TankInfo, TemperatureInfo};
use crate::models::stats::WateringStats;
use crate::models::watering::{ChartSeries, WateringHistory};
use crate::models::DashboardInfo;

/// How many of the most recent records feed the volume chart.
const CHART_WINDOW: usize = 12;
/// Tank percentage below which the display raises the low-water alert.
pub(crate) const LOW_LEVEL_ALERT: f32 = 10.0;

/// Assemble one frame's worth of display data from the current state.
///
/// The CO2 estimate is recomputed on every snapshot: it is present exactly
/// when a plant is selected and all three room dimensions are, and carries
/// the validation message otherwise.
pub fn build(
    catalog: &PlantCatalog,
    state: &SensorState,
    history: &WateringHistory,
    room: &RoomConfig,
    now: DateTime<Local>,
) -> DashboardInfo {
    let plant = state
        .selected_plant
        .as_deref()
        .and_then(|id| catalog.get(id));

    let info = DashboardInfo {
        tank: tank_info(state.tank_level),
        temperature: temperature_info(state.temperature),
        stats: watering_stats(history, now),
        history: history.records().to_vec(),
        chart: chart_series(history),
        plant: plant.cloned(),
        co2: co2::estimate(room, plant),
    };

    debug!(
        "snapshot: tank {} temp {} waterings {}",
        info.tank.level_display, info.temperature.value_display, info.stats.total_waterings
    );

    info
}

pub fn tank_info(level: f32) -> TankInfo {
    TankInfo {
        level,
        level_display: format!("{:.1}%", level),
        low_alert: level < LOW_LEVEL_ALERT,
    }
}

pub fn temperature_info(value: f32) -> TemperatureInfo {
    TemperatureInfo {
        value,
        value_display: format!("{:.1}°C", value),
    }
}

/// Totals plus a coarse "how long ago" bucket for the last event, using
/// floored whole hours.
pub fn watering_stats(history: &WateringHistory, now: DateTime<Local>) -> WateringStats {
    let total_water_used = history.total_volume();

    let last_watered_display = match history.last() {
        Some(last) => {
            let hours = now.signed_duration_since(last.timestamp).num_hours();
            if hours < 1 {
                String::from("Recently")
            } else if hours < 24 {
                format!("{}h ago", hours)
            } else {
                format!("{}d ago", hours / 24)
            }
        }
        None => String::from("Never"),
    };

    WateringStats {
        total_waterings: history.len(),
        total_water_used,
        total_water_used_display: format!("{:.1}L", total_water_used),
        last_watered_display,
    }
}

/// Chart feed: the most recent records, volumes in millilitres.
pub fn chart_series(history: &WateringHistory) -> ChartSeries {
    let window = history.recent(CHART_WINDOW);

    ChartSeries {
        labels: window.iter().map(|r| r.day_display().to_string()).collect(),
        values_ml: window.iter().map(|r| r.volume * 1000.0).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::watering::WateringRecord;
    use crate::rng::SimRng;
    use crate::simulators::history;
    use chrono::Duration;

    fn history_of(volumes: &[f32], last_at: DateTime<Local>) -> WateringHistory {
        let records = volumes
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &v)| {
                let ts = last_at - Duration::hours(i as i64 * 12);
                WateringRecord::new(ts, v, 50.0, 80.0, 22.0)
            })
            .rev()
            .collect();
        WateringHistory::new(records)
    }

    #[test]
    fn test_stats_totals() {
        let now = Local::now();
        // 24 records summing to 12.3L.
        let mut volumes = vec![0.5; 23];
        volumes.push(0.8);
        let stats = watering_stats(&history_of(&volumes, now), now);

        assert_eq!(stats.total_waterings, 24);
        assert_eq!(stats.total_water_used_display, "12.3L");
    }

    #[test]
    fn test_recency_buckets() {
        let now = Local::now();

        let half_hour = history_of(&[0.5], now - Duration::minutes(30));
        assert_eq!(watering_stats(&half_hour, now).last_watered_display, "Recently");

        let five_hours = history_of(&[0.5], now - Duration::hours(5));
        assert_eq!(watering_stats(&five_hours, now).last_watered_display, "5h ago");

        let fifty_hours = history_of(&[0.5], now - Duration::hours(50));
        assert_eq!(watering_stats(&fifty_hours, now).last_watered_display, "2d ago");
    }

    #[test]
    fn test_chart_takes_last_twelve_in_millilitres() {
        let now = Local::now();
        let volumes: Vec<f32> = (0..24).map(|i| 0.3 + 0.01 * i as f32).collect();
        let chart = chart_series(&history_of(&volumes, now));

        assert_eq!(chart.labels.len(), 12);
        assert_eq!(chart.values_ml.len(), 12);
        // Oldest record in the window is index 12 of the full history.
        assert!((chart.values_ml[0] - 420.0).abs() < 1e-2);
        assert!((chart.values_ml[11] - 530.0).abs() < 1e-2);
    }

    #[test]
    fn test_low_alert_threshold() {
        assert!(!tank_info(10.0).low_alert);
        assert!(tank_info(9.9).low_alert);
        assert_eq!(tank_info(68.4).level_display, "68.4%");
    }

    #[test]
    fn test_build_with_and_without_plant() {
        let now = Local::now();
        let catalog = PlantCatalog::default();
        let mut rng = SimRng::seed_from_u64(5);
        let history = history::generate(now, &mut rng);
        let room = RoomConfig {
            length: Some(2.0),
            width: Some(2.0),
            height: Some(2.5),
        };

        let mut state = SensorState::new();
        let info = build(&catalog, &state, &history, &room, now);
        assert!(info.plant.is_none());
        assert!(info.co2.is_err());

        state.select_plant(Some("rose".to_string()));
        let info = build(&catalog, &state, &history, &room, now);
        assert_eq!(info.plant.as_ref().unwrap().name, "Rose");
        assert_eq!(info.co2.unwrap().co2_per_plant_display, "5.5 kg");
    }
}
