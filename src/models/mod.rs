pub mod co2;
pub mod plant;
pub mod sensor;
pub mod stats;
pub mod watering;

use crate::co2::Co2Error;

/// Everything the renderer needs for one frame, assembled by
/// `snapshot::build`. Owns its data so a frame is self-contained.
#[derive(Debug, Clone)]
pub struct DashboardInfo {
    pub tank: sensor::TankInfo,
    pub temperature: sensor::TemperatureInfo,
    pub stats: stats::WateringStats,
    pub history: Vec<watering::WateringRecord>,
    pub chart: watering::ChartSeries,
    pub plant: Option<plant::PlantEntry>,
    pub co2: Result<co2::Co2Estimate, Co2Error>,
}
