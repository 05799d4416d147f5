use thiserror::Error;

use crate::config::RoomConfig;
use crate::models::co2::Co2Estimate;
use crate::models::plant::PlantEntry;

/// Assumed air density, kg per unit of room volume.
const AIR_DENSITY: f32 = 1.2;
/// CO2 is roughly 0.04% of air by volume, about 0.06% by mass.
const CO2_MASS_FRACTION: f32 = 0.0006;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Co2Error {
    #[error("Please enter all room dimensions")]
    MissingDimensions,

    #[error("Please select a plant type first")]
    NoPlantSelected,
}

/// Estimate the CO2 picture for a room and a selected plant.
///
/// Dimensions are validated first, then the plant selection. On error
/// nothing is computed and no state is touched; the message is surfaced to
/// the display as-is.
pub fn estimate(room: &RoomConfig, plant: Option<&PlantEntry>) -> Result<Co2Estimate, Co2Error> {
    let (length, width, height) = match (room.length, room.width, room.height) {
        (Some(l), Some(w), Some(h)) if l > 0.0 && w > 0.0 && h > 0.0 => (l, w, h),
        _ => return Err(Co2Error::MissingDimensions),
    };

    let plant = plant.ok_or(Co2Error::NoPlantSelected)?;

    let room_volume = length * width * height;
    let air_mass = room_volume * AIR_DENSITY;
    let co2_in_room = air_mass * CO2_MASS_FRACTION;

    Ok(Co2Estimate {
        room_volume,
        room_volume_display: format!("{:.2}", room_volume),
        co2_per_plant: plant.co2_per_year,
        co2_per_plant_display: format!("{:.1} kg", plant.co2_per_year),
        co2_in_room,
        co2_in_room_display: format!("{:.3} kg", co2_in_room),
    })
}
