/// Result of the CO2 estimation: room volume, the selected plant's yearly
/// absorption constant, and the CO2 mass currently held in the room air.
#[derive(Debug, Clone, PartialEq)]
pub struct Co2Estimate {
    pub room_volume: f32,
    pub room_volume_display: String,
    pub co2_per_plant: f32,
    pub co2_per_plant_display: String,
    pub co2_in_room: f32,
    pub co2_in_room_display: String,
}
