/// Aggregates over the watering history, pre-formatted for display.
#[derive(Debug, Clone)]
pub struct WateringStats {
    pub total_waterings: usize,
    pub total_water_used: f32,
    pub total_water_used_display: String,
    pub last_watered_display: String,
}

impl Default for WateringStats {
    fn default() -> Self {
        Self {
            total_waterings: 0,
            total_water_used: 0.0,
            total_water_used_display: String::from("0.0L"),
            last_watered_display: String::from("Never"),
        }
    }
}
