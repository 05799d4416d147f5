/// Mutable sensor-side state. Both timer callbacks and the plant selection
/// write here; everything else only reads. Single task, so no locking.
#[derive(Debug, Clone)]
pub struct SensorState {
    pub tank_level: f32,
    pub temperature: f32,
    pub selected_plant: Option<String>,
}

impl SensorState {
    pub fn new() -> Self {
        Self {
            tank_level: 68.4,
            temperature: 22.3,
            selected_plant: None,
        }
    }

    pub fn select_plant(&mut self, id: Option<String>) {
        self.selected_plant = id.filter(|s| !s.is_empty());
    }
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tank view: raw level plus the strings/flags the display needs.
#[derive(Debug, Clone)]
pub struct TankInfo {
    pub level: f32,
    pub level_display: String,
    pub low_alert: bool,
}

#[derive(Debug, Clone)]
pub struct TemperatureInfo {
    pub value: f32,
    pub value_display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SensorState::new();
        assert_eq!(state.tank_level, 68.4);
        assert_eq!(state.temperature, 22.3);
        assert!(state.selected_plant.is_none());
    }

    #[test]
    fn test_select_plant_treats_empty_as_none() {
        let mut state = SensorState::new();
        state.select_plant(Some("rose".to_string()));
        assert_eq!(state.selected_plant.as_deref(), Some("rose"));
        state.select_plant(Some(String::new()));
        assert!(state.selected_plant.is_none());
    }
}
