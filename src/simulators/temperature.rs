use log::debug;
use rand::Rng;

use crate::models::sensor::SensorState;
use crate::rng::SimRng;

/// Simulated ambient range, °C.
const TEMP_MIN: f32 = 20.0;
const TEMP_MAX: f32 = 26.0;

/// One simulated temperature reading. A plain overwrite: the sensor has no
/// memory of the previous value.
pub fn simulate_temperature(state: &mut SensorState, rng: &mut SimRng) {
    state.temperature = rng.0.gen_range(TEMP_MIN..TEMP_MAX);
    debug!("temperature now {:.1}°C", state.temperature);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_stays_in_range() {
        let mut rng = SimRng::seed_from_u64(11);
        let mut state = SensorState::new();

        for _ in 0..200 {
            simulate_temperature(&mut state, &mut rng);
            assert!(
                state.temperature >= TEMP_MIN && state.temperature < TEMP_MAX,
                "temperature {}",
                state.temperature
            );
        }
    }
}
