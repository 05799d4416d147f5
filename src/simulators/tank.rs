use log::debug;
use rand::Rng;

use crate::models::sensor::SensorState;
use crate::rng::SimRng;

/// Per-tick consumption range, percentage points.
const DRAIN_MIN: f32 = 0.5;
const DRAIN_MAX: f32 = 2.0;
/// Below this the simulated sensor stops reporting consumption.
const EMPTY_THRESHOLD: f32 = 5.0;

/// One simulated consumption tick. Returns whether the level changed, so
/// the caller knows if the display needs a refresh.
pub fn simulate_water_usage(state: &mut SensorState, rng: &mut SimRng) -> bool {
    if state.tank_level <= EMPTY_THRESHOLD {
        return false;
    }

    let drain = rng.0.gen_range(DRAIN_MIN..DRAIN_MAX);
    state.tank_level = (state.tank_level - drain).max(0.0);
    debug!("tank level now {:.1}%", state.tank_level);

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_stays_in_range() {
        let mut rng = SimRng::seed_from_u64(3);
        let mut state = SensorState::new();

        let before = state.tank_level;
        assert!(simulate_water_usage(&mut state, &mut rng));
        let drained = before - state.tank_level;
        assert!(drained >= DRAIN_MIN && drained < DRAIN_MAX, "drained {}", drained);
    }

    #[test]
    fn test_noop_at_or_below_threshold() {
        let mut rng = SimRng::seed_from_u64(3);
        let mut state = SensorState::new();
        state.tank_level = EMPTY_THRESHOLD;

        assert!(!simulate_water_usage(&mut state, &mut rng));
        assert_eq!(state.tank_level, EMPTY_THRESHOLD);
    }

    #[test]
    fn test_level_never_goes_negative() {
        let mut rng = SimRng::seed_from_u64(3);
        let mut state = SensorState::new();
        state.tank_level = 5.1;

        // Run well past the point where the tank would bottom out.
        for _ in 0..100 {
            simulate_water_usage(&mut state, &mut rng);
            assert!(state.tank_level >= 0.0);
        }
    }
}
