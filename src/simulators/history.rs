use chrono::{DateTime, Duration, Local};
use rand::Rng;

use crate::models::watering::{WateringHistory, WateringRecord};
use crate::rng::SimRng;

/// Number of synthetic watering events kept in the history.
pub const HISTORY_LEN: usize = 24;
/// Simulated spacing between consecutive events.
const INTERVAL_HOURS: i64 = 12;

/// Build the synthetic watering history: `HISTORY_LEN` records spaced
/// `INTERVAL_HOURS` apart, oldest first, newest stamped at `now`.
///
/// The tank refills on every event, so `after` always lands at or above
/// `before` and both stay within 100%.
pub fn generate(now: DateTime<Local>, rng: &mut SimRng) -> WateringHistory {
    let mut records = Vec::with_capacity(HISTORY_LEN);

    for i in (0..HISTORY_LEN).rev() {
        let timestamp = now - Duration::hours(i as i64 * INTERVAL_HOURS);
        // Volumes are reported at one-decimal precision, so round here
        // rather than at display time.
        let volume = (rng.0.gen_range(0.3..0.7_f32) * 10.0).round() / 10.0;
        let before = rng.0.gen_range(30.0..80.0_f32);
        let after = (before + rng.0.gen_range(20.0..35.0_f32)).min(100.0);
        let temperature = rng.0.gen_range(20.0..26.0_f32);

        records.push(WateringRecord::new(
            timestamp,
            volume,
            before,
            after,
            temperature,
        ));
    }

    WateringHistory::new(records)
}
