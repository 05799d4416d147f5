use chrono::{DateTime, Local};

/// One synthetic watering event. Display strings are built once at
/// construction so every consumer renders the same text.
#[derive(Debug, Clone)]
pub struct WateringRecord {
    pub timestamp: DateTime<Local>,
    pub volume: f32,
    pub before: f32,
    pub after: f32,
    pub temperature: f32,
    pub date_display: String,
    pub volume_display: String,
    pub before_display: String,
    pub after_display: String,
    pub temperature_display: String,
}

impl WateringRecord {
    pub fn new(
        timestamp: DateTime<Local>,
        volume: f32,
        before: f32,
        after: f32,
        temperature: f32,
    ) -> Self {
        Self {
            timestamp,
            volume,
            before,
            after,
            temperature,
            date_display: timestamp.format("%d %b, %H:%M").to_string(),
            volume_display: format!("{:.1}L", volume),
            before_display: format!("{:.1}%", before),
            after_display: format!("{:.1}%", after),
            temperature_display: format!("{:.1}°C", temperature),
        }
    }

    /// Day-month part of the date, used for chart axis labels.
    pub fn day_display(&self) -> &str {
        self.date_display
            .split(',')
            .next()
            .unwrap_or(&self.date_display)
    }
}

/// Chronological sequence of watering events, oldest first. Generated once
/// at startup; the periodic simulators never touch it.
#[derive(Debug, Clone)]
pub struct WateringHistory {
    records: Vec<WateringRecord>,
}

impl WateringHistory {
    pub fn new(records: Vec<WateringRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WateringRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&WateringRecord> {
        self.records.last()
    }

    /// The most recent `n` records, still oldest first.
    pub fn recent(&self, n: usize) -> &[WateringRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn total_volume(&self) -> f32 {
        self.records.iter().map(|r| r.volume).sum()
    }
}

/// Chart feed derived from the history: one label/value pair per record,
/// volumes converted to millilitres.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values_ml: Vec<f32>,
}
