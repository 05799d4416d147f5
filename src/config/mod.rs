use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub file: String,
    pub enabled: bool,
    pub save_to_file: bool,
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_height")]
    pub height: u16,
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_width() -> u16 {
    640
}

fn default_height() -> u16 {
    480
}

fn default_font() -> String {
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    #[serde(default = "default_water_interval")]
    pub water_interval: u64,
    #[serde(default = "default_temp_interval")]
    pub temp_interval: u64,
    /// Fixed RNG seed; omit for a fresh simulation on every start.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_water_interval() -> u64 {
    15
}

fn default_temp_interval() -> u64 {
    20
}

/// Room dimensions for the CO2 estimate. All three must be present and
/// positive for the estimate to be computed.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RoomConfig {
    #[serde(default)]
    pub length: Option<f32>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlantConfig {
    /// Catalog id of the plant to preselect; empty for none.
    #[serde(default)]
    pub selected: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(rename = "DASHBOARD")]
    pub dashboard: DashboardConfig,
    #[serde(rename = "SIMULATION", default)]
    pub simulation: SimulationConfig,
    #[serde(rename = "ROOM", default)]
    pub room: RoomConfig,
    #[serde(rename = "PLANT", default)]
    pub plant: PlantConfig,
    #[serde(rename = "LOGGING", default)]
    pub logging: LoggingConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            file: "dashboard.png".to_string(),
            enabled: true,
            save_to_file: true,
            width: default_width(),
            height: default_height(),
            font: default_font(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            water_interval: default_water_interval(),
            temp_interval: default_temp_interval(),
            seed: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            simulation: SimulationConfig::default(),
            room: RoomConfig::default(),
            plant: PlantConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(
                File::with_name(config_path.to_str().unwrap_or(""))
                    .format(config::FileFormat::Ini),
            )
            .build()
            .context(format!(
                "Failed to load config from {}",
                config_path.display()
            ))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        // Build the config string
        let mut config_str = String::new();

        // DASHBOARD section
        config_str.push_str(&format!(
            "[DASHBOARD]\nfile = {}\nenabled = {}\nsave_to_file = {}\nwidth = {}\nheight = {}\nfont = {}\n\n",
            self.dashboard.file,
            self.dashboard.enabled,
            self.dashboard.save_to_file,
            self.dashboard.width,
            self.dashboard.height,
            self.dashboard.font
        ));

        // SIMULATION section
        config_str.push_str("[SIMULATION]\n");
        config_str.push_str(&format!(
            "water_interval = {}\ntemp_interval = {}\n",
            self.simulation.water_interval, self.simulation.temp_interval
        ));
        if let Some(seed) = self.simulation.seed {
            config_str.push_str(&format!("seed = {}\n", seed));
        }
        config_str.push('\n');

        // ROOM section
        config_str.push_str("[ROOM]\n");
        if let Some(length) = self.room.length {
            config_str.push_str(&format!("length = {}\n", length));
        }
        if let Some(width) = self.room.width {
            config_str.push_str(&format!("width = {}\n", width));
        }
        if let Some(height) = self.room.height {
            config_str.push_str(&format!("height = {}\n", height));
        }
        config_str.push('\n');

        // PLANT section
        if !self.plant.selected.is_empty() {
            config_str.push_str(&format!("[PLANT]\nselected = {}\n\n", self.plant.selected));
        }

        // LOGGING section
        config_str.push_str(&format!("[LOGGING]\nlevel = {}\n", self.logging.level));

        fs::write(config_path, config_str).context(format!(
            "Failed to save config to {}",
            config_path.display()
        ))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.dashboard.file, "dashboard.png");
        assert_eq!(config.dashboard.enabled, true);
        assert_eq!(config.dashboard.save_to_file, true);
        assert_eq!(config.dashboard.width, 640);
        assert_eq!(config.dashboard.height, 480);
        assert_eq!(config.simulation.water_interval, 15);
        assert_eq!(config.simulation.temp_interval, 20);
        assert_eq!(config.simulation.seed, None);
        assert!(config.room.length.is_none());
        assert_eq!(config.plant.selected, "");
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = "[DASHBOARD]\nfile = \"test.png\"\nenabled = true\nsave_to_file = false\nwidth = 800\nheight = 600\n\n[SIMULATION]\nwater_interval = 5\ntemp_interval = 7\nseed = 42\n\n[ROOM]\nlength = 4.0\nwidth = 3.0\nheight = 2.5\n\n[PLANT]\nselected = \"rose\"\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config_path = temp_file.path();

        let config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(config.dashboard.file, "test.png");
        assert_eq!(config.dashboard.enabled, true);
        assert_eq!(config.dashboard.save_to_file, false);
        assert_eq!(config.dashboard.width, 800);
        assert_eq!(config.dashboard.height, 600);
        assert_eq!(config.simulation.water_interval, 5);
        assert_eq!(config.simulation.temp_interval, 7);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.room.length, Some(4.0));
        assert_eq!(config.room.width, Some(3.0));
        assert_eq!(config.room.height, Some(2.5));
        assert_eq!(config.plant.selected, "rose");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content =
            "[DASHBOARD]\nfile = \"minimal.png\"\nenabled = false\nsave_to_file = false\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.dashboard.file, "minimal.png");
        assert_eq!(config.simulation.water_interval, 15);
        assert_eq!(config.simulation.seed, None);
        assert!(config.room.height.is_none());
        assert_eq!(config.plant.selected, "");
    }

    #[test]
    fn test_save_config() {
        let mut config = AppConfig::default();
        config.dashboard.file = "saved.png".to_string();
        config.dashboard.width = 1024;
        config.dashboard.height = 768;
        config.simulation.water_interval = 30;
        config.simulation.seed = Some(7);
        config.room.length = Some(4.0);
        config.room.width = Some(3.0);
        config.room.height = Some(2.5);
        config.plant.selected = "lavender".to_string();

        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        config.save(config_path).unwrap();

        let loaded_config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(loaded_config.dashboard.file, "saved.png");
        assert_eq!(loaded_config.dashboard.width, 1024);
        assert_eq!(loaded_config.dashboard.height, 768);
        assert_eq!(loaded_config.simulation.water_interval, 30);
        assert_eq!(loaded_config.simulation.seed, Some(7));
        assert_eq!(loaded_config.room.length, Some(4.0));
        assert_eq!(loaded_config.plant.selected, "lavender");
    }

    #[test]
    fn test_log_level_mapping() {
        let mut config = AppConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
        config.logging.level = "nonsense".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }
}
