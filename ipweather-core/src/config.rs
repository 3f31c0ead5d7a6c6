use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::band::TemperatureBand;

/// Colors used to tint the temperature, one per band.
///
/// Defaults are chosen to contrast well against a white background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandPalette {
    pub red: String,
    pub orange: String,
    pub yellow: String,
    pub green: String,
    pub blue: String,
    pub violet: String,
}

impl Default for BandPalette {
    fn default() -> Self {
        Self {
            red: "#FF0000".to_string(),
            orange: "#E68200".to_string(),
            yellow: "#A6A600".to_string(),
            green: "#008000".to_string(),
            blue: "#0000FF".to_string(),
            violet: "#400040".to_string(),
        }
    }
}

impl BandPalette {
    pub fn color(&self, band: TemperatureBand) -> &str {
        match band {
            TemperatureBand::Red => &self.red,
            TemperatureBand::Orange => &self.orange,
            TemperatureBand::Yellow => &self.yellow,
            TemperatureBand::Green => &self.green,
            TemperatureBand::Blue => &self.blue,
            TemperatureBand::Violet => &self.violet,
        }
    }
}

/// Widget configuration, built once at startup and shared read-only.
///
/// Example TOML (every key is optional):
/// ```toml
/// refresh_period_ms = 60000
/// service_host = "https://weathersync.herokuapp.com"
///
/// [palette]
/// red = "#FF0000"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub refresh_period_ms: u64,
    pub service_host: String,
    pub location_path: String,
    pub weather_path: String,
    pub icon_base_url: String,
    /// Resolved relative to the page, not the icon host.
    pub default_icon: String,
    pub palette: BandPalette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_period_ms: 60_000,
            service_host: "https://weathersync.herokuapp.com".to_string(),
            location_path: "/ip/".to_string(),
            weather_path: "/weather/".to_string(),
            icon_base_url: "http://openweathermap.org/img/w/".to_string(),
            default_icon: "none.png".to_string(),
            palette: BandPalette::default(),
        }
    }
}

impl Config {
    /// Config pointing both services at `host`, everything else default.
    pub fn with_service_host(host: impl Into<String>) -> Self {
        Self {
            service_host: host.into(),
            ..Self::default()
        }
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_period_ms)
    }

    pub fn location_url(&self) -> String {
        format!("{}{}", self.service_host, self.location_path)
    }

    /// Coordinates are joined with a literal comma and are not URL-encoded.
    pub fn weather_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}{}{},{}",
            self.service_host,
            self.weather_path,
            coordinate(latitude),
            coordinate(longitude)
        )
    }

    pub fn icon_url(&self, icon_name: &str) -> String {
        format!("{}{}.png", self.icon_base_url, icon_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_period_ms == 0 {
            bail!("refresh_period_ms must be greater than zero");
        }
        if self.service_host.is_empty() {
            bail!("service_host must not be empty");
        }
        Ok(())
    }

    /// Load config from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "ipweather", "ipweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// `-0.0` prints as `-0`; the services expect `0`.
fn coordinate(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
