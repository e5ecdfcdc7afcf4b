use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get a copy of the application configuration, loading `weatherballs.toml`
/// from the working directory on first use. A missing or broken file logs a
/// warning and falls back to the compiled-in defaults.
pub fn get_config() -> AppConfig {
    CONFIG
        .get_or_init(|| match AppConfig::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default configuration: {err}");
                AppConfig::default()
            }
        })
        .clone()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {CONFIG_FILE}: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse {CONFIG_FILE}: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub balls: BallConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Pixels per second of launch speed per mph of wind.
    pub speed_scale: f32,
    pub max_speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Upper bound on concurrent in-flight requests during a fetch batch.
    pub max_in_flight: usize,
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            balls: BallConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_BALL_RADIUS,
            speed_scale: DEFAULT_SPEED_SCALE,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}
