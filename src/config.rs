//! Configuration management for Desk Insights server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream desk booking service
#[derive(Debug, Deserialize, Clone)]
pub struct BookingApiConfig {
    /// GetDesks endpoint
    pub url: String,
    /// Sent verbatim as `buildingId`; the service accepts an empty value
    #[serde(default)]
    pub building_id: String,
    pub user_agent: String,
    /// Per-request timeout, unset means wait indefinitely
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// CSV snapshot of all bookings, read at startup and rewritten on save
    pub bookings_csv: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub booking_api: BookingApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables, e.g. DESKBOOK_BOOKING_API__BUILDING_ID
            .add_source(environment())
            // Override upstream endpoint from BOOKING_API_URL env var if present
            .set_override_option("booking_api.url", env::var("BOOKING_API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }

    pub fn is_json_logging(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }
}

/// `DESKBOOK_` variables, with `__` between section and key
fn environment() -> Environment {
    Environment::with_prefix("DESKBOOK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            booking_api: BookingApiConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for BookingApiConfig {
    fn default() -> Self {
        Self {
            url: "https://unityplace.smarttwin.app/UnityPlace/mobile-api/v1/bookingavailability/GetDesks"
                .to_string(),
            building_id: String::new(),
            user_agent: format!("desk-insights/{}", env!("CARGO_PKG_VERSION")),
            timeout_seconds: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            bookings_csv: PathBuf::from("all_bookings.csv"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
