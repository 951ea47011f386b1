//! Configuration management for the EnviroMind platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with ENVIRO_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::models::WarningThresholds;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT authentication configuration
    pub jwt: JwtConfig,

    /// Copernicus climate-data service configuration
    pub copernicus: CopernicusConfig,

    /// Weather-warning threshold configuration
    pub alerts: AlertsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens
    pub secret: String,

    /// Access token expiration in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiration in seconds
    pub refresh_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CopernicusConfig {
    /// Copernicus API endpoint
    pub api_endpoint: String,

    /// Copernicus API key; empty means no client is configured
    pub api_key: String,
}

/// Per-deployment warning thresholds
#[derive(Debug, Deserialize, Clone)]
pub struct AlertsConfig {
    /// Temperature above which a heat wave warning fires (°C)
    pub heat_wave_temp_threshold: f64,

    /// Temperature below which a cold wave warning fires (°C)
    pub cold_wave_temp_threshold: f64,

    /// UV index considered high
    pub uv_index_high_threshold: f64,
}

impl From<&AlertsConfig> for WarningThresholds {
    fn from(alerts: &AlertsConfig) -> Self {
        WarningThresholds {
            heat_wave_temp: alerts.heat_wave_temp_threshold,
            cold_wave_temp: alerts.cold_wave_temp_threshold,
            uv_index_high: alerts.uv_index_high_threshold,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("ENVIRO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("jwt.access_token_expiry", 3600)?
            .set_default("jwt.refresh_token_expiry", 604800)?
            .set_default("copernicus.api_endpoint", "https://ads.atmosphere.copernicus.eu/api")?
            .set_default("copernicus.api_key", "")?
            .set_default("alerts.heat_wave_temp_threshold", 35.0)?
            .set_default("alerts.cold_wave_temp_threshold", 0.0)?
            .set_default("alerts.uv_index_high_threshold", 6.0)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ENVIRO_ prefix)
            .add_source(
                Environment::with_prefix("ENVIRO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_config_maps_to_thresholds() {
        let alerts = AlertsConfig {
            heat_wave_temp_threshold: 32.0,
            cold_wave_temp_threshold: -2.0,
            uv_index_high_threshold: 5.0,
        };
        let thresholds = WarningThresholds::from(&alerts);
        assert_eq!(thresholds.heat_wave_temp, 32.0);
        assert_eq!(thresholds.cold_wave_temp, -2.0);
        assert_eq!(thresholds.uv_index_high, 5.0);
    }
}
