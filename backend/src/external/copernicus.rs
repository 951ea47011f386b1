//! Copernicus climate-data client
//!
//! Fetches CAMS air-quality variables and ERA5 single-level weather
//! variables, converting everything to the units the core expects at
//! this boundary so nothing downstream ever sees Kelvin or metres.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use shared::models::{PollutantReading, WeatherReading};

/// Copernicus API client
#[derive(Clone)]
pub struct CopernicusClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// CAMS air-quality response (already-shaped JSON, concentrations in
/// native units)
#[derive(Debug, Deserialize)]
struct CamsResponse {
    pm2p5: Option<f64>,
    pm10: Option<f64>,
    co: Option<f64>,
    no2: Option<f64>,
    o3: Option<f64>,
    so2: Option<f64>,
}

/// ERA5 single-level weather response (SI units)
#[derive(Debug, Deserialize)]
struct Era5Response {
    /// 2m temperature in Kelvin
    t2m: Option<f64>,
    /// 2m dewpoint temperature in Kelvin
    d2m: Option<f64>,
    /// Total precipitation in metres
    tp: Option<f64>,
    /// Surface solar radiation downwards in W/m²
    ssrd: Option<f64>,
}

impl CopernicusClient {
    /// Create a new CopernicusClient
    pub fn new(api_key: String, api_endpoint: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: api_endpoint,
        }
    }

    /// Create a new CopernicusClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current pollutant concentrations by GPS coordinates.
    ///
    /// Variables missing upstream default to zero so the index always has
    /// all six components.
    pub async fn get_air_quality(&self, latitude: f64, longitude: f64) -> AppResult<PollutantReading> {
        let url = format!(
            "{}/air-quality?lat={}&lon={}&key={}",
            self.base_url, latitude, longitude, self.api_key
        );

        let data: CamsResponse = self.fetch(&url).await?;

        Ok(PollutantReading {
            pm2_5: data.pm2p5.unwrap_or(0.0),
            pm10: data.pm10.unwrap_or(0.0),
            co: data.co.unwrap_or(0.0),
            no2: data.no2.unwrap_or(0.0),
            o3: data.o3.unwrap_or(0.0),
            so2: data.so2.unwrap_or(0.0),
        })
    }

    /// Fetch current weather by GPS coordinates.
    ///
    /// Variables missing upstream map to `None`; the warning engine
    /// suppresses the rules that need them.
    pub async fn get_weather(&self, latitude: f64, longitude: f64) -> AppResult<WeatherReading> {
        let url = format!(
            "{}/weather?lat={}&lon={}&key={}",
            self.base_url, latitude, longitude, self.api_key
        );

        let data: Era5Response = self.fetch(&url).await?;

        let temperature = data.t2m.map(kelvin_to_celsius);
        let humidity = match (temperature, data.d2m.map(kelvin_to_celsius)) {
            (Some(temp), Some(dewpoint)) => Some(relative_humidity(temp, dewpoint)),
            _ => None,
        };

        Ok(WeatherReading {
            temperature,
            humidity,
            precipitation: data.tp.map(metres_to_millimetres),
            uv_index: data.ssrd.map(uv_index_from_ssrd),
            observed_at: Utc::now(),
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| AppError::ClimateServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Copernicus API error: {} - {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Copernicus response: {}", e))
        })
    }
}

/// Convert Kelvin to degrees Celsius
fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Convert metres of accumulated precipitation to millimetres
fn metres_to_millimetres(metres: f64) -> f64 {
    metres * 1000.0
}

/// Relative humidity from temperature and dewpoint via the Magnus formula,
/// clamped to the physical 0-100 range
fn relative_humidity(temp_c: f64, dewpoint_c: f64) -> f64 {
    fn saturation_vapour_pressure(t: f64) -> f64 {
        6.112 * (17.67 * t / (t + 243.5)).exp()
    }

    let rh = saturation_vapour_pressure(dewpoint_c) / saturation_vapour_pressure(temp_c) * 100.0;
    rh.clamp(0.0, 100.0)
}

/// Approximate UV index from surface solar radiation downwards, clamped
/// to the 0-15 scale
fn uv_index_from_ssrd(ssrd: f64) -> f64 {
    (ssrd / 25.0).clamp(0.0, 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_to_celsius() {
        assert!((kelvin_to_celsius(273.15) - 0.0).abs() < 1e-9);
        assert!((kelvin_to_celsius(308.15) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_metres_to_millimetres() {
        assert!((metres_to_millimetres(0.015) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_humidity_saturated_air() {
        // Dewpoint equal to temperature means saturation
        let rh = relative_humidity(20.0, 20.0);
        assert!((rh - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_humidity_dry_air() {
        let rh = relative_humidity(30.0, 5.0);
        assert!(rh > 0.0 && rh < 50.0);
    }

    #[test]
    fn test_relative_humidity_clamped() {
        // Dewpoint above temperature is unphysical input; output stays in range
        let rh = relative_humidity(10.0, 20.0);
        assert_eq!(rh, 100.0);
    }

    #[test]
    fn test_uv_index_from_ssrd() {
        assert!((uv_index_from_ssrd(150.0) - 6.0).abs() < 1e-9);
        assert_eq!(uv_index_from_ssrd(1000.0), 15.0);
        assert_eq!(uv_index_from_ssrd(0.0), 0.0);
    }
}
