//! Environmental observation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AqiResult, PollutantReading, Warning, WeatherReading};
use crate::types::Coordinates;

/// A persisted environmental observation for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalObservation {
    pub id: Uuid,
    pub location: Coordinates,
    pub pollutants: Option<PollutantReading>,
    pub aqi: Option<AqiResult>,
    pub weather: Option<WeatherReading>,
    pub warnings: Vec<Warning>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Combined current conditions for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalStatus {
    pub location: Coordinates,
    pub pollutants: PollutantReading,
    pub aqi: AqiResult,
    pub weather: WeatherReading,
    pub warnings: Vec<Warning>,
    pub timestamp: DateTime<Utc>,
}
