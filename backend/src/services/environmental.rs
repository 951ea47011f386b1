//! Environmental data service for observations, AQI, and weather warnings

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::copernicus::CopernicusClient;
use shared::models::{
    compute_aqi, AqiResult, EnvironmentalObservation, EnvironmentalStatus, PollutantReading,
    Warning, WarningEngine, WarningThresholds, WeatherReading,
};
use shared::types::Coordinates;

/// Environmental data service
#[derive(Clone)]
pub struct EnvironmentalService {
    db: PgPool,
    copernicus: Option<CopernicusClient>,
    engine: WarningEngine,
}

/// Input for storing an observation
#[derive(Debug, Deserialize)]
pub struct StoreObservationInput {
    pub latitude: f64,
    pub longitude: f64,
    pub pollutants: Option<PollutantReading>,
    pub weather: Option<WeatherReading>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Observation record as stored
#[derive(Debug, FromRow)]
struct ObservationRow {
    id: Uuid,
    latitude: f64,
    longitude: f64,
    pollutants: Option<Value>,
    aqi: Option<Value>,
    weather: Option<Value>,
    warnings: Value,
    recorded_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

fn decode<T: serde::de::DeserializeOwned>(value: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Internal(format!("Corrupt {} payload: {}", what, e)))
}

impl ObservationRow {
    fn into_observation(self) -> AppResult<EnvironmentalObservation> {
        Ok(EnvironmentalObservation {
            id: self.id,
            location: Coordinates::new(self.latitude, self.longitude),
            pollutants: self
                .pollutants
                .map(|v| decode(v, "pollutants"))
                .transpose()?,
            aqi: self.aqi.map(|v| decode(v, "aqi")).transpose()?,
            weather: self.weather.map(|v| decode(v, "weather")).transpose()?,
            warnings: decode(self.warnings, "warnings")?,
            recorded_at: self.recorded_at,
            created_at: self.created_at,
        })
    }
}

const OBSERVATION_COLUMNS: &str =
    "id, latitude, longitude, pollutants, aqi, weather, warnings, recorded_at, created_at";

impl EnvironmentalService {
    /// Create a new EnvironmentalService instance
    pub fn new(db: PgPool, thresholds: WarningThresholds) -> Self {
        Self {
            db,
            copernicus: None,
            engine: WarningEngine::new(thresholds),
        }
    }

    /// Create a new EnvironmentalService with a Copernicus client
    pub fn with_client(
        db: PgPool,
        client: CopernicusClient,
        thresholds: WarningThresholds,
    ) -> Self {
        Self {
            db,
            copernicus: Some(client),
            engine: WarningEngine::new(thresholds),
        }
    }

    /// Store an environmental observation.
    ///
    /// AQI and warnings are derived here from whatever readings the input
    /// carries; callers never submit derived values themselves.
    pub async fn store_observation(
        &self,
        input: StoreObservationInput,
    ) -> AppResult<EnvironmentalObservation> {
        let recorded_at = input.recorded_at.unwrap_or_else(Utc::now);

        let aqi = input
            .pollutants
            .as_ref()
            .map(compute_aqi)
            .transpose()
            .map_err(AppError::InvalidReading)?;

        let warnings = match &input.weather {
            Some(weather) => self.engine.compute(weather, recorded_at.date_naive())?,
            None => Vec::new(),
        };

        self.insert_observation(
            Coordinates::new(input.latitude, input.longitude),
            input.pollutants,
            aqi,
            input.weather,
            warnings,
            recorded_at,
        )
        .await
    }

    /// Get an observation by ID
    pub async fn get_observation(&self, observation_id: Uuid) -> AppResult<EnvironmentalObservation> {
        let row = sqlx::query_as::<_, ObservationRow>(&format!(
            "SELECT {} FROM environmental_observations WHERE id = $1",
            OBSERVATION_COLUMNS
        ))
        .bind(observation_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Environmental observation".to_string()))?;

        row.into_observation()
    }

    /// Get observations for a date range
    pub async fn get_observations_for_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<EnvironmentalObservation>> {
        let rows = sqlx::query_as::<_, ObservationRow>(&format!(
            r#"
            SELECT {}
            FROM environmental_observations
            WHERE recorded_at >= $1::date
              AND recorded_at < ($2::date + INTERVAL '1 day')
            ORDER BY recorded_at DESC
            "#,
            OBSERVATION_COLUMNS
        ))
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(ObservationRow::into_observation).collect()
    }

    /// Get the most recent observation at a location
    pub async fn get_latest_for_location(
        &self,
        location: Coordinates,
    ) -> AppResult<EnvironmentalObservation> {
        let row = sqlx::query_as::<_, ObservationRow>(&format!(
            r#"
            SELECT {}
            FROM environmental_observations
            WHERE ABS(latitude - $1) < 0.01
              AND ABS(longitude - $2) < 0.01
            ORDER BY recorded_at DESC
            LIMIT 1
            "#,
            OBSERVATION_COLUMNS
        ))
        .bind(location.latitude)
        .bind(location.longitude)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Environmental observation".to_string()))?;

        row.into_observation()
    }

    /// Get recent observations near a location.
    ///
    /// Distance is a flat-earth box approximation: one degree of latitude is
    /// ~111 km, one degree of longitude ~102 km at the latitudes we serve.
    pub async fn get_observations_near(
        &self,
        location: Coordinates,
        max_distance_km: f64,
        max_age_hours: i32,
    ) -> AppResult<Vec<EnvironmentalObservation>> {
        let cutoff = Utc::now() - Duration::hours(max_age_hours as i64);

        let rows = sqlx::query_as::<_, ObservationRow>(&format!(
            r#"
            SELECT {}
            FROM environmental_observations
            WHERE recorded_at > $1
              AND SQRT(
                  POWER((latitude - $2) * 111, 2) +
                  POWER((longitude - $3) * 102, 2)
              ) <= $4
            ORDER BY recorded_at DESC
            "#,
            OBSERVATION_COLUMNS
        ))
        .bind(cutoff)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(max_distance_km)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(ObservationRow::into_observation).collect()
    }

    /// Fetch current air quality for a location, persist it, return the index
    pub async fn air_quality(
        &self,
        location: Coordinates,
    ) -> AppResult<(PollutantReading, AqiResult)> {
        let client = self.client()?;
        let pollutants = client
            .get_air_quality(location.latitude, location.longitude)
            .await?;
        let aqi = compute_aqi(&pollutants).map_err(AppError::InvalidReading)?;

        self.insert_observation(
            location,
            Some(pollutants),
            Some(aqi),
            None,
            Vec::new(),
            Utc::now(),
        )
        .await?;

        Ok((pollutants, aqi))
    }

    /// Fetch current weather for a location, persist it, return the warnings
    pub async fn weather_warnings(
        &self,
        location: Coordinates,
    ) -> AppResult<(WeatherReading, Vec<Warning>)> {
        let client = self.client()?;
        let weather = client
            .get_weather(location.latitude, location.longitude)
            .await?;
        let warnings = self
            .engine
            .compute(&weather, weather.observed_at.date_naive())?;

        self.insert_observation(
            location,
            None,
            None,
            Some(weather),
            warnings.clone(),
            weather.observed_at,
        )
        .await?;

        Ok((weather, warnings))
    }

    /// Fetch air quality and weather concurrently, run the pure core over
    /// both, persist one combined observation, and return the status.
    pub async fn environmental_status(
        &self,
        location: Coordinates,
    ) -> AppResult<EnvironmentalStatus> {
        let client = self.client()?;

        let (pollutants, weather) = tokio::try_join!(
            client.get_air_quality(location.latitude, location.longitude),
            client.get_weather(location.latitude, location.longitude),
        )?;

        let aqi = compute_aqi(&pollutants).map_err(AppError::InvalidReading)?;
        let warnings = self
            .engine
            .compute(&weather, weather.observed_at.date_naive())?;
        let timestamp = Utc::now();

        self.insert_observation(
            location,
            Some(pollutants),
            Some(aqi),
            Some(weather),
            warnings.clone(),
            weather.observed_at,
        )
        .await?;

        Ok(EnvironmentalStatus {
            location,
            pollutants,
            aqi,
            weather,
            warnings,
            timestamp,
        })
    }

    fn client(&self) -> AppResult<&CopernicusClient> {
        self.copernicus
            .as_ref()
            .ok_or_else(|| AppError::Configuration("Copernicus client not configured".to_string()))
    }

    async fn insert_observation(
        &self,
        location: Coordinates,
        pollutants: Option<PollutantReading>,
        aqi: Option<AqiResult>,
        weather: Option<WeatherReading>,
        warnings: Vec<Warning>,
        recorded_at: DateTime<Utc>,
    ) -> AppResult<EnvironmentalObservation> {
        let pollutants_json = pollutants
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let aqi_json = aqi
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let weather_json = weather
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let warnings_json =
            serde_json::to_value(&warnings).map_err(|e| AppError::Internal(e.to_string()))?;

        let row = sqlx::query_as::<_, ObservationRow>(&format!(
            r#"
            INSERT INTO environmental_observations (
                latitude, longitude, pollutants, aqi, weather, warnings, recorded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            OBSERVATION_COLUMNS
        ))
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(pollutants_json)
        .bind(aqi_json)
        .bind(weather_json)
        .bind(&warnings_json)
        .bind(recorded_at)
        .fetch_one(&self.db)
        .await?;

        row.into_observation()
    }
}
