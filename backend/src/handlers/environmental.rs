//! Environmental data handlers: air quality, weather warnings, observations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::copernicus::CopernicusClient;
use crate::handlers::ApiResponse;
use crate::services::environmental::{EnvironmentalService, StoreObservationInput};
use crate::AppState;
use shared::models::{
    AqiResult, EnvironmentalObservation, EnvironmentalStatus, PollutantReading, Warning,
    WarningThresholds, WeatherReading,
};
use shared::types::Coordinates;
use shared::validation::validate_coordinates;

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: i32,
}

fn default_max_distance_km() -> f64 {
    50.0
}

fn default_max_age_hours() -> i32 {
    24
}

#[derive(Debug, Serialize)]
pub struct AirQualityResponse {
    pub location: Coordinates,
    pub pollutants: PollutantReading,
    pub aqi: AqiResult,
}

#[derive(Debug, Serialize)]
pub struct WeatherWarningsResponse {
    pub location: Coordinates,
    pub weather: WeatherReading,
    pub warnings: Vec<Warning>,
}

fn checked_location(latitude: f64, longitude: f64) -> AppResult<Coordinates> {
    let location = Coordinates::new(latitude, longitude);
    if let Err(message) = validate_coordinates(&location) {
        return Err(AppError::Validation {
            field: "location".to_string(),
            message: message.to_string(),
        });
    }
    Ok(location)
}

fn service(state: &AppState) -> EnvironmentalService {
    let thresholds = WarningThresholds::from(&state.config.alerts);

    if state.config.copernicus.api_key.is_empty() {
        EnvironmentalService::new(state.db.clone(), thresholds)
    } else {
        let client = CopernicusClient::new(
            state.config.copernicus.api_key.clone(),
            state.config.copernicus.api_endpoint.clone(),
        );
        EnvironmentalService::with_client(state.db.clone(), client, thresholds)
    }
}

/// GET /environmental/air-quality/:lat/:lon
pub async fn get_air_quality(
    State(state): State<AppState>,
    Path((latitude, longitude)): Path<(f64, f64)>,
) -> AppResult<Json<ApiResponse<AirQualityResponse>>> {
    let location = checked_location(latitude, longitude)?;
    let (pollutants, aqi) = service(&state).air_quality(location).await?;

    Ok(Json(ApiResponse::success(AirQualityResponse {
        location,
        pollutants,
        aqi,
    })))
}

/// GET /environmental/weather-warnings/:lat/:lon
pub async fn get_weather_warnings(
    State(state): State<AppState>,
    Path((latitude, longitude)): Path<(f64, f64)>,
) -> AppResult<Json<ApiResponse<WeatherWarningsResponse>>> {
    let location = checked_location(latitude, longitude)?;
    let (weather, warnings) = service(&state).weather_warnings(location).await?;

    Ok(Json(ApiResponse::success(WeatherWarningsResponse {
        location,
        weather,
        warnings,
    })))
}

/// GET /environmental/status/:lat/:lon
pub async fn get_environmental_status(
    State(state): State<AppState>,
    Path((latitude, longitude)): Path<(f64, f64)>,
) -> AppResult<Json<ApiResponse<EnvironmentalStatus>>> {
    let location = checked_location(latitude, longitude)?;
    let status = service(&state).environmental_status(location).await?;

    Ok(Json(ApiResponse::success(status)))
}

/// POST /environmental/observations
pub async fn store_observation(
    State(state): State<AppState>,
    Json(input): Json<StoreObservationInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<EnvironmentalObservation>>)> {
    checked_location(input.latitude, input.longitude)?;
    let observation = service(&state).store_observation(input).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(observation))))
}

/// GET /environmental/observations?start_date=..&end_date=..
pub async fn list_observations(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<ApiResponse<Vec<EnvironmentalObservation>>>> {
    if query.end_date < query.start_date {
        return Err(AppError::Validation {
            field: "end_date".to_string(),
            message: "end_date must not precede start_date".to_string(),
        });
    }

    let observations = service(&state)
        .get_observations_for_range(query.start_date, query.end_date)
        .await?;

    Ok(Json(ApiResponse::success(observations)))
}

/// GET /environmental/observations/latest?latitude=..&longitude=..
pub async fn get_latest_observation(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ApiResponse<EnvironmentalObservation>>> {
    let location = checked_location(query.latitude, query.longitude)?;
    let observation = service(&state).get_latest_for_location(location).await?;

    Ok(Json(ApiResponse::success(observation)))
}

/// GET /environmental/observations/nearby
pub async fn get_nearby_observations(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<ApiResponse<Vec<EnvironmentalObservation>>>> {
    let location = checked_location(query.latitude, query.longitude)?;

    if query.max_distance_km <= 0.0 {
        return Err(AppError::Validation {
            field: "max_distance_km".to_string(),
            message: "max_distance_km must be positive".to_string(),
        });
    }

    let observations = service(&state)
        .get_observations_near(location, query.max_distance_km, query.max_age_hours)
        .await?;

    Ok(Json(ApiResponse::success(observations)))
}

/// GET /environmental/observations/:observation_id
pub async fn get_observation(
    State(state): State<AppState>,
    Path(observation_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<EnvironmentalObservation>>> {
    let observation = service(&state).get_observation(observation_id).await?;

    Ok(Json(ApiResponse::success(observation)))
}
