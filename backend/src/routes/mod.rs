//! API route definitions

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, environmental, health, profile};
use crate::middleware::auth_middleware;
use crate::AppState;

/// Build all API routes under /api/v1
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/auth", auth_routes())
        .nest("/environmental", environmental_routes())
        .nest("/users", user_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
}

fn environmental_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/air-quality/:latitude/:longitude",
            get(environmental::get_air_quality),
        )
        .route(
            "/weather-warnings/:latitude/:longitude",
            get(environmental::get_weather_warnings),
        )
        .route(
            "/status/:latitude/:longitude",
            get(environmental::get_environmental_status),
        )
        .route(
            "/observations",
            get(environmental::list_observations).post(environmental::store_observation),
        )
        .route(
            "/observations/latest",
            get(environmental::get_latest_observation),
        )
        .route(
            "/observations/nearby",
            get(environmental::get_nearby_observations),
        )
        .route(
            "/observations/:observation_id",
            get(environmental::get_observation),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/me/preferences",
            get(profile::get_preferences).put(profile::update_preferences),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}
