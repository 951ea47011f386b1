//! Profile service for per-user location and health preferences

use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::UserPreferences;
use shared::types::Coordinates;
use shared::validation::validate_coordinates;

/// Profile service for managing user preferences
#[derive(Clone)]
pub struct ProfileService {
    db: PgPool,
}

/// Preferences record as stored
#[derive(Debug, FromRow)]
struct PreferencesRow {
    latitude: Option<f64>,
    longitude: Option<f64>,
    health_conditions: Value,
    sensitivities: Value,
    alert_preferences: Value,
}

impl PreferencesRow {
    fn into_preferences(self) -> AppResult<UserPreferences> {
        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Ok(UserPreferences {
            location,
            health_conditions: serde_json::from_value(self.health_conditions)
                .map_err(|e| AppError::Internal(format!("Corrupt health_conditions: {}", e)))?,
            sensitivities: serde_json::from_value(self.sensitivities)
                .map_err(|e| AppError::Internal(format!("Corrupt sensitivities: {}", e)))?,
            alert_preferences: serde_json::from_value(self.alert_preferences)
                .map_err(|e| AppError::Internal(format!("Corrupt alert_preferences: {}", e)))?,
        })
    }
}

impl ProfileService {
    /// Create a new ProfileService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get the preferences for a user
    pub async fn get_preferences(&self, user_id: Uuid) -> AppResult<UserPreferences> {
        let row = sqlx::query_as::<_, PreferencesRow>(
            r#"
            SELECT latitude, longitude, health_conditions, sensitivities, alert_preferences
            FROM user_preferences
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User preferences".to_string()))?;

        row.into_preferences()
    }

    /// Replace the preferences for a user
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> AppResult<UserPreferences> {
        if let Some(location) = &preferences.location {
            if let Err(message) = validate_coordinates(location) {
                return Err(AppError::Validation {
                    field: "location".to_string(),
                    message: message.to_string(),
                });
            }
        }

        let health_conditions = serde_json::to_value(&preferences.health_conditions)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let sensitivities = serde_json::to_value(&preferences.sensitivities)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let alert_preferences = serde_json::to_value(&preferences.alert_preferences)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row = sqlx::query_as::<_, PreferencesRow>(
            r#"
            UPDATE user_preferences
            SET latitude = $2,
                longitude = $3,
                health_conditions = $4,
                sensitivities = $5,
                alert_preferences = $6,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING latitude, longitude, health_conditions, sensitivities, alert_preferences
            "#,
        )
        .bind(user_id)
        .bind(preferences.location.map(|l| l.latitude))
        .bind(preferences.location.map(|l| l.longitude))
        .bind(&health_conditions)
        .bind(&sensitivities)
        .bind(&alert_preferences)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User preferences".to_string()))?;

        row.into_preferences()
    }
}
