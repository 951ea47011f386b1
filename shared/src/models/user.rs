//! User account and health-preference models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Coordinates;

/// A user account on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-user location and health preferences driving personalized alerts
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserPreferences {
    /// Home location used when a request gives no coordinates
    pub location: Option<Coordinates>,
    /// Free-form condition tags, e.g. "asthma"
    pub health_conditions: Vec<String>,
    /// Sensitivity level per trigger, 0 meaning none
    pub sensitivities: HashMap<String, i32>,
    /// Per-alert numeric overrides, e.g. a custom AQI notification floor
    pub alert_preferences: HashMap<String, f64>,
}
