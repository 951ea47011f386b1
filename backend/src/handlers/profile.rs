//! User profile handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::handlers::ApiResponse;
use crate::middleware::CurrentUser;
use crate::services::profile::ProfileService;
use crate::AppState;
use shared::models::UserPreferences;

/// GET /users/me/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<ApiResponse<UserPreferences>>> {
    let service = ProfileService::new(state.db.clone());
    let preferences = service.get_preferences(user.user_id).await?;

    Ok(Json(ApiResponse::success(preferences)))
}

/// PUT /users/me/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(preferences): Json<UserPreferences>,
) -> AppResult<Json<ApiResponse<UserPreferences>>> {
    let service = ProfileService::new(state.db.clone());
    let updated = service.update_preferences(user.user_id, preferences).await?;

    Ok(Json(ApiResponse::success(updated)))
}
