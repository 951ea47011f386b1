//! HTTP request handlers

pub mod auth;
pub mod environmental;
pub mod health;
pub mod profile;

use serde::Serialize;

/// Standard success envelope for data-carrying responses
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}
