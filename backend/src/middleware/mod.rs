//! Middleware for the EnviroMind backend

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
