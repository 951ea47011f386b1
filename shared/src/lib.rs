//! Shared types and models for the EnviroMind Environmental Health Platform
//!
//! This crate contains the pure AQI and weather-warning core plus the types
//! shared between the backend, frontend (via WASM), and other components of
//! the system. Nothing in here performs I/O.

pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
