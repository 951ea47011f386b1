//! Business logic services for the EnviroMind platform

pub mod auth;
pub mod environmental;
pub mod profile;

pub use auth::AuthService;
pub use environmental::EnvironmentalService;
pub use profile::ProfileService;
