//! External service integrations

pub mod copernicus;
