//! Domain models for the EnviroMind platform

mod air_quality;
mod environmental;
mod user;
mod warning;
mod weather;

pub use air_quality::*;
pub use environmental::*;
pub use user::*;
pub use warning::*;
pub use weather::*;
