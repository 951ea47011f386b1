//! Validation utilities for the EnviroMind platform

use crate::error::InvalidReading;
use crate::models::WeatherReading;
use crate::types::Coordinates;

// ============================================================================
// Environmental Validations
// ============================================================================

/// Validate coordinates are within the WGS84 ranges
pub fn validate_coordinates(coords: &Coordinates) -> Result<(), &'static str> {
    if !coords.latitude.is_finite() || !(-90.0..=90.0).contains(&coords.latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !coords.longitude.is_finite() || !(-180.0..=180.0).contains(&coords.longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate every present field of a weather reading.
///
/// Absent fields are valid; present fields must be finite, precipitation and
/// UV non-negative, humidity within 0-100.
pub fn validate_weather_reading(reading: &WeatherReading) -> Result<(), InvalidReading> {
    if let Some(t) = reading.temperature {
        if !t.is_finite() {
            return Err(InvalidReading {
                field: "temperature",
                value: t,
            });
        }
    }
    if let Some(h) = reading.humidity {
        if !h.is_finite() || !(0.0..=100.0).contains(&h) {
            return Err(InvalidReading {
                field: "humidity",
                value: h,
            });
        }
    }
    if let Some(p) = reading.precipitation {
        if !p.is_finite() || p < 0.0 {
            return Err(InvalidReading {
                field: "precipitation",
                value: p,
            });
        }
    }
    if let Some(u) = reading.uv_index {
        if !u.is_finite() || u < 0.0 {
            return Err(InvalidReading {
                field: "uv_index",
                value: u,
            });
        }
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading_with_humidity(humidity: Option<f64>) -> WeatherReading {
        WeatherReading {
            temperature: Some(20.0),
            humidity,
            precipitation: None,
            uv_index: None,
            observed_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(validate_coordinates(&Coordinates::new(0.0, 0.0)).is_ok());
        assert!(validate_coordinates(&Coordinates::new(-90.0, 180.0)).is_ok());
        assert!(validate_coordinates(&Coordinates::new(51.5, -0.1)).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(validate_coordinates(&Coordinates::new(91.0, 0.0)).is_err());
        assert!(validate_coordinates(&Coordinates::new(0.0, -181.0)).is_err());
        assert!(validate_coordinates(&Coordinates::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_validate_weather_reading_absent_fields_ok() {
        let reading = WeatherReading {
            temperature: None,
            humidity: None,
            precipitation: None,
            uv_index: None,
            observed_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        };
        assert!(validate_weather_reading(&reading).is_ok());
    }

    #[test]
    fn test_validate_weather_reading_humidity_range() {
        assert!(validate_weather_reading(&reading_with_humidity(Some(0.0))).is_ok());
        assert!(validate_weather_reading(&reading_with_humidity(Some(100.0))).is_ok());
        assert!(validate_weather_reading(&reading_with_humidity(Some(-1.0))).is_err());
        assert!(validate_weather_reading(&reading_with_humidity(Some(101.0))).is_err());
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }
}
