//! WebAssembly module for the EnviroMind Environmental Health Platform
//!
//! Provides client-side computation for:
//! - AQI calculation from pollutant readings
//! - AQI category labels
//! - Season lookup
//! - Offline coordinate validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compute the AQI from a pollutant reading, returned as JSON
#[wasm_bindgen]
pub fn compute_aqi_from_json(reading_json: &str) -> Result<String, JsValue> {
    let reading: PollutantReading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let result = compute_aqi(&reading)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Human-readable category label for an AQI value
#[wasm_bindgen]
pub fn aqi_category(index: i32) -> String {
    format!("{}", AqiCategory::from_index(index))
}

/// Season name for a calendar month (1-12)
#[wasm_bindgen]
pub fn season_for_month(month: u32) -> String {
    format!("{}", Season::from_month(month))
}

/// Validate GPS coordinates without a round trip to the server
#[wasm_bindgen]
pub fn validate_location(latitude: f64, longitude: f64) -> bool {
    validate_coordinates(&Coordinates::new(latitude, longitude)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_compute_aqi_from_json() {
        let json = r#"{"pm2_5":35.4,"pm10":20.0,"co":0.5,"no2":15.0,"o3":30.0,"so2":10.0}"#;
        let result = compute_aqi_from_json(json).unwrap();
        assert!(result.contains("\"overall\":100"));
    }

    #[wasm_bindgen_test]
    fn test_compute_aqi_rejects_negative() {
        let json = r#"{"pm2_5":-1.0,"pm10":0.0,"co":0.0,"no2":0.0,"o3":0.0,"so2":0.0}"#;
        assert!(compute_aqi_from_json(json).is_err());
    }

    #[wasm_bindgen_test]
    fn test_aqi_category_labels() {
        assert_eq!(aqi_category(42), "Good");
        assert_eq!(aqi_category(120), "Unhealthy for Sensitive Groups");
        assert_eq!(aqi_category(400), "Hazardous");
    }

    #[wasm_bindgen_test]
    fn test_season_for_month() {
        assert_eq!(season_for_month(1), "winter");
        assert_eq!(season_for_month(4), "spring");
        assert_eq!(season_for_month(7), "summer");
        assert_eq!(season_for_month(10), "fall");
    }

    #[wasm_bindgen_test]
    fn test_validate_location() {
        assert!(validate_location(52.52, 13.405));
        assert!(!validate_location(91.0, 0.0));
        assert!(!validate_location(0.0, 181.0));
    }
}
