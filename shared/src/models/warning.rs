//! Seasonal weather warnings

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InvalidReading;
use crate::models::{Season, WeatherReading};
use crate::validation::validate_weather_reading;

/// Kinds of weather warnings the engine can emit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    HeatWave,
    ColdWave,
    UvWarning,
    Snowstorm,
    HeavyRain,
    Pollen,
}

/// Warning severity levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Low,
    Moderate,
    High,
}

/// A single derived weather warning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub kind: WarningKind,
    pub severity: WarningSeverity,
    pub message: String,
}

/// Tunable warning thresholds, injected at engine construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WarningThresholds {
    /// Heat wave trigger temperature in °C
    pub heat_wave_temp: f64,
    /// Cold wave trigger temperature in °C
    pub cold_wave_temp: f64,
    /// UV index considered high
    pub uv_index_high: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            heat_wave_temp: 35.0,
            cold_wave_temp: 0.0,
            uv_index_high: 6.0,
        }
    }
}

/// Derives seasonal weather warnings from a single reading.
///
/// Pure and stateless: thresholds are fixed at construction, and `compute`
/// touches nothing but its arguments.
#[derive(Debug, Clone, Copy)]
pub struct WarningEngine {
    thresholds: WarningThresholds,
}

impl WarningEngine {
    pub fn new(thresholds: WarningThresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate every warning rule against a reading.
    ///
    /// Rules run in a fixed order (temperature, UV, precipitation, pollen)
    /// and the returned list preserves that evaluation order; it is not
    /// sorted by severity. Absent fields suppress the rules that need them;
    /// present values outside physical range fail with [`InvalidReading`].
    pub fn compute(
        &self,
        reading: &WeatherReading,
        as_of: NaiveDate,
    ) -> Result<Vec<Warning>, InvalidReading> {
        validate_weather_reading(reading)?;

        let month = as_of.month();
        let season = Season::from_month(month);
        let mut warnings = Vec::new();

        if let Some(temp) = reading.temperature {
            // Spring gets a pre-alert two degrees below the heat threshold.
            if season == Season::Spring && temp > self.thresholds.heat_wave_temp - 2.0 {
                warnings.push(Warning {
                    kind: WarningKind::HeatWave,
                    severity: WarningSeverity::Moderate,
                    message: format!("Early season heat alert: Temperature is {temp:.1}°C"),
                });
            } else if temp > self.thresholds.heat_wave_temp {
                warnings.push(Warning {
                    kind: WarningKind::HeatWave,
                    severity: WarningSeverity::High,
                    message: format!("Heat wave warning: Temperature is {temp:.1}°C"),
                });
            }

            // Fall gets a pre-alert two degrees above the cold threshold.
            if season == Season::Fall && temp < self.thresholds.cold_wave_temp + 2.0 {
                warnings.push(Warning {
                    kind: WarningKind::ColdWave,
                    severity: WarningSeverity::Moderate,
                    message: format!("Early season cold alert: Temperature is {temp:.1}°C"),
                });
            } else if temp < self.thresholds.cold_wave_temp {
                warnings.push(Warning {
                    kind: WarningKind::ColdWave,
                    severity: WarningSeverity::High,
                    message: format!("Cold weather warning: Temperature is {temp:.1}°C"),
                });
            }
        }

        if let Some(uv) = reading.uv_index {
            if season == Season::Spring && uv > self.thresholds.uv_index_high - 1.0 {
                warnings.push(Warning {
                    kind: WarningKind::UvWarning,
                    severity: WarningSeverity::High,
                    message: format!(
                        "Spring UV warning: UV index is {uv:.1}, skin may be more sensitive"
                    ),
                });
            } else if uv > self.thresholds.uv_index_high {
                warnings.push(Warning {
                    kind: WarningKind::UvWarning,
                    severity: WarningSeverity::Moderate,
                    message: format!("High UV index warning: {uv:.1}"),
                });
            }
        }

        if let Some(precip) = reading.precipitation {
            if precip > 0.0 {
                // Snow takes precedence over heavy rain when it is cold
                // enough; the two branches are mutually exclusive.
                if reading.temperature.is_some_and(|t| t < 2.0) {
                    if season == Season::Winter {
                        let severity = if precip > 10.0 {
                            WarningSeverity::Moderate
                        } else {
                            WarningSeverity::Low
                        };
                        warnings.push(Warning {
                            kind: WarningKind::Snowstorm,
                            severity,
                            message: format!(
                                "Snow expected: {precip:.1}mm potential accumulation"
                            ),
                        });
                    } else {
                        warnings.push(Warning {
                            kind: WarningKind::Snowstorm,
                            severity: WarningSeverity::High,
                            message: format!(
                                "Unseasonable snow warning: {precip:.1}mm potential accumulation"
                            ),
                        });
                    }
                } else if precip > 25.0 {
                    warnings.push(Warning {
                        kind: WarningKind::HeavyRain,
                        severity: WarningSeverity::Moderate,
                        message: format!("Heavy rain warning: {precip:.1}mm expected"),
                    });
                }
            }
        }

        if let Some(humidity) = reading.humidity {
            let temp = reading.temperature;
            if season == Season::Spring && temp.is_some_and(|t| t > 10.0) && humidity < 70.0 {
                warnings.push(Warning {
                    kind: WarningKind::Pollen,
                    severity: WarningSeverity::High,
                    message: "High tree pollen likely: warm spring conditions".to_string(),
                });
            } else if month == 6 && temp.is_some_and(|t| t > 18.0) && humidity < 65.0 {
                warnings.push(Warning {
                    kind: WarningKind::Pollen,
                    severity: WarningSeverity::High,
                    message: "High grass pollen likely: warm early summer conditions".to_string(),
                });
            } else if month == 8 || (month == 9 && temp.is_some_and(|t| t > 15.0)) {
                // QUIRK, preserved on purpose: the August arm is NOT
                // temperature-gated. The rule this reproduces was written as
                // `month == 8 or month == 9 and temp > 15`, which binds as
                // `8 or (9 and temp > 15)`, so August fires regardless of
                // temperature. Existing consumers depend on that; do not
                // "fix" the asymmetry. Pinned by tests.
                warnings.push(Warning {
                    kind: WarningKind::Pollen,
                    severity: WarningSeverity::Moderate,
                    message: "Elevated weed pollen likely: late summer/early fall conditions"
                        .to_string(),
                });
            }
        }

        Ok(warnings)
    }
}
