//! Air quality models and the AQI calculator

use serde::{Deserialize, Serialize};

use crate::error::InvalidReading;

/// Raw pollutant concentrations, each in its pollutant's native unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PollutantReading {
    /// PM2.5 in µg/m³
    pub pm2_5: f64,
    /// PM10 in µg/m³
    pub pm10: f64,
    /// Carbon monoxide in ppm
    pub co: f64,
    /// Nitrogen dioxide in ppb
    pub no2: f64,
    /// Ozone in ppb
    pub o3: f64,
    /// Sulfur dioxide in ppb
    pub so2: f64,
}

/// Per-pollutant integer sub-indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AqiComponents {
    pub pm2_5: i32,
    pub pm10: i32,
    pub co: i32,
    pub no2: i32,
    pub o3: i32,
    pub so2: i32,
}

impl AqiComponents {
    pub fn max(&self) -> i32 {
        self.pm2_5
            .max(self.pm10)
            .max(self.co)
            .max(self.no2)
            .max(self.o3)
            .max(self.so2)
    }
}

/// Computed air quality index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AqiResult {
    pub overall: i32,
    pub components: AqiComponents,
}

impl AqiResult {
    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_index(self.overall)
    }
}

/// EPA AQI category bands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthyForSensitiveGroups,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// 301+
    Hazardous,
}

impl AqiCategory {
    pub fn from_index(index: i32) -> Self {
        match index {
            i32::MIN..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiCategory::Good => write!(f, "Good"),
            AqiCategory::Moderate => write!(f, "Moderate"),
            AqiCategory::UnhealthyForSensitiveGroups => {
                write!(f, "Unhealthy for Sensitive Groups")
            }
            AqiCategory::Unhealthy => write!(f, "Unhealthy"),
            AqiCategory::VeryUnhealthy => write!(f, "Very Unhealthy"),
            AqiCategory::Hazardous => write!(f, "Hazardous"),
        }
    }
}

/// Index bands shared by all six pollutant scales
const INDEX_BANDS: [(f64, f64); 6] = [
    (0.0, 50.0),
    (51.0, 100.0),
    (101.0, 150.0),
    (151.0, 200.0),
    (201.0, 300.0),
    (301.0, 500.0),
];

// EPA breakpoint tables, concentration ranges per segment. These must not be
// altered: downstream consumers compare indices computed from the same tables.
const PM2_5_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 12.0),
    (12.1, 35.4),
    (35.5, 55.4),
    (55.5, 150.4),
    (150.5, 250.4),
    (250.5, 500.4),
];

const PM10_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 54.0),
    (55.0, 154.0),
    (155.0, 254.0),
    (255.0, 354.0),
    (355.0, 424.0),
    (425.0, 604.0),
];

const CO_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 4.4),
    (4.5, 9.4),
    (9.5, 12.4),
    (12.5, 15.4),
    (15.5, 30.4),
    (30.5, 50.4),
];

const NO2_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 53.0),
    (54.0, 100.0),
    (101.0, 360.0),
    (361.0, 649.0),
    (650.0, 1249.0),
    (1250.0, 2049.0),
];

const O3_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 54.0),
    (55.0, 70.0),
    (71.0, 85.0),
    (86.0, 105.0),
    (106.0, 200.0),
    (201.0, 404.0),
];

const SO2_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 35.0),
    (36.0, 75.0),
    (76.0, 185.0),
    (186.0, 304.0),
    (305.0, 604.0),
    (605.0, 1004.0),
];

/// Compute one pollutant's sub-index by piecewise-linear interpolation.
///
/// The segment is the first whose upper concentration bound covers `c`; the
/// last segment extrapolates for anything above the scale. The result is
/// truncated toward zero, not rounded: consumers compare against indices
/// computed the same way.
fn sub_index(
    field: &'static str,
    c: f64,
    breakpoints: &[(f64, f64); 6],
) -> Result<i32, InvalidReading> {
    if !c.is_finite() || c < 0.0 {
        return Err(InvalidReading { field, value: c });
    }
    let segment = breakpoints
        .iter()
        .position(|&(_, c_hi)| c <= c_hi)
        .unwrap_or(breakpoints.len() - 1);
    let (c_lo, c_hi) = breakpoints[segment];
    let (i_lo, i_hi) = INDEX_BANDS[segment];
    Ok(((c - c_lo) * (i_hi - i_lo) / (c_hi - c_lo) + i_lo) as i32)
}

/// Compute the AQI for a set of pollutant concentrations.
///
/// The overall index is the maximum of the six sub-indices. Pure and
/// deterministic. Negative or non-finite concentrations fail with
/// [`InvalidReading`].
pub fn compute_aqi(reading: &PollutantReading) -> Result<AqiResult, InvalidReading> {
    let components = AqiComponents {
        pm2_5: sub_index("pm2_5", reading.pm2_5, &PM2_5_BREAKPOINTS)?,
        pm10: sub_index("pm10", reading.pm10, &PM10_BREAKPOINTS)?,
        co: sub_index("co", reading.co, &CO_BREAKPOINTS)?,
        no2: sub_index("no2", reading.no2, &NO2_BREAKPOINTS)?,
        o3: sub_index("o3", reading.o3, &O3_BREAKPOINTS)?,
        so2: sub_index("so2", reading.so2, &SO2_BREAKPOINTS)?,
    };
    Ok(AqiResult {
        overall: components.max(),
        components,
    })
}
