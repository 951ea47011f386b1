//! Scenario tests for the seasonal warning engine as the backend consumes it

use chrono::{NaiveDate, TimeZone, Utc};
use shared::models::{
    Season, WarningEngine, WarningKind, WarningSeverity, WarningThresholds, WeatherReading,
};

fn engine() -> WarningEngine {
    WarningEngine::new(WarningThresholds::default())
}

fn reading(
    temperature: Option<f64>,
    humidity: Option<f64>,
    precipitation: Option<f64>,
    uv_index: Option<f64>,
) -> WeatherReading {
    WeatherReading {
        temperature,
        humidity,
        precipitation,
        uv_index,
        observed_at: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
    }
}

fn mid_month(month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, 15).unwrap()
}

#[test]
fn seasons_cover_the_whole_year() {
    let expected = [
        (1, Season::Winter),
        (2, Season::Winter),
        (3, Season::Spring),
        (4, Season::Spring),
        (5, Season::Spring),
        (6, Season::Summer),
        (7, Season::Summer),
        (8, Season::Summer),
        (9, Season::Fall),
        (10, Season::Fall),
        (11, Season::Fall),
        (12, Season::Winter),
    ];
    for (month, season) in expected {
        assert_eq!(Season::from_month(month), season, "month {}", month);
    }
}

#[test]
fn hot_day_across_the_year() {
    // The same 36°C reading means different things per season: a spring
    // pre-alert, a plain heat wave elsewhere.
    let r = reading(Some(36.0), None, None, None);

    for month in 1..=12u32 {
        let warnings = engine().compute(&r, mid_month(month)).unwrap();
        assert_eq!(warnings.len(), 1, "month {}", month);
        assert_eq!(warnings[0].kind, WarningKind::HeatWave);

        let expected = if Season::from_month(month) == Season::Spring {
            WarningSeverity::Moderate
        } else {
            WarningSeverity::High
        };
        assert_eq!(warnings[0].severity, expected, "month {}", month);
    }
}

#[test]
fn freezing_day_across_the_year() {
    let r = reading(Some(-3.0), None, None, None);

    for month in 1..=12u32 {
        let warnings = engine().compute(&r, mid_month(month)).unwrap();
        assert_eq!(warnings.len(), 1, "month {}", month);
        assert_eq!(warnings[0].kind, WarningKind::ColdWave);

        let expected = if Season::from_month(month) == Season::Fall {
            WarningSeverity::Moderate
        } else {
            WarningSeverity::High
        };
        assert_eq!(warnings[0].severity, expected, "month {}", month);
    }
}

#[test]
fn august_weed_pollen_fires_without_temperature() {
    // Late-summer weed pollen needs only humidity in August; September
    // additionally requires warmth.
    let r = reading(None, Some(40.0), None, None);

    let august = engine().compute(&r, mid_month(8)).unwrap();
    assert_eq!(august.len(), 1);
    assert_eq!(august[0].kind, WarningKind::Pollen);

    let september = engine().compute(&r, mid_month(9)).unwrap();
    assert!(september.is_empty());
}

#[test]
fn blizzard_day_stacks_cold_and_snow() {
    let r = reading(Some(-8.0), Some(85.0), Some(22.0), Some(1.0));
    let warnings = engine().compute(&r, mid_month(1)).unwrap();
    let kinds: Vec<_> = warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, vec![WarningKind::ColdWave, WarningKind::Snowstorm]);
    assert_eq!(warnings[1].severity, WarningSeverity::Moderate);
}

#[test]
fn deployment_thresholds_shift_the_triggers() {
    // A coastal deployment that treats 30°C as a heat wave and UV 4 as high.
    let engine = WarningEngine::new(WarningThresholds {
        heat_wave_temp: 30.0,
        cold_wave_temp: 5.0,
        uv_index_high: 4.0,
    });

    let r = reading(Some(31.0), None, None, Some(4.5));
    let warnings = engine.compute(&r, mid_month(7)).unwrap();
    let kinds: Vec<_> = warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, vec![WarningKind::HeatWave, WarningKind::UvWarning]);

    // The default engine sees the same day as unremarkable.
    assert!(self::engine().compute(&r, mid_month(7)).unwrap().is_empty());
}

#[test]
fn out_of_range_humidity_fails_the_whole_evaluation() {
    let r = reading(Some(36.0), Some(120.0), None, None);
    let err = engine().compute(&r, mid_month(7)).unwrap_err();
    assert_eq!(err.field, "humidity");
    assert_eq!(err.value, 120.0);
}

#[test]
fn warnings_serialize_with_snake_case_tags() {
    let r = reading(Some(36.0), None, None, None);
    let warnings = engine().compute(&r, mid_month(7)).unwrap();
    let json = serde_json::to_value(&warnings).unwrap();
    assert_eq!(json[0]["kind"], "heat_wave");
    assert_eq!(json[0]["severity"], "high");
}
