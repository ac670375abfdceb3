use chrono::NaiveDate;
use clap::Parser;

use crate::{
    cli::Cli,
    domain::weather::{
        DailyForecastEntry, ForecastReport, Place, WeatherSnapshot, WeatherView, parse_datetime,
    },
};

/// Nothing listens here, so spawned requests fail fast.
pub(crate) const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub(crate) fn madrid_place() -> Place {
    Place::new("Madrid", 40.4165, -3.70256, "ES")
}

pub(crate) fn paris_place() -> Place {
    Place::new("Paris", 48.85341, 2.3488, "FR")
}

fn day(day: u32, code: u8, max: f32, min: f32, rain: Option<f32>) -> DailyForecastEntry {
    DailyForecastEntry {
        date: NaiveDate::from_ymd_opt(2026, 2, day).expect("valid date fixture"),
        weather_code: code,
        temperature_max_c: max,
        temperature_min_c: min,
        precipitation_probability: rain,
    }
}

pub(crate) fn sample_report() -> ForecastReport {
    ForecastReport {
        snapshot: WeatherSnapshot {
            time: parse_datetime("2026-02-12T14:00").expect("valid time fixture"),
            temperature_c: 14.6,
            apparent_temperature_c: 12.9,
            relative_humidity: 48.0,
            wind_speed_kmh: 11.5,
            cloud_cover: 20.0,
            surface_pressure_hpa: 944.7,
            uv_index: Some(3.25),
            visibility_m: Some(24_140.0),
            weather_code: 1,
            is_day: true,
        },
        forecast: vec![
            day(12, 1, 15.2, 4.1, Some(5.0)),
            day(13, 3, 13.8, 5.6, Some(20.0)),
            day(14, 61, 11.0, 6.2, Some(80.0)),
            day(15, 0, 16.4, 3.9, None),
        ],
        timezone: "Europe/Madrid".to_string(),
        utc_offset_seconds: 3600,
    }
}

pub(crate) fn madrid_view() -> WeatherView {
    WeatherView::new(madrid_place(), sample_report())
}

/// A command line whose endpoints all point at [`UNREACHABLE_URL`].
pub(crate) fn offline_cli() -> Cli {
    Cli::parse_from([
        "skycast",
        "--no-persist",
        "--geocode-url",
        UNREACHABLE_URL,
        "--forecast-url",
        UNREACHABLE_URL,
        "--commentary-url",
        UNREACHABLE_URL,
        "--timeout-secs",
        "1",
        "--debounce-ms",
        "10",
    ])
}
