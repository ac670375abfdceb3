#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use serde_json::{Value, json};
use skycast::{
    app::{events::AppEvent, settings::PreferencesStore, state::AppState},
    cli::Cli,
    domain::weather::{DailyForecastEntry, ForecastReport, Place, WeatherSnapshot, parse_datetime},
};
use tokio::{
    sync::mpsc,
    time::{Instant, timeout},
};
use wiremock::MockServer;

pub const FORECAST_PATH: &str = "/v1/forecast";
pub const GEOCODE_PATH: &str = "/v1/search";
pub const COMMENTARY_MODEL: &str = "test-model";
pub const COMMENTARY_PATH: &str = "/v1beta/models/test-model:generateContent";
pub const API_KEY: &str = "test-key";

pub fn madrid() -> Place {
    Place::new("Madrid", 40.4165, -3.70256, "ES")
}

pub fn paris() -> Place {
    Place {
        region: Some("Île-de-France".to_string()),
        ..Place::new("Paris", 48.85341, 2.3488, "France")
    }
}

/// Command line pointing every client at `server`.
pub fn cli_for(server: &MockServer, extra: &[&str]) -> Cli {
    let uri = server.uri();
    let geocode = format!("{uri}{GEOCODE_PATH}");
    let forecast = format!("{uri}{FORECAST_PATH}");
    let mut args = vec![
        "skycast",
        "--no-persist",
        "--geocode-url",
        geocode.as_str(),
        "--forecast-url",
        forecast.as_str(),
        "--commentary-url",
        uri.as_str(),
        "--commentary-model",
        COMMENTARY_MODEL,
        "--commentary-api-key",
        API_KEY,
        "--timeout-secs",
        "5",
    ];
    args.extend_from_slice(extra);
    Cli::parse_from(args)
}

pub fn app_for(cli: &Cli) -> (AppState, mpsc::Sender<AppEvent>, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel(64);
    let app = AppState::new(cli, PreferencesStore::load(cli, false));
    (app, tx, rx)
}

/// Handles events until `done` holds, failing after five seconds.
pub async fn pump_until(
    app: &mut AppState,
    rx: &mut mpsc::Receiver<AppEvent>,
    tx: &mpsc::Sender<AppEvent>,
    mut done: impl FnMut(&AppState) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(app) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let event = timeout(remaining, rx.recv())
            .await
            .expect("timed out waiting for state")
            .expect("event channel open");
        app.handle_event(event, tx).await.expect("handle event");
    }
}

/// Handles whatever arrives within `window`.
pub async fn pump_for(
    app: &mut AppState,
    rx: &mut mpsc::Receiver<AppEvent>,
    tx: &mpsc::Sender<AppEvent>,
    window: Duration,
) {
    let deadline = Instant::now() + window;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        match timeout(remaining, rx.recv()).await {
            Ok(Some(event)) => app.handle_event(event, tx).await.expect("handle event"),
            _ => break,
        }
    }
}

pub fn forecast_body(weather_code: u8, is_day: bool) -> Value {
    json!({
        "latitude": 40.4375,
        "longitude": -3.6875,
        "timezone": "Europe/Madrid",
        "timezone_abbreviation": "GMT+1",
        "utc_offset_seconds": 3600,
        "current": {
            "time": "2026-02-12T14:00",
            "interval": 900,
            "temperature_2m": 14.6,
            "relative_humidity_2m": 48,
            "apparent_temperature": 12.9,
            "is_day": u8::from(is_day),
            "weather_code": weather_code,
            "wind_speed_10m": 11.5,
            "cloud_cover": 20,
            "surface_pressure": 944.7,
            "uv_index": 3.0,
            "visibility": 24140.0
        },
        "daily": {
            "time": ["2026-02-12", "2026-02-13", "2026-02-14", "2026-02-15"],
            "weather_code": [weather_code, 3, 61, 0],
            "temperature_2m_max": [15.2, 13.8, 11.0, 16.4],
            "temperature_2m_min": [4.1, 5.6, 6.2, 3.9],
            "precipitation_probability_max": [5, 20, 80, null]
        }
    })
}

pub fn geocode_body(places: &[Place]) -> Value {
    let results = places
        .iter()
        .enumerate()
        .map(|(idx, place)| {
            json!({
                "id": idx + 1,
                "name": place.name,
                "latitude": place.latitude,
                "longitude": place.longitude,
                "country": place.country,
                "country_code": "XX",
                "admin1": place.region,
            })
        })
        .collect::<Vec<_>>();
    json!({ "results": results, "generationtime_ms": 0.5 })
}

pub fn commentary_body(alert: &str) -> Value {
    let structured = json!({ "alert": alert }).to_string();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": structured }] },
            "finishReason": "STOP"
        }]
    })
}

pub fn madrid_report(weather_code: u8, is_day: bool) -> ForecastReport {
    let day = |d: u32, code: u8, max: f32, min: f32, rain: Option<f32>| DailyForecastEntry {
        date: NaiveDate::from_ymd_opt(2026, 2, d).expect("valid date"),
        weather_code: code,
        temperature_max_c: max,
        temperature_min_c: min,
        precipitation_probability: rain,
    };
    ForecastReport {
        snapshot: WeatherSnapshot {
            time: parse_datetime("2026-02-12T14:00").expect("valid time"),
            temperature_c: 14.6,
            apparent_temperature_c: 12.9,
            relative_humidity: 48.0,
            wind_speed_kmh: 11.5,
            cloud_cover: 20.0,
            surface_pressure_hpa: 944.7,
            uv_index: Some(3.0),
            visibility_m: Some(24_140.0),
            weather_code,
            is_day,
        },
        forecast: vec![
            day(12, weather_code, 15.2, 4.1, Some(5.0)),
            day(13, 3, 13.8, 5.6, Some(20.0)),
            day(14, 61, 11.0, 6.2, Some(80.0)),
            day(15, 0, 16.4, 3.9, None),
        ],
        timezone: "Europe/Madrid".to_string(),
        utc_offset_seconds: 3600,
    }
}
