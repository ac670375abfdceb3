use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::http_client;
use crate::domain::weather::{
    DailyForecastEntry, ForecastReport, WeatherSnapshot, parse_date, parse_datetime,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m,cloud_cover,surface_pressure,uv_index,visibility";
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";
const FORECAST_DAYS: &str = "4";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("forecast request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("forecast request returned {0}")]
    Status(StatusCode),
    #[error("failed to parse forecast payload: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("forecast payload has unexpected shape: {0}")]
    Shape(String),
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(FORECAST_URL, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.into(),
        }
    }

    /// Current conditions plus the daily outlook. No retries.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastReport, FetchError> {
        debug!(latitude, longitude, "requesting forecast");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let payload: ForecastResponse = response.json().await.map_err(FetchError::Decode)?;
        payload.into_report()
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    utc_offset_seconds: i32,
    current: CurrentBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f32,
    relative_humidity_2m: f32,
    apparent_temperature: f32,
    is_day: u8,
    weather_code: u8,
    wind_speed_10m: f32,
    cloud_cover: f32,
    surface_pressure: f32,
    uv_index: Option<f32>,
    visibility: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<u8>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f32>>,
}

impl ForecastResponse {
    fn into_report(self) -> Result<ForecastReport, FetchError> {
        let current = self.current;
        let time = parse_datetime(&current.time)
            .ok_or_else(|| FetchError::Shape(format!("bad current time `{}`", current.time)))?;

        let snapshot = WeatherSnapshot {
            time,
            temperature_c: current.temperature_2m,
            apparent_temperature_c: current.apparent_temperature,
            relative_humidity: current.relative_humidity_2m,
            wind_speed_kmh: current.wind_speed_10m,
            cloud_cover: current.cloud_cover,
            surface_pressure_hpa: current.surface_pressure,
            uv_index: current.uv_index,
            visibility_m: current.visibility,
            weather_code: current.weather_code,
            is_day: current.is_day == 1,
        };

        Ok(ForecastReport {
            snapshot,
            forecast: parse_daily(&self.daily)?,
            timezone: self.timezone,
            utc_offset_seconds: self.utc_offset_seconds,
        })
    }
}

fn parse_daily(daily: &DailyBlock) -> Result<Vec<DailyForecastEntry>, FetchError> {
    let mut out = Vec::with_capacity(daily.time.len());
    for (idx, raw_date) in daily.time.iter().enumerate() {
        let missing = |field: &str| FetchError::Shape(format!("daily {field} missing at {idx}"));
        let date = parse_date(raw_date)
            .ok_or_else(|| FetchError::Shape(format!("bad daily date `{raw_date}`")))?;

        out.push(DailyForecastEntry {
            date,
            weather_code: daily
                .weather_code
                .get(idx)
                .copied()
                .flatten()
                .ok_or_else(|| missing("weather_code"))?,
            temperature_max_c: daily
                .temperature_2m_max
                .get(idx)
                .copied()
                .flatten()
                .ok_or_else(|| missing("temperature_2m_max"))?,
            temperature_min_c: daily
                .temperature_2m_min
                .get(idx)
                .copied()
                .flatten()
                .ok_or_else(|| missing("temperature_2m_min"))?,
            precipitation_probability: daily
                .precipitation_probability_max
                .get(idx)
                .copied()
                .flatten(),
        });
    }
    Ok(out)
}
