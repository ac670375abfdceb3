mod conditions;
mod conversions;
mod locale;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub use conditions::{
    Classification, IconKind, StyleClass, UNKNOWN_DESCRIPTION, classify, describe, icon_glyph,
};
pub use conversions::{
    convert_temp, one_decimal, parse_date, parse_datetime, round_temp, visibility_km,
};
pub use locale::{format_clock, local_time, weekday_short};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// A geocoded candidate. Near-duplicates returned by the geocoder are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub region: Option<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: country.into(),
            region: None,
        }
    }

    /// `name, region, country` as shown in the suggestion list.
    #[must_use]
    pub fn suggestion_label(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}, {}", self.name, region, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }

    #[must_use]
    pub fn heading(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub time: NaiveDateTime,
    pub temperature_c: f32,
    pub apparent_temperature_c: f32,
    pub relative_humidity: f32,
    pub wind_speed_kmh: f32,
    pub cloud_cover: f32,
    pub surface_pressure_hpa: f32,
    pub uv_index: Option<f32>,
    pub visibility_m: Option<f32>,
    pub weather_code: u8,
    pub is_day: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub weather_code: u8,
    pub temperature_max_c: f32,
    pub temperature_min_c: f32,
    pub precipitation_probability: Option<f32>,
}

/// What the weather service returns for one coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub snapshot: WeatherSnapshot,
    pub forecast: Vec<DailyForecastEntry>,
    pub timezone: String,
    pub utc_offset_seconds: i32,
}

#[derive(Debug, Clone)]
pub struct WeatherView {
    pub place: Place,
    pub snapshot: WeatherSnapshot,
    pub forecast: Vec<DailyForecastEntry>,
    pub timezone: String,
    pub utc_offset_seconds: i32,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherView {
    #[must_use]
    pub fn new(place: Place, report: ForecastReport) -> Self {
        Self {
            place,
            snapshot: report.snapshot,
            forecast: report.forecast,
            timezone: report.timezone,
            utc_offset_seconds: report.utc_offset_seconds,
            fetched_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        classify(self.snapshot.weather_code, self.snapshot.is_day)
    }

    #[must_use]
    pub fn today_precipitation_probability(&self) -> f32 {
        self.forecast
            .first()
            .and_then(|day| day.precipitation_probability)
            .unwrap_or(0.0)
    }

    /// Equality over everything except the fetch timestamp.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.place == other.place
            && self.snapshot == other.snapshot
            && self.forecast == other.forecast
            && self.timezone == other.timezone
            && self.utc_offset_seconds == other.utc_offset_seconds
    }
}
