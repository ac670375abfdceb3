use chrono::{DateTime, Utc};

use crate::{
    app::state::{AppMode, AppState, CommentaryState},
    cli::IconMode,
    domain::{
        i18n::Dictionary,
        preferences::{Language, UserPreferences},
        weather::{
            Units, WeatherView, classify, convert_temp, describe, format_clock, icon_glyph,
            local_time, one_decimal, round_temp, visibility_km, weekday_short,
        },
    },
};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSummary {
    pub heading: String,
    pub local_time: String,
    pub icon: &'static str,
    pub temperature: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub weekday: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub max: String,
    pub min: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[must_use]
pub fn temperature(celsius: f32, units: Units) -> String {
    format!("{}{}", round_temp(convert_temp(celsius, units)), units.symbol())
}

#[must_use]
pub fn current_summary(
    view: &WeatherView,
    preferences: UserPreferences,
    units: Units,
    icons: IconMode,
    now: DateTime<Utc>,
) -> CurrentSummary {
    let clock = format_clock(
        local_time(now, &view.timezone, view.utc_offset_seconds),
        preferences.time_format,
        preferences.language,
    );
    CurrentSummary {
        heading: view.place.heading(),
        local_time: clock,
        icon: icon_glyph(view.classification().icon, icons),
        temperature: temperature(view.snapshot.temperature_c, units),
        description: describe(view.snapshot.weather_code, preferences.language),
    }
}

#[must_use]
pub fn forecast_rows(
    view: &WeatherView,
    language: Language,
    units: Units,
    icons: IconMode,
) -> Vec<ForecastRow> {
    view.forecast
        .iter()
        .map(|day| ForecastRow {
            weekday: weekday_short(day.date, language),
            // Daily aggregates carry no day/night flag.
            icon: icon_glyph(classify(day.weather_code, true).icon, icons),
            description: describe(day.weather_code, language),
            max: temperature(day.temperature_max_c, units),
            min: temperature(day.temperature_min_c, units),
        })
        .collect()
}

#[must_use]
pub fn detail_rows(
    view: &WeatherView,
    dict: &Dictionary,
    units: Units,
) -> Vec<(&'static str, String)> {
    let snapshot = &view.snapshot;
    vec![
        (
            dict.feels_like,
            temperature(snapshot.apparent_temperature_c, units),
        ),
        (dict.humidity, format!("{:.0}%", snapshot.relative_humidity)),
        (
            dict.wind_speed,
            format!("{} km/h", one_decimal(snapshot.wind_speed_kmh)),
        ),
        (
            dict.uv_index,
            snapshot
                .uv_index
                .map_or_else(|| NOT_AVAILABLE.to_string(), one_decimal),
        ),
        (
            dict.precipitation_probability,
            format!("{:.0}%", view.today_precipitation_probability()),
        ),
        (
            dict.visibility,
            snapshot.visibility_m.map_or_else(
                || NOT_AVAILABLE.to_string(),
                |meters| format!("{} km", one_decimal(visibility_km(meters))),
            ),
        ),
        (dict.cloud_cover, format!("{:.0}%", snapshot.cloud_cover)),
        (
            dict.pressure,
            format!("{:.0} hPa", snapshot.surface_pressure_hpa),
        ),
    ]
}

#[must_use]
pub fn commentary_text<'a>(commentary: &'a CommentaryState, dict: &'a Dictionary) -> &'a str {
    match commentary {
        CommentaryState::Pending => dict.commentary_pending,
        CommentaryState::Available(text) => text,
        CommentaryState::Unavailable => dict.commentary_unavailable,
    }
}

#[must_use]
pub fn status_line(state: &AppState, dict: &Dictionary) -> Option<(StatusKind, &'static str)> {
    match state.mode {
        AppMode::Loading => Some((StatusKind::Loading, dict.loading)),
        AppMode::Failed => state
            .error_message()
            .map(|message| (StatusKind::Error, message)),
        AppMode::Idle | AppMode::Ready => None,
    }
}
