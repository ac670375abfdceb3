#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::{
    preferences::{Language, ThemeMode, TimeFormat},
    weather::{Place, Units},
};

pub const DEFAULT_LATITUDE: f64 = 40.4165;
pub const DEFAULT_LONGITUDE: f64 = -3.70256;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Terminal weather dashboard with localized forecasts and AI commentary"
)]
pub struct Cli {
    /// Display name of the default location
    #[arg(long, default_value = "Madrid")]
    pub city: String,

    /// Country shown next to the default location
    #[arg(long, default_value = "ES")]
    pub country: String,

    /// Default latitude
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_hyphen_values = true)]
    pub lat: f64,

    /// Default longitude
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_hyphen_values = true)]
    pub lon: f64,

    /// Interface language (overrides the saved preference)
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Theme mode (overrides the saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Clock format (overrides the saved preference)
    #[arg(long, value_enum)]
    pub time_format: Option<TimeFormat>,

    /// Temperature units
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Weather icon set
    #[arg(long, value_enum, default_value_t = IconMode::Unicode)]
    pub icons: IconMode,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Print the weather for the default location and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Do not read or write saved preferences
    #[arg(long)]
    pub no_persist: bool,

    /// Geocoding endpoint
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Forecast endpoint
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Generative model API base URL
    #[arg(long)]
    pub commentary_url: Option<String>,

    /// Generative model used for commentary
    #[arg(long, default_value = "gemini-2.0-flash")]
    pub commentary_model: String,

    /// API key for the commentary model
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub commentary_api_key: Option<String>,

    /// Timeout for weather and geocoding requests, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout_secs: u64,

    /// Quiet period before a search query is sent, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn default_place(&self) -> Place {
        Place::new(self.city.clone(), self.lat, self.lon, self.country.clone())
    }

    #[must_use]
    pub fn units(&self) -> Units {
        match self.units {
            UnitsArg::Celsius => Units::Celsius,
            UnitsArg::Fahrenheit => Units::Fahrenheit,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            anyhow::bail!("--lat must be within -90..=90, got {}", self.lat);
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            anyhow::bail!("--lon must be within -180..=180, got {}", self.lon);
        }
        if self.city.trim().is_empty() {
            anyhow::bail!("--city must not be empty");
        }
        Ok(())
    }
}
