use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::weather::WeatherView;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Es,
    Fr,
    It,
    De,
}

pub const LANGUAGES: [Language; 5] = [
    Language::En,
    Language::Es,
    Language::Fr,
    Language::It,
    Language::De,
];

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::De => "de",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        cycle(&LANGUAGES, self)
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownValue(value.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        cycle(&THEME_MODES, self)
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        THEME_MODES
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownValue(value.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
pub enum TimeFormat {
    #[value(name = "12h")]
    #[serde(rename = "12h")]
    H12,
    #[default]
    #[value(name = "24h")]
    #[serde(rename = "24h")]
    H24,
}

impl TimeFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H12 => "12h",
            Self::H24 => "24h",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::H12 => Self::H24,
            Self::H24 => Self::H12,
        }
    }
}

impl FromStr for TimeFormat {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "12h" => Ok(Self::H12),
            "24h" => Ok(Self::H24),
            _ => Err(UnknownValue(value.to_string())),
        }
    }
}

/// Resolved light/dark palette actually used for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    pub language: Language,
    pub theme: ThemeMode,
    pub time_format: TimeFormat,
}

impl UserPreferences {
    /// `auto` follows the day/night flag of the latest view and is light
    /// until a view exists.
    #[must_use]
    pub fn effective_theme(&self, view: Option<&WeatherView>) -> EffectiveTheme {
        match self.theme {
            ThemeMode::Light => EffectiveTheme::Light,
            ThemeMode::Dark => EffectiveTheme::Dark,
            ThemeMode::Auto => match view {
                Some(view) if !view.snapshot.is_day => EffectiveTheme::Dark,
                _ => EffectiveTheme::Light,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value `{0}`")]
pub struct UnknownValue(pub String);

fn cycle<T: Copy + PartialEq>(options: &[T], current: T) -> T {
    let idx = options
        .iter()
        .position(|candidate| *candidate == current)
        .unwrap_or(0);
    options[(idx + 1) % options.len()]
}
