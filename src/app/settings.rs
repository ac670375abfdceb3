use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    cli::Cli,
    domain::preferences::{Language, ThemeMode, TimeFormat, UserPreferences},
};

const LANGUAGE_KEY: &str = "language";
const THEME_KEY: &str = "theme";
const TIME_FORMAT_KEY: &str = "time_format";

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("creating settings directory failed: {0}")]
    CreateDir(#[source] io::Error),
    #[error("serializing settings payload failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("writing settings file failed: {0}")]
    Write(#[source] io::Error),
}

/// Command-line values layered over the saved preferences. They shape the
/// effective value but never reach the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceOverrides {
    pub language: Option<Language>,
    pub theme: Option<ThemeMode>,
    pub time_format: Option<TimeFormat>,
}

impl PreferenceOverrides {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            language: cli.language,
            theme: cli.theme,
            time_format: cli.time_format,
        }
    }

    #[must_use]
    pub fn apply(self, base: UserPreferences) -> UserPreferences {
        UserPreferences {
            language: self.language.unwrap_or(base.language),
            theme: self.theme.unwrap_or(base.theme),
            time_format: self.time_format.unwrap_or(base.time_format),
        }
    }
}

/// Process-wide preferences with an explicit update/subscribe contract.
///
/// Subscribers see the saved preferences with command-line overrides on
/// top. Only the saved layer is written to disk, before subscribers are
/// notified.
#[derive(Debug)]
pub struct PreferencesStore {
    tx: watch::Sender<UserPreferences>,
    saved: UserPreferences,
    overrides: PreferenceOverrides,
    path: Option<PathBuf>,
}

impl PreferencesStore {
    #[must_use]
    pub fn in_memory(preferences: UserPreferences) -> Self {
        Self::layered(preferences, PreferenceOverrides::default(), None)
    }

    /// Reads saved preferences from the default location when
    /// `enable_disk` holds, then layers the command-line overrides.
    #[must_use]
    pub fn load(cli: &Cli, enable_disk: bool) -> Self {
        Self::load_from(cli, enable_disk.then(settings_path).flatten())
    }

    #[must_use]
    pub fn load_from(cli: &Cli, path: Option<PathBuf>) -> Self {
        let saved = path.as_deref().map(read_preferences).unwrap_or_default();
        Self::layered(saved, PreferenceOverrides::from_cli(cli), path)
    }

    #[must_use]
    pub fn with_path(preferences: UserPreferences, path: PathBuf) -> Self {
        Self::layered(preferences, PreferenceOverrides::default(), Some(path))
    }

    fn layered(
        saved: UserPreferences,
        overrides: PreferenceOverrides,
        path: Option<PathBuf>,
    ) -> Self {
        Self {
            tx: watch::Sender::new(overrides.apply(saved)),
            saved,
            overrides,
            path,
        }
    }

    #[must_use]
    pub fn current(&self) -> UserPreferences {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn saved(&self) -> UserPreferences {
        self.saved
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UserPreferences> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Applies `change` to the effective value and returns whether anything
    /// changed. A slot the user changes is saved and its override dropped;
    /// untouched slots keep their saved value on disk.
    pub fn update(&mut self, change: impl FnOnce(&mut UserPreferences)) -> bool {
        let current = self.current();
        let mut next = current;
        change(&mut next);
        if next == current {
            return false;
        }

        if next.language != current.language {
            self.saved.language = next.language;
            self.overrides.language = None;
        }
        if next.theme != current.theme {
            self.saved.theme = next.theme;
            self.overrides.theme = None;
        }
        if next.time_format != current.time_format {
            self.saved.time_format = next.time_format;
            self.overrides.time_format = None;
        }

        if let Some(path) = &self.path
            && let Err(err) = save_preferences(path, &self.saved)
        {
            warn!(path = %path.display(), error = %err, "could not persist preferences");
        }
        self.tx.send_replace(self.overrides.apply(self.saved));
        true
    }
}

/// Each slot is parsed on its own; anything unreadable falls back to its
/// default without affecting the other slots.
#[must_use]
pub fn read_preferences(path: &Path) -> UserPreferences {
    let defaults = UserPreferences::default();
    let Ok(content) = fs::read_to_string(path) else {
        debug!(path = %path.display(), "no saved preferences");
        return defaults;
    };
    let Ok(slots) = serde_json::from_str::<HashMap<String, Value>>(&content) else {
        debug!(path = %path.display(), "saved preferences are not a JSON object");
        return defaults;
    };

    UserPreferences {
        language: slot(&slots, LANGUAGE_KEY).unwrap_or(defaults.language),
        theme: slot(&slots, THEME_KEY).unwrap_or(defaults.theme),
        time_format: slot(&slots, TIME_FORMAT_KEY).unwrap_or(defaults.time_format),
    }
}

fn slot<T: FromStr>(slots: &HashMap<String, Value>, key: &str) -> Option<T> {
    slots.get(key)?.as_str()?.parse().ok()
}

pub fn save_preferences(path: &Path, preferences: &UserPreferences) -> Result<(), PreferencesError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(PreferencesError::CreateDir)?;
    }
    let payload = serde_json::to_string_pretty(preferences)?;
    fs::write(path, payload).map_err(PreferencesError::Write)
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("SKYCAST_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("skycast")
            .join("settings.json"),
    )
}
