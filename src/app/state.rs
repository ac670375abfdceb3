use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::{
    app::{events::AppEvent, search::SearchBox, settings::PreferencesStore},
    cli::{Cli, IconMode},
    data::{
        commentary::{CommentaryClient, CommentaryRequest},
        forecast::WeatherClient,
        geocode::GeocodeClient,
    },
    domain::{
        i18n::dictionary,
        preferences::{EffectiveTheme, Language, UserPreferences},
        weather::{Place, Units, WeatherView, describe},
    },
    resilience::{
        debounce,
        sequence::{Sequence, Token},
    },
};

/// Progress of the current fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Commentary sub-state, orthogonal to [`AppMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentaryState {
    Pending,
    Available(String),
    Unavailable,
}

/// The three HTTP collaborators, built once from the command line.
#[derive(Debug, Clone)]
pub struct Services {
    pub geocode: GeocodeClient,
    pub weather: WeatherClient,
    pub commentary: CommentaryClient,
}

impl Services {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let timeout = Duration::from_secs(cli.timeout_secs);
        let geocode = match &cli.geocode_url {
            Some(url) => GeocodeClient::with_base_url(url.clone(), timeout),
            None => GeocodeClient::new(timeout),
        };
        let weather = match &cli.forecast_url {
            Some(url) => WeatherClient::with_base_url(url.clone(), timeout),
            None => WeatherClient::new(timeout),
        };
        let commentary_timeout = timeout.saturating_mul(2);
        let api_key = cli.commentary_api_key.clone();
        let commentary = match &cli.commentary_url {
            Some(url) => CommentaryClient::with_base_url(
                url.clone(),
                cli.commentary_model.clone(),
                api_key,
                commentary_timeout,
            ),
            None => CommentaryClient::new(cli.commentary_model.clone(), api_key, commentary_timeout),
        };
        Self {
            geocode,
            weather,
            commentary,
        }
    }
}

/// The orchestrator. Owns the weather view and its commentary; background
/// tasks report back through [`AppEvent`]s and never touch this directly.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub view: Option<WeatherView>,
    pub commentary: CommentaryState,
    pub last_error: Option<String>,
    pub search: SearchBox,
    pub units: Units,
    pub icons: IconMode,
    default_place: Place,
    active_place: Option<Place>,
    cycles: Sequence,
    preferences: PreferencesStore,
    services: Services,
    debounce: Duration,
}

impl AppState {
    pub fn new(cli: &Cli, preferences: PreferencesStore) -> Self {
        Self {
            mode: AppMode::Idle,
            running: true,
            view: None,
            commentary: CommentaryState::Pending,
            last_error: None,
            search: SearchBox::new(),
            units: cli.units(),
            icons: cli.icons,
            default_place: cli.default_place(),
            active_place: None,
            cycles: Sequence::new(),
            preferences,
            services: Services::from_cli(cli),
            debounce: Duration::from_millis(cli.debounce_ms),
        }
    }

    #[must_use]
    pub fn preferences(&self) -> UserPreferences {
        self.preferences.current()
    }

    #[must_use]
    pub fn subscribe_preferences(&self) -> watch::Receiver<UserPreferences> {
        self.preferences.subscribe()
    }

    #[must_use]
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.preferences().effective_theme(self.view.as_ref())
    }

    #[must_use]
    pub fn current_cycle(&self) -> Token {
        self.cycles.current()
    }

    #[must_use]
    pub fn active_place(&self) -> Option<&Place> {
        self.active_place.as_ref()
    }

    /// Localized message for a failed cycle, in the current language.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        (self.mode == AppMode::Failed).then(|| dictionary(self.preferences().language).fetch_error)
    }

    /// True once the current cycle has a weather outcome and its
    /// commentary has resolved one way or the other.
    #[must_use]
    pub fn cycle_settled(&self) -> bool {
        matches!(self.mode, AppMode::Ready | AppMode::Failed)
            && self.commentary != CommentaryState::Pending
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                let place = self.default_place.clone();
                self.start_fetch(place, tx);
            }
            AppEvent::Input(event) => self.handle_input(event, tx),
            AppEvent::SearchDebounced { token } => self.lookup_suggestions(token, tx),
            AppEvent::SuggestionsReady { token, places } => {
                if !self.search.apply_suggestions(token, places) {
                    debug!(token = token.value(), "discarding stale suggestions");
                }
            }
            AppEvent::FetchSucceeded {
                cycle,
                place,
                report,
            } => {
                if !self.cycles.is_current(cycle) {
                    debug!(cycle = cycle.value(), place = %place.name, "discarding stale forecast");
                    return Ok(());
                }
                let view = WeatherView::new(place, report);
                info!(
                    cycle = cycle.value(),
                    place = %view.place.name,
                    style = view.classification().style.as_str(),
                    "weather ready"
                );
                self.view = Some(view);
                self.mode = AppMode::Ready;
                self.request_commentary(cycle, tx);
            }
            AppEvent::FetchFailed { cycle, error } => {
                if !self.cycles.is_current(cycle) {
                    debug!(cycle = cycle.value(), "discarding stale fetch failure");
                    return Ok(());
                }
                warn!(cycle = cycle.value(), error = %error, "weather fetch failed");
                self.view = None;
                self.mode = AppMode::Failed;
                self.last_error = Some(error);
                self.commentary = CommentaryState::Unavailable;
            }
            AppEvent::CommentaryResolved { cycle, text } => {
                if !self.cycles.is_current(cycle) {
                    debug!(cycle = cycle.value(), "discarding stale commentary");
                    return Ok(());
                }
                self.commentary = match text {
                    Some(text) => CommentaryState::Available(text),
                    None => CommentaryState::Unavailable,
                };
            }
        }

        Ok(())
    }

    /// Begins a new fetch cycle for `place`. The previous view stays on
    /// screen until this cycle resolves.
    pub fn start_fetch(&mut self, place: Place, tx: &mpsc::Sender<AppEvent>) {
        let cycle = self.cycles.advance();
        self.mode = AppMode::Loading;
        self.last_error = None;
        self.commentary = CommentaryState::Pending;
        self.active_place = Some(place.clone());
        info!(cycle = cycle.value(), place = %place.name, "starting fetch cycle");

        let client = self.services.weather.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch(place.latitude, place.longitude).await {
                Ok(report) => AppEvent::FetchSucceeded {
                    cycle,
                    place,
                    report,
                },
                Err(err) => AppEvent::FetchFailed {
                    cycle,
                    error: err.to_string(),
                },
            };
            let _ = tx.send(event).await;
        });
    }

    /// Edits the search query and schedules a debounced lookup.
    pub fn set_query(&mut self, query: impl Into<String>, tx: &mpsc::Sender<AppEvent>) {
        let token = self.search.set_query(query);
        self.schedule_lookup(token, tx);
    }

    /// Starts a fetch for the chosen suggestion, if there is one.
    pub fn choose_suggestion(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if let Some(place) = self.search.choose() {
            self.start_fetch(place, tx);
        }
    }

    /// Changing language re-runs the current cycle's place, since both the
    /// description and the commentary are language dependent.
    pub fn set_language(&mut self, language: Language, tx: &mpsc::Sender<AppEvent>) {
        if !self.preferences.update(|prefs| prefs.language = language) {
            return;
        }
        if self.view.is_some()
            && let Some(place) = self.active_place.clone()
        {
            self.start_fetch(place, tx);
        }
    }

    pub fn cycle_theme(&mut self) {
        self.preferences.update(|prefs| prefs.theme = prefs.theme.next());
    }

    pub fn toggle_time_format(&mut self) {
        self.preferences
            .update(|prefs| prefs.time_format = prefs.time_format.toggled());
    }

    fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key, tx);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        let modified = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Esc if self.search.showing_suggestions() => self.search.dismiss(),
            KeyCode::Esc => self.running = false,
            KeyCode::Down => self.search.select_next(),
            KeyCode::Up => self.search.select_prev(),
            KeyCode::Enter => self.choose_suggestion(tx),
            KeyCode::F(2) => self.cycle_theme(),
            KeyCode::F(3) => {
                let next = self.preferences().language.next();
                self.set_language(next, tx);
            }
            KeyCode::F(4) => self.toggle_time_format(),
            KeyCode::Backspace => {
                let token = self.search.pop_char();
                self.schedule_lookup(token, tx);
            }
            KeyCode::Char(ch) if !modified && !ch.is_control() => {
                let token = self.search.push_char(ch);
                self.schedule_lookup(token, tx);
            }
            _ => {}
        }
    }

    fn schedule_lookup(&self, token: Option<Token>, tx: &mpsc::Sender<AppEvent>) {
        if let Some(token) = token {
            debounce::schedule(tx.clone(), self.debounce, AppEvent::SearchDebounced { token });
        }
    }

    fn lookup_suggestions(&self, token: Token, tx: &mpsc::Sender<AppEvent>) {
        if !self.search.is_current(token) {
            return;
        }
        let query = self.search.query().trim().to_string();
        let language = self.preferences().language;
        let client = self.services.geocode.clone();
        let tx = tx.clone();
        debug!(query = %query, token = token.value(), "looking up suggestions");
        tokio::spawn(async move {
            let places = client.search(&query, language).await;
            let _ = tx.send(AppEvent::SuggestionsReady { token, places }).await;
        });
    }

    fn request_commentary(&self, cycle: Token, tx: &mpsc::Sender<AppEvent>) {
        let Some(view) = &self.view else {
            return;
        };
        let language = self.preferences().language;
        let request = CommentaryRequest {
            city: view.place.name.clone(),
            description: describe(view.snapshot.weather_code, language).to_string(),
            temperature_c: view.snapshot.temperature_c,
            humidity: view.snapshot.relative_humidity,
            wind_speed_kmh: view.snapshot.wind_speed_kmh,
            language,
        };
        let client = self.services.commentary.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let text = client.generate_best_effort(&request).await;
            let _ = tx.send(AppEvent::CommentaryResolved { cycle, text }).await;
        });
    }
}

#[cfg(test)]
mod tests;
