pub mod format;
pub mod layout;
pub mod text;
pub mod theme;
pub mod widgets;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::{
        i18n::{Dictionary, dictionary},
        preferences::UserPreferences,
    },
};
use theme::{Theme, colors_enabled, theme_for};

/// Everything a widget needs besides its area.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub theme: Theme,
    pub dict: &'static Dictionary,
    pub preferences: UserPreferences,
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(state: &'a AppState, colors: bool, now: DateTime<Utc>) -> Self {
        let preferences = state.preferences();
        let style = state
            .view
            .as_ref()
            .map(|view| view.classification().style);
        Self {
            state,
            theme: theme_for(state.effective_theme(), style, colors),
            dict: dictionary(preferences.language),
            preferences,
            now,
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    render_at(frame, state, colors_enabled(cli.color), Utc::now());
}

pub fn render_at(frame: &mut Frame, state: &AppState, colors: bool, now: DateTime<Utc>) {
    let ctx = RenderContext::new(state, colors, now);
    let area = frame.area();
    let base = Style::default().fg(ctx.theme.text).bg(ctx.theme.background);

    if !layout::fits(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {}x{}.",
            layout::MIN_WIDTH,
            layout::MIN_HEIGHT
        ))
        .style(base)
        .block(Block::default().borders(Borders::ALL).title(ctx.dict.app_name));
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(Block::default().style(base), area);

    let areas = layout::dashboard_areas(area);
    widgets::search::render(frame, areas.search, &ctx);
    widgets::current::render(frame, areas.current, &ctx);
    widgets::forecast::render(frame, areas.forecast, &ctx);
    widgets::details::render(frame, areas.details, &ctx);
    widgets::commentary::render(frame, areas.commentary, &ctx);
    widgets::footer::render(frame, areas.footer, &ctx);

    if state.search.showing_suggestions() {
        let dropdown =
            layout::suggestion_area(areas.search, area, state.search.suggestions().len());
        widgets::search::render_suggestions(frame, dropdown, &ctx);
    }
}
