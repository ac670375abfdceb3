use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::{
    app::state::AppState,
    domain::i18n::dictionary,
    ui::format::{
        commentary_text, current_summary, detail_rows, forecast_rows, status_line,
    },
};

/// Plain-text rendition of the dashboard for `--one-shot`.
#[must_use]
pub fn render_text(state: &AppState, now: DateTime<Utc>) -> String {
    let prefs = state.preferences();
    let dict = dictionary(prefs.language);
    let mut out = String::new();

    let Some(view) = state.view.as_ref() else {
        if let Some((_, message)) = status_line(state, dict) {
            let _ = writeln!(out, "{message}");
        }
        return out;
    };

    let summary = current_summary(view, prefs, state.units, state.icons, now);
    let _ = writeln!(out, "{}", summary.heading);
    let _ = writeln!(out, "{}: {}", dict.local_time, summary.local_time);
    let _ = writeln!(
        out,
        "{} {}  {}",
        summary.icon, summary.temperature, summary.description
    );

    let _ = writeln!(out, "\n{}", dict.forecast);
    for row in forecast_rows(view, prefs.language, state.units, state.icons) {
        let _ = writeln!(
            out,
            "  {:<5} {} {:>6} / {:<6} {}",
            row.weekday, row.icon, row.max, row.min, row.description
        );
    }

    let _ = writeln!(out, "\n{}", dict.details);
    for (label, value) in detail_rows(view, dict, state.units) {
        let _ = writeln!(out, "  {label}: {value}");
    }

    let _ = writeln!(out, "\n{}", dict.commentary_title);
    let _ = writeln!(out, "  {}", commentary_text(&state.commentary, dict));
    out
}
