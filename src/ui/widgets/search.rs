use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use super::shared::{muted, panel_block, panel_style};
use crate::{domain::i18n::language_name, ui::RenderContext};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let theme = ctx.theme;
    let prefs = ctx.preferences;
    let title = format!(
        "{} · {} {} · {} {} · {} {}",
        ctx.dict.app_name,
        ctx.dict.theme,
        prefs.theme.as_str(),
        ctx.dict.language,
        language_name(prefs.language, prefs.language),
        ctx.dict.time_format,
        prefs.time_format.as_str(),
    );
    let block = panel_block(&title, theme);

    let query = ctx.state.search.query();
    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled("› ", Style::default().fg(theme.accent)),
            Span::styled(ctx.dict.search_placeholder, muted(theme)),
        ])
    } else {
        Line::from(vec![
            Span::styled("› ", Style::default().fg(theme.accent)),
            Span::styled(
                query.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_suggestions(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    if area.height < 3 {
        return;
    }
    let theme = ctx.theme;
    let search = &ctx.state.search;

    let items = search
        .suggestions()
        .iter()
        .map(|place| ListItem::new(place.suggestion_label()))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .style(panel_style(theme))
        .highlight_style(
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
        .block(panel_block(ctx.dict.search_placeholder, theme));
    let mut state = ListState::default().with_selected(search.selected());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}
