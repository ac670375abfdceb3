use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::{muted, panel_block};
use crate::ui::{
    RenderContext,
    format::{StatusKind, current_summary, status_line},
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let theme = ctx.theme;
    let state = ctx.state;

    let Some(view) = state.view.as_ref() else {
        let block = panel_block(ctx.dict.app_name, theme);
        let line = match status_line(state, ctx.dict) {
            Some((StatusKind::Error, message)) => Line::from(Span::styled(
                message,
                Style::default()
                    .fg(theme.danger)
                    .add_modifier(Modifier::BOLD),
            )),
            Some((StatusKind::Loading, message)) => Line::from(Span::styled(message, muted(theme))),
            None => Line::from(Span::styled(ctx.dict.loading, muted(theme))),
        };
        frame.render_widget(
            Paragraph::new(line).wrap(Wrap { trim: true }).block(block),
            area,
        );
        return;
    };

    let summary = current_summary(view, ctx.preferences, state.units, state.icons, ctx.now);
    let block = panel_block(&summary.heading, theme);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", ctx.dict.local_time), muted(theme)),
            Span::raw(summary.local_time),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", summary.icon),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                summary.temperature,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(summary.description),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
