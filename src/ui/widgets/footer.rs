use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::muted;
use crate::ui::{
    RenderContext,
    format::{StatusKind, status_line},
};

/// Loading and error states take precedence over the key hints.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let theme = ctx.theme;
    let line = match status_line(ctx.state, ctx.dict) {
        Some((StatusKind::Error, message)) => Line::from(Span::styled(
            format!(" ⚠ {message}"),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Some((StatusKind::Loading, message)) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(theme.warning),
        )),
        None => Line::from(Span::styled(format!(" {}", ctx.dict.key_hints), muted(theme))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
