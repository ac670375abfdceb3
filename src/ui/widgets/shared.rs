use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn panel_style(theme: Theme) -> Style {
    Style::default().fg(theme.text).bg(theme.surface)
}

pub(super) fn panel_block(title: &str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .style(panel_style(theme))
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
}

pub(super) fn muted(theme: Theme) -> Style {
    Style::default().fg(theme.muted_text)
}
