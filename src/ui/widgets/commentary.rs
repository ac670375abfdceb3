use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
};

use super::shared::{muted, panel_block};
use crate::{
    app::state::CommentaryState,
    ui::{RenderContext, format::commentary_text},
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let theme = ctx.theme;
    let commentary = &ctx.state.commentary;
    let style = match commentary {
        CommentaryState::Available(_) => Style::default().fg(theme.text),
        CommentaryState::Pending | CommentaryState::Unavailable => {
            muted(theme).add_modifier(Modifier::ITALIC)
        }
    };

    let body = Paragraph::new(commentary_text(commentary, ctx.dict))
        .style(style)
        .wrap(Wrap { trim: true })
        .block(panel_block(ctx.dict.commentary_title, theme));
    frame.render_widget(body, area);
}
