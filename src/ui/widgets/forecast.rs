use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use super::shared::{muted, panel_block};
use crate::ui::{RenderContext, format::forecast_rows};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let theme = ctx.theme;
    let block = panel_block(ctx.dict.forecast, theme);

    let Some(view) = ctx.state.view.as_ref() else {
        frame.render_widget(block, area);
        return;
    };

    let rows = forecast_rows(
        view,
        ctx.preferences.language,
        ctx.state.units,
        ctx.state.icons,
    )
    .into_iter()
    .map(|row| {
        Row::new(vec![
            Cell::from(row.weekday).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(row.icon).style(Style::default().fg(theme.accent)),
            Cell::from(row.max),
            Cell::from(row.min).style(muted(theme)),
            Cell::from(row.description),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Fill(1),
        ],
    )
    .column_spacing(1)
    .block(block);
    frame.render_widget(table, area);
}
