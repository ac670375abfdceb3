use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, Table},
};

use super::shared::{muted, panel_block};
use crate::ui::{RenderContext, format::detail_rows};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let theme = ctx.theme;
    let block = panel_block(ctx.dict.details, theme);

    let Some(view) = ctx.state.view.as_ref() else {
        frame.render_widget(block, area);
        return;
    };

    let details = detail_rows(view, ctx.dict, ctx.state.units);
    let label_width = details
        .iter()
        .map(|(label, _)| Line::from(*label).width())
        .max()
        .unwrap_or_default();
    let rows = details
        .into_iter()
        .map(|(label, value)| Row::new(vec![Cell::from(label).style(muted(theme)), Cell::from(value)]));
    let label_column = Constraint::Length(u16::try_from(label_width).unwrap_or(u16::MAX));
    let table = Table::new(rows, [label_column, Constraint::Fill(1)])
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}
