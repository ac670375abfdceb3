use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width forecast and details are stacked instead of side by side.
pub const WIDE_MIN_WIDTH: u16 = 90;
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub search: Rect,
    pub current: Rect,
    pub forecast: Rect,
    pub details: Rect,
    pub commentary: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

#[must_use]
pub fn is_wide(width: u16) -> bool {
    width >= WIDE_MIN_WIDTH
}

#[must_use]
pub fn dashboard_areas(area: Rect) -> DashboardAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .split(area);

    let (forecast, details) = if is_wide(area.width) {
        let cols = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[2]);
        (cols[0], cols[1])
    } else {
        let stacked = Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).split(rows[2]);
        (stacked[0], stacked[1])
    };

    DashboardAreas {
        search: rows[0],
        current: rows[1],
        forecast,
        details,
        commentary: rows[3],
        footer: rows[4],
    }
}

/// Rectangle for the suggestion dropdown, anchored under the search box.
#[must_use]
pub fn suggestion_area(search: Rect, bounds: Rect, rows: usize) -> Rect {
    let wanted = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let y = search.bottom();
    let height = wanted.min(bounds.bottom().saturating_sub(y));
    Rect {
        x: search.x,
        y,
        width: search.width,
        height,
    }
}
