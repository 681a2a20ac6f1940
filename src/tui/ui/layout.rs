use ratatui::layout::{Constraint, Flex};
use ratatui::prelude::{Layout, Rect};

/// Area inside a one-cell border. Collapses to nothing on areas too small to hold one.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// A popup `percent_x` wide and `height` rows tall, centered in `r`.
pub(super) fn popup(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}
