use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, popup};

pub(super) fn draw_setup(f: &mut Frame, app: &AppState) {
    let items = app.menu_items_display();
    let height = items.len() as u16 + 9;
    let area = popup(60, height, f.area());
    let block =
        Block::default().title(format!("chip-table v{}", crate::VERSION)).borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Table Setup",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for (i, it) in items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    lines.push(Line::from(""));
    if let Some(err) = app.menu_error() {
        lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    } else {
        lines.push(Line::from("Blinds are posted by seats 1 and 2 every hand."));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Deal  [Q] Quit  [Esc] Back  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, inner(area));
}
