use crate::input::RaiseAmount;
use crate::money::format_chips;
use crate::player::Player;
use crate::round::AwardReason;
use crate::table::Stage;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, popup};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let [header, seats, status] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3), Constraint::Length(5)])
            .areas(f.area());

    draw_header(f, header, app);
    draw_seats(f, seats, app);
    draw_status(f, status, app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.raise_entry_active() {
        draw_raise_entry(f, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let engine = &app.engine;
    let cents = engine.chip_value_cents();
    let lines = vec![
        Line::from(format!(
            "Hand {}   Stage: {}   Blinds: {}/{}   Chip: {}",
            engine.hand_number(),
            engine.stage().label(),
            engine.small_blind(),
            engine.big_blind(),
            format_chips(1, cents),
        )),
        Line::from(format!(
            "Pot: {} ({})   Highest bet: {}   To call: {}",
            engine.pot(),
            format_chips(engine.pot(), cents),
            engine.current_highest_bet(),
            engine.amount_owed(),
        )),
    ];
    let block = Block::default().title("chip-table").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two rows of seats read clockwise: the top row left to right, the bottom row back.
fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let total = app.engine.players().len();
    let top = (total + 1) / 2;
    let [upper, lower] = Layout::vertical([Constraint::Ratio(1, 2); 2]).areas(area);

    let rows = [(upper, (0..top).collect::<Vec<_>>()), (lower, (top..total).rev().collect())];
    for (row, seats) in rows {
        if seats.is_empty() {
            continue;
        }
        let width = u32::try_from(seats.len()).unwrap_or(1);
        let cells = Layout::horizontal(seats.iter().map(|_| Constraint::Ratio(1, width)))
            .split(row);
        for (cell, &idx) in cells.iter().zip(&seats) {
            if let Some(p) = app.engine.players().get(idx) {
                render_seat(f, *cell, app, idx, p);
            }
        }
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let engine = &app.engine;
    let cents = engine.chip_value_cents();
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .areas(inner(area));

    let mut info: Vec<Line> = Vec::new();
    if engine.stage() == Stage::ShowCards {
        info.push(Line::from("Show cards: pick the winner and press W."));
    } else {
        let acting = engine.players().get(engine.current_player_index());
        info.push(Line::from(format!(
            "Acting: {}   Award target: P{}",
            acting.map(Player::name).unwrap_or("?"),
            app.focus + 1
        )));
    }
    if let Some(award) = engine.last_award() {
        let name = engine.players().get(award.seat).map(Player::name).unwrap_or("?");
        let how = match award.reason {
            AwardReason::LastStanding => "everyone else folded",
            _ => "awarded",
        };
        info.push(Line::from(format!(
            "Hand {}: {name} won {} ({how})",
            award.hand,
            format_chips(award.amount, cents)
        )));
    }
    if let Some(err) = app.action_error() {
        info.push(Line::styled(format!("Error: {err}"), Style::default().fg(Color::Red)));
    }

    let betting = if app.can_bet() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let raise_amount = app.raise_entry_text().and_then(RaiseAmount::parse);
    info.push(Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("F fold", betting),
        Span::raw(" • "),
        Span::styled(format!("C {}", engine.call_label()), betting),
        Span::raw(" • "),
        Span::styled(format!("R {}", engine.raise_label(raise_amount)), betting),
        Span::raw(" • "),
        Span::styled("W award pot", Style::default().add_modifier(Modifier::BOLD)),
    ]));
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), left);

    let keys = vec![Line::from(""), Line::from("? help • H history • M setup • Q quit")];
    f.render_widget(
        Paragraph::new(keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        right,
    );
}

fn render_seat(f: &mut Frame, seat_area: Rect, app: &AppState, idx: usize, p: &Player) {
    let engine = &app.engine;
    let cents = engine.chip_value_cents();
    let mut title = format!("P{} {}", idx + 1, p.name());
    if p.is_small_blind() {
        title.push_str(" [SB]");
    }
    if p.is_big_blind() {
        title.push_str(" [BB]");
    }
    if p.is_all_in() {
        title.push_str(" [ALL-IN]");
    }
    if idx == engine.current_player_index() {
        title.push_str(" [Act]");
    }
    if idx == app.focus {
        title.push_str(" [Target]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if p.is_folded() {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    } else if idx == engine.current_player_index() {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if idx == app.focus {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    let dim = Style::default().add_modifier(Modifier::DIM);
    let last = match p.last_action() {
        Some(s) => Line::from(format!("Last: {s}")),
        None => Line::from(vec![Span::raw("Last: "), Span::styled("--", dim)]),
    };
    let lines = vec![
        Line::from(format!("Stack: {} ({})", p.chips(), format_chips(p.chips(), cents))),
        Line::from(format!("Bet: {}", p.current_bet())),
        Line::from(if p.is_folded() { "Status: Folded" } else { "Status: In" }),
        last,
    ];
    f.render_widget(block, seat_area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(seat_area));
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = popup(70, AppState::HISTORY_PAGE_SIZE as u16 + 4, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.engine.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    }
    for entry in entries {
        let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
        lines.push(Line::from(format!(
            "#{} P{} {}{} [{}]",
            entry.hand,
            entry.seat + 1,
            entry.verb.label(),
            amount,
            entry.stage.label()
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_help(f: &mut Frame) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- C: call / check"),
        Line::from("- R: raise (type the amount over the highest bet)"),
        Line::from("- F: fold"),
        Line::from("- W: award the pot to the target seat"),
        Line::from("- ] / [ or arrows: move award target"),
        Line::from("- 1-9, 0: target seat"),
        Line::from("- H: history"),
        Line::from("- M: setup"),
        Line::from(""),
        Line::from(Span::styled("Raise Entry:", bold)),
        Line::from("- Type a whole number of chips"),
        Line::from("- Enter: submit, Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let area = popup(60, lines.len() as u16 + 2, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_raise_entry(f: &mut Frame, app: &AppState) {
    let area = popup(50, 8, f.area());
    let engine = &app.engine;
    let text = app.raise_entry_text().unwrap_or("");
    let amount = RaiseAmount::parse(text);
    let target = amount.map(|a| engine.current_highest_bet().saturating_add(a.get()));
    let lines = vec![
        Line::from(format!("Raise by: {text}")),
        Line::from(match target {
            Some(t) => format!("Bet becomes {t} ({})", engine.raise_label(amount)),
            None => "Enter chips over the highest bet".to_string(),
        }),
        Line::from("Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Raise").borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.raise_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}
