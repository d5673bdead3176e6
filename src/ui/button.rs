use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::Session;
use crate::ui::field::viewport_to_cells;

const BUTTON_BG: Color = Color::Rgb(0, 160, 0);

/// Play button over the playfield, plus a game-over line once a game has ended.
pub fn render_play_button(frame: &mut Frame, session: &Session, field: Rect) {
    let cells = viewport_to_cells(session.play_button(), field, &session.settings);
    if cells.width == 0 || cells.height == 0 {
        return;
    }
    frame.render_widget(Clear, cells);

    // Center the label vertically inside the button.
    let mut lines = vec![Line::from(""); (cells.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(Span::styled(
        "\u{25b6} PLAY",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(BUTTON_BG));
    frame.render_widget(button, cells);

    let mut notes = Vec::new();
    if session.stats.ships_left == 0 {
        notes.push(Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    notes.push(Line::from(Span::styled(
        "click Play or press Enter",
        Style::default().fg(Color::Gray),
    )));

    let below = cells.y + cells.height;
    let room = (field.y + field.height).saturating_sub(below);
    let height = (notes.len() as u16).min(room);
    if height == 0 {
        return;
    }
    let notes_area = Rect::new(field.x, below, field.width, height);
    frame.render_widget(Paragraph::new(notes).alignment(Alignment::Center), notes_area);
}
