pub mod button;
pub mod field;
pub mod scoreboard;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" \u{1f47e} Alien Invasion ")
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(4),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(inner);

    scoreboard::render_scoreboard(frame, &app.session, chunks[0]);

    // Remembered so pointer clicks can be mapped back into the viewport.
    app.field_area = chunks[1];
    field::render_field(frame, &app.session, &app.starfield, chunks[1]);

    if app.session.pointer_visible() {
        button::render_play_button(frame, &app.session, chunks[1]);
    }
    if app.session.is_paused() {
        render_banner(frame, chunks[1], " SHIP LOST ");
    }

    render_help(frame, chunks[2]);
}

fn render_banner(frame: &mut Frame, field: Rect, text: &str) {
    if field.height == 0 {
        return;
    }
    let area = Rect::new(field.x, field.y + field.height / 2, field.width, 1);
    let banner = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" \u{2190}\u{2191}\u{2193}\u{2192} ", key),
        Span::styled("Move ", text),
        Span::styled("| ", sep),
        Span::styled("Space ", key),
        Span::styled("Shoot ", text),
        Span::styled("| ", sep),
        Span::styled("Enter ", key),
        Span::styled("Play ", text),
        Span::styled("| ", sep),
        Span::styled("Q ", key),
        Span::styled("Quit", text),
    ]));
    frame.render_widget(help, area);
}
