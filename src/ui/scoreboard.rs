use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::Session;

/// Score as the scoreboard shows it: rounded to the nearest ten, with
/// thousands separators.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_scoreboard(frame: &mut Frame, session: &Session, area: Rect) {
    let stats = &session.stats;
    let ships = "\u{25b2} ".repeat(stats.ships_left as usize);
    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));

    let status = Line::from(vec![
        Span::styled(" \u{1f47e} ", Style::default()),
        Span::styled(
            format!("Score: {} ", format_score(stats.score)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("High: {} ", format_score(stats.high_score())),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        Span::styled(format!("Level: {} ", stats.level), Style::default().fg(Color::Green)),
        sep(),
        Span::styled(
            format!("Ships: {}", ships),
            Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_tens() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(4), "0");
        assert_eq!(format_score(55), "60");
        assert_eq!(format_score(154), "150");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_score(4200), "4,200");
        assert_eq!(format_score(1_234_567), "1,234,570");
        assert_eq!(format_score(999_996), "1,000,000");
    }
}
