use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::game::{Control, Direction, InputEvent, Key, Session};
use crate::scores::HighScoreStore;
use crate::ui::field::{cell_to_viewport, Starfield};

/// Without key release reporting, a held direction lets go after this long
/// without a repeat.
pub const RELEASE_FALLBACK: Duration = Duration::from_millis(500);

const STAR_COUNT: usize = 60;

pub struct App {
    pub should_quit: bool,
    pub session: Session,
    /// Terminal area the playfield was last drawn into.
    pub field_area: Rect,
    pub starfield: Starfield,
    store: HighScoreStore,
    saved_high_score: u32,
    release_events: bool,
    held: [Option<Instant>; 4],
}

impl App {
    /// `release_events` says whether the terminal reports key releases.
    pub fn new(session: Session, store: HighScoreStore, release_events: bool) -> Self {
        let saved_high_score = session.stats.high_score();
        Self {
            should_quit: false,
            session,
            field_area: Rect::default(),
            starfield: Starfield::new(STAR_COUNT),
            store,
            saved_high_score,
            release_events,
            held: [None; 4],
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.release_stale_keys(now);
        let report = self.session.tick(now);
        if report.hits.destroyed > 0 {
            debug!(
                destroyed = report.hits.destroyed,
                points = report.hits.points,
                score = self.session.stats.score,
                "invaders hit"
            );
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(event) = translate_key(key) else { return };
        if !self.release_events {
            if let InputEvent::KeyDown(Key::Move(direction)) = event {
                self.held[direction.index()] = Some(now);
            }
        }
        self.dispatch(event);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some((x, y)) =
            cell_to_viewport(self.field_area, mouse.column, mouse.row, &self.session.settings)
        {
            self.dispatch(InputEvent::PointerClick { x, y });
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) {
        if self.session.handle_input(event) == Control::Quit {
            self.quit();
        }
    }

    /// Persist the high score if this run raised it. Safe to call repeatedly.
    pub fn flush_high_score(&mut self) {
        let high_score = self.session.stats.high_score();
        if high_score <= self.saved_high_score {
            return;
        }
        match self.store.save(high_score) {
            Ok(()) => self.saved_high_score = high_score,
            Err(e) => warn!("{e}; high score not saved"),
        }
    }

    fn quit(&mut self) {
        self.flush_high_score();
        self.should_quit = true;
    }

    fn release_stale_keys(&mut self, now: Instant) {
        for direction in Direction::ALL {
            let slot = &mut self.held[direction.index()];
            if let Some(pressed) = *slot {
                if now.saturating_duration_since(pressed) >= RELEASE_FALLBACK {
                    *slot = None;
                    self.session.handle_input(InputEvent::KeyUp(direction));
                }
            }
        }
    }
}

/// Map a terminal key event onto the game's input vocabulary.
pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    let mapped = match key.code {
        KeyCode::Left => Key::Move(Direction::Left),
        KeyCode::Right => Key::Move(Direction::Right),
        KeyCode::Up => Key::Move(Direction::Up),
        KeyCode::Down => Key::Move(Direction::Down),
        KeyCode::Char(' ') => Key::Fire,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Quit,
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Key::Play,
        _ => return None,
    };

    match (key.kind, mapped) {
        (KeyEventKind::Press, _) => Some(InputEvent::KeyDown(mapped)),
        (KeyEventKind::Repeat, Key::Move(_)) => Some(InputEvent::KeyDown(mapped)),
        (KeyEventKind::Release, Key::Move(direction)) => Some(InputEvent::KeyUp(direction)),
        _ => None,
    }
}
