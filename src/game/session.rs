use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::game::collision::{self, HitReport, LifeLost};
use crate::game::fleet::Fleet;
use crate::game::geometry::Bounds;
use crate::game::input::{InputEvent, Key};
use crate::game::projectile::Projectile;
use crate::game::settings::Settings;
use crate::game::ship::Ship;
use crate::game::stats::GameStats;

/// How long the board stays frozen after a ship is lost.
pub const LIFE_LOST_PAUSE: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the play button. Also the initial state.
    Inactive,
    Active,
    /// Frozen after a lost ship; resumes at `until`.
    Paused { until: Instant },
}

/// Whether the caller should keep running after an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What happened during one call to [`Session::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: bool,
    pub fleet_reversed: bool,
    pub hits: HitReport,
    pub life_lost: Option<LifeLost>,
}

/// All game state for one process: settings, counters and every entity.
/// Each update and collision step takes the session by reference.
pub struct Session {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub fleet: Fleet,
    pub projectiles: Vec<Projectile>,
    state: SessionState,
    pointer_visible: bool,
}

impl Session {
    pub fn new(settings: Settings, high_score: u32) -> Self {
        let stats = GameStats::new(&settings, high_score);
        let ship = Ship::new(&settings);
        let fleet = Fleet::build(&settings);
        Self {
            settings,
            stats,
            ship,
            fleet,
            projectiles: Vec::new(),
            state: SessionState::Inactive,
            pointer_visible: true,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, SessionState::Paused { .. })
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    /// Clickable region that starts a new game, in viewport units.
    pub fn play_button(&self) -> Bounds {
        Bounds::centered_in(
            self.settings.play_button_width,
            self.settings.play_button_height,
            &self.settings.viewport(),
        )
    }

    /// Begin a new game from scratch. Ignored unless the session is inactive.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Inactive {
            return false;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;

        self.fleet.clear();
        self.projectiles.clear();
        self.fleet.rebuild(&self.settings);
        self.ship.recenter(&self.settings);

        self.state = SessionState::Active;
        self.pointer_visible = false;
        info!(invaders = self.fleet.len(), "game started");
        true
    }

    pub(crate) fn pause_until(&mut self, until: Instant) {
        self.state = SessionState::Paused { until };
    }

    pub(crate) fn end_game(&mut self) {
        self.stats.game_active = false;
        self.state = SessionState::Inactive;
        self.pointer_visible = true;
    }

    /// Fire a projectile if the game is running and fewer than
    /// `bullets_allowed` are in flight.
    pub fn fire_projectile(&mut self) -> bool {
        if self.state != SessionState::Active
            || self.projectiles.len() >= self.settings.bullets_allowed
        {
            return false;
        }
        self.projectiles
            .push(Projectile::fired_from(&self.ship, &self.settings));
        true
    }

    /// Apply one normalized input event. Quit requests are always honoured;
    /// everything else is dropped while the session is paused.
    pub fn handle_input(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => return Control::Quit,
            _ if self.is_paused() => {
                debug!(?event, "input ignored while paused");
            }
            InputEvent::KeyDown(Key::Move(direction)) => self.ship.set_intent(direction, true),
            InputEvent::KeyUp(direction) => self.ship.set_intent(direction, false),
            InputEvent::KeyDown(Key::Fire) => {
                self.fire_projectile();
            }
            InputEvent::KeyDown(Key::Play) => {
                self.start();
            }
            InputEvent::PointerClick { x, y } => {
                if self.play_button().contains_point(x, y) {
                    self.start();
                }
            }
        }
        Control::Continue
    }

    /// Advance the simulation by one tick: ship, then fleet and ground
    /// contact, then projectiles and their hits. Nothing moves while
    /// inactive or before a pause deadline.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();
        match self.state {
            SessionState::Inactive => return report,
            SessionState::Paused { until } if now < until => return report,
            SessionState::Paused { .. } => {
                debug!("pause over");
                self.state = SessionState::Active;
            }
            SessionState::Active => {}
        }
        report.advanced = true;

        self.ship.advance(&self.settings);

        report.fleet_reversed = self.fleet.advance_fleet(&mut self.settings);
        if collision::resolve_ship_contact(self) {
            report.life_lost = Some(collision::on_life_lost(self, now));
            return report;
        }

        self.update_projectiles();
        report.hits = collision::resolve_projectile_hits(self);
        report
    }

    fn update_projectiles(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.advance(&self.settings);
        }
        self.projectiles.retain(|p| !p.is_off_screen());
    }
}
