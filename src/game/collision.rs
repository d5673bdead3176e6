//! Collision detection and the score, level and life changes that follow
//! from it. Every function works on the whole [`Session`] so the rules that
//! tie entities to counters live in one place.

use std::time::Instant;

use tracing::info;

use crate::game::session::{Session, LIFE_LOST_PAUSE};
use crate::game::sprite::Sprite;

/// What one round of projectile collision resolution did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitReport {
    pub destroyed: usize,
    pub points: u32,
    pub level_up: bool,
}

/// Outcome of losing a ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeLost {
    Respawn { ships_left: u32 },
    GameOver,
}

/// Pair every projectile with at most one overlapping invader, remove both
/// members of each pair, and score them. Clearing the fleet this way
/// regenerates it and raises the level.
pub fn resolve_projectile_hits(session: &mut Session) -> HitReport {
    let invaders = session.fleet.invaders();
    let mut claimed = vec![false; invaders.len()];
    let mut spent_projectiles = Vec::new();
    let mut destroyed_invaders = Vec::new();

    for (pi, projectile) in session.projectiles.iter().enumerate() {
        let hit = invaders
            .iter()
            .enumerate()
            .find(|(ii, invader)| !claimed[*ii] && projectile.collides_with(*invader));
        if let Some((ii, _)) = hit {
            claimed[ii] = true;
            spent_projectiles.push(pi);
            destroyed_invaders.push(ii);
        }
    }

    if destroyed_invaders.is_empty() {
        return HitReport::default();
    }

    let mut spent = spent_projectiles.into_iter().peekable();
    let mut index = 0;
    session.projectiles.retain(|_| {
        let keep = spent.peek() != Some(&index);
        if !keep {
            spent.next();
        }
        index += 1;
        keep
    });
    session.fleet.remove_indices(&destroyed_invaders);

    let destroyed = destroyed_invaders.len();
    let points = session
        .settings
        .invader_points()
        .saturating_mul(destroyed as u32);
    session.stats.score = session.stats.score.saturating_add(points);
    session.stats.commit_high_score_if_better(session.stats.score);

    let mut report = HitReport {
        destroyed,
        points,
        level_up: false,
    };
    if session.fleet.is_empty() {
        regenerate_fleet(session);
        report.level_up = true;
    }
    report
}

/// Start the next wave: fresh fleet, no projectiles in flight, faster game.
pub fn regenerate_fleet(session: &mut Session) {
    session.projectiles.clear();
    session.fleet.rebuild(&session.settings);
    session.settings.increase_speed();
    session.stats.level += 1;
    info!(
        level = session.stats.level,
        invaders = session.fleet.len(),
        "fleet cleared, next wave"
    );
}

/// True if the ship touches any invader or any invader reached the ground.
pub fn resolve_ship_contact(session: &Session) -> bool {
    let ship = &session.ship;
    session
        .fleet
        .invaders()
        .iter()
        .any(|invader| invader.collides_with(ship))
        || session.fleet.reached_bottom(&session.settings)
}

/// Take a ship away. With ships remaining the board is reset and the session
/// pauses briefly; otherwise the game ends.
pub fn on_life_lost(session: &mut Session, now: Instant) -> LifeLost {
    session.stats.ships_left = session.stats.ships_left.saturating_sub(1);

    if session.stats.ships_left > 0 {
        session.fleet.clear();
        session.projectiles.clear();
        session.fleet.rebuild(&session.settings);
        session.ship.recenter(&session.settings);
        session.ship.clear_intents();
        session.pause_until(now + LIFE_LOST_PAUSE);
        info!(ships_left = session.stats.ships_left, "ship lost");
        LifeLost::Respawn {
            ships_left: session.stats.ships_left,
        }
    } else {
        session.end_game();
        info!(
            score = session.stats.score,
            level = session.stats.level,
            high_score = session.stats.high_score(),
            "game over"
        );
        LifeLost::GameOver
    }
}
