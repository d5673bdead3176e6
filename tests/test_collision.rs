use std::time::Instant;

use alien_invasion::game::collision::{
    on_life_lost, regenerate_fleet, resolve_projectile_hits, resolve_ship_contact,
};
use alien_invasion::game::*;

fn active_session() -> Session {
    let mut session = Session::new(Settings::default(), 0);
    assert!(session.start());
    session
}

fn invader(session: &Session, x: f32, y: f32) -> Invader {
    Invader::new(x, y, &session.settings)
}

fn projectile(session: &Session, x: i32, y: f32) -> Projectile {
    Projectile::new(x, y, &session.settings)
}

// ── projectile hits ───────────────────────────────────────────────────────────

#[test]
fn no_overlap_no_change() {
    let mut s = active_session();
    s.projectiles = vec![projectile(&s, 600, 700.0)];
    let before = s.fleet.len();
    let report = resolve_projectile_hits(&mut s);
    assert_eq!(report, HitReport::default());
    assert_eq!(s.fleet.len(), before);
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.stats.score, 0);
}

#[test]
fn each_hit_scores_points_per_invader() {
    let mut s = active_session();
    s.fleet = Fleet::from_invaders(vec![
        invader(&s, 100.0, 100.0),
        invader(&s, 300.0, 100.0),
        invader(&s, 500.0, 100.0),
        invader(&s, 900.0, 100.0),
    ]);
    s.projectiles = vec![
        projectile(&s, 120, 110.0),
        projectile(&s, 320, 110.0),
        projectile(&s, 520, 110.0),
        projectile(&s, 700, 500.0),
    ];
    let points = s.settings.invader_points();

    let report = resolve_projectile_hits(&mut s);

    assert_eq!(report.destroyed, 3);
    assert_eq!(report.points, 3 * points);
    assert!(!report.level_up);
    assert_eq!(s.stats.score, 3 * points);
    assert_eq!(s.fleet.len(), 1);
    assert_eq!(s.fleet.invaders()[0].bounds().x, 900);
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.projectiles[0].bounds().x, 700);
}

#[test]
fn one_projectile_destroys_one_invader() {
    let mut s = active_session();
    // Overlapping invaders; the shot at x=155 touches both.
    s.fleet = Fleet::from_invaders(vec![
        invader(&s, 100.0, 100.0),
        invader(&s, 150.0, 100.0),
    ]);
    s.projectiles = vec![projectile(&s, 155, 110.0)];
    let report = resolve_projectile_hits(&mut s);
    assert_eq!(report.destroyed, 1);
    assert_eq!(s.fleet.len(), 1);
    assert_eq!(s.fleet.invaders()[0].bounds().x, 150);
    assert!(s.projectiles.is_empty());
}

#[test]
fn one_invader_absorbs_one_projectile() {
    let mut s = active_session();
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0), invader(&s, 800.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 110, 110.0), projectile(&s, 130, 120.0)];
    let report = resolve_projectile_hits(&mut s);
    assert_eq!(report.destroyed, 1);
    assert_eq!(s.stats.score, s.settings.invader_points());
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.projectiles[0].bounds().x, 130);
}

#[test]
fn scoring_raises_high_score() {
    let mut s = Session::new(Settings::default(), 20);
    s.start();
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0), invader(&s, 800.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 120, 110.0)];
    resolve_projectile_hits(&mut s);
    assert_eq!(s.stats.high_score(), s.settings.invader_points());
}

#[test]
fn scoring_below_record_keeps_high_score() {
    let mut s = Session::new(Settings::default(), 10_000);
    s.start();
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0), invader(&s, 800.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 120, 110.0)];
    resolve_projectile_hits(&mut s);
    assert_eq!(s.stats.high_score(), 10_000);
}

#[test]
fn score_saturates_instead_of_overflowing() {
    let mut s = active_session();
    s.stats.score = u32::MAX - 10;
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0), invader(&s, 800.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 120, 110.0)];
    let report = resolve_projectile_hits(&mut s);
    assert_eq!(report.destroyed, 1);
    assert_eq!(s.stats.score, u32::MAX);
    assert_eq!(s.stats.high_score(), u32::MAX);
}

#[test]
fn huge_point_values_saturate() {
    let mut s = active_session();
    for _ in 0..300 {
        s.settings.increase_speed();
    }
    assert_eq!(s.settings.invader_points(), u32::MAX);
    s.fleet = Fleet::from_invaders(vec![
        invader(&s, 100.0, 100.0),
        invader(&s, 300.0, 100.0),
        invader(&s, 800.0, 100.0),
    ]);
    s.projectiles = vec![projectile(&s, 120, 110.0), projectile(&s, 320, 110.0)];
    let report = resolve_projectile_hits(&mut s);
    assert_eq!(report.destroyed, 2);
    assert_eq!(report.points, u32::MAX);
    assert_eq!(s.stats.score, u32::MAX);
}

// ── fleet regeneration ────────────────────────────────────────────────────────

#[test]
fn clearing_fleet_starts_next_wave_in_same_step() {
    let mut s = active_session();
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 120, 110.0), projectile(&s, 700, 500.0)];
    let ship_speed = s.settings.ship_speed();
    let bullet_speed = s.settings.bullet_speed();
    let invader_speed = s.settings.invader_speed();
    let scale = s.settings.speedup_scale;

    let report = resolve_projectile_hits(&mut s);

    assert!(report.level_up);
    assert_eq!(report.destroyed, 1);
    assert_eq!(s.stats.level, 2);
    assert_eq!(s.fleet.len(), FleetLayout::compute(&s.settings).len());
    assert!(!s.fleet.is_empty());
    assert!(s.projectiles.is_empty());
    assert!((s.settings.ship_speed() - ship_speed * scale).abs() < 1e-4);
    assert_eq!(s.settings.bullet_speed(), bullet_speed);
    assert!((s.settings.invader_speed() - invader_speed * scale).abs() < 1e-4);
}

#[test]
fn points_for_the_clearing_shot_use_old_value() {
    let mut s = active_session();
    let points = s.settings.invader_points();
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 120, 110.0)];
    resolve_projectile_hits(&mut s);
    assert_eq!(s.stats.score, points);
    assert!(s.settings.invader_points() > points);
}

#[test]
fn shots_still_connect_after_many_level_ups() {
    let mut s = active_session();
    for _ in 0..19 {
        s.settings.increase_speed();
    }
    assert_eq!(s.settings.bullet_speed(), s.settings.base_bullet_speed);
    // One step must never carry a shot across an invader.
    let step = s.settings.bullet_speed() as i32;
    assert!(step < s.settings.bullet_height + s.settings.invader_height);

    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 100.0)]);
    s.projectiles = vec![projectile(&s, 120, 159.0)];
    let report = s.tick(Instant::now());
    assert_eq!(report.hits.destroyed, 1);
}

#[test]
fn degenerate_geometry_regenerates_to_empty_fleet() {
    let mut settings = Settings::default();
    settings.screen_height = 200;
    let mut s = Session::new(settings, 0);
    s.start();
    assert!(s.fleet.is_empty());

    regenerate_fleet(&mut s);
    assert!(s.fleet.is_empty());
    assert_eq!(s.stats.level, 2);

    // Hits against an empty fleet do nothing, and nothing levels up.
    s.projectiles = vec![projectile(&s, 100, 100.0)];
    let report = resolve_projectile_hits(&mut s);
    assert_eq!(report, HitReport::default());
    assert_eq!(s.stats.level, 2);
}

// ── ship contact ──────────────────────────────────────────────────────────────

#[test]
fn fresh_board_has_no_contact() {
    let s = active_session();
    assert!(!resolve_ship_contact(&s));
}

#[test]
fn invader_touching_ship_is_contact() {
    let mut s = active_session();
    let ship = s.ship.bounds();
    s.fleet = Fleet::from_invaders(vec![invader(&s, ship.x as f32 + 10.0, ship.y as f32 - 30.0)]);
    assert!(resolve_ship_contact(&s));
}

#[test]
fn invader_on_ground_is_contact() {
    let mut s = active_session();
    let bottom_y = (s.settings.screen_height - s.settings.invader_height) as f32;
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, bottom_y)]);
    assert!(resolve_ship_contact(&s));
}

// ── losing a ship ─────────────────────────────────────────────────────────────

#[test]
fn life_lost_with_ships_remaining_resets_board() {
    let mut s = active_session();
    let now = Instant::now();
    s.stats.ships_left = 2;
    s.fleet = Fleet::from_invaders(vec![invader(&s, 100.0, 600.0)]);
    s.projectiles = vec![projectile(&s, 300, 300.0)];
    s.ship.set_intent(Direction::Left, true);
    for _ in 0..10 {
        s.ship.advance(&s.settings);
    }
    let home = Ship::new(&s.settings).bounds();
    assert_ne!(s.ship.bounds(), home);

    let outcome = on_life_lost(&mut s, now);

    assert_eq!(outcome, LifeLost::Respawn { ships_left: 1 });
    assert_eq!(s.stats.ships_left, 1);
    assert!(s.stats.game_active);
    assert_eq!(s.state(), SessionState::Paused { until: now + LIFE_LOST_PAUSE });
    assert_eq!(s.fleet.len(), FleetLayout::compute(&s.settings).len());
    assert!(s.projectiles.is_empty());
    assert_eq!(s.ship.bounds(), home);
    assert!(!s.ship.is_moving(Direction::Left));
    assert!(!s.pointer_visible());
}

#[test]
fn life_lost_with_last_ship_ends_game() {
    let mut s = active_session();
    s.stats.ships_left = 1;
    s.stats.score = 750;

    let outcome = on_life_lost(&mut s, Instant::now());

    assert_eq!(outcome, LifeLost::GameOver);
    assert_eq!(s.stats.ships_left, 0);
    assert!(!s.stats.game_active);
    assert_eq!(s.state(), SessionState::Inactive);
    assert!(s.pointer_visible());
    assert_eq!(s.stats.score, 750);
}

#[test]
fn life_lost_at_zero_stays_at_zero() {
    let mut s = active_session();
    s.stats.ships_left = 0;
    assert_eq!(on_life_lost(&mut s, Instant::now()), LifeLost::GameOver);
    assert_eq!(s.stats.ships_left, 0);
    assert!(!s.stats.game_active);
}
