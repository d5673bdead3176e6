use crate::game::geometry::Bounds;

// Logical viewport. The renderer scales it to whatever the terminal offers.
pub const SCREEN_WIDTH: i32 = 1200;
pub const SCREEN_HEIGHT: i32 = 800;

const SHIP_WIDTH: i32 = 60;
const SHIP_HEIGHT: i32 = 48;
const INVADER_WIDTH: i32 = 60;
const INVADER_HEIGHT: i32 = 58;
const BULLET_WIDTH: i32 = 3;
const BULLET_HEIGHT: i32 = 15;
const PLAY_BUTTON_WIDTH: i32 = 200;
const PLAY_BUTTON_HEIGHT: i32 = 50;

const SHIP_LIMIT: u32 = 3;
const BULLETS_ALLOWED: usize = 3;
const FLEET_DROP_SPEED: f32 = 20.0;
const SPEEDUP_SCALE: f32 = 1.1;

// Per-tick speeds at the start of every game.
const BASE_SHIP_SPEED: f32 = 6.0;
const BASE_BULLET_SPEED: f32 = 12.0;
const BASE_INVADER_SPEED: f32 = 2.0;
const BASE_INVADER_POINTS: u32 = 50;

/// Tunable parameters.
///
/// The public fields are fixed for the lifetime of the process. The private
/// ones are the dynamic subset: they are only ever written by
/// [`Settings::initialize_dynamic_settings`] (new game),
/// [`Settings::increase_speed`] (level up), and the fleet's direction flip.
#[derive(Clone, Debug)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,
    pub invader_width: i32,
    pub invader_height: i32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullets_allowed: usize,
    pub fleet_drop_speed: f32,
    pub speedup_scale: f32,
    pub play_button_width: i32,
    pub play_button_height: i32,
    pub base_ship_speed: f32,
    pub base_bullet_speed: f32,
    pub base_invader_speed: f32,
    pub base_invader_points: u32,

    ship_speed: f32,
    invader_speed: f32,
    fleet_direction: f32, // 1.0 = right, -1.0 = left
    invader_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_limit: SHIP_LIMIT,
            invader_width: INVADER_WIDTH,
            invader_height: INVADER_HEIGHT,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullets_allowed: BULLETS_ALLOWED,
            fleet_drop_speed: FLEET_DROP_SPEED,
            speedup_scale: SPEEDUP_SCALE,
            play_button_width: PLAY_BUTTON_WIDTH,
            play_button_height: PLAY_BUTTON_HEIGHT,
            base_ship_speed: BASE_SHIP_SPEED,
            base_bullet_speed: BASE_BULLET_SPEED,
            base_invader_speed: BASE_INVADER_SPEED,
            base_invader_points: BASE_INVADER_POINTS,
            ship_speed: 0.0,
            invader_speed: 0.0,
            fleet_direction: 1.0,
            invader_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

impl Settings {
    /// Reset the dynamic subset to its base values. Called on every new game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = self.base_ship_speed;
        self.invader_speed = self.base_invader_speed;
        self.fleet_direction = 1.0;
        self.invader_points = self.base_invader_points;
    }

    /// Level-up difficulty ramp: ship speed, invader speed and the invader
    /// point value grow by `speedup_scale`. Projectiles keep their base speed.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.invader_speed *= self.speedup_scale;
        self.invader_points = (self.invader_points as f32 * self.speedup_scale).round() as u32;
    }

    pub(crate) fn reverse_fleet_direction(&mut self) {
        self.fleet_direction = -self.fleet_direction;
    }

    pub fn ship_speed(&self) -> f32 {
        self.ship_speed
    }

    pub fn bullet_speed(&self) -> f32 {
        self.base_bullet_speed
    }

    pub fn invader_speed(&self) -> f32 {
        self.invader_speed
    }

    pub fn fleet_direction(&self) -> f32 {
        self.fleet_direction
    }

    pub fn invader_points(&self) -> u32 {
        self.invader_points
    }

    pub fn viewport(&self) -> Bounds {
        Bounds::new(0, 0, self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_at_base_values() {
        let s = Settings::default();
        assert_eq!(s.ship_speed(), s.base_ship_speed);
        assert_eq!(s.bullet_speed(), s.base_bullet_speed);
        assert_eq!(s.invader_speed(), s.base_invader_speed);
        assert_eq!(s.invader_points(), s.base_invader_points);
        assert_eq!(s.fleet_direction(), 1.0);
    }

    #[test]
    fn increase_speed_scales_dynamic_values_only() {
        let mut s = Settings::default();
        s.increase_speed();
        assert!((s.ship_speed() - BASE_SHIP_SPEED * SPEEDUP_SCALE).abs() < 1e-4);
        assert_eq!(s.bullet_speed(), BASE_BULLET_SPEED);
        assert!((s.invader_speed() - BASE_INVADER_SPEED * SPEEDUP_SCALE).abs() < 1e-4);
        assert_eq!(s.invader_points(), 55);
    }

    #[test]
    fn initialize_undoes_ramp_and_direction_flip() {
        let mut s = Settings::default();
        s.increase_speed();
        s.increase_speed();
        s.reverse_fleet_direction();
        s.initialize_dynamic_settings();
        assert_eq!(s.ship_speed(), BASE_SHIP_SPEED);
        assert_eq!(s.invader_points(), BASE_INVADER_POINTS);
        assert_eq!(s.fleet_direction(), 1.0);
    }
}
