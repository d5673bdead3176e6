use crate::game::geometry::Bounds;
use crate::game::settings::Settings;
use crate::game::ship::Ship;
use crate::game::sprite::{Sprite, SpriteKind};

/// A player shot travelling straight up.
#[derive(Clone, Debug)]
pub struct Projectile {
    y: f32,
    rect: Bounds,
}

impl Projectile {
    /// Projectile with its top-left corner at `(x, y)`.
    pub fn new(x: i32, y: f32, settings: &Settings) -> Self {
        Self {
            y,
            rect: Bounds::new(x, y as i32, settings.bullet_width, settings.bullet_height),
        }
    }

    /// Projectile leaving the nose of the ship.
    pub fn fired_from(ship: &Ship, settings: &Settings) -> Self {
        let nose = ship.bounds();
        let x = nose.center_x() - settings.bullet_width / 2;
        Self::new(x, nose.top() as f32, settings)
    }

    pub fn advance(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed();
        self.rect.y = self.y as i32;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Sprite for Projectile {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Projectile
    }

    fn bounds(&self) -> Bounds {
        self.rect
    }
}
