use crate::game::geometry::Bounds;
use crate::game::input::Direction;
use crate::game::settings::Settings;
use crate::game::sprite::{Sprite, SpriteKind};

/// The player's ship. The continuous position is the source of truth; the
/// integer rect is snapped from it after every move.
#[derive(Clone, Debug)]
pub struct Ship {
    x: f32,
    y: f32,
    rect: Bounds,
    moving: [bool; 4],
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            x: 0.0,
            y: 0.0,
            rect: Bounds::new(0, 0, settings.ship_width, settings.ship_height),
            moving: [false; 4],
        };
        ship.recenter(settings);
        ship
    }

    pub fn set_intent(&mut self, direction: Direction, active: bool) {
        self.moving[direction.index()] = active;
    }

    pub fn is_moving(&self, direction: Direction) -> bool {
        self.moving[direction.index()]
    }

    pub fn clear_intents(&mut self) {
        self.moving = [false; 4];
    }

    /// Move one tick along every active intent whose edge check passes, then
    /// keep the rect inside the viewport.
    pub fn advance(&mut self, settings: &Settings) {
        let screen = settings.viewport();
        let speed = settings.ship_speed();

        if self.is_moving(Direction::Right) && self.rect.right() < screen.right() {
            self.x += speed;
        }
        if self.is_moving(Direction::Left) && self.rect.left() > 0 {
            self.x -= speed;
        }
        if self.is_moving(Direction::Up) && self.rect.bottom() > 0 {
            self.y -= speed;
        }
        if self.is_moving(Direction::Down) && self.rect.bottom() < screen.bottom() {
            self.y += speed;
        }

        // A full step can overshoot an edge; clamp on each axis.
        let max_x = (screen.width - self.rect.width).max(0) as f32;
        let max_y = (screen.height - self.rect.height).max(0) as f32;
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);

        self.rect.x = self.x as i32;
        self.rect.y = self.y as i32;
    }

    /// Put the ship back at the bottom center of the viewport.
    pub fn recenter(&mut self, settings: &Settings) {
        let screen = settings.viewport();
        self.rect = Bounds::from_midbottom(
            self.rect.width,
            self.rect.height,
            screen.center_x(),
            screen.bottom(),
        );
        self.x = self.rect.x as f32;
        self.y = self.rect.y as f32;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Sprite for Ship {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Ship
    }

    fn bounds(&self) -> Bounds {
        self.rect
    }
}
