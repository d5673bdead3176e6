use crate::game::geometry::Bounds;
use crate::game::settings::Settings;
use crate::game::sprite::{Sprite, SpriteKind};

/// One member of the fleet. Invaders carry no velocity of their own; the
/// fleet moves them all together.
#[derive(Clone, Debug)]
pub struct Invader {
    x: f32,
    y: f32,
    rect: Bounds,
}

impl Invader {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            x,
            y,
            rect: Bounds::new(x as i32, y as i32, settings.invader_width, settings.invader_height),
        }
    }

    /// True when the invader touches the side edge the fleet is heading for.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.touches_edge(settings.fleet_direction(), settings.screen_width)
    }

    pub fn touches_edge(&self, direction: f32, screen_width: i32) -> bool {
        if direction > 0.0 {
            self.rect.right() >= screen_width
        } else {
            self.rect.left() <= 0
        }
    }

    pub(crate) fn shift(&mut self, dx: f32) {
        self.x += dx;
        self.rect.x = self.x as i32;
    }

    pub(crate) fn drop_by(&mut self, dy: f32) {
        self.y += dy;
        self.rect.y = self.y as i32;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Sprite for Invader {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Invader
    }

    fn bounds(&self) -> Bounds {
        self.rect
    }
}
