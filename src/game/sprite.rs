use crate::game::geometry::Bounds;

/// The closed set of things drawn on the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Ship,
    Projectile,
    Invader,
}

/// Shared capability of every playfield entity: a position that the
/// renderer draws and the collision engine tests against.
pub trait Sprite {
    fn kind(&self) -> SpriteKind;

    fn bounds(&self) -> Bounds;

    // Hitbox and render rect are the same rectangle.
    fn hitbox(&self) -> Bounds {
        self.bounds()
    }

    fn collides_with<S: Sprite + ?Sized>(&self, other: &S) -> bool
    where
        Self: Sized,
    {
        self.hitbox().overlaps(&other.hitbox())
    }
}
