pub mod collision;
pub mod fleet;
pub mod geometry;
pub mod input;
pub mod invader;
pub mod projectile;
pub mod session;
pub mod settings;
pub mod ship;
pub mod sprite;
pub mod stats;

pub use collision::{HitReport, LifeLost};
pub use fleet::{Fleet, FleetLayout};
pub use geometry::Bounds;
pub use input::{Direction, InputEvent, Key};
pub use invader::Invader;
pub use projectile::Projectile;
pub use session::{Control, Session, SessionState, TickReport, LIFE_LOST_PAUSE};
pub use settings::Settings;
pub use ship::Ship;
pub use sprite::{Sprite, SpriteKind};
pub use stats::GameStats;
