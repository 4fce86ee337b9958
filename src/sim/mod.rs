//! Headless simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! windowing code:
//! - One fixed step per frame
//! - Randomness only through the injected `RandomSource`
//! - Stable iteration order (spawn order)

pub mod collision;
pub mod entity;
pub mod projectile;
pub mod rng;
pub mod state;
pub mod tank;
pub mod tick;

pub use collision::{CollisionOutcome, CollisionResolver};
pub use entity::{Arena, Color, Direction, Entity, Rect};
pub use projectile::Projectile;
pub use rng::{RandomSource, seeded};
pub use state::{ENEMY_SHOT_COLOR, GameEvent, GamePhase, GameState, PLAYER_SHOT_COLOR};
pub use tank::{ControlMode, Controls, Tank};
pub use tick::{TickInput, tick};
