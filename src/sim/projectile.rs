//! Projectiles fired by tanks

use glam::Vec2;

use super::entity::{Arena, Color, Direction, Entity, Rect};
use crate::consts::PROJECTILE_SIZE;

/// A shot in flight. Moves at a constant velocity until it leaves the arena
/// or hits an opposing tank.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub body: Entity,
    pub vel: Vec2,
    /// Inherited from the firer's side
    pub color: Color,
    /// Cleared when the projectile leaves the arena or hits something
    pub alive: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, direction: Direction, speed: f32, color: Color) -> Self {
        let mut body = Entity::new(pos, PROJECTILE_SIZE);
        body.direction = direction;
        Self {
            body,
            vel: direction.vector() * speed,
            color,
            alive: true,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn radius(&self) -> f32 {
        self.body.size.x / 2.0
    }

    /// Advance one frame; expire once fully outside the arena
    pub fn update(&mut self, arena: &Arena) {
        self.body.pos += self.vel;
        if arena.is_outside(&self.bounds()) {
            self.alive = false;
        }
    }
}
