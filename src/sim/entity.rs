//! Shared geometry for everything that moves in the arena
//!
//! Coordinates are screen-space logical pixels: origin at the top-left
//! corner of the arena, x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// One of the four cardinal facings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All facings, in the order used for uniform random picks
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit vector in screen space (Up is -y)
    #[inline]
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// RGB color used as a side marker (player vs enemy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const GREEN: Color = Color::rgb(50, 200, 50);
    pub const RED: Color = Color::rgb(200, 50, 50);
    pub const YELLOW: Color = Color::rgb(240, 240, 80);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Axis-aligned rectangle given by its min (top-left) and max (bottom-right) corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }
}

/// The fixed playable area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn bounds(&self) -> Rect {
        Rect {
            min: Vec2::ZERO,
            max: Vec2::new(self.width, self.height),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True once `rect` has fully left the arena through any side
    pub fn is_outside(&self, rect: &Rect) -> bool {
        rect.right() < 0.0
            || rect.left() > self.width
            || rect.bottom() < 0.0
            || rect.top() > self.height
    }
}

/// Base movable actor: center position, sprite size and facing
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub direction: Direction,
}

impl Entity {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(size),
            direction: Direction::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Push the bounding box back inside the arena.
    ///
    /// Each side is checked on its own (left, top, right, bottom), so hitting a
    /// corner clamps both axes.
    pub fn clamp_to(&mut self, arena: &Arena) {
        let half = self.size / 2.0;
        if self.pos.x - half.x < 0.0 {
            self.pos.x = half.x;
        }
        if self.pos.y - half.y < 0.0 {
            self.pos.y = half.y;
        }
        if self.pos.x + half.x > arena.width {
            self.pos.x = arena.width - half.x;
        }
        if self.pos.y + half.y > arena.height {
            self.pos.y = arena.height - half.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_vectors_are_unit_cardinals() {
        for dir in Direction::ALL {
            let v = dir.vector();
            assert!((v.length() - 1.0).abs() < f32::EPSILON);
            assert!(v.x == 0.0 || v.y == 0.0);
        }
        assert_eq!(Direction::Up.vector(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::default(), Direction::Up);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::from_center(Vec2::new(20.0, 20.0), Vec2::splat(40.0));
        let b = Rect::from_center(Vec2::new(60.0, 20.0), Vec2::splat(40.0));
        assert!(!a.overlaps(&b));

        let c = Rect::from_center(Vec2::new(59.0, 20.0), Vec2::splat(40.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_clamp_corner_clamps_both_axes() {
        let arena = Arena::default();
        let mut e = Entity::new(Vec2::new(-15.0, 640.0), 40.0);
        e.clamp_to(&arena);
        assert_eq!(e.pos, Vec2::new(20.0, 580.0));
        assert!(arena.bounds().contains_rect(&e.bounds()));
    }

    #[test]
    fn test_is_outside_requires_full_exit() {
        let arena = Arena::default();
        // Straddling the left edge
        let partial = Rect::from_center(Vec2::new(0.0, 300.0), Vec2::splat(8.0));
        assert!(!arena.is_outside(&partial));
        // Right edge exactly at 0 still counts as inside
        let flush = Rect::from_center(Vec2::new(-4.0, 300.0), Vec2::splat(8.0));
        assert!(!arena.is_outside(&flush));
        let gone = Rect::from_center(Vec2::new(-4.5, 300.0), Vec2::splat(8.0));
        assert!(arena.is_outside(&gone));
        let below = Rect::from_center(Vec2::new(400.0, 605.0), Vec2::splat(8.0));
        assert!(arena.is_outside(&below));
    }
}
