//! Scene building: game state in, vertices out
//!
//! Pure functions, no GPU access, so everything here runs in plain unit tests.

use glam::Vec2;

use super::font;
use super::shapes;
use super::vertex::{Vertex, colors, rgba};
use crate::sim::{GameState, Projectile, Tank};

/// Barrel sticks out 6px past the hull edge
const BARREL_LENGTH: f32 = 26.0;
const BARREL_WIDTH: f32 = 4.0;
const PROJECTILE_SEGMENTS: u32 = 12;
/// Pixels per font dot for all HUD text
pub const TEXT_SCALE: f32 = 4.0;
const HUD_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);

pub fn tank(tank: &Tank) -> Vec<Vertex> {
    let mut vertices = shapes::rect_centered(tank.pos(), tank.body.size, rgba(tank.color));

    let dir = tank.direction().vector();
    let barrel_center = tank.pos() + dir * (BARREL_LENGTH / 2.0);
    let barrel_size = if dir.x != 0.0 {
        Vec2::new(BARREL_LENGTH, BARREL_WIDTH)
    } else {
        Vec2::new(BARREL_WIDTH, BARREL_LENGTH)
    };
    vertices.extend(shapes::rect_centered(barrel_center, barrel_size, rgba(colors::BARREL)));
    vertices
}

pub fn projectile(shot: &Projectile) -> Vec<Vertex> {
    shapes::circle(shot.pos(), shot.radius(), rgba(shot.color), PROJECTILE_SEGMENTS)
}

pub fn score_label(score: u64) -> String {
    format!("SCORE: {score}")
}

/// One gameplay frame: tanks, projectiles, then the score on top
pub fn build_frame<R>(state: &GameState<R>) -> Vec<Vertex> {
    let mut vertices = tank(&state.player);
    for enemy in &state.enemies {
        vertices.extend(tank(enemy));
    }
    for shot in state.player_projectiles.iter().chain(&state.enemy_projectiles) {
        vertices.extend(projectile(shot));
    }
    vertices.extend(font::text(
        &score_label(state.score),
        HUD_ORIGIN,
        TEXT_SCALE,
        rgba(colors::HUD_TEXT),
    ));
    vertices
}

/// Terminal screen: "GAME OVER" above the final score, both centered
pub fn build_game_over<R>(state: &GameState<R>) -> Vec<Vertex> {
    let center = state.arena.center();
    let mut vertices = centered_text("GAME OVER", center.x, center.y - 20.0, colors::GAME_OVER);
    vertices.extend(centered_text(
        &format!("FINAL SCORE: {}", state.score),
        center.x,
        center.y + 20.0,
        colors::HUD_TEXT,
    ));
    vertices
}

/// Text horizontally centered on `center_x` with its top edge at `top`
fn centered_text(text: &str, center_x: f32, top: f32, color: crate::sim::Color) -> Vec<Vertex> {
    let size = font::text_size(text, TEXT_SCALE);
    font::text(text, Vec2::new(center_x - size.x / 2.0, top), TEXT_SCALE, rgba(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Color, Direction, GameState, Rect};
    use crate::tuning::Tuning;

    fn bbox(vertices: &[Vertex]) -> Rect {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        Rect { min, max }
    }

    #[test]
    fn test_tank_barrel_follows_facing() {
        let tuning = Tuning::default();
        let mut t = Tank::player(Vec2::new(400.0, 300.0), &tuning);

        // Facing up: hull 380..420 x 280..320, barrel pokes out to y=274
        let up = bbox(&tank(&t));
        assert_eq!(up.min, Vec2::new(380.0, 274.0));
        assert_eq!(up.max, Vec2::new(420.0, 320.0));

        t.body.direction = Direction::Right;
        let right = bbox(&tank(&t));
        assert_eq!(right.max, Vec2::new(426.0, 320.0));
    }

    #[test]
    fn test_frame_contains_every_entity() {
        let state = GameState::new(3, Tuning::default());
        let vertices = build_frame(&state);
        let hull = rgba(Color::RED);
        let red = vertices.iter().filter(|v| v.color == hull).count();
        // Four enemy hulls, six vertices each
        assert_eq!(red, 4 * 6);
        let green = vertices.iter().filter(|v| v.color == rgba(Color::GREEN)).count();
        assert_eq!(green, 6);
    }

    #[test]
    fn test_game_over_text_is_centered() {
        let state = GameState::new(3, Tuning::default());
        let vertices = build_game_over(&state);
        let headline: Vec<Vertex> = vertices
            .iter()
            .copied()
            .filter(|v| v.color == rgba(colors::GAME_OVER))
            .collect();
        let bounds = bbox(&headline);
        let mid = (bounds.min.x + bounds.max.x) / 2.0;
        assert!((mid - 400.0).abs() <= TEXT_SCALE);
        assert_eq!(bounds.min.y, 280.0);
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0), "SCORE: 0");
        assert_eq!(score_label(300), "SCORE: 300");
    }
}
