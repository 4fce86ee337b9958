//! Game state and session bookkeeping
//!
//! The state owns every entity collection, the score and the RNG. Nothing
//! outside `tick` mutates it during play.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::collision::CollisionResolver;
use super::entity::{Arena, Color};
use super::projectile::Projectile;
use super::rng::{RandomSource, seeded};
use super::tank::Tank;
use crate::consts::*;
use crate::tuning::Tuning;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player was hit; terminal
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerFired,
    EnemyFired,
    /// An enemy was destroyed; `score` is the total after the kill
    EnemyDestroyed { score: u64 },
    PlayerDestroyed,
}

/// Projectile colors per side
pub const PLAYER_SHOT_COLOR: Color = Color::YELLOW;
pub const ENEMY_SHOT_COLOR: Color = Color::WHITE;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Balance values, fixed for the session
    pub tuning: Tuning,
    pub arena: Arena,
    pub phase: GamePhase,
    pub score: u64,
    /// Frames simulated so far
    pub frame: u64,
    pub player: Tank,
    /// Live enemies, in spawn order
    pub enemies: Vec<Tank>,
    pub player_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) resolver: CollisionResolver,
    pub(crate) rng: R,
}

impl GameState<Pcg32> {
    /// New session driven by a seeded PCG generator
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(tuning, seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// New session with an injected random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let arena = Arena::default();
        let player = Tank::player(Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1), &tuning);
        let enemies = (0..tuning.enemy_count)
            .map(|i| {
                let x = ENEMY_ROW_START_X + i as f32 * ENEMY_ROW_SPACING;
                Tank::enemy(Vec2::new(x, ENEMY_ROW_Y), &tuning)
            })
            .collect();

        Self {
            resolver: CollisionResolver::new(tuning.kill_score),
            tuning,
            arena,
            phase: GamePhase::Running,
            score: 0,
            frame: 0,
            player,
            enemies,
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            events: Vec::new(),
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos(), Vec2::new(400.0, 520.0));
        assert_eq!(state.player.color, Color::GREEN);

        let xs: Vec<f32> = state.enemies.iter().map(|e| e.pos().x).collect();
        assert_eq!(xs, vec![100.0, 250.0, 400.0, 550.0]);
        assert!(state.enemies.iter().all(|e| e.pos().y == 80.0));
        assert!(state.enemies.iter().all(|e| e.color == Color::RED));
        assert!(state.player_projectiles.is_empty());
        assert!(state.enemy_projectiles.is_empty());
    }

    #[test]
    fn test_enemy_count_follows_tuning() {
        let tuning = Tuning {
            enemy_count: 1,
            ..Default::default()
        };
        let state = GameState::new(1, tuning);
        assert_eq!(state.enemies.len(), 1);
    }
}
