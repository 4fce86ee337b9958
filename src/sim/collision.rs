//! Projectile vs tank collision resolution
//!
//! Brute force over every shot and every target. With a handful of tanks and
//! a few dozen shots in flight there is nothing to gain from a spatial index.

use super::projectile::Projectile;
use super::tank::Tank;

/// What one collision pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Enemies removed this pass
    pub enemies_destroyed: u32,
    /// An enemy shot reached the player
    pub player_hit: bool,
}

/// Turns overlaps into kills and the player-hit signal
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    /// Score per enemy destroyed
    pub kill_score: u64,
}

impl CollisionResolver {
    pub fn new(kill_score: u64) -> Self {
        Self { kill_score }
    }

    /// Run the full pass: player shots first, then enemy shots.
    pub fn resolve(
        &self,
        player: &Tank,
        enemies: &mut Vec<Tank>,
        player_shots: &mut Vec<Projectile>,
        enemy_shots: &mut Vec<Projectile>,
    ) -> CollisionOutcome {
        let enemies_destroyed = self.resolve_player_shots(player_shots, enemies);
        let player_hit = resolve_enemy_shots(enemy_shots, player);

        CollisionOutcome {
            enemies_destroyed,
            player_hit,
        }
    }

    /// Each shot takes out at most the first enemy it overlaps and is consumed.
    /// Returns the number of enemies destroyed.
    pub fn resolve_player_shots(&self, shots: &mut Vec<Projectile>, enemies: &mut Vec<Tank>) -> u32 {
        let mut destroyed = 0;
        shots.retain(|shot| {
            let bounds = shot.bounds();
            match enemies.iter().position(|e| e.bounds().overlaps(&bounds)) {
                Some(idx) => {
                    enemies.remove(idx);
                    destroyed += 1;
                    false
                }
                None => true,
            }
        });
        destroyed
    }
}

/// Consume the first enemy shot overlapping the player. Shots after the hit
/// are left untouched for this frame.
pub fn resolve_enemy_shots(shots: &mut Vec<Projectile>, player: &Tank) -> bool {
    let target = player.bounds();
    match shots.iter().position(|s| s.bounds().overlaps(&target)) {
        Some(idx) => {
            shots.remove(idx);
            true
        }
        None => false,
    }
}
