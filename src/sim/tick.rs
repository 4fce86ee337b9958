//! One simulation frame
//!
//! Frame order: fire requests, enemy fire rolls, tank movement, projectile
//! movement, collision pass, then score / phase bookkeeping.

use super::rng::RandomSource;
use super::state::{ENEMY_SHOT_COLOR, GameEvent, GamePhase, GameState, PLAYER_SHOT_COLOR};
use super::tank::Controls;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Directional keys held this frame
    pub controls: Controls,
    /// Fire was pressed since the previous frame (edge, not held state)
    pub fire: bool,
}

/// Advance the game by one frame. A no-op once the game is over.
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame += 1;

    let GameState {
        tuning,
        arena,
        phase,
        score,
        frame,
        player,
        enemies,
        player_projectiles,
        enemy_projectiles,
        events,
        resolver,
        rng,
    } = state;

    // Player fire is edge-triggered so holding the key can't bypass pacing
    if input.fire {
        let before = player_projectiles.len();
        player.fire(player_projectiles, PLAYER_SHOT_COLOR, tuning);
        if player_projectiles.len() > before {
            events.push(GameEvent::PlayerFired);
        }
    }

    for enemy in enemies.iter_mut() {
        if rng.roll(tuning.enemy_fire_chance) {
            let before = enemy_projectiles.len();
            enemy.fire(enemy_projectiles, ENEMY_SHOT_COLOR, tuning);
            if enemy_projectiles.len() > before {
                events.push(GameEvent::EnemyFired);
            }
        }
    }

    player.update(Some(&input.controls), arena, tuning, rng);
    for enemy in enemies.iter_mut() {
        enemy.update(None, arena, tuning, rng);
    }

    for shot in player_projectiles.iter_mut().chain(enemy_projectiles.iter_mut()) {
        shot.update(arena);
    }
    player_projectiles.retain(|p| p.alive);
    enemy_projectiles.retain(|p| p.alive);

    let outcome = resolver.resolve(player, enemies, player_projectiles, enemy_projectiles);

    for _ in 0..outcome.enemies_destroyed {
        *score = score.saturating_add(resolver.kill_score);
        log::info!("Enemy destroyed, score {score}");
        events.push(GameEvent::EnemyDestroyed { score: *score });
    }

    if outcome.player_hit {
        *phase = GamePhase::GameOver;
        log::info!("Player destroyed on frame {frame}, final score {score}");
        events.push(GameEvent::PlayerDestroyed);
    }
}
