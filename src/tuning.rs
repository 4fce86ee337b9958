//! Gameplay tuning
//!
//! Every balance number the simulation uses lives here. The struct is built
//! once at startup and handed to the game state by value; nothing mutates it
//! afterwards.

use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_WIDTH, ENEMY_ROW_SPACING, ENEMY_ROW_START_X, TANK_SIZE};

/// Environment variable naming an optional JSON tuning override file
pub const TUNING_ENV: &str = "TANK_BATTLE_TUNING";

/// Upper bound for `kill_score`; keeps the running score far from `u64::MAX`
pub const MAX_KILL_SCORE: u64 = 1_000_000;

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player tank speed (pixels per frame)
    pub player_speed: f32,
    /// Enemy tank speed (pixels per frame)
    pub enemy_speed: f32,
    /// Projectile speed (pixels per frame)
    pub bullet_speed: f32,
    /// Distance from tank center to where a projectile spawns
    pub muzzle_offset: f32,
    /// Frames a tank must wait after firing
    pub fire_cooldown_frames: u32,
    /// Per-enemy, per-frame chance of attempting to fire
    pub enemy_fire_chance: f32,
    /// Per-enemy, per-frame chance of picking a new heading
    pub patrol_turn_chance: f32,
    /// Score awarded per enemy destroyed
    pub kill_score: u64,
    /// Enemies placed in the starting row
    pub enemy_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 4.0,
            enemy_speed: 2.0,
            bullet_speed: 8.0,
            muzzle_offset: 24.0,
            fire_cooldown_frames: 15,
            enemy_fire_chance: 0.01,
            patrol_turn_chance: 0.02,
            kill_score: 100,
            enemy_count: 4,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, speed) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("bullet_speed", self.bullet_speed),
        ] {
            if !speed.is_finite() || speed <= 0.0 {
                bail!("{name} must be a positive number, got {speed}");
            }
        }
        if !self.muzzle_offset.is_finite() || self.muzzle_offset < 0.0 {
            bail!("muzzle_offset must be >= 0, got {}", self.muzzle_offset);
        }
        for (name, chance) in [
            ("enemy_fire_chance", self.enemy_fire_chance),
            ("patrol_turn_chance", self.patrol_turn_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                bail!("{name} must be within [0, 1], got {chance}");
            }
        }
        if self.kill_score > MAX_KILL_SCORE {
            bail!("kill_score must be <= {MAX_KILL_SCORE}, got {}", self.kill_score);
        }
        let max_enemies = max_enemy_count();
        if self.enemy_count > max_enemies {
            bail!(
                "enemy_count must be <= {max_enemies} to fit the starting row, got {}",
                self.enemy_count
            );
        }
        Ok(())
    }

    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in tuning file {}", path.display()))
    }

    /// Defaults, or the file named by `TANK_BATTLE_TUNING` when it is set
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(TUNING_ENV) {
            Some(path) => {
                let tuning = Self::from_file(Path::new(&path))?;
                log::info!("Loaded tuning overrides from {}", Path::new(&path).display());
                Ok(tuning)
            }
            None => {
                log::info!("Using default tuning");
                Ok(Self::default())
            }
        }
    }
}

/// Largest enemy row that fits inside the arena at the fixed spawn spacing
pub fn max_enemy_count() -> usize {
    let usable = ARENA_WIDTH - TANK_SIZE / 2.0 - ENEMY_ROW_START_X;
    if usable < 0.0 {
        return 0;
    }
    (usable / ENEMY_ROW_SPACING).floor() as usize + 1
}
