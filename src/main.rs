//! Tank Battle entry point
//!
//! Loads tuning, seeds the game and hands over to the window event loop.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use tank_battle::Tuning;
use tank_battle::app;
use tank_battle::sim::GameState;

/// Environment variable holding a fixed RNG seed
const SEED_ENV: &str = "TANK_BATTLE_SEED";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Tank Battle starting...");

    let tuning = Tuning::load()?;
    let seed = session_seed()?;
    log::info!("Game initialized with seed: {}", seed);

    app::run(GameState::new(seed, tuning))
}

fn session_seed() -> anyhow::Result<u64> {
    match std::env::var(SEED_ENV) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got {value:?}")),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()),
    }
}
