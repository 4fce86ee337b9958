//! Tank Battle - A top-down arena tank shooter
//!
//! Core modules:
//! - `sim`: Headless simulation (tanks, projectiles, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline and vertex generation
//! - `platform`: Keyboard state and frame pacing
//! - `tuning`: Data-driven game balance
//! - `app`: Native window and event loop

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Target frame rate (one simulation step per frame)
    pub const TARGET_FPS: u32 = 60;
    /// Duration of one frame at the target rate
    pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

    /// Arena dimensions (logical pixels, origin top-left, y down)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Tank sprite is a 40x40 square
    pub const TANK_SIZE: f32 = 40.0;
    /// Projectile sprite is an 8x8 circle
    pub const PROJECTILE_SIZE: f32 = 8.0;

    /// Player spawn: horizontally centered, 80px above the bottom edge
    pub const PLAYER_SPAWN: (f32, f32) = (ARENA_WIDTH / 2.0, ARENA_HEIGHT - 80.0);
    /// Enemy row: first tank at x=100, then every 150px, all at y=80
    pub const ENEMY_ROW_START_X: f32 = 100.0;
    pub const ENEMY_ROW_SPACING: f32 = 150.0;
    pub const ENEMY_ROW_Y: f32 = 80.0;

    /// How long the game over screen stays up before the process exits
    pub const GAME_OVER_HOLD: Duration = Duration::from_secs(3);
}
