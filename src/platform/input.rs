//! Keyboard state
//!
//! Directional keys are level-triggered (held state), fire is edge-triggered:
//! a key-down latches a request that the next frame consumes.

use winit::keyboard::KeyCode;

use crate::sim::{Controls, TickInput};

/// Accumulates keyboard events between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: Controls,
    fire_requested: bool,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key transition. OS auto-repeat must be passed as `repeat`
    /// so a held fire key does not turn into a stream of shots.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        match code {
            KeyCode::ArrowLeft => self.held.left = pressed,
            KeyCode::ArrowRight => self.held.right = pressed,
            KeyCode::ArrowUp => self.held.up = pressed,
            KeyCode::ArrowDown => self.held.down = pressed,
            KeyCode::Space => {
                if pressed && !repeat {
                    self.fire_requested = true;
                }
            }
            KeyCode::Escape => {
                if pressed {
                    self.quit_requested = true;
                }
            }
            _ => {}
        }
    }

    /// Release everything (window lost focus)
    pub fn clear_held(&mut self) {
        self.held = Controls::default();
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Snapshot for the next frame; consumes the pending fire request
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            controls: self.held,
            fire: std::mem::take(&mut self.fire_requested),
        }
    }
}
