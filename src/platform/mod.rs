//! Platform abstraction layer
//!
//! Handles the pieces the simulation consumes from the host:
//! - Input events (held directions, fire edge, quit)
//! - Frame pacing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::InputState;
