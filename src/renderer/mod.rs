//! Rendering module
//!
//! `scene` turns game state into triangles (pure, testable); `pipeline` owns
//! the wgpu surface and draws them.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
