//! Rendering
//!
//! GPU-side geometry and the scene manager that drives each frame.

pub mod buffers;
pub mod scene_manager;

pub use buffers::{DrawCommand, GeometryBuffers};
pub use scene_manager::{SceneManager, SceneState};
