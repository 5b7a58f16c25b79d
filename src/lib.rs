//! Cubeview
//!
//! A small OpenGL viewer that draws one vertex-colored cube. The cube turns
//! under mouse drags, the camera zooms along its depth axis with the wheel,
//! and every frame uploads world, view and projection matrices to a single
//! shader program before one draw call.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use app::CubeApp;
pub use config::SceneConfig;
pub use error::{GraphicsError, Result};
