//! # Cubeview Prelude
//!
//! Commonly used types for embedding the scene manager in another host.
//!
//! ```no_run
//! use cubeview::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = SceneConfig::default().with_rotation_policy(RotationPolicy::auto_spin());
//!     CubeApp::new(config)?.run()
//! }
//! ```

pub use crate::app::CubeApp;
pub use crate::config::SceneConfig;
pub use crate::error::{GraphicsError, ShaderStage};

pub use crate::gfx::backend::GlApi;
pub use crate::gfx::camera::{CameraController, CameraState, ViewControl};
pub use crate::gfx::geometry::{GeometryData, GeometryEncoding, Vertex};
pub use crate::gfx::rendering::{SceneManager, SceneState};
pub use crate::gfx::scene::{ObjectState, RotationPolicy};
pub use crate::gfx::transform::TransformSet;

pub use cgmath::{Deg, Rad, Vector3};
