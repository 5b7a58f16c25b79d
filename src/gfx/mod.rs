//! # Graphics Module
//!
//! Everything between the window and the cube on screen.
//!
//! ## Architecture Overview
//!
//! - **Backend** ([`backend`]) - the [`GlApi`] trait over the OpenGL calls in use
//! - **Geometry** ([`geometry`]) - static cube data and its vertex layout
//! - **Shaders** ([`shader`]) - program compilation and uniform upload
//! - **Transforms** ([`transform`]) - world, view and projection matrices
//! - **Camera** ([`camera`]) - depth-clamped camera and input controller
//! - **Scene** ([`scene`]) - cube rotation and its per-frame policy
//! - **Rendering** ([`rendering`]) - GPU buffers and the frame loop
//! - **Window** ([`gl_window`]) - glutin window, context and surface
//!
//! The core types are generic over [`GlApi`] and hold the context through an
//! `Rc`; they never leave the thread that made the context current.

pub mod backend;
pub mod camera;
pub mod geometry;
pub mod gl_window;
pub mod rendering;
pub mod scene;
pub mod shader;
pub mod transform;

// Re-export commonly used types
pub use backend::GlApi;
pub use rendering::scene_manager::{SceneManager, SceneState};
