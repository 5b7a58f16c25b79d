//! # Object State
//!
//! The cube's rotation and the policy that advances it between frames.
//!
//! Two interaction models exist: the cube spins on its own by a fixed step
//! each frame ([`RotationPolicy::AutoSpin`]), or it only turns when the user
//! drags it ([`RotationPolicy::Manual`]). Drag input is applied under either
//! policy.

pub mod object_state;

// Re-export main types
pub use object_state::{ObjectState, RotationPolicy};
