//! Camera position and orientation
//!
//! The camera only moves along its depth axis (zoom) at runtime; the zoom
//! is clamped to [`CameraBounds`]. Rotation angles are kept in degrees.

use cgmath::{Deg, Vector3};

use crate::config::SceneConfig;

/// Pitch (about X), yaw (about Y) and roll (about Z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRotation {
    pub pitch: Deg<f32>,
    pub yaw: Deg<f32>,
    pub roll: Deg<f32>,
}

impl Default for CameraRotation {
    fn default() -> Self {
        Self {
            pitch: Deg(0.0),
            yaw: Deg(0.0),
            roll: Deg(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self {
            min_depth: -50.0,
            max_depth: -2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vector3<f32>,
    pub rotation: CameraRotation,
    pub bounds: CameraBounds,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -10.0),
            rotation: CameraRotation::default(),
            bounds: CameraBounds::default(),
        }
    }
}

impl CameraState {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            position: config.camera_position,
            rotation: config.camera_rotation,
            bounds: CameraBounds {
                min_depth: config.min_depth,
                max_depth: config.max_depth,
            },
        }
    }

    /// Moves the camera to `depth`, limited to the bounds.
    ///
    /// NaN depths are ignored. Inverted or NaN bounds never panic: the
    /// result is `depth.max(min).min(max)`.
    pub fn set_depth(&mut self, depth: f32) {
        if depth.is_nan() {
            return;
        }
        self.position.z = depth
            .max(self.bounds.min_depth)
            .min(self.bounds.max_depth);
    }

    /// Moves the camera along Z by `delta`, staying inside the depth bounds.
    pub fn add_depth(&mut self, delta: f32) {
        self.set_depth(self.position.z + delta);
    }
}
