//! Viewer configuration
//!
//! [`SceneConfig`] gathers every fixed parameter of the pipeline: window
//! size, projection planes, camera defaults and depth range, clear color,
//! geometry encoding and the per-frame rotation policy. Values are set
//! through `with_*` builder methods and checked with [`SceneConfig::validate`]
//! before the scene manager touches the GPU.

use cgmath::{Deg, Rad, Vector3};

use crate::{
    error::{GraphicsError, Result},
    gfx::{camera::CameraRotation, geometry::GeometryEncoding, scene::RotationPolicy},
};

/// Configuration for the cube viewer
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,

    /// Vertical field of view
    pub field_of_view: Rad<f32>,
    pub near: f32,
    pub far: f32,

    /// Camera position restored by `reset`
    pub camera_position: Vector3<f32>,
    /// Camera pitch/yaw/roll restored by `reset`
    pub camera_rotation: CameraRotation,
    /// Closest and farthest camera depth reachable by zooming
    pub min_depth: f32,
    pub max_depth: f32,

    pub clear_color: [f32; 4],
    pub geometry: GeometryEncoding,
    pub rotation_policy: RotationPolicy,

    /// Radians of object rotation per pixel dragged
    pub rotate_speed: f32,
    /// Depth units per scroll line
    pub zoom_speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "cubeview".to_string(),
            width: 960,
            height: 540,
            field_of_view: Rad(std::f32::consts::FRAC_PI_4),
            near: 0.1,
            far: 1000.0,
            camera_position: Vector3::new(0.0, 0.0, -10.0),
            camera_rotation: CameraRotation::default(),
            min_depth: -50.0,
            max_depth: -2.0,
            clear_color: [0.8, 0.3, 0.4, 1.0],
            geometry: GeometryEncoding::Indexed,
            rotation_policy: RotationPolicy::Manual,
            rotate_speed: 0.01,
            zoom_speed: 0.5,
        }
    }
}

impl SceneConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the projection parameters (builder pattern)
    ///
    /// # Arguments
    /// * `field_of_view` - Vertical field of view
    /// * `near` - Distance to the near clipping plane
    /// * `far` - Distance to the far clipping plane
    pub fn with_projection(mut self, field_of_view: Rad<f32>, near: f32, far: f32) -> Self {
        self.field_of_view = field_of_view;
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_camera_position(mut self, position: Vector3<f32>) -> Self {
        self.camera_position = position;
        self
    }

    pub fn with_camera_rotation(mut self, pitch: Deg<f32>, yaw: Deg<f32>, roll: Deg<f32>) -> Self {
        self.camera_rotation = CameraRotation { pitch, yaw, roll };
        self
    }

    pub fn with_depth_range(mut self, min_depth: f32, max_depth: f32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryEncoding) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_rotation_policy(mut self, policy: RotationPolicy) -> Self {
        self.rotation_policy = policy;
        self
    }

    pub fn with_input_speeds(mut self, rotate_speed: f32, zoom_speed: f32) -> Self {
        self.rotate_speed = rotate_speed;
        self.zoom_speed = zoom_speed;
        self
    }

    /// Width over height of the initial viewport
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Checks that the configuration can produce a valid projection and camera.
    pub fn validate(&self) -> Result<()> {
        // NaN slips through every ordered comparison below.
        let scalars = [
            ("field of view", self.field_of_view.0),
            ("near plane", self.near),
            ("far plane", self.far),
            ("minimum depth", self.min_depth),
            ("maximum depth", self.max_depth),
            ("camera x", self.camera_position.x),
            ("camera y", self.camera_position.y),
            ("camera z", self.camera_position.z),
            ("camera pitch", self.camera_rotation.pitch.0),
            ("camera yaw", self.camera_rotation.yaw.0),
            ("camera roll", self.camera_rotation.roll.0),
            ("rotate speed", self.rotate_speed),
            ("zoom speed", self.zoom_speed),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(GraphicsError::InvalidConfig(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.width == 0 || self.height == 0 {
            return Err(GraphicsError::InvalidConfig(format!(
                "viewport {}x{} has a zero dimension",
                self.width, self.height
            )));
        }
        if !(self.field_of_view.0 > 0.0 && self.field_of_view.0 < std::f32::consts::PI) {
            return Err(GraphicsError::InvalidConfig(format!(
                "field of view {} rad must lie in (0, pi)",
                self.field_of_view.0
            )));
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(GraphicsError::InvalidConfig(format!(
                "clip planes near={} far={} must satisfy 0 < near < far",
                self.near, self.far
            )));
        }
        if self.min_depth > self.max_depth {
            return Err(GraphicsError::InvalidConfig(format!(
                "depth range [{}, {}] is empty",
                self.min_depth, self.max_depth
            )));
        }
        let z = self.camera_position.z;
        if z < self.min_depth || z > self.max_depth {
            return Err(GraphicsError::InvalidConfig(format!(
                "default camera depth {} lies outside [{}, {}]",
                z, self.min_depth, self.max_depth
            )));
        }
        Ok(())
    }
}
