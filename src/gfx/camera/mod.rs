pub mod camera_controller;
pub mod camera_state;

// Re-export main types
pub use camera_controller::{CameraController, ViewControl};
pub use camera_state::{CameraBounds, CameraRotation, CameraState};
