//! Transform Engine
//!
//! Pure matrix construction for the three per-frame transforms. All math is
//! done in cgmath's column-vector convention (`clip = P * V * W * v`), in a
//! left-handed space: the camera looks down +Z, +X is right and +Y is up.
//!
//! The only layout conversion happens in [`gl_columns`], right before the
//! matrix memory is handed to `glUniformMatrix4fv` with `transpose = false`.

use cgmath::{EuclideanSpace, InnerSpace, Matrix3, Matrix4, Point3, Rad, Vector3};

use crate::gfx::{camera::CameraState, scene::ObjectState};

/// Direction the camera faces before rotation
pub const DEFAULT_FORWARD: Vector3<f32> = Vector3 { x: 0.0, y: 0.0, z: 1.0 };
/// World up before rotation
pub const WORLD_UP: Vector3<f32> = Vector3 { x: 0.0, y: 1.0, z: 0.0 };

/// The matrices uploaded for one frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformSet {
    pub world: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
}

/// Left-handed perspective projection.
///
/// After the perspective divide a point on the near plane lands at depth 0
/// and a point on the far plane at depth 1.
pub fn build_perspective(field_of_view: Rad<f32>, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let y_scale = 1.0 / (field_of_view.0 * 0.5).tan();
    let x_scale = y_scale / aspect;
    let depth_scale = far / (far - near);

    #[rustfmt::skip]
    let projection = Matrix4::new(
        x_scale, 0.0,     0.0,                  0.0,
        0.0,     y_scale, 0.0,                  0.0,
        0.0,     0.0,     depth_scale,          1.0,
        0.0,     0.0,     -near * depth_scale,  0.0,
    );
    projection
}

/// Left-handed look-at view matrix.
///
/// `eye` and `look_at` must differ; callers derive `look_at` by adding a
/// unit forward offset to `eye`.
pub fn build_view(eye: Point3<f32>, look_at: Point3<f32>, up: Vector3<f32>) -> Matrix4<f32> {
    debug_assert!(eye != look_at, "view direction has zero length");

    let z_axis = (look_at - eye).normalize();
    let x_axis = up.cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis);

    let eye = eye.to_vec();

    #[rustfmt::skip]
    let view = Matrix4::new(
        x_axis.x,           y_axis.x,           z_axis.x,           0.0,
        x_axis.y,           y_axis.y,           z_axis.y,           0.0,
        x_axis.z,           y_axis.z,           z_axis.z,           0.0,
        -x_axis.dot(eye),   -y_axis.dot(eye),   -z_axis.dot(eye),   1.0,
    );
    view
}

/// Camera orientation: pitch about X, then yaw about Y, then roll about Z,
/// composed as `Rx * Ry * Rz`.
pub fn camera_rotation(camera: &CameraState) -> Matrix3<f32> {
    let rotation = camera.rotation;
    Matrix3::from_angle_x(rotation.pitch)
        * Matrix3::from_angle_y(rotation.yaw)
        * Matrix3::from_angle_z(rotation.roll)
}

/// View matrix for the camera's current position and rotation.
pub fn camera_view(camera: &CameraState) -> Matrix4<f32> {
    let rotation = camera_rotation(camera);
    let forward = rotation * DEFAULT_FORWARD;
    let up = rotation * WORLD_UP;

    let eye = Point3::from_vec(camera.position);
    build_view(eye, eye + forward, up)
}

/// World matrix of the cube: rotation only, `Rz * Ry * Rx` applied to
/// identity, so a vertex is turned about X first and Z last.
pub fn world_matrix(object: &ObjectState) -> Matrix4<f32> {
    Matrix4::from_angle_z(object.rotation_z)
        * Matrix4::from_angle_y(object.rotation_y)
        * Matrix4::from_angle_x(object.rotation_x)
}

/// Column-major float layout expected by `glUniformMatrix4fv`.
pub fn gl_columns(matrix: &Matrix4<f32>) -> [f32; 16] {
    let columns: &[f32; 16] = matrix.as_ref();
    *columns
}
