use cgmath::Rad;

/// Per-axis rotation of the cube, in radians
///
/// Angles are unbounded; trigonometric periodicity wraps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectState {
    pub rotation_x: Rad<f32>,
    pub rotation_y: Rad<f32>,
    pub rotation_z: Rad<f32>,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            rotation_x: Rad(0.0),
            rotation_y: Rad(0.0),
            rotation_z: Rad(0.0),
        }
    }
}

impl ObjectState {
    /// Horizontal drag turns the cube about Y, vertical drag about X.
    ///
    /// Deltas are raw: a positive `dx` swings +Z toward +X, a positive `dy`
    /// swings +Z toward -Y. Screen directions are mapped by the caller.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.rotation_y += Rad(dx);
        self.rotation_x += Rad(dy);
    }
}

/// How the cube's rotation changes from one frame to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationPolicy {
    /// Adds `step` to the Y and Z angles every frame.
    AutoSpin { step: Rad<f32> },
    /// Rotation changes only through drag input.
    Manual,
}

impl RotationPolicy {
    /// Spins by pi/120 per frame, a full turn every four seconds at 60 Hz.
    pub fn auto_spin() -> Self {
        RotationPolicy::AutoSpin {
            step: Rad(std::f32::consts::PI / 120.0),
        }
    }

    pub fn advance(&self, object: &mut ObjectState) {
        match *self {
            RotationPolicy::AutoSpin { step } => {
                object.rotation_y += step;
                object.rotation_z += step;
            }
            RotationPolicy::Manual => {}
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        RotationPolicy::Manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_spin_accumulates() {
        let policy = RotationPolicy::auto_spin();
        let mut object = ObjectState::default();
        for _ in 0..120 {
            policy.advance(&mut object);
        }
        assert!((object.rotation_y.0 - std::f32::consts::PI).abs() < 1e-4);
        assert_eq!(object.rotation_y, object.rotation_z);
        assert_eq!(object.rotation_x, Rad(0.0));
    }

    #[test]
    fn test_manual_policy_leaves_state_alone() {
        let mut object = ObjectState::default();
        RotationPolicy::Manual.advance(&mut object);
        assert_eq!(object, ObjectState::default());
    }

    #[test]
    fn test_drag_is_unclamped() {
        let mut object = ObjectState::default();
        for _ in 0..10 {
            object.apply_drag(1.0, -2.0);
        }
        assert_eq!(object.rotation_y, Rad(10.0));
        assert_eq!(object.rotation_x, Rad(-20.0));
    }
}
