use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Pixels reported by touchpads for one wheel line
const PIXELS_PER_LINE: f32 = 20.0;

/// Receiver of the view adjustments produced from user input
pub trait ViewControl {
    /// Turns the object by raw drag deltas, already scaled to radians.
    fn apply_rotation_drag(&mut self, dx: f32, dy: f32);
    /// Moves the camera along its depth axis.
    fn apply_zoom(&mut self, delta: f32);
    /// Restores the default view.
    fn reset(&mut self);
}

/// Turns window mouse/keyboard events into rotation and zoom deltas
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    is_mouse_pressed: bool,
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            is_mouse_pressed: false,
            last_cursor: None,
        }
    }

    /// Feeds one window event through the controller.
    ///
    /// Returns true when the view changed and a redraw is due.
    pub fn process_event(&mut self, event: &WindowEvent, view: &mut impl ViewControl) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.set_dragging(*state == ElementState::Pressed);
                false
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position, view),
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                false
            }
            WindowEvent::MouseWheel { delta, .. } => self.scroll(*delta, view),
            WindowEvent::KeyboardInput { event, .. } => self.process_key(event, view),
            _ => false,
        }
    }

    fn process_key(&mut self, event: &KeyEvent, view: &mut impl ViewControl) -> bool {
        match event {
            KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::KeyR),
                state: ElementState::Pressed,
                repeat: false,
                ..
            } => {
                log::info!("resetting view to defaults");
                view.reset();
                true
            }
            _ => false,
        }
    }

    /// Starts or ends a drag. The drag anchor is the last known cursor position.
    pub fn set_dragging(&mut self, pressed: bool) {
        self.is_mouse_pressed = pressed;
    }

    /// Returns true if a left-button drag is in progress
    pub fn is_rotating(&self) -> bool {
        self.is_mouse_pressed
    }

    /// Applies the motion since the previous cursor event while dragging.
    ///
    /// Dragging right turns the cube's facing side right, dragging down
    /// turns it down.
    pub fn cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        view: &mut impl ViewControl,
    ) -> bool {
        let previous = self.last_cursor.replace(position);
        match previous {
            Some(last) if self.is_mouse_pressed => {
                // Positive yaw turns the facing side left and positive pitch
                // turns it up; window y grows downward. Negate both so the
                // cube follows the cursor.
                let dx = (last.x - position.x) as f32 * self.rotate_speed;
                let dy = (last.y - position.y) as f32 * self.rotate_speed;
                view.apply_rotation_drag(dx, dy);
                true
            }
            _ => false,
        }
    }

    pub fn scroll(&mut self, delta: MouseScrollDelta, view: &mut impl ViewControl) -> bool {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, lines) => lines,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => y as f32 / PIXELS_PER_LINE,
        };
        if lines == 0.0 {
            return false;
        }
        // Scrolling up moves the camera toward the cube.
        view.apply_zoom(lines * self.zoom_speed);
        true
    }
}
