use glam::Vec2;

use crate::camera::{Camera, CameraMovement};
use crate::core::{Button, Controller, CursorMode, WindowContext};

pub const TOGGLE_CURSOR_KEY: Button = Button::Backspace;
pub const EXIT_KEY: Button = Button::Escape;

/// Held-key bindings for the per-frame movement pass
pub const MOVEMENT_BINDINGS: [(Button, CameraMovement); 6] = [
    (Button::KeyW, CameraMovement::Forward),
    (Button::KeyS, CameraMovement::Backward),
    (Button::KeyA, CameraMovement::Left),
    (Button::KeyD, CameraMovement::Right),
    (Button::Space, CameraMovement::Up),
    (Button::ShiftLeft, CameraMovement::Down),
];

/// What the frame loop should do after a key edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    ShutdownRequested,
}

/// Translates raw input into camera commands and owns the cursor-lock state
#[derive(Debug, Clone)]
pub struct InputMapper {
    last_cursor: Option<Vec2>,
    cursor_locked: bool,
}

impl InputMapper {
    pub fn new(cursor_locked: bool) -> Self {
        Self {
            last_cursor: None,
            cursor_locked,
        }
    }

    pub fn cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    pub fn last_cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    pub fn movement_for(button: Button) -> Option<CameraMovement> {
        MOVEMENT_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == button)
            .map(|&(_, movement)| movement)
    }

    /// Apply every held movement key for this frame.
    ///
    /// Each key is applied on its own, so diagonals are the unnormalized sum and
    /// move faster than a single axis.
    pub fn apply_held_keys(&self, controller: &dyn Controller, camera: &mut Camera, delta_time: f32) {
        for &button in controller.get_down_keys() {
            if let Some(movement) = Self::movement_for(button) {
                camera.process_keyboard(movement, delta_time);
            }
        }
    }

    /// Absolute (virtual) cursor position in pixels, y down.
    ///
    /// The previous position is always updated; rotation only happens while
    /// the cursor is locked. The very first sample only seeds the position.
    pub fn cursor_moved(&mut self, position: Vec2, camera: &mut Camera) {
        let previous = self.last_cursor.replace(position);
        let Some(previous) = previous else {
            return;
        };
        if !self.cursor_locked {
            return;
        }

        let offset = previous - position;
        // Screen y grows downward, so only x needs flipping to match the camera
        camera.process_mouse_movement(-offset.x, offset.y, true);
    }

    /// Handle a rising key edge
    pub fn key_pressed(&mut self, button: Button, window: &dyn WindowContext) -> InputOutcome {
        match button {
            EXIT_KEY => InputOutcome::ShutdownRequested,
            TOGGLE_CURSOR_KEY => {
                self.toggle_cursor_lock(window);
                InputOutcome::Continue
            }
            _ => InputOutcome::Continue,
        }
    }

    pub fn toggle_cursor_lock(&mut self, window: &dyn WindowContext) {
        self.cursor_locked = !self.cursor_locked;
        log::debug!("cursor locked: {}", self.cursor_locked);
        window.set_cursor_mode(CursorMode::from_locked(self.cursor_locked));
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(true)
    }
}
