use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller, InputEvent, InputQueue};
use super::window::WindowEventSink;

/// Adapter that bridges Winit window events into the platform-neutral [`InputQueue`]
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    queue: InputQueue,
    // Unbounded cursor built from raw mouse motion; never clamped to the window
    virtual_cursor: (f64, f64),
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a Winit WindowEvent and enqueue it. Unmapped events are ignored.
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => self.queue.press(button),
                            ElementState::Released => self.queue.release(button),
                        }
                    }
                }
            }
            WindowEvent::Resized(size) => {
                self.queue.push(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::Focused(false) => self.queue.release_all(),
            WindowEvent::CloseRequested => self.queue.push(InputEvent::CloseRequested),
            _ => {}
        }
    }

    /// Accumulate raw mouse motion into the virtual cursor and enqueue its position.
    ///
    /// Window cursor positions stop at the window edge once the cursor is
    /// grabbed (or stop arriving at all), so look input comes from here only.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.virtual_cursor.0 += delta.0;
            self.virtual_cursor.1 += delta.1;
            self.queue.push(InputEvent::CursorMoved {
                x: self.virtual_cursor.0 as f32,
                y: self.virtual_cursor.1 as f32,
            });
        }
    }

    pub fn queue(&self) -> &InputQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut InputQueue {
        &mut self.queue
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft => Some(Button::ShiftLeft),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::Backspace => Some(Button::Backspace),
            _ => None,
        }
    }
}

impl WindowEventSink for WinitController {
    fn on_window_event(&mut self, event: &WindowEvent) {
        self.process_event(event);
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.queue.is_down(button)
    }

    fn get_down_keys(&self) -> &[Button] {
        self.queue.get_down_keys()
    }
}
