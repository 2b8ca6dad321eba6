use std::collections::{HashSet, VecDeque};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    ShiftLeft,
    Escape,
    Backspace,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons, in press order
    fn get_down_keys(&self) -> &[Button];
}

/// Platform-neutral input event, consumed once per frame in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Rising edge only; held-key repeats never produce a second press
    KeyPressed(Button),
    KeyReleased(Button),
    /// Accumulated cursor position in pixels, y grows downward. Not clamped to the window.
    CursorMoved { x: f32, y: f32 },
    Resized { width: u32, height: u32 },
    CloseRequested,
}

/// Event queue plus held-key snapshot.
///
/// Pushing an event updates the held set immediately; the event itself waits
/// in the queue until the frame loop drains it.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
    pressed_keys: HashSet<Button>,
    pressed_vec: Vec<Button>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Repeats of an already held key are dropped.
    pub fn press(&mut self, button: Button) {
        if self.pressed_keys.insert(button) {
            self.pressed_vec.push(button);
            self.pending.push_back(InputEvent::KeyPressed(button));
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
            self.pending.push_back(InputEvent::KeyReleased(button));
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(button) => self.press(button),
            InputEvent::KeyReleased(button) => self.release(button),
            other => self.pending.push_back(other),
        }
    }

    /// Forget all held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        for button in std::mem::take(&mut self.pressed_vec) {
            self.pressed_keys.remove(&button);
            self.pending.push_back(InputEvent::KeyReleased(button));
        }
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Controller for InputQueue {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
