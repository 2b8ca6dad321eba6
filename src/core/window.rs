use winit::event::WindowEvent;

/// How the OS cursor behaves over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Hidden and grabbed; mouse motion steers the camera
    Locked,
    /// Visible and released to the OS
    Free,
}

impl CursorMode {
    pub fn from_locked(locked: bool) -> Self {
        if locked {
            CursorMode::Locked
        } else {
            CursorMode::Free
        }
    }
}

/// Window collaborator - accepts commands from the frame loop
pub trait WindowContext {
    /// Switch cursor visibility and capture
    fn set_cursor_mode(&self, mode: CursorMode);

    /// Request the window to redraw
    fn request_redraw(&self);
}

/// Consumer of raw window events (HUD state, input adapter)
pub trait WindowEventSink {
    fn on_window_event(&mut self, event: &WindowEvent);
}

/// Hand `event` to every sink, in order
pub fn forward_window_event(event: &WindowEvent, sinks: &mut [&mut dyn WindowEventSink]) {
    for sink in sinks.iter_mut() {
        sink.on_window_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_cursor_mode_from_locked() {
        assert_eq!(CursorMode::from_locked(true), CursorMode::Locked);
        assert_eq!(CursorMode::from_locked(false), CursorMode::Free);
    }

    // Mock window for testing trait implementation
    struct MockWindow {
        modes: RefCell<Vec<CursorMode>>,
        redraw_called: RefCell<usize>,
    }

    impl WindowContext for MockWindow {
        fn set_cursor_mode(&self, mode: CursorMode) {
            self.modes.borrow_mut().push(mode);
        }

        fn request_redraw(&self) {
            *self.redraw_called.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_window_context_records_commands() {
        let window = MockWindow {
            modes: RefCell::new(Vec::new()),
            redraw_called: RefCell::new(0),
        };

        window.set_cursor_mode(CursorMode::Free);
        window.request_redraw();
        window.set_cursor_mode(CursorMode::Locked);
        window.request_redraw();

        assert_eq!(*window.modes.borrow(), vec![CursorMode::Free, CursorMode::Locked]);
        assert_eq!(*window.redraw_called.borrow(), 2);
    }

    #[derive(Default)]
    struct RecordingSink {
        seen: Vec<WindowEvent>,
    }

    impl WindowEventSink for RecordingSink {
        fn on_window_event(&mut self, event: &WindowEvent) {
            self.seen.push(event.clone());
        }
    }

    #[test]
    fn test_every_sink_sees_every_event() {
        let mut hud = RecordingSink::default();
        let mut input = RecordingSink::default();

        let resized = WindowEvent::Resized(PhysicalSize::new(800, 600));
        forward_window_event(&resized, &mut [&mut hud, &mut input]);
        forward_window_event(&WindowEvent::Focused(false), &mut [&mut hud, &mut input]);

        assert_eq!(hud.seen, vec![resized.clone(), WindowEvent::Focused(false)]);
        assert_eq!(input.seen, hud.seen);
    }
}
