//! Per-frame sequencing: time, input, camera parameters, dispatch, display.

use glam::Vec2;

use crate::camera::Camera;
use crate::core::{
    Clock, ComputeStage, Controller, DisplayStage, FpsCounter, FrameStats, InputEvent, InputQueue,
    MonotonicTime, TimeSource, WindowContext,
};
use crate::error::RenderError;
use crate::input::{InputMapper, InputOutcome};
use crate::types::FrameParams;
use crate::viewport::{Extent, Viewport};

/// Loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// What happened during one call to [`FrameOrchestrator::run_frame`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Compute and display both ran
    Rendered(FrameParams),
    /// Framebuffer has zero area; nothing dispatched
    Skipped,
    Stopped,
}

/// Session state shared by the input mapper and the frame loop
#[derive(Debug, Clone)]
pub struct ApplicationContext {
    pub camera: Camera,
    pub input: InputMapper,
    pub viewport: Viewport,
}

impl ApplicationContext {
    pub fn new(camera: Camera, input: InputMapper, viewport: Viewport) -> Self {
        Self {
            camera,
            input,
            viewport,
        }
    }

    /// Snapshot the camera into the compute stage contract
    pub fn frame_params(&self, time: f32) -> FrameParams {
        FrameParams {
            camera_to_world: self.camera.camera_to_world(),
            inv_projection: self.viewport.inv_projection(),
            position: self.camera.position,
            time,
            extent: self.viewport.extent(),
        }
    }
}

/// Drives one render-loop iteration at a time in strict program order
pub struct FrameOrchestrator<S: TimeSource = MonotonicTime> {
    context: ApplicationContext,
    clock: Clock<S>,
    fps: FpsCounter,
    state: RunState,
    frame_number: u64,
    elapsed: f32,
}

impl FrameOrchestrator<MonotonicTime> {
    pub fn new(context: ApplicationContext) -> Self {
        Self::with_time_source(context, MonotonicTime::new())
    }
}

impl<S: TimeSource> FrameOrchestrator<S> {
    pub fn with_time_source(context: ApplicationContext, source: S) -> Self {
        Self {
            context,
            clock: Clock::with_source(source),
            fps: FpsCounter::default(),
            state: RunState::Running,
            frame_number: 0,
            elapsed: 0.0,
        }
    }

    pub fn context(&self) -> &ApplicationContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ApplicationContext {
        &mut self.context
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// False while stopped or minimized. A minimized window never presents,
    /// so redrawing it would spin without vsync pacing.
    pub fn needs_redraw(&self) -> bool {
        self.is_running() && !self.context.viewport.extent().is_empty()
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn request_shutdown(&mut self) {
        if self.state == RunState::Running {
            log::info!("shutdown requested after {} frames", self.frame_number);
        }
        self.state = RunState::Stopped;
    }

    /// Discard time spent outside the loop (startup, GPU init)
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Apply a framebuffer resize to the viewport and the compute stage
    pub fn resize(&mut self, extent: Extent, compute: &mut dyn ComputeStage) {
        if self.context.viewport.resize(extent) {
            log::debug!("framebuffer resized to {}x{}", extent.width, extent.height);
            if !extent.is_empty() {
                compute.resize(extent);
            }
        }
    }

    /// Run one loop iteration.
    ///
    /// Queued input is fully consumed before the camera is read, so everything
    /// that arrived since the previous frame affects this one.
    pub fn run_frame<R>(
        &mut self,
        input: &mut InputQueue,
        window: &dyn WindowContext,
        stages: &mut R,
    ) -> Result<FrameOutcome, RenderError>
    where
        R: ComputeStage + DisplayStage,
    {
        if self.state == RunState::Stopped {
            return Ok(FrameOutcome::Stopped);
        }

        let delta_time = self.clock.tick();
        self.elapsed += delta_time;

        let events: Vec<InputEvent> = input.drain().collect();
        for event in events {
            self.handle_event(event, window, stages);
        }
        if self.state == RunState::Stopped {
            return Ok(FrameOutcome::Stopped);
        }

        let controller: &dyn Controller = &*input;
        self.context
            .input
            .apply_held_keys(controller, &mut self.context.camera, delta_time);

        if self.context.viewport.extent().is_empty() {
            return Ok(FrameOutcome::Skipped);
        }

        let params = self.context.frame_params(self.elapsed);
        stages.dispatch(&params)?;

        if self.fps.tick(delta_time) {
            log::debug!("FPS: {:.1}", self.fps.fps());
        }
        stages.present(&self.stats())?;

        self.frame_number += 1;
        Ok(FrameOutcome::Rendered(params))
    }

    pub fn stats(&self) -> FrameStats {
        let camera = &self.context.camera;
        FrameStats {
            frame: self.frame_number,
            fps: self.fps.fps(),
            position: camera.position,
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            cursor_locked: self.context.input.cursor_locked(),
        }
    }

    fn handle_event(
        &mut self,
        event: InputEvent,
        window: &dyn WindowContext,
        compute: &mut dyn ComputeStage,
    ) {
        match event {
            InputEvent::Resized { width, height } => {
                self.resize(Extent::new(width, height), compute)
            }
            InputEvent::CloseRequested => self.request_shutdown(),
            InputEvent::CursorMoved { x, y } => {
                let ctx = &mut self.context;
                ctx.input.cursor_moved(Vec2::new(x, y), &mut ctx.camera);
            }
            InputEvent::KeyPressed(button) => {
                if self.context.input.key_pressed(button, window) == InputOutcome::ShutdownRequested {
                    self.request_shutdown();
                }
            }
            InputEvent::KeyReleased(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Button, CursorMode, ManualTime};

    struct NullWindow;

    impl WindowContext for NullWindow {
        fn set_cursor_mode(&self, _mode: CursorMode) {}
        fn request_redraw(&self) {}
    }

    #[derive(Default)]
    struct Log {
        calls: Vec<&'static str>,
    }

    impl ComputeStage for Log {
        fn resize(&mut self, _extent: Extent) {
            self.calls.push("resize");
        }

        fn dispatch(&mut self, _params: &FrameParams) -> Result<(), RenderError> {
            self.calls.push("dispatch");
            Ok(())
        }
    }

    impl DisplayStage for Log {
        fn present(&mut self, _stats: &FrameStats) -> Result<(), RenderError> {
            self.calls.push("present");
            Ok(())
        }
    }

    fn orchestrator() -> (FrameOrchestrator<ManualTime>, ManualTime) {
        let time = ManualTime::new();
        let context = ApplicationContext::new(
            Camera::default(),
            InputMapper::new(true),
            Viewport::new(Extent::new(64, 32), 45.0),
        );
        (FrameOrchestrator::with_time_source(context, time.clone()), time)
    }

    #[test]
    fn dispatch_precedes_present() {
        let (mut orch, _) = orchestrator();
        let mut log = Log::default();
        let mut input = InputQueue::new();

        orch.run_frame(&mut input, &NullWindow, &mut log).unwrap();

        assert_eq!(log.calls, vec!["dispatch", "present"]);
        assert_eq!(orch.frame_number(), 1);
    }

    #[test]
    fn resize_reaches_compute_before_dispatch() {
        let (mut orch, _) = orchestrator();
        let mut log = Log::default();
        let mut input = InputQueue::new();
        input.push(InputEvent::Resized { width: 100, height: 50 });

        orch.run_frame(&mut input, &NullWindow, &mut log).unwrap();

        assert_eq!(log.calls, vec!["resize", "dispatch", "present"]);
    }

    #[test]
    fn stopped_is_terminal() {
        let (mut orch, _) = orchestrator();
        let mut log = Log::default();
        let mut input = InputQueue::new();

        orch.request_shutdown();
        let outcome = orch.run_frame(&mut input, &NullWindow, &mut log).unwrap();

        assert_eq!(outcome, FrameOutcome::Stopped);
        assert!(log.calls.is_empty());
    }

    #[test]
    fn held_key_uses_frame_delta() {
        let (mut orch, time) = orchestrator();
        let mut log = Log::default();
        let mut input = InputQueue::new();
        input.press(Button::KeyW);

        time.advance(0.5);
        orch.run_frame(&mut input, &NullWindow, &mut log).unwrap();

        // speed 3 * 0.5s along -Z
        assert!((orch.context().camera.position.z - -1.5).abs() < 1e-4);
    }
}
