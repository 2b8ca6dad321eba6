use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use ray_marcher::cli::Cli;
use ray_marcher::config::ViewerConfig;
use ray_marcher::core::{forward_window_event, CursorMode, WindowContext, WinitController};
use ray_marcher::input::InputMapper;
use ray_marcher::orchestrator::{ApplicationContext, FrameOrchestrator};
use ray_marcher::renderer::{RayMarcher, RendererOptions};
use ray_marcher::viewport::Extent;

/// Winit window as seen by the frame loop
struct ViewerWindow(Arc<Window>);

impl WindowContext for ViewerWindow {
    fn set_cursor_mode(&self, mode: CursorMode) {
        match mode {
            CursorMode::Locked => {
                // Look input comes from raw mouse motion, so either grab mode works
                let grabbed = self
                    .0
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| self.0.set_cursor_grab(CursorGrabMode::Confined));
                if let Err(e) = grabbed {
                    log::warn!("cursor grab unavailable: {}", e);
                }
                self.0.set_cursor_visible(false);
            }
            CursorMode::Free => {
                if let Err(e) = self.0.set_cursor_grab(CursorGrabMode::None) {
                    log::warn!("cursor release failed: {}", e);
                }
                self.0.set_cursor_visible(true);
            }
        }
    }

    fn request_redraw(&self) {
        self.0.request_redraw();
    }
}

struct Session {
    window: ViewerWindow,
    renderer: RayMarcher,
    orchestrator: FrameOrchestrator,
}

struct App {
    config: ViewerConfig,
    input: WinitController,
    session: Option<Session>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            input: WinitController::new(),
            session: None,
        }
    }

    fn start_session(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Session> {
        let window_config = &self.config.window;
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(window_config.title.clone())
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        window_config.width,
                        window_config.height,
                    )),
            )
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let renderer = pollster::block_on(RayMarcher::new(
            window.clone(),
            RendererOptions {
                vsync: window_config.vsync,
                show_hud: self.config.show_hud,
            },
        ))
        .context("Failed to initialize ray marcher")?;

        let size = window.inner_size();
        let context = ApplicationContext::new(
            self.config.build_camera(),
            InputMapper::new(true),
            self.config.build_viewport(Extent::new(size.width, size.height)),
        );
        let window = ViewerWindow(window);
        window.set_cursor_mode(CursorMode::Locked);

        let mut orchestrator = FrameOrchestrator::new(context);
        orchestrator.reset_clock();

        Ok(Session {
            window,
            renderer,
            orchestrator,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match self.start_session(event_loop) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                log::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => session.orchestrator.request_shutdown(),
            WindowEvent::RedrawRequested => {
                let result = session.orchestrator.run_frame(
                    self.input.queue_mut(),
                    &session.window,
                    &mut session.renderer,
                );
                if let Err(e) = result {
                    log::error!("render failed: {}", e);
                    session.orchestrator.request_shutdown();
                }
            }
            other => {
                if let WindowEvent::Resized(size) = &other {
                    // Restart the redraw chain that a minimized window paused
                    if size.width > 0 && size.height > 0 {
                        session.window.request_redraw();
                    }
                }
                forward_window_event(&other, &mut [&mut session.renderer, &mut self.input]);
            }
        }

        if !session.orchestrator.is_running() {
            event_loop.exit();
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.session.is_some() {
            self.input.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = &self.session {
            if session.orchestrator.needs_redraw() {
                session.window.request_redraw();
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!(
        "Ray Marcher - Controls: WASD, Space/Shift, mouse to look, \
         Backspace to toggle cursor, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
