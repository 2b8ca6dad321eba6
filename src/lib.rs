pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod renderer;
pub mod types;
pub mod viewport;

pub use camera::{Camera, CameraMovement};
pub use orchestrator::{ApplicationContext, FrameOrchestrator, FrameOutcome, RunState};
