pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod render_pipeline;
pub mod timer;
pub mod window;

pub use clock::*;
pub use controller::*;
pub use input_adapter::*;
pub use render_pipeline::*;
pub use timer::*;
pub use window::*;
