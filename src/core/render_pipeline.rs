use glam::Vec3;

use crate::error::RenderError;
use crate::types::FrameParams;
use crate::viewport::Extent;

/// GPU program that ray-marches the scene into an off-screen image.
///
/// Every parameter is re-supplied each frame; implementations must not rely on
/// anything carried over from the previous dispatch.
pub trait ComputeStage {
    /// Reallocate the output image for a new framebuffer extent
    fn resize(&mut self, extent: Extent);

    /// Run one invocation per pixel of `params.extent`
    fn dispatch(&mut self, params: &FrameParams) -> Result<(), RenderError>;
}

/// Full-screen quad pass that samples the compute output and presents it
pub trait DisplayStage {
    fn present(&mut self, stats: &FrameStats) -> Result<(), RenderError>;
}

/// Per-frame numbers for the on-screen overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub fps: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub cursor_locked: bool,
}

impl FrameStats {
    /// One-line status for the HUD
    pub fn summary(&self) -> String {
        format!(
            "frame {}  pos {:.2} {:.2} {:.2}  yaw {:.1}  pitch {:.1}",
            self.frame, self.position.x, self.position.y, self.position.z, self.yaw, self.pitch
        )
    }
}
