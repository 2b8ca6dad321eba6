use glam::{Mat4, Vec3};

use crate::viewport::Extent;

/// Everything the compute stage receives for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub camera_to_world: Mat4,
    pub inv_projection: Mat4,
    pub position: Vec3,
    pub time: f32,
    pub extent: Extent,
}

impl FrameParams {
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            camera_to_world: self.camera_to_world.to_cols_array_2d(),
            inv_projection: self.inv_projection.to_cols_array_2d(),
            position: self.position.to_array(),
            time: self.time,
            resolution: [self.extent.width as f32, self.extent.height as f32],
            _pad: [0.0; 2],
        }
    }
}

/// Camera uniform buffer data for GPU, laid out to match `Camera` in raymarch.wgsl
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub camera_to_world: [[f32; 4]; 4],
    pub inv_projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32,
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}
