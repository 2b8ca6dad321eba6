use glam::Mat4;

/// Compute shader work-group edge; must match `@workgroup_size` in raymarch.wgsl
pub const WORKGROUP_SIZE: u32 = 8;

pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Framebuffer size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Minimized windows report a zero-area framebuffer
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Work groups per axis so that every pixel gets one invocation
    pub fn workgroups(&self) -> (u32, u32) {
        (
            self.width.div_ceil(WORKGROUP_SIZE),
            self.height.div_ceil(WORKGROUP_SIZE),
        )
    }
}

/// Framebuffer extent plus the fixed inverse projection derived from it
#[derive(Debug, Clone)]
pub struct Viewport {
    extent: Extent,
    fov_y_degrees: f32,
    near: f32,
    far: f32,
    inv_projection: Mat4,
}

impl Viewport {
    pub fn new(extent: Extent, fov_y_degrees: f32) -> Self {
        Self::with_planes(extent, fov_y_degrees, DEFAULT_NEAR, DEFAULT_FAR)
    }

    pub fn with_planes(extent: Extent, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        let mut viewport = Self {
            extent,
            fov_y_degrees,
            near,
            far,
            inv_projection: Mat4::IDENTITY,
        };
        viewport.rebuild_projection();
        viewport
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.extent.aspect_ratio(),
            self.near,
            self.far,
        )
    }

    pub fn inv_projection(&self) -> Mat4 {
        self.inv_projection
    }

    /// Returns false when the extent was unchanged
    pub fn resize(&mut self, extent: Extent) -> bool {
        if extent == self.extent {
            return false;
        }
        self.extent = extent;
        // A zero-area extent keeps the last valid projection
        if !extent.is_empty() {
            self.rebuild_projection();
        }
        true
    }

    fn rebuild_projection(&mut self) {
        self.inv_projection = self.projection().inverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_workgroups_round_up() {
        assert_eq!(Extent::new(1280, 720).workgroups(), (160, 90));
        assert_eq!(Extent::new(1281, 721).workgroups(), (161, 91));
        assert_eq!(Extent::new(1, 1).workgroups(), (1, 1));
    }

    #[test]
    fn test_empty_extent() {
        assert!(Extent::new(0, 720).is_empty());
        assert!(Extent::new(1280, 0).is_empty());
        assert!(!Extent::new(1, 1).is_empty());
        assert_eq!(Extent::new(0, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_inverse_projection_round_trips_clip_space() {
        let viewport = Viewport::new(Extent::new(1920, 1080), 45.0);
        let product = viewport.projection() * viewport.inv_projection();
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn test_center_ray_points_down_negative_z() {
        let viewport = Viewport::new(Extent::new(800, 600), 60.0);
        let view = viewport.inv_projection() * Vec4::new(0.0, 0.0, 1.0, 1.0);
        let dir = (view.truncate() / view.w).normalize();
        assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut viewport = Viewport::new(Extent::new(800, 800), 90.0);
        assert!(viewport.resize(Extent::new(1600, 800)));

        // Right edge of NDC maps to tan(half fov) * aspect on the x axis
        let edge = viewport.inv_projection() * Vec4::new(1.0, 0.0, 1.0, 1.0);
        let edge = edge.truncate() / edge.w;
        let slope = edge.x / -edge.z;
        assert!((slope - 2.0).abs() < 1e-3, "slope was {}", slope);
    }

    #[test]
    fn test_resize_same_extent_is_noop() {
        let mut viewport = Viewport::new(Extent::new(640, 480), 45.0);
        assert!(!viewport.resize(Extent::new(640, 480)));
    }

    #[test]
    fn test_zero_resize_keeps_projection() {
        let mut viewport = Viewport::new(Extent::new(640, 480), 45.0);
        let before = viewport.inv_projection();
        assert!(viewport.resize(Extent::new(0, 0)));
        assert_eq!(viewport.extent(), Extent::new(0, 0));
        assert_eq!(viewport.inv_projection(), before);
    }
}
