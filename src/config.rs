use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{
    Camera, DEFAULT_MOVEMENT_SPEED, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_YAW, DEFAULT_ZOOM,
};
use crate::viewport::{Extent, Viewport, DEFAULT_FAR, DEFAULT_NEAR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "RayMarcher".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub sensitivity: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            fov: DEFAULT_ZOOM,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

/// Viewer settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub show_hud: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            show_hud: true,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn build_camera(&self) -> Camera {
        let cam = &self.camera;
        Camera::new(Vec3::from_array(cam.position), Vec3::Y, cam.yaw, cam.pitch)
            .with_movement_speed(cam.movement_speed)
            .with_sensitivity(cam.sensitivity)
    }

    pub fn build_viewport(&self, extent: Extent) -> Viewport {
        Viewport::with_planes(extent, self.camera.fov, self.camera.near, self.camera.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.camera, CameraConfig::default());
        assert!(config.show_hud);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = ViewerConfig::from_json(
            r#"{ "window": { "width": 640 }, "camera": { "sensitivity": 0.1 } }"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.camera.sensitivity, 0.1);
        assert_eq!(config.camera.movement_speed, DEFAULT_MOVEMENT_SPEED);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ window: 3 }").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ViewerConfig::load(Path::new("/nonexistent/ray-marcher.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/ray-marcher.json"));
    }

    #[test]
    fn build_camera_applies_tuning() {
        let mut config = ViewerConfig::default();
        config.camera.movement_speed = 7.0;
        config.camera.sensitivity = 0.5;
        config.camera.position = [1.0, 2.0, 3.0];

        let camera = config.build_camera();
        assert_eq!(camera.movement_speed, 7.0);
        assert_eq!(camera.sensitivity, 0.5);
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.yaw(), DEFAULT_YAW);
    }
}
