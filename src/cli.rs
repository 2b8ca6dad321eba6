// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewerConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "ray-marcher")]
#[command(about = "Real-time GPU ray-marching viewer", long_about = None)]
pub struct Cli {
    /// JSON settings file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Present without waiting for vertical sync
    #[arg(long = "no-vsync", default_value = "false")]
    pub no_vsync: bool,

    /// Disable the on-screen overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Load the config file (or defaults) and layer the flags on top
    pub fn resolve(&self) -> anyhow::Result<ViewerConfig> {
        let base = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        Ok(self.apply(base))
    }

    pub fn apply(&self, mut config: ViewerConfig) -> ViewerConfig {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(fov) = self.fov {
            config.camera.fov = fov;
        }
        if self.no_vsync {
            config.window.vsync = false;
        }
        if self.no_ui {
            config.show_hud = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keeps_defaults() {
        let cli = Cli::parse_from(["ray-marcher"]);
        assert_eq!(cli.resolve().unwrap(), ViewerConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "ray-marcher",
            "--width",
            "800",
            "--fov",
            "70",
            "--no-vsync",
            "--no-ui",
        ]);
        let config = cli.apply(ViewerConfig::default());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.camera.fov, 70.0);
        assert!(!config.window.vsync);
        assert!(!config.show_hud);
    }
}
