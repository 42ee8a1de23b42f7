// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;

use super::config_types::{AnimationConfig, PaletteConfig, StyleConfig, WindowConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub palette: PaletteConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        let config = if let Some(exe_config) = Self::load_from_exe_dir() {
            exe_config
        } else {
            // Fallback to loading from the current working directory
            Self::load_from_working_dir()?
        };
        config.validate()?;
        Ok(config)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.palette.colors.is_empty() {
            return Err("palette.colors must not be empty".into());
        }
        if self.animation.parts == 0 {
            return Err("animation.parts must be at least 1".into());
        }
        if self.animation.scale_step <= 0.0 {
            return Err("animation.scale_step must be positive".into());
        }
        if self.animation.tick_interval <= 0.0 {
            return Err("animation.tick_interval must be positive".into());
        }
        if self.style.stroke_factor <= 0.0 || self.style.size_factor <= 0.0 {
            return Err("style factors must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        r##"
            [window]
            width = 800
            height = 800

            [style]
            stroke_factor = 90.0
            size_factor = 5.6

            [palette]
            colors = ["#f44336", "#9C27B0", "#2196F3", "#BF360C", "#01579B"]
            background = "#BDBDBD"

            [animation]
            parts = 3
            scale_step = 0.02
            tick_interval = 0.02
        "##
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(sample()).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.palette.colors.len(), 5);
        assert_eq!(config.animation.parts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn per_tick_step_splits_across_parts() {
        let config: Config = toml::from_str(sample()).unwrap();
        let step = config.animation.step();
        assert!((step - 0.02 / 3.0).abs() < 1e-7);
    }

    #[test]
    fn rejects_empty_palette() {
        let mut config: Config = toml::from_str(sample()).unwrap();
        config.palette.colors.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_parts() {
        let mut config: Config = toml::from_str(sample()).unwrap();
        config.animation.parts = 0;
        assert!(config.validate().is_err());
    }
}
