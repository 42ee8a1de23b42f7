// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    // stroke width and shape size are fractions of the short window edge
    pub stroke_factor: f32,
    pub size_factor: f32,
}

#[derive(Debug, Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
    pub background: String,
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub parts: usize,       // staggered sub-phases per shape
    pub scale_step: f32,    // progress swept per tick, before the per-part split
    pub tick_interval: f32, // seconds between animation ticks
}

impl AnimationConfig {
    /// Per-tick progress step: the configured sweep divided across parts.
    pub fn step(&self) -> f32 {
        self.scale_step / self.parts as f32
    }
}
