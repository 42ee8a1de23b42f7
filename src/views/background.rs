// src/views/background.rs
//
// A simple module to manage background state

use nannou::prelude::*;

pub struct BackgroundManager {
    current_color: Rgb<f32>,
}

impl BackgroundManager {
    pub fn new(color: Rgb<f32>) -> Self {
        Self {
            current_color: color,
        }
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color);
    }

    pub fn get_current_color(&self) -> Rgb<f32> {
        self.current_color
    }
}
