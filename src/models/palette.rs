// src/models/palette.rs
//
// The color sequence the square chain cycles through, parsed once from
// the config's hex entries.

use nannou::prelude::*;
use thiserror::Error;

use crate::config::PaletteConfig;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette has no colors")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
}

#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb<f32>>,
    background: Rgb<f32>,
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Result<Self, PaletteError> {
        if config.colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        let colors = config
            .colors
            .iter()
            .map(|entry| parse_hex(entry))
            .collect::<Result<Vec<_>, _>>()?;
        let background = parse_hex(&config.background)?;
        Ok(Self { colors, background })
    }

    pub fn color(&self, index: usize) -> Rgb<f32> {
        self.colors[index % self.colors.len()]
    }

    pub fn background(&self) -> Rgb<f32> {
        self.background
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Parse a `#rrggbb` entry into a nannou color.
pub fn parse_hex(entry: &str) -> Result<Rgb<f32>, PaletteError> {
    let digits = entry.strip_prefix('#').unwrap_or(entry);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHex(entry.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).unwrap_or(0) as f32 / 255.0
    };
    Ok(rgb(channel(0..2), channel(2..4), channel(4..6)))
}
