pub mod palette;

pub use palette::{Palette, PaletteError};
