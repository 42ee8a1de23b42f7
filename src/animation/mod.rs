pub mod driver;
pub mod phase;
pub mod scale;

pub use driver::FrameDriver;
pub use phase::{divide_scale, max_scale, sinify};
pub use scale::ScaleState;
