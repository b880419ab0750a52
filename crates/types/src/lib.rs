pub mod color;
pub mod geometry;
pub mod pixel;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use pixel::PixelFormat;
