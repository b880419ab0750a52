//! Page geometry, slicing and composition for paginated raster exports.
//!
//! Data flows one way: [`Section`]s are cut into [`Band`]s by the [`Slicer`], and the
//! [`Compositor`] stacks bands onto the pages of a [`Document`], threading a [`Cursor`]
//! from one placement to the next.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "Margin of {margin:.2}pt leaves no usable area on a {page_width:.2}x{page_height:.2}pt page."
    )]
    InvalidGeometry {
        page_width: f32,
        page_height: f32,
        margin: f32,
    },
    #[error(
        "A section {section_width}px wide cannot fit a single pixel row into {usable_height:.2}pt when scaled to {usable_width:.2}pt."
    )]
    DegenerateGeometry {
        section_width: u32,
        usable_width: f32,
        usable_height: f32,
    },
    #[error("Invalid section: {0}")]
    InvalidSection(String),
}

pub mod algorithms;
pub mod compositor;
pub mod document;
pub mod geometry;
pub mod section;
pub mod slicer;

pub use self::compositor::{Compositor, Cursor};
pub use self::document::{Document, Page, PlacedImage};
pub use self::geometry::PageGeometry;
pub use self::section::{Band, MAX_RASTER_DIMENSION, Section};
pub use self::slicer::{Bands, Slicer, max_band_height};

// Re-export foundation types so downstream crates agree on them
pub use pagecast_types::{Color, PixelFormat, Rect, Size};
