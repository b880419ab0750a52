//! # pagecast
//!
//! Paginated document export. An ordered list of rendered sections (raster images of any
//! height) is scaled to the printable width of a fixed-size page, sliced across as many
//! pages as needed without losing or repeating a pixel row, and encoded as PDF.
//!
//! - **layout**: page geometry, slicing and band composition (`pagecast-layout`)
//! - **render**: encoder seam and the lopdf backend (`pagecast-render-*`)
//! - **pipeline**: configuration, ordering and cancellation

pub mod error;
pub mod filename;
pub mod pipeline;

// Re-export foundation and layout crates
pub use pagecast_layout as layout;
pub use pagecast_render_core as render;
pub use pagecast_types as types;

pub use error::{BoxError, ExportError};
pub use filename::suggested_filename;
pub use pagecast_layout::{Band, Document, LayoutError, Page, PageGeometry, PlacedImage, Section};
pub use pagecast_render_core::{DocumentEncoder, RenderError};
pub use pagecast_render_lopdf::LopdfEncoder;
pub use pagecast_types::{Color, PixelFormat};
pub use pipeline::{
    CancellationToken, ExportConfig, ExportPipeline, ExportPipelineBuilder, IterSource,
    SectionSource,
};
