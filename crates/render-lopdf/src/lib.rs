//! PDF encoder for paginated raster documents using lopdf.
//!
//! Each placed band becomes a DCT-compressed image XObject; pages are streamed to the
//! output as soon as their images are encoded.

mod encoder;
mod helpers;
mod writer;

pub use encoder::LopdfEncoder;
pub use helpers::{draw_image_ops, encode_jpeg, image_xobject};
pub use writer::StreamingPdfWriter;
