//! Core encoding abstractions for paginated output.
//!
//! This crate provides the seam between layout and concrete output formats:
//! - `DocumentEncoder` trait implemented by each backend
//! - Error types for encoding operations
//! - Shared coordinate and quality conversions

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentEncoder;
