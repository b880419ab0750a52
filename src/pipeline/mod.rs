//! Export pipeline orchestration.
//!
//! - [`ExportPipelineBuilder`]: Fluent builder validating configuration up front
//! - [`ExportPipeline`]: Slices and composes sections, then encodes the finished document
//! - [`SectionSource`]: Async, strictly ordered supply of rasterized sections
//!
//! # Example
//!
//! ```no_run
//! use pagecast::{ExportPipelineBuilder, Section};
//!
//! # fn main() -> Result<(), pagecast::ExportError> {
//! let pipeline = ExportPipelineBuilder::new().with_title("Report").build()?;
//! let section = Section::rgb(800, 1200, vec![255; 800 * 1200 * 3])?;
//! pipeline.export_to_file(vec![section], pipeline.suggested_filename())?;
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod cancel;
pub mod config;
mod export;
pub mod source;

pub use builder::ExportPipelineBuilder;
pub use cancel::CancellationToken;
pub use config::ExportConfig;
pub use export::ExportPipeline;
pub use source::{IterSource, SectionSource};
