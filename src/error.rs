use pagecast_layout::LayoutError;
use pagecast_render_core::RenderError;
use thiserror::Error;

/// Error type returned by section sources and accepted from collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A comprehensive error type for the export pipeline.
///
/// Collaborator failures are carried unchanged as the `source` of [`ExportError::Rasterize`]
/// or inside [`ExportError::Render`]; the pipeline never retries them.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Encoding failed: {0}")]
    Render(#[from] RenderError),

    #[error("Rasterizing section {section_index} failed: {source}")]
    Rasterize {
        section_index: usize,
        #[source]
        source: BoxError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export cancelled after {sections_placed} section(s)")]
    Cancelled { sections_placed: usize },
}
