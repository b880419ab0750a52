use crate::error::RenderError;
use pagecast_layout::Document;
use std::io::{Seek, Write};

/// Serializes a finished [`Document`] into a paginated byte stream.
///
/// Encoders are invoked once per export, after every band has been placed.
pub trait DocumentEncoder {
    /// Writes `document` to `writer`, returning the writer once the output is complete.
    fn encode<W: Write + Seek>(&self, document: &Document, writer: W) -> Result<W, RenderError>;

    /// File extension (without the dot) of the produced format.
    fn extension(&self) -> &'static str;
}
