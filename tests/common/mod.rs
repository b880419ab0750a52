pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use pagecast::{ExportError, ExportPipeline, Section};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Export `sections` with `pipeline` and load the result back
pub fn export_pdf(
    pipeline: &ExportPipeline,
    sections: Vec<Section>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let document = pipeline.export(sections)?;
    let bytes = pipeline.encode(&document, Cursor::new(Vec::new()))?.into_inner();
    GeneratedPdf::from_bytes(bytes)
}

/// Unwrap helper that keeps the pipeline error readable in test output
#[allow(dead_code)]
pub fn expect_export_error<T: std::fmt::Debug>(result: Result<T, ExportError>) -> ExportError {
    match result {
        Ok(value) => panic!("expected export to fail, got {:?}", value),
        Err(e) => e,
    }
}
