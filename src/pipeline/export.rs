use super::cancel::CancellationToken;
use super::config::ExportConfig;
use super::source::{IterSource, SectionSource};
use crate::error::{BoxError, ExportError};
use crate::filename::suggested_filename;
use chrono::Local;
use pagecast_layout::{Compositor, Cursor, Document, PageGeometry, Section, Slicer};
use pagecast_render_core::DocumentEncoder;
use pagecast_render_lopdf::LopdfEncoder;
use std::convert::Infallible;
use std::io::{BufWriter, Cursor as IoCursor, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Turns an ordered sequence of sections into a paginated document.
///
/// Construct it with [`ExportPipelineBuilder`](super::ExportPipelineBuilder). Configuration is
/// validated there, so an `ExportPipeline` always holds a usable page geometry.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    config: ExportConfig,
    geometry: PageGeometry,
    slicer: Slicer,
    compositor: Compositor,
    encoder: LopdfEncoder,
}

impl ExportPipeline {
    pub(crate) fn new(config: ExportConfig, geometry: PageGeometry) -> Self {
        let slicer = Slicer::new(geometry).with_matte(config.background);
        let compositor = Compositor::new(geometry, config.inter_section_gap_pt);
        let encoder = LopdfEncoder::new(config.image_quality).with_title(config.title.clone());
        Self {
            config,
            geometry,
            slicer,
            compositor,
            encoder,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Lays out `sections` in order.
    ///
    /// Zero sections is not an error: the result is a single blank page of the configured size.
    pub fn export<I>(&self, sections: I) -> Result<Document, ExportError>
    where
        I: IntoIterator<Item = Section>,
    {
        self.try_export(sections.into_iter().map(Ok::<_, Infallible>))
    }

    /// Lays out sections produced by a fallible rasterizer.
    ///
    /// The first rasterization error aborts the export and is returned as
    /// [`ExportError::Rasterize`]; nothing built so far is returned.
    pub fn try_export<I, E>(&self, sections: I) -> Result<Document, ExportError>
    where
        I: IntoIterator<Item = Result<Section, E>>,
        E: Into<BoxError>,
    {
        let mut session = ExportSession::new(self);
        for section in sections {
            let section = section.map_err(|e| session.rasterize_failed(e.into()))?;
            session.add_section(section)?;
        }
        Ok(session.finish())
    }

    /// Lays out sections pulled from an async `source`, checking `cancel` between sections.
    pub async fn export_from<S>(
        &self,
        mut source: S,
        cancel: &CancellationToken,
    ) -> Result<Document, ExportError>
    where
        S: SectionSource,
    {
        let mut session = ExportSession::new(self);
        loop {
            if cancel.is_cancelled() {
                log::warn!(
                    "Export cancelled after {} section(s); discarding partial document",
                    session.sections
                );
                return Err(ExportError::Cancelled {
                    sections_placed: session.sections,
                });
            }
            match source.next_section().await {
                Ok(Some(section)) => session.add_section(section)?,
                Ok(None) => break,
                Err(e) => return Err(session.rasterize_failed(e)),
            }
        }
        Ok(session.finish())
    }

    /// Convenience wrapper over [`export_from`](Self::export_from) for fallible iterators.
    pub async fn export_iter_async<I, E>(
        &self,
        sections: I,
        cancel: &CancellationToken,
    ) -> Result<Document, ExportError>
    where
        I: IntoIterator<Item = Result<Section, E>>,
        E: Into<BoxError>,
    {
        self.export_from(IterSource::new(sections), cancel).await
    }

    /// Serializes a finished document as PDF.
    pub fn encode<W: Write + Seek>(
        &self,
        document: &Document,
        writer: W,
    ) -> Result<W, ExportError> {
        Ok(self.encoder.encode(document, writer)?)
    }

    pub fn export_to_bytes<I>(&self, sections: I) -> Result<Vec<u8>, ExportError>
    where
        I: IntoIterator<Item = Section>,
    {
        let document = self.export(sections)?;
        Ok(self.encode(&document, IoCursor::new(Vec::new()))?.into_inner())
    }

    pub fn export_to_file<I, P>(&self, sections: I, path: P) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = Section>,
        P: AsRef<Path>,
    {
        let document = self.export(sections)?;
        self.write_file(&document, path)
    }

    /// Encodes `document` into a file at `path`.
    ///
    /// Output is staged in a temporary file next to `path` and only moved into place once
    /// encoding succeeds, so a failed export never leaves a truncated file behind.
    pub fn write_file<P: AsRef<Path>>(
        &self,
        document: &Document,
        path: P,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staged = NamedTempFile::new_in(dir)?;
        let writer = self.encode(document, BufWriter::new(staged))?;
        let staged = writer.into_inner().map_err(|e| e.into_error())?;
        staged.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Filename for the host's save/download action, dated today.
    pub fn suggested_filename(&self) -> String {
        suggested_filename(
            &self.config.title,
            Local::now().date_naive(),
            self.encoder.extension(),
        )
    }
}

/// Layout state owned by a single export invocation.
struct ExportSession<'p> {
    pipeline: &'p ExportPipeline,
    cursor: Cursor,
    document: Document,
    sections: usize,
    bands: usize,
}

impl<'p> ExportSession<'p> {
    fn new(pipeline: &'p ExportPipeline) -> Self {
        let geometry = pipeline.geometry;
        log::info!(
            "Starting export on {}x{}pt pages ({}pt margin)",
            geometry.page_width(),
            geometry.page_height(),
            geometry.margin()
        );
        Self {
            pipeline,
            cursor: Cursor::start(&geometry),
            document: Document::new(geometry.page_size()),
            sections: 0,
            bands: 0,
        }
    }

    /// Slices and places one section. Slicing fails before any band is placed.
    fn add_section(&mut self, section: Section) -> Result<(), ExportError> {
        let bands = self.pipeline.slicer.slice(self.sections, &section)?;
        for band in bands {
            self.cursor = self
                .pipeline
                .compositor
                .place(band, self.cursor, &mut self.document);
            self.bands += 1;
        }
        self.sections += 1;
        Ok(())
    }

    fn rasterize_failed(&self, source: BoxError) -> ExportError {
        log::error!("Rasterizing section {} failed: {}", self.sections, source);
        ExportError::Rasterize {
            section_index: self.sections,
            source,
        }
    }

    fn finish(self) -> Document {
        if self.sections == 0 {
            log::warn!("No sections to export; producing a single blank page");
        }
        log::info!(
            "Export laid out {} section(s) as {} band(s) on {} page(s)",
            self.sections,
            self.bands,
            self.document.page_count()
        );
        self.document
    }
}
