use crate::helpers;
use crate::writer::{text_string, StreamingPdfWriter};
use chrono::{DateTime, Utc};
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Object};
use pagecast_layout::Document;
use pagecast_render_core::utils::quality_percent;
use pagecast_render_core::{DocumentEncoder, RenderError};
use std::io::{Seek, Write};

const PRODUCER: &str = concat!("pagecast ", env!("CARGO_PKG_VERSION"));

/// Encodes a [`Document`] as PDF, embedding every band as a JPEG image XObject.
///
/// Pages are streamed to the writer one at a time; each page's images are compressed just
/// before the page is written. JPEG caps both image dimensions at 65535 pixels; bands cut by
/// the slicer always respect that, hand-built bands that exceed it fail with
/// [`RenderError::Image`].
#[derive(Debug, Clone)]
pub struct LopdfEncoder {
    quality: u8,
    title: Option<String>,
    creation_date: Option<DateTime<Utc>>,
}

impl Default for LopdfEncoder {
    fn default() -> Self {
        Self::new(0.82)
    }
}

impl LopdfEncoder {
    /// `quality` is the lossy-compression fidelity in `0.0..=1.0`.
    pub fn new(quality: f32) -> Self {
        Self {
            quality: quality_percent(quality),
            title: None,
            creation_date: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pins the creation timestamp instead of using the time of encoding.
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// JPEG quality on the 1-100 scale.
    pub fn jpeg_quality(&self) -> u8 {
        self.quality
    }

    fn info_dictionary(&self) -> Dictionary {
        let created = self.creation_date.unwrap_or_else(Utc::now);
        let mut info = dictionary! {
            "Producer" => text_string(PRODUCER),
            "CreationDate" => text_string(&created.format("D:%Y%m%d%H%M%SZ").to_string()),
        };
        if let Some(title) = &self.title {
            info.set("Title", text_string(title));
        }
        info
    }
}

impl DocumentEncoder for LopdfEncoder {
    fn encode<W: Write + Seek>(&self, document: &Document, writer: W) -> Result<W, RenderError> {
        let page_size = document.page_size();
        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_size.width),
            Object::Real(page_size.height),
        ];
        let mut pdf = StreamingPdfWriter::new(writer, "1.7")?;

        for (page_index, page) in document.pages().iter().enumerate() {
            let encoded = helpers::encode_page_images(page, self.quality)?;

            let mut xobjects = Dictionary::new();
            let mut content = Content { operations: Vec::new() };
            for (i, (placed, jpeg)) in page.images.iter().zip(encoded).enumerate() {
                let name = format!("Im{}", i + 1);
                let image_id = pdf.write_object(helpers::image_xobject(&placed.band, jpeg))?;
                xobjects.set(name.as_bytes(), image_id);
                content
                    .operations
                    .extend(helpers::draw_image_ops(&name, placed.rect, page_size.height));
            }
            let content_id = pdf.write_content_stream(content)?;

            let resources = dictionary! {
                "XObject" => xobjects,
                "ProcSet" => vec![Object::Name(b"PDF".to_vec()), Object::Name(b"ImageC".to_vec())],
            };
            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pdf.pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources,
            };
            let page_id = pdf.write_object(page_dict.into())?;
            pdf.add_page(page_id);
            log::debug!("Wrote page {} with {} image(s)", page_index, page.images.len());
        }

        pdf.set_info(self.info_dictionary());
        let pages = pdf.page_count();
        let writer = pdf.finish()?;
        log::info!("Encoded PDF with {} page(s) at JPEG quality {}", pages, self.quality);
        Ok(writer)
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}
