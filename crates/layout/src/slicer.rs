//! Cuts a section's raster into horizontal bands that each fit one page.
//!
//! The slicer is a pure function of a [`Section`] and a [`PageGeometry`]: the section is
//! scaled so its width fills the usable page width, and the tallest run of source rows that
//! still fits the usable page height becomes the band height. Bands are produced lazily and
//! tile the section's rows exactly.

use crate::section::{Band, MAX_RASTER_DIMENSION, Section};
use crate::{LayoutError, PageGeometry};
use pagecast_types::{Color, PixelFormat};

/// Largest number of source rows that, once scaled to the usable width, fit on one page.
///
/// Computed as `floor(usable_height * width_px / usable_width)` in double precision so a
/// section whose scaled height is exactly the usable height is not split by rounding.
pub fn max_band_height(section_width: u32, geometry: &PageGeometry) -> Result<u32, LayoutError> {
    let usable_width = f64::from(geometry.usable_width());
    let usable_height = f64::from(geometry.usable_height());
    let rows = (usable_height * f64::from(section_width) / usable_width).floor();
    if rows < 1.0 {
        return Err(LayoutError::DegenerateGeometry {
            section_width,
            usable_width: geometry.usable_width(),
            usable_height: geometry.usable_height(),
        });
    }
    Ok(rows.min(f64::from(u32::MAX)) as u32)
}

/// Produces [`Bands`] for sections under a fixed page geometry.
#[derive(Debug, Clone, Copy)]
pub struct Slicer {
    geometry: PageGeometry,
    matte: Color,
}

impl Slicer {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            matte: Color::WHITE,
        }
    }

    /// Sets the colour transparent pixels are flattened onto.
    pub fn with_matte(mut self, matte: Color) -> Self {
        self.matte = matte;
        self
    }

    /// Slices `section`, tagging each band with `section_index`.
    ///
    /// Fails with [`LayoutError::DegenerateGeometry`] before producing anything if the page
    /// cannot hold a single source row at this section's scale. Bands are never taller than
    /// [`MAX_RASTER_DIMENSION`] rows, even when more would fit the page.
    pub fn slice<'a>(
        &self,
        section_index: usize,
        section: &'a Section,
    ) -> Result<Bands<'a>, LayoutError> {
        let max_rows = max_band_height(section.width(), &self.geometry)?.min(MAX_RASTER_DIMENSION);
        log::debug!(
            "Section {} ({}x{} px): up to {} rows per band",
            section_index,
            section.width(),
            section.height(),
            max_rows
        );
        Ok(Bands {
            section,
            section_index,
            max_rows,
            next_y: 0,
            matte: self.matte,
        })
    }
}

/// Lazy, top-to-bottom sequence of bands for one section.
///
/// Cloning the iterator restarts from the clone's position; slicing the same section again
/// yields identical band boundaries.
#[derive(Debug, Clone)]
pub struct Bands<'a> {
    section: &'a Section,
    section_index: usize,
    max_rows: u32,
    next_y: u32,
    matte: Color,
}

impl Bands<'_> {
    /// Maximum band height in source rows for this section.
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    fn remaining_rows(&self) -> u32 {
        self.section.height() - self.next_y
    }
}

impl Iterator for Bands<'_> {
    type Item = Band;

    fn next(&mut self) -> Option<Band> {
        let remaining = self.remaining_rows();
        if remaining == 0 {
            return None;
        }
        let height = remaining.min(self.max_rows);
        let source_y = self.next_y;
        let rows = self.section.rows(source_y, height);
        let pixels = flatten(rows, self.section.format(), self.matte);
        self.next_y += height;

        Some(Band {
            section_index: self.section_index,
            source_y,
            width: self.section.width(),
            height,
            pixels,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining_rows().div_ceil(self.max_rows) as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bands<'_> {}

impl std::iter::FusedIterator for Bands<'_> {}

/// Converts packed rows to opaque RGB, compositing any alpha over `matte`.
fn flatten(rows: &[u8], format: PixelFormat, matte: Color) -> Vec<u8> {
    match format {
        PixelFormat::Rgb8 => rows.to_vec(),
        PixelFormat::Rgba8 => {
            let matte = matte.to_array();
            let mut out = Vec::with_capacity(rows.len() / 4 * 3);
            for px in rows.chunks_exact(4) {
                let alpha = u32::from(px[3]);
                for (channel, background) in px[..3].iter().zip(matte) {
                    let blended =
                        u32::from(*channel) * alpha + u32::from(background) * (255 - alpha);
                    out.push(((blended + 127) / 255) as u8);
                }
            }
            out
        }
    }
}
