use crate::LayoutError;
use pagecast_types::PixelFormat;

/// Largest band width or height, in pixels, that can be embedded as a JPEG image.
///
/// Sections wider than this are rejected up front; taller sections are fine because the
/// slicer never emits a band with more rows than this.
pub const MAX_RASTER_DIMENSION: u32 = 65_535;

/// One rasterized visual unit of the export, stored as tightly packed 8-bit rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl Section {
    /// Wraps a pixel buffer, checking that it matches the declared dimensions.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidSection(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if width > MAX_RASTER_DIMENSION {
            return Err(LayoutError::InvalidSection(format!(
                "width {}px exceeds the {}px limit of embedded images",
                width, MAX_RASTER_DIMENSION
            )));
        }
        let expected = format.buffer_len(width, height).ok_or_else(|| {
            LayoutError::InvalidSection(format!("{}x{} overflows the address space", width, height))
        })?;
        if pixels.len() != expected {
            return Err(LayoutError::InvalidSection(format!(
                "expected {} bytes for {}x{} {:?}, got {}",
                expected,
                width,
                height,
                format,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    pub fn rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, LayoutError> {
        Self::new(width, height, PixelFormat::Rgb8, pixels)
    }

    pub fn rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, LayoutError> {
        Self::new(width, height, PixelFormat::Rgba8, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes in one pixel row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.channels()
    }

    /// The raw bytes of rows `[y, y + rows)`.
    pub(crate) fn rows(&self, y: u32, rows: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.pixels[start..start + rows as usize * stride]
    }
}

/// A contiguous run of pixel rows copied out of a [`Section`], always opaque RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    /// Index of the parent section within the export.
    pub section_index: usize,
    /// First source row covered by this band.
    pub source_y: u32,
    pub width: u32,
    pub height: u32,
    /// Packed RGB8 rows, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl Band {
    /// The half-open row interval `[source_y, source_y + height)` in the parent section.
    pub fn source_rows(&self) -> std::ops::Range<u32> {
        self.source_y..self.source_y + self.height
    }
}
