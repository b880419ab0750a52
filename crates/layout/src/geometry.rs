use crate::LayoutError;
use pagecast_types::{Rect, Size};

/// Physical page dimensions and the uniform margin around the printable area.
///
/// Constructed once per export through [`PageGeometry::new`], which rejects any
/// combination whose margins leave no usable space. The value is `Copy` and shared
/// read-only by the slicer and the compositor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    page_width: f32,
    page_height: f32,
    margin: f32,
}

impl PageGeometry {
    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Result<Self, LayoutError> {
        let all_finite = page_width.is_finite() && page_height.is_finite() && margin.is_finite();
        if !all_finite || page_width <= 0.0 || page_height <= 0.0 || margin < 0.0 {
            return Err(LayoutError::InvalidGeometry {
                page_width,
                page_height,
                margin,
            });
        }
        if page_width - 2.0 * margin <= 0.0 || page_height - 2.0 * margin <= 0.0 {
            return Err(LayoutError::InvalidGeometry {
                page_width,
                page_height,
                margin,
            });
        }
        Ok(Self {
            page_width,
            page_height,
            margin,
        })
    }

    /// A4 portrait with a 28pt margin.
    pub fn a4() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 28.0,
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Y coordinate of the top of the printable area.
    pub fn content_top(&self) -> f32 {
        self.margin
    }

    /// Y coordinate of the bottom of the printable area.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    pub fn content_area(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.usable_width(),
            self.usable_height(),
        )
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
