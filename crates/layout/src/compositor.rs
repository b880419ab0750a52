//! Places bands onto pages, tracking the running vertical cursor.

use crate::algorithms::check_band_fit;
use crate::document::{Document, PlacedImage};
use crate::section::Band;
use crate::PageGeometry;
use pagecast_types::Rect;

/// Where the next band goes: page index and the Y position of its top edge.
///
/// The cursor is a plain value threaded through [`Compositor::place`]. It starts at the top
/// margin of page 0 and only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    page_index: usize,
    y: f32,
}

impl Cursor {
    pub fn start(geometry: &PageGeometry) -> Self {
        Self {
            page_index: 0,
            y: geometry.content_top(),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

/// Scales bands to the usable page width and stacks them top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    geometry: PageGeometry,
    gap: f32,
}

impl Compositor {
    /// `gap` is the vertical space left after every placed band, including bands that
    /// continue the same section.
    pub fn new(geometry: PageGeometry, gap: f32) -> Self {
        Self { geometry, gap }
    }

    /// Height in points of `band` once its width is scaled to the usable width.
    pub fn placed_height(&self, band: &Band) -> f32 {
        let usable_width = f64::from(self.geometry.usable_width());
        (f64::from(band.height) * usable_width / f64::from(band.width)) as f32
    }

    /// Places `band` at the cursor, starting a new page first if it would overflow.
    ///
    /// At most one page break happens per band, always before placement. The band always
    /// lands on the document's last page. Returns the cursor for the next band.
    pub fn place(&self, band: Band, cursor: Cursor, document: &mut Document) -> Cursor {
        let height = self.placed_height(&band);
        let bounds = self.geometry.content_area();
        let (section_index, source_y) = (band.section_index, band.source_y);

        let mut y = cursor.y;
        let analysis = check_band_fit(y, height, bounds);
        if analysis.should_break {
            let page_index = document.push_page();
            log::debug!(
                "Page break before band {}@{} ({:.2}pt needed, {:.2}pt left); now on page {}",
                section_index,
                source_y,
                height,
                analysis.remaining_height,
                page_index
            );
            y = bounds.y;
        }

        let rect = Rect::new(bounds.x, y, bounds.width, height);
        let page_index = document.place(PlacedImage { rect, band });
        log::debug!(
            "Placed band {}@{} on page {} at y={:.2} ({:.2}pt tall)",
            section_index,
            source_y,
            page_index,
            rect.y,
            rect.height
        );

        Cursor {
            page_index,
            y: (y + height + self.gap).min(bounds.bottom()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use crate::slicer::Slicer;

    fn band(width: u32, height: u32) -> Band {
        Band {
            section_index: 0,
            source_y: 0,
            width,
            height,
            pixels: vec![255; (width * height * 3) as usize],
        }
    }

    fn setup() -> (Compositor, Cursor, Document) {
        let geometry = PageGeometry::a4();
        (
            Compositor::new(geometry, 12.0),
            Cursor::start(&geometry),
            Document::new(geometry.page_size()),
        )
    }

    #[test]
    fn short_band_stays_on_current_page() {
        let (compositor, cursor, mut document) = setup();
        let next = compositor.place(band(539, 100), cursor, &mut document);
        assert_eq!(next.page_index(), 0);
        assert_eq!(next.y(), 28.0 + 100.0 + 12.0);

        let placed = &document.pages()[0].images[0];
        assert_eq!(placed.rect, Rect::new(28.0, 28.0, 539.0, 100.0));
    }

    #[test]
    fn placement_scales_to_usable_width() {
        let (compositor, cursor, mut document) = setup();
        compositor.place(band(1078, 200), cursor, &mut document);
        let placed = &document.pages()[0].images[0];
        assert_eq!(placed.rect.width, 539.0);
        assert_eq!(placed.rect.height, 100.0);
    }

    #[test]
    fn overflowing_band_moves_to_next_page() {
        let (compositor, cursor, mut document) = setup();
        let cursor = compositor.place(band(539, 500), cursor, &mut document);
        assert_eq!((cursor.page_index(), cursor.y()), (0, 540.0));

        let cursor = compositor.place(band(539, 500), cursor, &mut document);
        assert_eq!(document.page_count(), 2);
        assert_eq!(document.pages()[1].images[0].rect.y, 28.0);
        assert_eq!((cursor.page_index(), cursor.y()), (1, 540.0));
    }

    #[test]
    fn full_page_band_on_empty_page_does_not_break() {
        let (compositor, cursor, mut document) = setup();
        let cursor = compositor.place(band(539, 786), cursor, &mut document);
        assert_eq!(document.page_count(), 1);
        assert_eq!(cursor.y(), 814.0);
    }

    #[test]
    fn band_ending_on_bottom_margin_fits() {
        let (compositor, cursor, mut document) = setup();
        // 28 + 380 + 12 = 420; 420 + 394 = 814 which is exactly the bottom margin.
        let cursor = compositor.place(band(539, 380), cursor, &mut document);
        let cursor = compositor.place(band(539, 394), cursor, &mut document);
        assert_eq!(cursor.page_index(), 0);
        assert_eq!(document.page_count(), 1);
    }

    #[test]
    fn cursor_is_monotonic_across_sliced_sections() {
        let geometry = PageGeometry::a4();
        let slicer = Slicer::new(geometry);
        let compositor = Compositor::new(geometry, 12.0);
        let mut document = Document::new(geometry.page_size());
        let mut cursor = Cursor::start(&geometry);

        let sections = [(1000, 3000), (600, 200), (539, 786), (2000, 90), (300, 1234)];
        for (index, (w, h)) in sections.into_iter().enumerate() {
            let section = Section::rgb(w, h, vec![0; (w * h * 3) as usize]).unwrap();
            for band in slicer.slice(index, &section).unwrap() {
                let next = compositor.place(band, cursor, &mut document);
                assert!(next.page_index() >= cursor.page_index());
                if next.page_index() == cursor.page_index() {
                    assert!(next.y() >= cursor.y());
                }
                assert!(next.y() >= geometry.content_top());
                assert!(next.y() <= geometry.content_bottom());
                cursor = next;
            }
        }

        for page in document.pages() {
            assert!(!page.is_blank());
            for image in &page.images {
                assert!(image.rect.bottom() <= geometry.content_bottom() + 1e-3);
            }
        }
        assert_eq!(cursor.page_index() + 1, document.page_count());
    }

    #[test]
    fn cursor_from_another_document_lands_on_last_page() {
        let (compositor, cursor, mut first) = setup();
        let mut cursor = cursor;
        for _ in 0..3 {
            cursor = compositor.place(band(539, 700), cursor, &mut first);
        }
        assert_eq!(cursor.page_index(), 2);

        let mut fresh = Document::new(PageGeometry::a4().page_size());
        let next = compositor.place(band(539, 10), cursor, &mut fresh);
        assert_eq!(fresh.page_count(), 1);
        assert_eq!(next.page_index(), 0);
        assert_eq!(fresh.image_count(), 1);
    }
}
