use crate::section::Band;
use pagecast_types::{Rect, Size};

/// A band positioned on a page, in points from the page's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub rect: Rect,
    pub band: Band,
}

/// One fixed-size page and the images drawn on it, in placement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub images: Vec<PlacedImage>,
}

impl Page {
    pub fn is_blank(&self) -> bool {
        self.images.is_empty()
    }
}

/// The assembled, paginated export.
///
/// A document always has at least one page, so an export with no sections still yields a
/// single blank page. Only the compositor appends to it; consumers see it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    page_size: Size,
    pages: Vec<Page>,
}

impl Document {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            pages: vec![Page::default()],
        }
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of placed images across all pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.images.len()).sum()
    }

    pub fn placed_images(&self) -> impl Iterator<Item = (usize, &PlacedImage)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.images.iter().map(move |image| (index, image)))
    }

    pub(crate) fn push_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    /// Appends `image` to the last page and returns that page's index.
    pub(crate) fn place(&mut self, image: PlacedImage) -> usize {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let index = self.pages.len() - 1;
        self.pages[index].images.push(image);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_one_blank_page() {
        let document = Document::new(Size::a4());
        assert_eq!(document.page_count(), 1);
        assert!(document.pages()[0].is_blank());
        assert_eq!(document.image_count(), 0);
        assert_eq!(document.page_size(), Size::new(595.0, 842.0));
    }
}
