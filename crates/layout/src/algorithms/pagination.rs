use pagecast_types::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Decides whether a band must move to a fresh page before it is placed.
///
/// * `cursor_y`: The current Y position on the page, in page coordinates.
/// * `band_height`: The placed height of the band.
/// * `bounds`: The printable area of the page.
///
/// The comparison is exact. A page whose cursor is still at the top of `bounds` never
/// breaks: the slicer guarantees every band fits an empty page, so a break there could
/// only come from rounding and would leave a blank page behind.
pub fn check_band_fit(cursor_y: f32, band_height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.bottom() - cursor_y).max(0.0);
    let page_is_empty = cursor_y <= bounds.y;
    BreakAnalysis {
        should_break: !page_is_empty && cursor_y + band_height > bounds.bottom(),
        remaining_height: available,
    }
}
