/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// PDF Y coordinate of the lower edge of a box placed at layout `y` with `height`.
pub fn box_origin_y(y: f32, height: f32, page_height: f32) -> f32 {
    flip_y(y + height, page_height)
}

/// Maps a `0.0..=1.0` quality factor onto the `1..=100` scale used by lossy codecs.
pub fn quality_percent(quality: f32) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}
