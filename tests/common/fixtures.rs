//! Section builders for integration tests.
#![allow(dead_code)]

use pagecast::Section;

/// An opaque RGB section filled with a single gray level
pub fn solid_section(width: u32, height: u32, level: u8) -> Section {
    Section::rgb(width, height, vec![level; (width * height * 3) as usize])
        .expect("valid solid section")
}

/// An RGB section where every row is filled with its own row index (mod 256)
pub fn row_indexed_section(width: u32, height: u32) -> Section {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for row in 0..height {
        pixels.extend(std::iter::repeat_n((row % 256) as u8, (width * 3) as usize));
    }
    Section::rgb(width, height, pixels).expect("valid row-indexed section")
}

/// A fully transparent RGBA section
pub fn transparent_section(width: u32, height: u32) -> Section {
    Section::rgba(width, height, vec![0; (width * height * 4) as usize])
        .expect("valid transparent section")
}
