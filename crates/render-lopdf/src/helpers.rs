use lopdf::content::Operation;
use lopdf::{dictionary, Object, Stream};
use pagecast_layout::{Band, Page};
use pagecast_render_core::utils::box_origin_y;
use pagecast_render_core::RenderError;
use pagecast_types::Rect;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

/// Compresses a band's RGB rows as a baseline JPEG.
pub fn encode_jpeg(band: &Band, quality: u8) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::with_capacity(band.pixels.len() / 8);
    JpegEncoder::new_with_quality(&mut out, quality).encode(
        &band.pixels,
        band.width,
        band.height,
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}

/// JPEG-encodes every image on a page, preserving placement order.
#[cfg(not(feature = "parallel-render"))]
pub fn encode_page_images(page: &Page, quality: u8) -> Result<Vec<Vec<u8>>, RenderError> {
    page.images
        .iter()
        .map(|placed| encode_jpeg(&placed.band, quality))
        .collect()
}

/// JPEG-encodes every image on a page, preserving placement order.
#[cfg(feature = "parallel-render")]
pub fn encode_page_images(page: &Page, quality: u8) -> Result<Vec<Vec<u8>>, RenderError> {
    use rayon::prelude::*;
    page.images
        .par_iter()
        .map(|placed| encode_jpeg(&placed.band, quality))
        .collect()
}

/// An image XObject carrying DCT-compressed RGB data.
pub fn image_xobject(band: &Band, jpeg: Vec<u8>) -> Object {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => band.width as i64,
        "Height" => band.height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
        "Filter" => "DCTDecode",
    };
    Object::Stream(Stream::new(dict, jpeg).with_compression(false))
}

/// Operators drawing the XObject `name` into `rect` (top-down layout coordinates).
pub fn draw_image_ops(name: &str, rect: Rect, page_height: f32) -> Vec<Operation> {
    let y = box_origin_y(rect.y, rect.height, page_height);
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(rect.width),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(rect.height),
                Object::Real(rect.x),
                Object::Real(y),
            ],
        ),
        Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
        Operation::new("Q", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(width: u32, height: u32) -> Band {
        Band {
            section_index: 0,
            source_y: 0,
            width,
            height,
            pixels: vec![200; (width * height * 3) as usize],
        }
    }

    #[test]
    fn jpeg_output_has_soi_marker() {
        let jpeg = encode_jpeg(&band(16, 8), 82).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn lower_quality_is_not_larger() {
        let mut noisy = band(64, 64);
        for (i, byte) in noisy.pixels.iter_mut().enumerate() {
            *byte = (i * 37 % 251) as u8;
        }
        let high = encode_jpeg(&noisy, 100).unwrap();
        let low = encode_jpeg(&noisy, 10).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn draw_ops_flip_y_axis() {
        let ops = draw_image_ops("Im1", Rect::new(28.0, 28.0, 539.0, 100.0), 842.0);
        let operators: Vec<&str> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, vec!["q", "cm", "Do", "Q"]);
        match &ops[1].operands[5] {
            Object::Real(y) => assert_eq!(*y, 714.0),
            other => panic!("unexpected operand {:?}", other),
        }
    }
}
