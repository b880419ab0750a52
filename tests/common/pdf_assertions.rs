#![allow(dead_code)]

use lopdf::{Document as LopdfDocument, Object, ObjectId};

fn resolve<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Page object ids in page order
pub fn page_ids(doc: &LopdfDocument) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// The `[x0, y0, x1, y1]` MediaBox of a page
pub fn media_box(doc: &LopdfDocument, page_id: ObjectId) -> Option<[f32; 4]> {
    let page = doc.get_object(page_id).ok()?.as_dict().ok()?;
    let values = resolve(doc, page.get(b"MediaBox").ok()?)?.as_array().ok()?;
    if values.len() != 4 {
        return None;
    }
    Some([
        number(&values[0])?,
        number(&values[1])?,
        number(&values[2])?,
        number(&values[3])?,
    ])
}

/// Image XObjects referenced from a page's resources, as (width, height, filter)
pub fn page_images(doc: &LopdfDocument, page_id: ObjectId) -> Vec<(i64, i64, String)> {
    let mut images = Vec::new();
    let Some(page) = doc.get_object(page_id).ok().and_then(|o| o.as_dict().ok()) else {
        return images;
    };
    let Some(resources) = page
        .get(b"Resources")
        .ok()
        .and_then(|r| resolve(doc, r))
        .and_then(|r| r.as_dict().ok())
    else {
        return images;
    };
    let Some(xobjects) = resources
        .get(b"XObject")
        .ok()
        .and_then(|x| resolve(doc, x))
        .and_then(|x| x.as_dict().ok())
    else {
        return images;
    };

    for (_name, value) in xobjects.iter() {
        let Some(stream) = resolve(doc, value).and_then(|v| v.as_stream().ok()) else {
            continue;
        };
        let dict = &stream.dict;
        let width = dict.get(b"Width").and_then(|w| w.as_i64()).unwrap_or(0);
        let height = dict.get(b"Height").and_then(|h| h.as_i64()).unwrap_or(0);
        let filter = dict
            .get(b"Filter")
            .and_then(|f| f.as_name())
            .map(|f| String::from_utf8_lossy(f).to_string())
            .unwrap_or_default();
        images.push((width, height, filter));
    }
    images
}

/// A string entry from the trailer's Info dictionary
pub fn info_string(doc: &LopdfDocument, key: &[u8]) -> Option<Vec<u8>> {
    let info = resolve(doc, doc.trailer.get(b"Info").ok()?)?.as_dict().ok()?;
    match info.get(key).ok()? {
        Object::String(bytes, _) => Some(bytes.clone()),
        _ => None,
    }
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "Expected {} pages, got {}",
            $expected,
            $pdf.page_count()
        );
    };
}
