use crate::error::ExportError;
use pagecast_layout::PageGeometry;
use pagecast_types::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Recognized export options. Every field has a default, so a partial JSON object is valid.
///
/// ```json
/// { "pageWidthPt": 612, "pageHeightPt": 792, "imageQuality": 0.9, "title": "Invoice" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Page width in points. Defaults to A4 (`595`).
    pub page_width_pt: f32,
    /// Page height in points. Defaults to A4 (`842`).
    pub page_height_pt: f32,
    /// Margin on every side, in points.
    pub margin_pt: f32,
    /// Lossy-compression fidelity of embedded images, `0.0..=1.0`.
    pub image_quality: f32,
    /// Vertical space left after every placed band, in points.
    pub inter_section_gap_pt: f32,
    /// Colour that transparent pixels are flattened onto.
    pub background: Color,
    /// Document title, written to the PDF metadata and used for the suggested filename.
    pub title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_width_pt: 595.0,
            page_height_pt: 842.0,
            margin_pt: 28.0,
            image_quality: 0.82,
            inter_section_gap_pt: 12.0,
            background: Color::WHITE,
            title: "export".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            ExportError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read export config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    /// Checks option ranges and derives the page geometry.
    pub fn validate(&self) -> Result<PageGeometry, ExportError> {
        if !(0.0..=1.0).contains(&self.image_quality) {
            return Err(ExportError::Config(format!(
                "imageQuality must be within 0.0..=1.0, got {}",
                self.image_quality
            )));
        }
        if !self.inter_section_gap_pt.is_finite() || self.inter_section_gap_pt < 0.0 {
            return Err(ExportError::Config(format!(
                "interSectionGapPt must be a non-negative number, got {}",
                self.inter_section_gap_pt
            )));
        }
        Ok(PageGeometry::new(
            self.page_width_pt,
            self.page_height_pt,
            self.margin_pt,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecast_layout::LayoutError;

    #[test]
    fn defaults_are_a4() {
        let config = ExportConfig::default();
        let geometry = config.validate().unwrap();
        assert_eq!(geometry, PageGeometry::a4());
        assert_eq!(config.image_quality, 0.82);
        assert_eq!(config.inter_section_gap_pt, 12.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ExportConfig::from_json(r##"{"marginPt": 36, "background": "#eee"}"##).unwrap();
        assert_eq!(config.margin_pt, 36.0);
        assert_eq!(config.page_width_pt, 595.0);
        assert_eq!(config.background, Color::gray(0xEE));
    }

    #[test]
    fn unknown_options_are_rejected() {
        let err = ExportConfig::from_json(r#"{"pageWidth": 100}"#).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        for quality in [-0.1, 1.5, f32::NAN] {
            let config = ExportConfig {
                image_quality: quality,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ExportError::Config(_))));
        }
    }

    #[test]
    fn negative_gap_is_rejected() {
        let config = ExportConfig {
            inter_section_gap_pt: -4.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ExportError::Config(_))));
    }

    #[test]
    fn oversized_margin_is_invalid_geometry() {
        let config = ExportConfig {
            margin_pt: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExportError::Layout(LayoutError::InvalidGeometry { .. }))
        ));
    }
}
