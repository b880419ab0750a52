use super::config::ExportConfig;
use super::export::ExportPipeline;
use crate::error::ExportError;
use pagecast_types::Color;
use std::path::Path;

/// A builder for creating an [`ExportPipeline`].
#[derive(Debug, Clone, Default)]
pub struct ExportPipelineBuilder {
    config: ExportConfig,
}

impl ExportPipelineBuilder {
    /// Creates a builder with A4 defaults.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads options from a JSON string. Missing keys take their defaults.
    pub fn with_config_json(mut self, json: &str) -> Result<Self, ExportError> {
        self.config = ExportConfig::from_json(json)?;
        Ok(self)
    }

    /// Loads options from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ExportError> {
        self.config = ExportConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_page_size(mut self, width_pt: f32, height_pt: f32) -> Self {
        self.config.page_width_pt = width_pt;
        self.config.page_height_pt = height_pt;
        self
    }

    pub fn with_margin(mut self, margin_pt: f32) -> Self {
        self.config.margin_pt = margin_pt;
        self
    }

    pub fn with_image_quality(mut self, quality: f32) -> Self {
        self.config.image_quality = quality;
        self
    }

    pub fn with_gap(mut self, gap_pt: f32) -> Self {
        self.config.inter_section_gap_pt = gap_pt;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.config.background = color;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Validates the configuration and creates the pipeline.
    ///
    /// Geometry errors surface here, before any section is processed.
    pub fn build(self) -> Result<ExportPipeline, ExportError> {
        let geometry = self.config.validate()?;
        log::debug!("Built export pipeline with {:?}", self.config);
        Ok(ExportPipeline::new(self.config, geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecast_layout::LayoutError;

    #[test]
    fn setters_override_defaults() {
        let pipeline = ExportPipelineBuilder::new()
            .with_page_size(612.0, 792.0)
            .with_margin(36.0)
            .with_gap(0.0)
            .with_title("Letter")
            .build()
            .unwrap();
        assert_eq!(pipeline.geometry().usable_width(), 540.0);
        assert_eq!(pipeline.geometry().usable_height(), 720.0);
        assert_eq!(pipeline.config().title, "Letter");
    }

    #[test]
    fn invalid_geometry_fails_build() {
        let err = ExportPipelineBuilder::new().with_margin(421.0).build().unwrap_err();
        assert!(matches!(err, ExportError::Layout(LayoutError::InvalidGeometry { .. })));
    }

    #[test]
    fn json_config_is_applied() {
        let pipeline = ExportPipelineBuilder::new()
            .with_config_json(r#"{"pageWidthPt": 400, "pageHeightPt": 400, "marginPt": 0}"#)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(pipeline.geometry().usable_height(), 400.0);
    }
}
