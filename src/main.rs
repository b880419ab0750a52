use clap::Parser;
use pagecast::{
    BoxError, CancellationToken, Color, ExportError, ExportPipelineBuilder, Section,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::sync::mpsc;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Paginates rendered images into a fixed-size PDF, slicing tall images across pages.
#[derive(Parser, Debug)]
#[command(name = "pagecast", version, about)]
struct Cli {
    /// Images to export, one section each, in order.
    inputs: Vec<PathBuf>,

    /// Output file. Defaults to a filename derived from the title and today's date.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with export options; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    page_width: Option<f32>,

    #[arg(long)]
    page_height: Option<f32>,

    #[arg(long)]
    margin: Option<f32>,

    /// Lossy image quality between 0.0 and 1.0.
    #[arg(long)]
    quality: Option<f32>,

    /// Gap after each placed band, in points.
    #[arg(long)]
    gap: Option<f32>,

    /// Matte colour for transparent pixels, e.g. "#ffffff".
    #[arg(long)]
    background: Option<String>,

    #[arg(long)]
    title: Option<String>,
}

impl Cli {
    fn builder(&self) -> Result<ExportPipelineBuilder, ExportError> {
        let mut builder = ExportPipelineBuilder::new();
        if let Some(path) = &self.config {
            builder = builder.with_config_file(path)?;
        }
        let config = builder.config().clone();
        builder = builder
            .with_page_size(
                self.page_width.unwrap_or(config.page_width_pt),
                self.page_height.unwrap_or(config.page_height_pt),
            )
            .with_margin(self.margin.unwrap_or(config.margin_pt))
            .with_image_quality(self.quality.unwrap_or(config.image_quality))
            .with_gap(self.gap.unwrap_or(config.inter_section_gap_pt));
        if let Some(background) = &self.background {
            let color: Color = background.parse().map_err(ExportError::Config)?;
            builder = builder.with_background(color);
        }
        if let Some(title) = &self.title {
            builder = builder.with_title(title.clone());
        }
        Ok(builder)
    }
}

/// Decodes an image file into a section.
fn load_section(path: &Path) -> Result<Section, BoxError> {
    let image = image::open(path)
        .map_err(|e| format!("Failed to decode '{}': {}", path.display(), e))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(Section::rgba(width, height, image.into_raw())?)
}

#[tokio::main]
async fn main() -> Result<(), ExportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let pipeline = cli.builder()?.build()?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(pipeline.suggested_filename()));

    // Decoding runs on a blocking thread; the channel keeps sections in input order and
    // holds at most one decoded section ahead of layout.
    let (tx, rx) = mpsc::channel::<Result<Section, BoxError>>(1);
    let inputs = cli.inputs.clone();
    let decoder = tokio::task::spawn_blocking(move || {
        for path in &inputs {
            log::info!("Decoding {}", path.display());
            let section = load_section(path);
            let failed = section.is_err();
            if tx.blocking_send(section).is_err() || failed {
                break;
            }
        }
    });

    let start = Instant::now();
    let document = pipeline.export_from(rx, &CancellationToken::new()).await?;
    decoder
        .await
        .map_err(|e| ExportError::Io(std::io::Error::other(e)))?;

    pipeline.write_file(&document, &output)?;
    log::info!(
        "Wrote {} ({} page(s)) in {:.2?}",
        output.display(),
        document.page_count(),
        start.elapsed()
    );
    Ok(())
}
