use anyhow::{bail, Context};
use clap::Parser;
use shapeview_rs::shapeview_canvas::CanvasColor;
use shapeview_rs::{
    load_bitmap_file, BackendCapabilities, ScaleType, ShapeConfig, ShapedImageView,
};
use std::path::PathBuf;

/// shapeview: Render an image clipped to a circle or rounded rectangle, with an optional border
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to input PNG or JPEG image
    #[clap(short, long)]
    pub input: PathBuf,

    /// Path to output PNG file to be created
    #[clap(short, long)]
    pub output: PathBuf,

    /// Output width in pixels. Defaults to the image width
    #[clap(long)]
    pub width: Option<u32>,

    /// Output height in pixels. Defaults to the image height
    #[clap(long)]
    pub height: Option<u32>,

    /// JSON file with shape attributes. Command line flags override it
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Clip to a circle
    #[clap(long)]
    pub circular: bool,

    /// Radius for all four corners
    #[clap(long)]
    pub corner_radius: Option<f32>,

    #[clap(long)]
    pub top_left_radius: Option<f32>,

    #[clap(long)]
    pub top_right_radius: Option<f32>,

    #[clap(long)]
    pub bottom_right_radius: Option<f32>,

    #[clap(long)]
    pub bottom_left_radius: Option<f32>,

    /// Border stroke width in pixels
    #[clap(long)]
    pub border_width: Option<f32>,

    /// Border color as a CSS color string
    #[clap(long)]
    pub border_color: Option<String>,

    /// Draw the border over full-size content instead of shrinking the content
    #[clap(long)]
    pub border_overlap: bool,

    /// How the image is fitted: fit-xy, fit-center, center-crop or center
    #[clap(long, default_value = "fit-center")]
    pub scale_type: ScaleType,

    /// Mask by compositing instead of path difference
    #[clap(long)]
    pub legacy_masking: bool,

    /// Pixels per inch written to the PNG metadata
    #[clap(long, default_value_t = 72.0)]
    pub ppi: f32,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[clap(short, long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = build_config(&args)?;

    let bitmap = load_bitmap_file(&args.input)
        .with_context(|| format!("Failed to read input image: {}", args.input.display()))?
        .with_scale_type(args.scale_type);

    let width = args.width.unwrap_or(bitmap.width());
    let height = args.height.unwrap_or(bitmap.height());
    if width == 0 || height == 0 {
        bail!("Output size must be positive, got {}x{}", width, height);
    }

    let capabilities = if args.legacy_masking {
        BackendCapabilities::legacy()
    } else {
        BackendCapabilities::default()
    };

    log::info!("rendering {}x{} with {:?}", width, height, config);
    let mut view = ShapedImageView::new(config, capabilities)
        .with_drawable(bitmap)
        .with_size(width, height);
    let canvas = view.render().context("Failed to render image")?;
    let png = canvas
        .to_png(Some(args.ppi))
        .context("Failed to encode PNG")?;

    std::fs::write(&args.output, png)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<ShapeConfig> {
    let mut config = match &args.config {
        Some(path) => ShapeConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => ShapeConfig::default(),
    };

    if args.circular {
        config.circular = true;
    }
    if let Some(r) = args.corner_radius {
        config.corner_radius = r;
    }
    if let Some(r) = args.top_left_radius {
        config.top_left_radius = r;
    }
    if let Some(r) = args.top_right_radius {
        config.top_right_radius = r;
    }
    if let Some(r) = args.bottom_right_radius {
        config.bottom_right_radius = r;
    }
    if let Some(r) = args.bottom_left_radius {
        config.bottom_left_radius = r;
    }
    if let Some(b) = args.border_width {
        config.border_width = b;
    }
    if let Some(color) = &args.border_color {
        config.border_color = color
            .parse::<CanvasColor>()
            .with_context(|| format!("Invalid border color: {}", color))?;
    }
    if args.border_overlap {
        config.border_overlaps_content = true;
    }
    Ok(config)
}
