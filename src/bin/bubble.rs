use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bubble", version, about = "Render an image into a speech-bubble shape")]
struct Cli {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Shape config JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pointer side.
    #[arg(long, value_enum)]
    orientation: Option<OrientationChoice>,

    /// Corner radius in pixels.
    #[arg(long)]
    radius: Option<f64>,

    /// Distance from the pointer tip to the body.
    #[arg(long)]
    vertex_x: Option<f64>,

    /// Vertical position of the pointer tip.
    #[arg(long)]
    vertex_y: Option<f64>,

    /// Base width of the pointer.
    #[arg(long)]
    hemline: Option<f64>,

    /// Upper bound for the dominant axis.
    #[arg(long)]
    max_dim: Option<f64>,

    /// Lower bound for the dominant axis.
    #[arg(long)]
    min_dim: Option<f64>,

    /// Log debug diagnostics to stderr.
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationChoice {
    Left,
    Right,
}

impl From<OrientationChoice> for bubble_image::Orientation {
    fn from(choice: OrientationChoice) -> Self {
        match choice {
            OrientationChoice::Left => Self::Left,
            OrientationChoice::Right => Self::Right,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;

    let source = image::open(&cli.in_path)
        .with_context(|| format!("decode image '{}'", cli.in_path.display()))?;
    let bubble = bubble_image::composite(&source, &config)?;

    write_png(&cli.out, &bubble)?;
    eprintln!(
        "wrote {} ({}x{})",
        cli.out.display(),
        bubble.width(),
        bubble.height()
    );
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<bubble_image::ShapeConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config_json(path)?,
        None => bubble_image::ShapeConfig::default(),
    };

    if let Some(o) = cli.orientation {
        config.orientation = o.into();
    }
    if let Some(v) = cli.radius {
        config.radius = v;
    }
    if let Some(v) = cli.vertex_x {
        config.vertex_x = v;
    }
    if let Some(v) = cli.vertex_y {
        config.vertex_y = v;
    }
    if let Some(v) = cli.hemline {
        config.hemline_length = v;
    }
    if let Some(v) = cli.max_dim {
        config.max_dimension = v;
    }
    if let Some(v) = cli.min_dim {
        config.min_dimension = v;
    }

    config.validate()?;
    Ok(config)
}

fn read_config_json(path: &Path) -> anyhow::Result<bubble_image::ShapeConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read shape config '{}'", path.display()))?;
    let config = bubble_image::ShapeConfig::from_json_str(&json)
        .with_context(|| format!("parse shape config '{}'", path.display()))?;
    Ok(config)
}

fn write_png(path: &Path, bubble: &image::RgbaImage) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    bubble
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
