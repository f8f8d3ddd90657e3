use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use memeforge::{
    process_frame, process_gif, Assets, Font, MemeKind, MemeRecipe, VerticalPosition,
    WatermarkPlacement,
};

#[derive(Parser, Debug)]
#[command(
    name = "memeforge",
    version,
    about = "Overlay caption and watermark text onto an image or GIF"
)]
struct Cli {
    /// Input image (png/jpg/bmp) or animated gif
    input: PathBuf,

    /// Caption for the image
    caption: String,

    /// Watermark for the image
    watermark: String,

    /// Type of meme to generate
    #[arg(long = "meme-type", value_enum, default_value = "caption")]
    meme_type: MemeType,

    /// Position of the caption text
    #[arg(long = "text-position", value_enum, default_value = "top")]
    text_position: TextPosition,

    /// TTF/OTF font file to render with
    #[arg(short, long)]
    font: PathBuf,

    /// Output path (defaults to <stem>_meme.<ext> beside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Place the watermark at a random position instead of the corner
    #[arg(long)]
    random_watermark: bool,

    /// Seed for --random-watermark; the same seed reproduces the same
    /// placement
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed watermark position as X,Y (overrides corner and random
    /// placement)
    #[arg(long, value_parser = parse_point)]
    at: Option<(i32, i32)>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum MemeType {
    Caption,
    Overlay,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum TextPosition {
    Top,
    Bottom,
}

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    input.with_file_name(format!("{stem}_meme.{ext}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_target(false)
            .try_init();
    }

    let font = Font::load_from_disk(&cli.font)
        .with_context(|| format!("loading font {}", cli.font.display()))?;
    let mut assets = Assets::default();
    let font = assets.add_font(font);

    let watermark_placement = if let Some((x, y)) = cli.at {
        WatermarkPlacement::Manual { x, y }
    } else if cli.random_watermark {
        WatermarkPlacement::RandomInBox
    } else {
        WatermarkPlacement::Corner
    };

    let recipe = MemeRecipe {
        caption: cli.caption.clone(),
        watermark: cli.watermark.clone(),
        kind: match cli.meme_type {
            MemeType::Caption => MemeKind::CaptionStrip,
            MemeType::Overlay => MemeKind::Overlay,
        },
        position: match cli.text_position {
            TextPosition::Top => VerticalPosition::Top,
            TextPosition::Bottom => VerticalPosition::Bottom,
        },
        watermark_placement,
        font,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let output = cli.output.clone().unwrap_or_else(|| default_output(&cli.input));
    let ext = cli
        .input
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "gif" => {
            let input = BufReader::new(
                File::open(&cli.input)
                    .with_context(|| format!("opening {}", cli.input.display()))?,
            );
            let out = BufWriter::new(
                File::create(&output)
                    .with_context(|| format!("creating {}", output.display()))?,
            );
            process_gif(input, out, &recipe, &assets, &mut rng)?;
        }
        "png" | "jpg" | "jpeg" | "bmp" => {
            let img = image::open(&cli.input)
                .with_context(|| format!("opening {}", cli.input.display()))?
                .to_rgba8();
            let rendered = process_frame(&img, &recipe, &assets, &mut rng)?;
            match ext.as_str() {
                // these containers have no alpha channel
                "jpg" | "jpeg" | "bmp" => {
                    image::DynamicImage::ImageRgba8(rendered).to_rgb8().save(&output)?
                }
                _ => rendered.save(&output)?,
            }
        }
        other => bail!("unsupported input format: {other:?}"),
    }

    info!(output = %output.display(), "saved");
    println!("saved {}", output.display());
    Ok(())
}
