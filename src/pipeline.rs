use crate::assets::Assets;
use crate::colour::colours;
use crate::error::MemeError;
use crate::font::Font;
use crate::layout::{
    fit_spec, place, BoxConstraint, FittedText, PlacementMode, SurfaceSize, TextSpec,
};
use crate::rect::Rect;
use crate::render::draw_fitted_text;
use crate::style::TextStyle;
use crate::units::Px;
use id_arena::Id;
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{imageops, AnimationDecoder, Frame, RgbaImage};
use rand::Rng;
use std::io::{BufRead, Seek, Write};
use tracing::debug;

/// Which of the two meme families to produce
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MemeKind {
    /// Caption on a white strip appended above or below the frame
    CaptionStrip,
    /// Caption drawn over the frame itself, white with a black outline
    Overlay,
}

/// Whether the caption goes at the top or the bottom
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VerticalPosition {
    Top,
    Bottom,
}

/// Where the watermark line goes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WatermarkPlacement {
    /// The corner opposite the caption, 10 px in from the edges
    Corner,
    /// Uniform-random inside a box covering the central half of the frame
    RandomInBox,
    /// Externally supplied coordinates (interactive placement)
    Manual { x: i32, y: i32 },
}

/// Everything that stays constant across the frames of one job. Built once
/// per run; each frame is rendered independently from the same recipe.
pub struct MemeRecipe {
    pub caption: String,
    pub watermark: String,
    pub kind: MemeKind,
    pub position: VerticalPosition,
    pub watermark_placement: WatermarkPlacement,
    pub font: Id<Font>,
}

/// Caption strip height as a share of the frame height
const STRIP_RATIO: f32 = 0.15;

/// Padding between text and the frame edges
const EDGE_PAD: i32 = 10;

/// Horizontal margin reserved when fitting text against the frame width
const FIT_MARGIN: f32 = 20.0;

/// Watermark text never grows past this size
const WATERMARK_MAX_SIZE: u32 = 10;

/// Apply the recipe to a single frame, producing the finished frame.
///
/// Caption-strip memes grow the frame by the strip height; overlay memes
/// keep the frame size. Either way the input frame is not modified.
pub fn process_frame(
    frame: &RgbaImage,
    recipe: &MemeRecipe,
    assets: &Assets,
    rng: &mut impl Rng,
) -> Result<RgbaImage, MemeError> {
    match recipe.kind {
        MemeKind::CaptionStrip => caption_strip_frame(frame, recipe, assets, rng),
        MemeKind::Overlay => overlay_frame(frame, recipe, assets, rng),
    }
}

fn caption_strip_frame(
    frame: &RgbaImage,
    recipe: &MemeRecipe,
    assets: &Assets,
    rng: &mut impl Rng,
) -> Result<RgbaImage, MemeError> {
    let (w, h) = frame.dimensions();
    let strip_h = (h as f32 * STRIP_RATIO) as u32;
    let font = &assets.fonts[recipe.font];

    let spec = TextSpec::caption(recipe.caption.clone(), false);
    let bounds = BoxConstraint::new(Px(w as f32 - FIT_MARGIN), Px(strip_h as f32));
    let fitted = fit_spec(&spec, &bounds, font)?;
    debug!(size = fitted.font_size, "fitted caption for strip");

    let strip_mode = match recipe.position {
        VerticalPosition::Top => PlacementMode::Top,
        VerticalPosition::Bottom => PlacementMode::Bottom,
    };
    let placement = place(&fitted, SurfaceSize::new(w, strip_h), &strip_mode, rng);

    let mut strip = RgbaImage::from_pixel(w, strip_h, colours::WHITE.into());
    draw_fitted_text(&mut strip, &fitted, &placement, font, &TextStyle::caption_strip());

    let mut out = RgbaImage::new(w, h + strip_h);
    match recipe.position {
        VerticalPosition::Top => {
            imageops::replace(&mut out, &strip, 0, 0);
            imageops::replace(&mut out, frame, 0, strip_h as i64);
        }
        VerticalPosition::Bottom => {
            imageops::replace(&mut out, frame, 0, 0);
            imageops::replace(&mut out, &strip, 0, h as i64);
        }
    }

    // watermark goes on the composite, in the corner the caption left free
    let wm = fit_watermark(&recipe.watermark, w, h, font)?;
    let surface = SurfaceSize::new(w, h + strip_h);
    let corner = match recipe.position {
        VerticalPosition::Top => PlacementMode::Manual {
            x: EDGE_PAD,
            y: surface.height as i32 - wm.text_height().round() - EDGE_PAD,
        },
        VerticalPosition::Bottom => PlacementMode::Manual {
            x: EDGE_PAD,
            y: EDGE_PAD,
        },
    };
    let wm_mode = watermark_mode(recipe, surface, corner);
    let wm_placement = place(&wm, surface, &wm_mode, rng);
    draw_fitted_text(&mut out, &wm, &wm_placement, font, &TextStyle::strip_watermark());

    Ok(out)
}

fn overlay_frame(
    frame: &RgbaImage,
    recipe: &MemeRecipe,
    assets: &Assets,
    rng: &mut impl Rng,
) -> Result<RgbaImage, MemeError> {
    let (w, h) = frame.dimensions();
    let font = &assets.fonts[recipe.font];
    let mut out = frame.clone();

    let spec = TextSpec::caption(recipe.caption.clone(), true);
    let bounds = BoxConstraint::new(Px(w as f32 / 1.25), Px(h as f32 / 2.0));
    let fitted = fit_spec(&spec, &bounds, font)?;
    debug!(
        size = fitted.font_size,
        lines = fitted.lines.len(),
        "fitted overlay caption"
    );

    let mode = match recipe.position {
        VerticalPosition::Top => PlacementMode::OverlayTop,
        VerticalPosition::Bottom => PlacementMode::OverlayBottom,
    };
    let surface = SurfaceSize::new(w, h);
    let placement = place(&fitted, surface, &mode, rng);
    draw_fitted_text(&mut out, &fitted, &placement, font, &TextStyle::overlay());

    let wm = fit_watermark(&recipe.watermark, w, h, font)?;
    let corner = PlacementMode::Manual {
        x: EDGE_PAD,
        y: h as i32 - wm.text_height().round() - EDGE_PAD,
    };
    let wm_mode = watermark_mode(recipe, surface, corner);
    let wm_placement = place(&wm, surface, &wm_mode, rng);
    draw_fitted_text(&mut out, &wm, &wm_placement, font, &TextStyle::overlay());

    Ok(out)
}

fn fit_watermark(
    text: &str,
    frame_w: u32,
    frame_h: u32,
    font: &Font,
) -> Result<FittedText, MemeError> {
    let spec = TextSpec::watermark(text);
    let bounds = BoxConstraint::new(Px(frame_w as f32 - FIT_MARGIN), Px(frame_h as f32 / 8.0))
        .with_max_font_size(WATERMARK_MAX_SIZE);
    fit_spec(&spec, &bounds, font)
}

fn watermark_mode(
    recipe: &MemeRecipe,
    surface: SurfaceSize,
    corner: PlacementMode,
) -> PlacementMode {
    match recipe.watermark_placement {
        WatermarkPlacement::Corner => corner,
        WatermarkPlacement::RandomInBox => {
            // central half of the surface
            PlacementMode::RandomInBox {
                anchor: Rect::centered_at(
                    Px(surface.width as f32 / 2.0),
                    Px(surface.height as f32 / 2.0),
                    Px(surface.width as f32 / 2.0),
                    Px(surface.height as f32 / 2.0),
                ),
            }
        }
        WatermarkPlacement::Manual { x, y } => PlacementMode::Manual { x, y },
    }
}

/// Apply the recipe to every frame of an animated GIF, re-encoding the
/// result in input order with the original frame delays.
pub fn process_gif(
    input: impl BufRead + Seek,
    output: impl Write,
    recipe: &MemeRecipe,
    assets: &Assets,
    rng: &mut impl Rng,
) -> Result<(), MemeError> {
    let decoder = GifDecoder::new(input)?;
    let frames = decoder.into_frames().collect_frames()?;
    debug!(frames = frames.len(), "decoded gif");

    let mut encoder = GifEncoder::new(output);
    encoder.set_repeat(Repeat::Infinite)?;
    for frame in frames {
        let delay = frame.delay();
        let rendered = process_frame(frame.buffer(), recipe, assets, rng)?;
        encoder.encode_frame(Frame::from_parts(rendered, 0, 0, delay))?;
    }

    Ok(())
}
