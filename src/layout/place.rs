use crate::layout::FittedText;
use crate::rect::Rect;
use rand::Rng;

/// Pixel dimensions of the surface being placed onto: the caption strip for
/// the strip modes, the full frame for everything else
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> SurfaceSize {
        SurfaceSize { width, height }
    }
}

impl From<(u32, u32)> for SurfaceSize {
    fn from((width, height): (u32, u32)) -> Self {
        SurfaceSize { width, height }
    }
}

/// How the planner derives coordinates for a fitted block of text
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementMode {
    /// Caption strip above the frame; text vertically centered in the strip.
    /// Coordinates are strip-local.
    Top,
    /// Caption strip below the frame; text near the strip bottom.
    /// Coordinates are strip-local.
    Bottom,
    /// Overlay text near the top of the frame, each line centered
    /// horizontally, stacked downward
    OverlayTop,
    /// Overlay text near the bottom of the frame, each line centered
    /// horizontally, stacked upward from a baseline above the bottom margin
    OverlayBottom,
    /// Uniform-random placement inside `anchor`. One random draw per call:
    /// every line shares it, so multi-line text moves as a block.
    RandomInBox { anchor: Rect },
    /// An externally chosen position (interactive or scripted placement)
    Manual { x: i32, y: i32 },
}

/// One top-left pixel coordinate per fitted line, in reading order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    pub points: Vec<(i32, i32)>,
}

/// Left padding of text inside the caption strip
pub const STRIP_PAD_X: i32 = 10;

/// Distance kept between bottom-positioned strip text and the strip's bottom
/// edge
const STRIP_BOTTOM_INSET: i32 = 25;

/// Compute where each line of `fitted` goes on a surface of the given size.
///
/// `rng` is only consulted by [`PlacementMode::RandomInBox`]; passing a
/// seeded generator makes that mode reproducible.
pub fn place(
    fitted: &FittedText,
    surface: SurfaceSize,
    mode: &PlacementMode,
    rng: &mut impl Rng,
) -> Placement {
    let lh = fitted.line_height.round();
    let text_h = fitted.text_height().round();
    let n = fitted.lines.len() as i32;
    let w = surface.width as i32;
    let h = surface.height as i32;

    let points = match mode {
        PlacementMode::Top => {
            let base_y = (h - text_h) / 2;
            stack_down(STRIP_PAD_X, base_y, lh, n)
        }
        PlacementMode::Bottom => {
            let base_y = h - text_h - STRIP_BOTTOM_INSET;
            stack_down(STRIP_PAD_X, base_y, lh, n)
        }
        PlacementMode::OverlayTop => fitted
            .line_widths
            .iter()
            .enumerate()
            .map(|(i, lw)| ((w - lw.round()) / 2, h / 15 + i as i32 * lh))
            .collect(),
        PlacementMode::OverlayBottom => fitted
            .line_widths
            .iter()
            .enumerate()
            .map(|(i, lw)| ((w - lw.round()) / 2, h - lh * (n - i as i32) - h / 8))
            .collect(),
        PlacementMode::RandomInBox { anchor } => {
            let min_x = anchor.x1.round();
            let min_y = anchor.y1.round();
            let box_w = anchor.width().round();
            let box_h = anchor.height().round();
            // one draw for the whole block
            let ux: f32 = rng.gen();
            let uy: f32 = rng.gen();
            // a line wider (or taller) than the box gives an empty random
            // range; clamp it to the box minimum instead of crashing
            let y_span = (box_h - lh).max(0);
            let base_y = min_y + (uy * y_span as f32) as i32;
            fitted
                .line_widths
                .iter()
                .enumerate()
                .map(|(i, lw)| {
                    let x_span = (box_w - lw.round()).max(0);
                    let x = min_x + (ux * x_span as f32) as i32;
                    (x, base_y + i as i32 * lh)
                })
                .collect()
        }
        PlacementMode::Manual { x, y } => stack_down(*x, *y, lh, n),
    };

    Placement { points }
}

fn stack_down(x: i32, base_y: i32, lh: i32, n: i32) -> Vec<(i32, i32)> {
    (0..n).map(|i| (x, base_y + i * lh)).collect()
}

/// Supplies a position for manually placed text. The interactive terminal
/// preview loop implements this outside the core; [`FixedPosition`] covers
/// scripted use.
pub trait PositionProvider {
    fn next_position(&mut self, fitted: &FittedText, surface: SurfaceSize) -> (i32, i32);
}

/// A [`PositionProvider`] that always answers with the same coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedPosition(pub i32, pub i32);

impl PositionProvider for FixedPosition {
    fn next_position(&mut self, _fitted: &FittedText, _surface: SurfaceSize) -> (i32, i32) {
        (self.0, self.1)
    }
}
