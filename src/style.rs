use crate::colour::{colours, Colour};

/// What a piece of text is for. Captions carry the main message; watermarks
/// are the small attribution line in a corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextRole {
    Caption,
    Watermark,
}

/// An outline drawn around each glyph before the fill is applied
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub colour: Colour,
    /// Outline radius in pixels
    pub width: u32,
}

/// How a block of text is painted. Stroke widths and colours are data here so
/// the renderer never hardcodes them per placement mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub fill: Colour,
    pub stroke: Option<Stroke>,
}

impl TextStyle {
    /// Solid fill, no outline
    pub fn filled(fill: Colour) -> TextStyle {
        TextStyle { fill, stroke: None }
    }

    /// Fill with an outline of the given colour and radius
    pub fn stroked(fill: Colour, stroke: Colour, width: u32) -> TextStyle {
        TextStyle {
            fill,
            stroke: Some(Stroke {
                colour: stroke,
                width,
            }),
        }
    }

    /// Black text on the white caption strip
    pub fn caption_strip() -> TextStyle {
        TextStyle::filled(colours::BLACK)
    }

    /// White watermark text on the caption-strip composite
    pub fn strip_watermark() -> TextStyle {
        TextStyle::filled(colours::WHITE)
    }

    /// White text with a black outline, drawn over the frame itself
    pub fn overlay() -> TextStyle {
        TextStyle::stroked(colours::WHITE, colours::BLACK, 2)
    }
}
