use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum MemeError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font for metrics
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] failed to parse the font for rasterization
    Raster(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to decode or encode a frame
    Image(#[from] image::ImageError),

    /// The caller supplied a box that no text can be fitted into: a
    /// non-positive dimension, or a maximum font size of zero
    #[error("invalid box constraint: {width}x{height} px (max font size {max_font_size:?})")]
    InvalidConstraint {
        width: f32,
        height: f32,
        max_font_size: Option<u32>,
    },
}
