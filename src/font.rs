use crate::error::MemeError;
use crate::measure::TextMeasurer;
use crate::units::Px;
use ab_glyph::FontArc;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts. The same bytes are
/// parsed twice: once for metrics (glyph advances, ascender/descender), and
/// once for rasterization onto frames.
///
/// Typically, fonts are referred to throughout user applications by their
/// arena id within [`crate::Assets`], and not by any typed references.
pub struct Font {
    /// Metrics face, used by the fitting search
    pub face: OwnedFace,
    /// Rasterization face, used when drawing text onto a frame
    pub raster: FontArc,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if
    /// the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, MemeError> {
        let raster = FontArc::try_from_vec(bytes.clone())?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Load a font from a file on disk
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, MemeError> {
        Self::load(std::fs::read(path)?)
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: u32) -> f32 {
        size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the
    /// font) for the given font size. Note: this is usually negative
    pub fn descent(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// Calculate the leading (extra space between lines) for the given font
    /// size
    pub fn leading(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().line_gap() as f32)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }
}

impl TextMeasurer for Font {
    /// Sum of the horizontal advances of every glyph in `text`. Characters
    /// without a glyph fall back to the font's replacement glyph.
    fn text_width(&self, text: &str, size: u32) -> Px {
        let scaling = self.scaling(size);
        Px(text
            .chars()
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.replacement_glyph_id()))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum())
    }

    /// The default line height of the font for the given size: how much to
    /// vertically offset a second row of text below a first row of text.
    fn line_height(&self, size: u32) -> Px {
        let scaling = self.scaling(size);
        let leading = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent = scaling * self.face.as_face_ref().ascender() as f32;
        let descent = scaling * self.face.as_face_ref().descender() as f32;
        Px(leading + ascent - descent)
    }
}
