use crate::units::Px;

/// The measurement seam between the fitting search and the font backend.
///
/// Implementations must be deterministic per `(text, size)` pair: the fitter
/// calls these repeatedly during its search and relies on identical inputs
/// producing identical extents. [`crate::Font`] implements this with real
/// glyph metrics; tests substitute fixed-advance tables.
pub trait TextMeasurer {
    /// Advance width of `text` laid out on a single line at `size` pixels
    fn text_width(&self, text: &str, size: u32) -> Px;

    /// Vertical distance between successive baselines at `size` pixels
    fn line_height(&self, size: u32) -> Px;

    /// Width and height of `text` rendered on a single line
    fn text_size(&self, text: &str, size: u32) -> (Px, Px) {
        (self.text_width(text, size), self.line_height(size))
    }
}
