use crate::colour::Colour;
use crate::font::Font;
use crate::layout::{FittedText, Placement};
use crate::style::TextStyle;
use ab_glyph::PxScale;
use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};

/// Fill an axis-aligned region of the frame with a solid colour (used for
/// the caption strip background)
pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, width: u32, height: u32, colour: Colour) {
    let region = imageproc::rect::Rect::at(x, y).of_size(width, height);
    draw_filled_rect_mut(img, region, colour.into());
}

/// Draw a fitted block of text onto the frame, one line per placement point.
///
/// Stroked styles stamp the stroke colour at every offset within the stroke
/// radius before painting the fill on top, which is the raster equivalent of
/// an outlined glyph.
pub fn draw_fitted_text(
    img: &mut RgbaImage,
    fitted: &FittedText,
    placement: &Placement,
    font: &Font,
    style: &TextStyle,
) {
    let scale = PxScale::from(fitted.font_size as f32);

    for (line, &(x, y)) in fitted.lines.iter().zip(placement.points.iter()) {
        if line.is_empty() {
            continue;
        }

        if let Some(stroke) = style.stroke {
            let radius = stroke.width as i32;
            for dx in -radius..=radius {
                for dy in -radius..=radius {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    draw_text_mut(
                        img,
                        stroke.colour.into(),
                        x + dx,
                        y + dy,
                        scale,
                        &font.raster,
                        line,
                    );
                }
            }
        }

        draw_text_mut(img, style.fill.into(), x, y, scale, &font.raster, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn fill_rect_paints_exactly_the_region() {
        let mut img = RgbaImage::from_pixel(10, 10, colours::BLACK.into());
        fill_rect(&mut img, 2, 3, 4, 5, colours::WHITE);

        assert_eq!(img.get_pixel(2, 3), &image::Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(5, 7), &image::Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(1, 3), &image::Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(6, 3), &image::Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(2, 8), &image::Rgba([0, 0, 0, 255]));
    }
}
