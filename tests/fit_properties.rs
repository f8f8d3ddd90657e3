//! Property-style checks on the fitting search, run against a fixed-advance
//! metrics table so no font files are needed.

use memeforge::layout::{fit, BoxConstraint, WRAP_DEFAULT_MAX_SIZE, WRAP_FLOOR_SIZE};
use memeforge::{Px, TextMeasurer};

/// Every glyph advances 0.55 × size; every line is 1.2 × size tall.
struct MonoMetrics;

impl TextMeasurer for MonoMetrics {
    fn text_width(&self, text: &str, size: u32) -> Px {
        Px(text.chars().count() as f32 * 0.55 * size as f32)
    }

    fn line_height(&self, size: u32) -> Px {
        Px(1.2 * size as f32)
    }
}

#[test]
fn single_line_terminates_and_stays_in_range() {
    for (w, h) in [(1.0_f32, 1.0_f32), (17.0, 3.0), (200.0, 50.0), (4000.0, 9.0)] {
        for cap in [1u32, 5, 25, 200] {
            let bounds = BoxConstraint::new(Px(w), Px(h)).with_max_font_size(cap);
            let fitted = fit("SOME TEXT", &bounds, &MonoMetrics, false).unwrap();
            assert!(fitted.font_size >= 1);
            assert!(fitted.font_size <= cap);
        }
    }
}

#[test]
fn wrapped_terminates_and_stays_on_the_grid() {
    for (w, h) in [(1.0_f32, 1.0_f32), (80.0, 30.0), (640.0, 480.0)] {
        let bounds = BoxConstraint::new(Px(w), Px(h));
        let fitted = fit("caption of moderate length", &bounds, &MonoMetrics, true).unwrap();
        assert!(fitted.font_size >= WRAP_FLOOR_SIZE);
        assert!(fitted.font_size <= WRAP_DEFAULT_MAX_SIZE);
    }
}

#[test]
fn growing_the_box_never_shrinks_the_text() {
    let mut previous = 0u32;
    for h in [10.0_f32, 20.0, 40.0, 80.0, 160.0] {
        let bounds = BoxConstraint::new(Px(500.0), Px(h));
        let fitted = fit("HI", &bounds, &MonoMetrics, false).unwrap();
        assert!(fitted.font_size >= previous, "shrank when height grew to {h}");
        previous = fitted.font_size;
    }
}

#[test]
fn wrapped_block_height_is_bounded_unless_overflowing() {
    let text = lipsum::lipsum(40);
    for (w, h) in [(300.0_f32, 400.0_f32), (150.0, 600.0), (600.0, 100.0)] {
        let bounds = BoxConstraint::new(Px(w), Px(h));
        let fitted = fit(&text, &bounds, &MonoMetrics, true).unwrap();
        if !fitted.overflow {
            assert!(fitted.text_height() <= bounds.height);
            assert!(fitted.max_line_width() <= bounds.width);
        }
    }
}

#[test]
fn very_long_text_in_a_tiny_box_overflows_at_the_floor() {
    let text = lipsum::lipsum(60);
    let bounds = BoxConstraint::new(Px(40.0), Px(15.0));
    let fitted = fit(&text, &bounds, &MonoMetrics, true).unwrap();
    assert!(fitted.overflow);
    assert_eq!(fitted.font_size, WRAP_FLOOR_SIZE);
    assert!(!fitted.lines.is_empty());
}
