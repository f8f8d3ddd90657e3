use crate::error::MemeError;
use crate::measure::TextMeasurer;
use crate::style::TextRole;
use crate::units::Px;
use tracing::{debug, warn};

/// A single piece of text to be fitted and drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpec {
    pub content: String,
    pub role: TextRole,
    /// Whether the fitter may break the text into multiple lines
    pub requires_wrap: bool,
}

impl TextSpec {
    pub fn caption(content: impl Into<String>, requires_wrap: bool) -> TextSpec {
        TextSpec {
            content: content.into(),
            role: TextRole::Caption,
            requires_wrap,
        }
    }

    pub fn watermark(content: impl Into<String>) -> TextSpec {
        TextSpec {
            content: content.into(),
            role: TextRole::Watermark,
            requires_wrap: false,
        }
    }
}

/// The box a piece of text must be fitted into
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxConstraint {
    pub width: Px,
    pub height: Px,
    /// Upper bound on the font-size search, if any
    pub max_font_size: Option<u32>,
}

impl BoxConstraint {
    pub fn new(width: Px, height: Px) -> BoxConstraint {
        BoxConstraint {
            width,
            height,
            max_font_size: None,
        }
    }

    pub fn with_max_font_size(self, max_font_size: u32) -> BoxConstraint {
        BoxConstraint {
            max_font_size: Some(max_font_size),
            ..self
        }
    }

    fn validate(&self) -> Result<(), MemeError> {
        if self.width.0 <= 0.0 || self.height.0 <= 0.0 || self.max_font_size == Some(0) {
            return Err(MemeError::InvalidConstraint {
                width: self.width.0,
                height: self.height.0,
                max_font_size: self.max_font_size,
            });
        }
        Ok(())
    }
}

/// The outcome of the fitting search: a font size and the lines to draw at
/// that size, with their measured extents
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub font_size: u32,
    /// At least one line, in reading order. Single-line fits hold exactly one.
    pub lines: Vec<String>,
    /// Baseline-to-baseline distance at `font_size`
    pub line_height: Px,
    /// Measured width of each line, same order and length as `lines`
    pub line_widths: Vec<Px>,
    /// True when even the smallest allowed font size could not fit the box;
    /// the text will overflow, but rendering proceeds
    pub overflow: bool,
}

impl FittedText {
    /// Total height of the block: line height times line count
    pub fn text_height(&self) -> Px {
        self.line_height * self.lines.len() as f32
    }

    /// Width of the widest line
    pub fn max_line_width(&self) -> Px {
        self.line_widths
            .iter()
            .copied()
            .fold(Px(0.0), |acc, w| if w > acc { w } else { acc })
    }
}

/// Empirical character-aspect-ratio constant used by the wrapping search:
/// the character budget of a line is `box_width / (font_size * 0.35)`. This
/// approximates the average advance of a glyph as 0.35 times the font size;
/// it is not derived from real glyph metrics, which is why wrapped lines are
/// re-measured before a candidate size is accepted.
pub const WRAP_CHAR_ASPECT: f32 = 0.35;

/// Smallest candidate size the wrapping search will try
pub const WRAP_FLOOR_SIZE: u32 = 10;

/// Default upper bound of the wrapping search when the constraint has none
pub const WRAP_DEFAULT_MAX_SIZE: u32 = 100;

/// Step between candidate sizes in the wrapping search
const WRAP_SIZE_STEP: u32 = 10;

/// Hard ceiling on the single-line growth search, guarding against metric
/// backends whose extents never reach the box bounds
const GROWTH_CEILING: u32 = 4096;

/// Find the largest font size at which `text` fits inside `bounds`.
///
/// With `wrap == false` this is a growth search: sizes are tried upward from
/// 1 and the last size whose single-line extent fits strictly inside the box
/// wins. With `wrap == true` this is a shrink search: candidate sizes step
/// down from the constraint's maximum (default 100) to a floor of 10, the
/// text is wrapped to a per-size character budget, and the first candidate
/// whose wrapped lines fit wins.
///
/// Neither search fails on unfittable text: the best-effort result is
/// returned with [`FittedText::overflow`] set, and a warning is logged.
/// Only an invalid constraint is an error.
pub fn fit(
    text: &str,
    bounds: &BoxConstraint,
    measurer: &impl TextMeasurer,
    wrap: bool,
) -> Result<FittedText, MemeError> {
    bounds.validate()?;
    if wrap {
        Ok(fit_wrapped(text, bounds, measurer))
    } else {
        Ok(fit_single_line(text, bounds, measurer))
    }
}

/// Fit a [`TextSpec`], wrapping if the spec asks for it
pub fn fit_spec(
    spec: &TextSpec,
    bounds: &BoxConstraint,
    measurer: &impl TextMeasurer,
) -> Result<FittedText, MemeError> {
    fit(&spec.content, bounds, measurer, spec.requires_wrap)
}

fn single_line_at(text: &str, size: u32, measurer: &impl TextMeasurer, overflow: bool) -> FittedText {
    let (width, height) = measurer.text_size(text, size);
    FittedText {
        font_size: size,
        lines: vec![text.to_string()],
        line_height: height,
        line_widths: vec![width],
        overflow,
    }
}

fn fit_single_line(text: &str, bounds: &BoxConstraint, measurer: &impl TextMeasurer) -> FittedText {
    let cap = bounds.max_font_size.unwrap_or(GROWTH_CEILING).min(GROWTH_CEILING);

    let fits = |size: u32| {
        let (w, h) = measurer.text_size(text, size);
        w < bounds.width && h < bounds.height
    };

    if !fits(1) {
        warn!(
            width = bounds.width.0,
            height = bounds.height.0,
            "text does not fit its box even at the smallest font size"
        );
        return single_line_at(text, 1, measurer, true);
    }

    let mut size = 1u32;
    while size < cap && fits(size + 1) {
        size += 1;
    }

    debug!(size, "single-line growth search settled");
    single_line_at(text, size, measurer, false)
}

fn wrapped_at(text: &str, size: u32, bounds: &BoxConstraint, measurer: &impl TextMeasurer) -> FittedText {
    let columns = (bounds.width.0 / (size as f32 * WRAP_CHAR_ASPECT)).max(1.0) as usize;
    let lines = wrap_to_columns(text, columns);
    let line_widths = lines
        .iter()
        .map(|line| measurer.text_width(line, size))
        .collect();
    FittedText {
        font_size: size,
        lines,
        line_height: measurer.line_height(size),
        line_widths,
        overflow: false,
    }
}

fn fit_wrapped(text: &str, bounds: &BoxConstraint, measurer: &impl TextMeasurer) -> FittedText {
    let max = bounds.max_font_size.unwrap_or(WRAP_DEFAULT_MAX_SIZE);
    let floor = WRAP_FLOOR_SIZE.min(max);

    let mut size = max;
    loop {
        let candidate = wrapped_at(text, size, bounds, measurer);
        if candidate.max_line_width() <= bounds.width && candidate.text_height() <= bounds.height {
            debug!(size, lines = candidate.lines.len(), "wrapped shrink search settled");
            return candidate;
        }
        if size == floor {
            warn!(
                floor,
                width = bounds.width.0,
                height = bounds.height.0,
                "wrapped text does not fit its box even at the floor font size"
            );
            return FittedText {
                overflow: true,
                ..candidate
            };
        }
        size = size.saturating_sub(WRAP_SIZE_STEP).max(floor);
    }
}

/// Greedy word wrap to a fixed character budget per line. Words longer than
/// the budget are hard-split at the budget boundary. Always returns at least
/// one line (possibly empty).
fn wrap_to_columns(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        // a word that can never fit on one line is split at the budget
        while chars.len() > columns {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..columns).collect());
        }

        if chars.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            chars.len()
        } else {
            current_len + 1 + chars.len()
        };
        if needed > columns && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars.iter());
        current_len += chars.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fixed-advance metrics table: every glyph advances by
    /// `advance * size`, every line is `height * size` tall.
    struct FixedMetrics {
        advance: f32,
        height: f32,
    }

    impl FixedMetrics {
        fn arial_ish() -> FixedMetrics {
            FixedMetrics {
                advance: 0.6,
                height: 1.0,
            }
        }
    }

    impl TextMeasurer for FixedMetrics {
        fn text_width(&self, text: &str, size: u32) -> Px {
            Px(text.chars().count() as f32 * self.advance * size as f32)
        }

        fn line_height(&self, size: u32) -> Px {
            Px(self.height * size as f32)
        }
    }

    #[test]
    fn growth_search_returns_last_fitting_size() {
        // "OK" in a 400x100 box: width fits while 1.2*size < 400, height
        // while size < 100, so 99 is the last size that satisfies both
        let bounds = BoxConstraint::new(Px(400.0), Px(100.0));
        let fitted = fit("OK", &bounds, &FixedMetrics::arial_ish(), false).unwrap();
        assert_eq!(fitted.font_size, 99);
        assert!(!fitted.overflow);
        assert_eq!(fitted.lines, vec!["OK".to_string()]);
        assert!(fitted.line_widths[0] < bounds.width);
    }

    #[test]
    fn growth_search_respects_cap() {
        let bounds = BoxConstraint::new(Px(400.0), Px(100.0)).with_max_font_size(25);
        let fitted = fit("OK", &bounds, &FixedMetrics::arial_ish(), false).unwrap();
        assert_eq!(fitted.font_size, 25);
        assert!(!fitted.overflow);
    }

    #[test]
    fn growth_search_overflows_at_size_one() {
        let bounds = BoxConstraint::new(Px(5.0), Px(5.0));
        let metrics = FixedMetrics {
            advance: 10.0,
            height: 1.0,
        };
        let fitted = fit("WIDE", &bounds, &metrics, false).unwrap();
        assert_eq!(fitted.font_size, 1);
        assert!(fitted.overflow);
    }

    #[test]
    fn growth_search_is_monotone_in_box_size() {
        let metrics = FixedMetrics::arial_ish();
        let mut previous = 0u32;
        for width in [50.0_f32, 100.0, 200.0, 400.0, 800.0] {
            let bounds = BoxConstraint::new(Px(width), Px(1000.0));
            let fitted = fit("SOME CAPTION", &bounds, &metrics, false).unwrap();
            assert!(fitted.font_size >= previous);
            previous = fitted.font_size;
        }
    }

    #[test]
    fn fit_is_idempotent() {
        let bounds = BoxConstraint::new(Px(321.0), Px(87.0));
        let metrics = FixedMetrics::arial_ish();
        let a = fit("HELLO THERE", &bounds, &metrics, false).unwrap();
        let b = fit("HELLO THERE", &bounds, &metrics, false).unwrap();
        assert_eq!(a, b);

        let a = fit("HELLO THERE", &bounds, &metrics, true).unwrap();
        let b = fit("HELLO THERE", &bounds, &metrics, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_fits_as_a_single_empty_line() {
        let bounds = BoxConstraint::new(Px(100.0), Px(50.0));
        let fitted = fit("", &bounds, &FixedMetrics::arial_ish(), false).unwrap();
        assert_eq!(fitted.lines, vec![String::new()]);
        assert!(!fitted.overflow);
        // width never binds; height does: last size with size < 50
        assert_eq!(fitted.font_size, 49);

        let fitted = fit("", &bounds, &FixedMetrics::arial_ish(), true).unwrap();
        assert_eq!(fitted.lines, vec![String::new()]);
        assert!(!fitted.overflow);
    }

    #[test]
    fn invalid_constraints_fail_fast() {
        let metrics = FixedMetrics::arial_ish();
        assert!(matches!(
            fit("X", &BoxConstraint::new(Px(0.0), Px(10.0)), &metrics, false),
            Err(MemeError::InvalidConstraint { .. })
        ));
        assert!(matches!(
            fit("X", &BoxConstraint::new(Px(10.0), Px(-3.0)), &metrics, true),
            Err(MemeError::InvalidConstraint { .. })
        ));
        assert!(matches!(
            fit(
                "X",
                &BoxConstraint::new(Px(10.0), Px(10.0)).with_max_font_size(0),
                &metrics,
                false
            ),
            Err(MemeError::InvalidConstraint { .. })
        ));
    }

    #[test]
    fn wrapped_search_stays_on_candidate_grid() {
        let bounds = BoxConstraint::new(Px(300.0), Px(200.0));
        let fitted = fit(
            "A CAPTION THAT NEEDS A FEW LINES TO FIT",
            &bounds,
            &FixedMetrics::arial_ish(),
            true,
        )
        .unwrap();
        assert!(fitted.font_size >= WRAP_FLOOR_SIZE);
        assert!(fitted.font_size <= WRAP_DEFAULT_MAX_SIZE);
        assert_eq!(fitted.font_size % 10, 0);
    }

    #[test]
    fn wrapped_lines_respect_the_box_when_not_overflowing() {
        let bounds = BoxConstraint::new(Px(300.0), Px(200.0));
        let fitted = fit(
            "A CAPTION THAT NEEDS A FEW LINES TO FIT",
            &bounds,
            &FixedMetrics::arial_ish(),
            true,
        )
        .unwrap();
        assert!(!fitted.overflow);
        assert!(fitted.max_line_width() <= bounds.width);
        assert!(fitted.text_height() <= bounds.height);
        assert_eq!(fitted.lines.len(), fitted.line_widths.len());
    }

    #[test]
    fn wrapped_search_overflows_at_the_floor() {
        let bounds = BoxConstraint::new(Px(100.0), Px(20.0));
        let fitted = fit(
            "A very very long caption that cannot possibly fit",
            &bounds,
            &FixedMetrics::arial_ish(),
            true,
        )
        .unwrap();
        assert!(fitted.overflow);
        assert_eq!(fitted.font_size, WRAP_FLOOR_SIZE);
        assert!(fitted.lines.len() > 1);
    }

    #[test]
    fn wrapped_floor_is_tried_even_when_the_step_skips_it() {
        // cap of 25 gives candidates 25, 15, then the floor itself
        let bounds = BoxConstraint::new(Px(10.0), Px(10.0)).with_max_font_size(25);
        let metrics = FixedMetrics {
            advance: 5.0,
            height: 5.0,
        };
        let fitted = fit("UNFITTABLE", &bounds, &metrics, true).unwrap();
        assert!(fitted.overflow);
        assert_eq!(fitted.font_size, WRAP_FLOOR_SIZE);
    }

    #[test]
    fn wrap_budget_follows_the_aspect_constant() {
        // box 350 wide at size 100: budget = 350 / (100 * 0.35) = 10 chars
        let bounds = BoxConstraint::new(Px(350.0), Px(10_000.0)).with_max_font_size(100);
        let metrics = FixedMetrics {
            advance: 0.01,
            height: 0.01,
        };
        let fitted = fit("AAAA AAAA AAAA", &bounds, &metrics, true).unwrap();
        assert_eq!(fitted.font_size, 100);
        // 10-character budget packs two 4-char words per line
        assert_eq!(fitted.lines, vec!["AAAA AAAA".to_string(), "AAAA".to_string()]);
    }

    #[test]
    fn wrap_splits_words_longer_than_the_budget() {
        assert_eq!(
            wrap_to_columns("ABCDEFGHIJ", 4),
            vec!["ABCD", "EFGH", "IJ"]
        );
        assert_eq!(wrap_to_columns("", 10), vec![String::new()]);
        assert_eq!(
            wrap_to_columns("AB CD EF", 5),
            vec!["AB CD", "EF"]
        );
    }
}
