//! Canvas sizing from word metrics alone.
//!
//! Placing words is the expensive part of a layout, and every round that ends with a
//! word that doesn't fit costs a full replay. Before the first round, the canvas is
//! grown until it passes a few cheap necessary conditions:
//!
//! 1. the widest and the tallest word each fit,
//! 2. the combined area of all words fits,
//! 3. words wider than half the canvas fit when stacked on top of each other, and
//!    words taller than half the canvas fit when stacked side by side.
//!
//! None of these guarantee the words can actually be placed; they only skip the
//! rounds that could never have succeeded.

use crate::strategy::{grow_checked, GrowthStrategy};
use crate::{MetricsCache, Pt, Size, StyledWord, TextMetrics, WordCloudError};

/// Lower bounds on the canvas that hold regardless of its size
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct WordStats {
    /// Width of the widest word
    pub min_width: Pt,
    /// Height of the tallest word
    pub min_height: Pt,
    /// Sum of every word's width times height
    pub min_area: f32,
}

pub fn word_stats<M: TextMetrics>(
    words: &[StyledWord],
    metrics: &mut MetricsCache<M>,
) -> Result<WordStats, WordCloudError> {
    let mut stats = WordStats::default();
    for word in words {
        let size = metrics.measure(&word.word, &word.font, word.font_size)?;
        stats.min_width = stats.min_width.max(size.width);
        stats.min_height = stats.min_height.max(size.height);
        stats.min_area += size.area();
    }
    Ok(stats)
}

/// Two words that are each wider than half the canvas can never sit side by side, so
/// their heights add up; the same goes for the widths of words taller than half the
/// canvas. Unlike [word_stats], the result depends on the canvas size.
pub fn stacked_min_dimensions<M: TextMetrics>(
    words: &[StyledWord],
    metrics: &mut MetricsCache<M>,
    canvas: Size,
) -> Result<Size, WordCloudError> {
    let mut stacked = Size::default();
    for word in words {
        let size = metrics.measure(&word.word, &word.font, word.font_size)?;
        if size.width > canvas.width / 2.0 {
            stacked.height += size.height;
        }
        if size.height > canvas.height / 2.0 {
            stacked.width += size.width;
        }
    }
    Ok(stacked)
}

/// Grow `start` until the words pass every cheap fit check
pub fn preflight_grow<M: TextMetrics, G: GrowthStrategy + ?Sized>(
    words: &[StyledWord],
    metrics: &mut MetricsCache<M>,
    growth: &mut G,
    start: Size,
    original: Size,
) -> Result<Size, WordCloudError> {
    let mut canvas = start;
    let stats = word_stats(words, metrics)?;

    while stats.min_width > canvas.width || stats.min_height > canvas.height {
        log::debug!("growing canvas {canvas:?} to fit the largest word");
        canvas = grow_checked(growth, canvas, original)?;
    }

    while stats.min_area > canvas.area() {
        log::debug!("growing canvas {canvas:?} to fit the total word area");
        canvas = grow_checked(growth, canvas, original)?;
    }

    let mut stacked = stacked_min_dimensions(words, metrics, canvas)?;
    while stacked.width > canvas.width || stacked.height > canvas.height {
        log::debug!("growing canvas {canvas:?} to fit stacked words {stacked:?}");
        canvas = grow_checked(growth, canvas, original)?;
        stacked = stacked_min_dimensions(words, metrics, canvas)?;
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ScaleGrowth;
    use crate::{colours, FontRef, HeuristicMetrics};

    fn word(text: &str, size: f32) -> StyledWord {
        StyledWord::new(text, FontRef::new("Mono").unwrap(), Pt(size), colours::BLACK).unwrap()
    }

    // one point per character and per line, so sizes are easy to reason about
    fn unit_metrics() -> MetricsCache<HeuristicMetrics> {
        MetricsCache::new(HeuristicMetrics {
            glyph_width_em: 1.0,
            line_height_em: 1.0,
        })
    }

    #[test]
    fn stats_track_the_largest_word_and_total_area() {
        let words = vec![word("abcd", 10.0), word("xy", 30.0)];
        let stats = word_stats(&words, &mut unit_metrics()).unwrap();
        assert_eq!(stats.min_width, Pt(60.0));
        assert_eq!(stats.min_height, Pt(30.0));
        assert_eq!(stats.min_area, 40.0 * 10.0 + 60.0 * 30.0);
    }

    #[test]
    fn only_words_wider_than_half_the_canvas_stack() {
        let words = vec![word("abcdef", 10.0), word("abcdefg", 10.0), word("ab", 10.0)];
        let canvas = Size::new(100.0, 100.0);
        let stacked = stacked_min_dimensions(&words, &mut unit_metrics(), canvas).unwrap();
        assert_eq!(stacked.height, Pt(20.0));
        assert_eq!(stacked.width, Pt(0.0));
    }

    #[test]
    fn canvas_that_already_fits_is_left_alone() {
        let words = vec![word("ab", 10.0)];
        let start = Size::new(100.0, 100.0);
        let grown = preflight_grow(
            &words,
            &mut unit_metrics(),
            &mut ScaleGrowth::default(),
            start,
            start,
        )
        .unwrap();
        assert_eq!(grown, start);
    }

    #[test]
    fn grows_until_the_widest_word_fits() {
        let words = vec![word("abcdefghijklmnop", 10.0)];
        let start = Size::new(100.0, 100.0);
        let grown = preflight_grow(
            &words,
            &mut unit_metrics(),
            &mut ScaleGrowth::default(),
            start,
            start,
        )
        .unwrap();
        assert!(grown.width >= Pt(160.0));
        assert!(grown.width < Pt(160.0 * 1.1));
    }

    #[test]
    fn grows_until_the_area_fits() {
        // ten 50x25 words need 12_500 square points
        let words: Vec<StyledWord> = (0..10).map(|_| word("ab", 25.0)).collect();
        let start = Size::new(100.0, 100.0);
        let grown = preflight_grow(
            &words,
            &mut unit_metrics(),
            &mut ScaleGrowth::default(),
            start,
            start,
        )
        .unwrap();
        assert!(grown.area() >= 12_500.0);
        assert!(grown.width > Pt(100.0));
    }

    #[test]
    fn grows_until_wide_words_stack() {
        // three words 60 wide and 40 tall: each is wider than half of a 100 wide
        // canvas, so together they need 120 of height
        let words: Vec<StyledWord> = (0..3).map(|_| word("abc", 20.0)).collect();
        let mut metrics = MetricsCache::new(HeuristicMetrics {
            glyph_width_em: 1.0,
            line_height_em: 2.0,
        });
        let start = Size::new(100.0, 100.0);
        let grown = preflight_grow(
            &words,
            &mut metrics,
            &mut ScaleGrowth::default(),
            start,
            start,
        )
        .unwrap();
        let stacked = stacked_min_dimensions(&words, &mut metrics, grown).unwrap();
        assert!(stacked.width <= grown.width);
        assert!(stacked.height <= grown.height);
        assert!(grown.height > Pt(100.0));
    }
}
