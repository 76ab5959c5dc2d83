//! Measurement over character slices
//!
//! All functions index characters, not bytes. Ranges are given as
//! `start..=end_inclusive` and are clamped into the text.

use kurbo::{Size, Vec2};
use typeline_core::{MetricsProvider, LINE_BREAK};

/// Whether the break at `i` swallows the break right after it
///
/// Only two *different* break characters collapse into one boundary. There
/// is a single break character, so a pair is never different and nothing
/// collapses; the rule lives here so every walk applies it the same way.
fn collapses_break_pair(chars: &[char], i: usize, end: usize) -> bool {
    i + 1 < end && chars[i + 1] == LINE_BREAK && chars[i] != chars[i + 1]
}

/// Advance after character `i`, kerned against its successor when there is one
pub(crate) fn advance_at(style: &dyn MetricsProvider, chars: &[char], i: usize) -> f64 {
    match chars.get(i + 1) {
        Some(&next) => style.advance_between(chars[i], next),
        None => style.advance_of(chars[i]),
    }
}

/// Width and height of `chars[start..=end_inclusive]`
///
/// Width is the widest line seen while walking; height starts at one em and
/// grows by one em per line break. The last character of the range does not
/// take part in the walk: a break adds one more em of height, anything else
/// adds its plain advance to the width.
pub fn measure_range(
    style: &dyn MetricsProvider,
    chars: &[char],
    start: usize,
    end_inclusive: usize,
) -> Size {
    if chars.is_empty() {
        return Size::ZERO;
    }

    let end = end_inclusive.min(chars.len() - 1);
    let em = style.em_size();
    let mut width: f64 = 0.0;
    let mut height = em;
    let mut line_x = 0.0;

    let mut i = start;
    while i < end {
        if chars[i] == LINE_BREAK {
            if collapses_break_pair(chars, i, end) {
                i += 1;
            }
            line_x = 0.0;
            height += em;
        } else {
            line_x += advance_at(style, chars, i);
            width = width.max(line_x);
        }
        i += 1;
    }

    if chars[end] == LINE_BREAK {
        height += em;
    } else {
        width += style.advance_of(chars[end]);
    }

    Size::new(width, height)
}

/// Size of the whole text; zero for empty text
pub fn measure_text(style: &dyn MetricsProvider, chars: &[char]) -> Size {
    measure_range(style, chars, 0, chars.len().saturating_sub(1))
}

/// One more than the number of line breaks in `chars[start..end_inclusive]`
///
/// The character at `end_inclusive` itself is not inspected, matching the
/// measurement walk.
pub fn count_lines(chars: &[char], start: usize, end_inclusive: usize) -> usize {
    if chars.is_empty() {
        return 1;
    }

    let last = chars.len() - 1;
    let start = start.min(last);
    let end = end_inclusive.min(last);

    let mut lines = 1;
    let mut i = start;
    while i < end {
        if chars[i] == LINE_BREAK {
            if collapses_break_pair(chars, i, end) {
                i += 1;
            }
            lines += 1;
        }
        i += 1;
    }
    lines
}

/// Pen offset after walking `chars[start..=end_inclusive]`
///
/// A line break resets x and steps y down by one em; any other character
/// moves x by its advance. Starts from (0, 0).
pub fn offset_of_range(
    style: &dyn MetricsProvider,
    chars: &[char],
    start: usize,
    end_inclusive: usize,
) -> Vec2 {
    let mut offset = Vec2::ZERO;
    if chars.is_empty() {
        return offset;
    }

    let end = end_inclusive.min(chars.len() - 1);
    for index in start..=end {
        if chars[index] == LINE_BREAK {
            offset.x = 0.0;
            offset.y -= style.em_size();
        } else {
            offset.x += advance_at(style, chars, index);
        }
    }
    offset
}
