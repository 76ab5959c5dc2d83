//! Greedy word wrapping under a pixel budget
//!
//! Text is first cut at explicit line breaks; each physical line is then
//! shortened until it fits, preferring to cut at a space. A word that is
//! wider than the budget on its own is emitted whole and overflows.

use crate::measure::measure_text;
use typeline_core::{MetricsProvider, LINE_BREAK};

const SPACE: char = ' ';

/// Split `text` into lines no wider than `max_width`
///
/// Blank physical lines are kept as empty strings. The space at which a
/// line was wrapped is dropped from the start of the next line.
pub fn wrap_lines(text: &str, max_width: f64, style: &dyn MetricsProvider) -> Vec<String> {
    let mut lines = Vec::new();
    for physical in text.split(LINE_BREAK) {
        let chars: Vec<char> = physical.chars().collect();
        let wrapped = wrap_physical_line(&chars, max_width, style);
        if wrapped.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrapped);
        }
    }
    log::debug!(
        "Wrapped {} chars into {} lines at width {}",
        text.chars().count(),
        lines.len(),
        max_width
    );
    lines
}

/// Join lines with a line break between each adjacent pair
pub fn join_with_breaks<S: AsRef<str>>(lines: &[S]) -> String {
    let mut joined = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            joined.push(LINE_BREAK);
        }
        joined.push_str(line.as_ref());
    }
    joined
}

/// Wrap `text` and put it back together with explicit line breaks
pub fn insert_line_breaks(text: &str, max_width: f64, style: &dyn MetricsProvider) -> String {
    join_with_breaks(&wrap_lines(text, max_width, style))
}

fn wrap_physical_line(chars: &[char], max_width: f64, style: &dyn MetricsProvider) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = chars;

    while !rest.is_empty() {
        let len = fitting_prefix_len(rest, max_width, style);
        lines.push(rest[..len].iter().collect());

        // Wrapped at a space because of width: that space separates the two
        // lines and belongs to neither.
        let wrapped_at_space =
            rest.len() > len && rest[len] == SPACE && rest[len - 1] != LINE_BREAK;
        rest = if wrapped_at_space {
            &rest[len + 1..]
        } else {
            &rest[len..]
        };
    }

    lines
}

/// Length of the longest prefix of `chars` to put on one line
///
/// Never returns 0 for non-empty input.
fn fitting_prefix_len(chars: &[char], max_width: f64, style: &dyn MetricsProvider) -> usize {
    let mut len = chars.len();

    while len > 1 && measure_text(style, &chars[..len]).width > max_width {
        len -= 1;
        while len > 1 && chars[..len].contains(&SPACE) && chars[len] != SPACE {
            len -= 1;
        }

        // Cutting inside the first word: keep the word whole instead.
        if !chars[..len].contains(&SPACE) && chars[len] != SPACE {
            return chars
                .iter()
                .position(|&c| c == SPACE)
                .unwrap_or(chars.len());
        }
    }

    len
}
