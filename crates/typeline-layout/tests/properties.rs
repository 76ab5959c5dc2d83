use kurbo::Point;
use proptest::prelude::*;
use typeline_core::MetricsProvider;
use typeline_layout::{join_with_breaks, measure::measure_text, wrap_lines, BoxFace, TextRun};

fn face() -> BoxFace {
    BoxFace::new(16.0)
        .with_default_advance(8.0)
        .with_advance('i', 3.0)
        .with_advance('m', 12.0)
        .with_advance('w', 11.0)
        .with_kerning('a', 'v', -1.0)
        .with_kerning('v', 'a', -1.0)
        .with_kerning('t', 'o', -0.5)
}

fn width(text: &str) -> f64 {
    let chars: Vec<char> = text.chars().collect();
    measure_text(&face(), &chars).width
}

// Property: without breaks, width is the sum of kerned advances
proptest! {
    #[test]
    fn prop_width_is_sum_of_advances(s in "[a-z]{1,24}") {
        let face = face();
        let chars: Vec<char> = s.chars().collect();
        let mut expected = 0.0;
        for pair in chars.windows(2) {
            expected += face.advance_between(pair[0], pair[1]);
        }
        expected += face.advance_of(chars[chars.len() - 1]);

        let run = TextRun::new(s.clone(), &face);
        let measured = run.measure();
        prop_assert!((measured.width - expected).abs() < 1e-9);
        prop_assert_eq!(run.measure(), measured);
    }
}

// Property: wrapped lines fit, unless a lone word is too wide by itself
proptest! {
    #[test]
    fn prop_wrapped_lines_fit_the_budget(
        s in "[a-z]{1,10}( [a-z]{1,10}){0,8}",
        budget in 20.0f64..200.0,
    ) {
        for line in wrap_lines(&s, budget, &face()) {
            if width(&line) > budget {
                prop_assert!(!line.contains(' '), "overflowing line {:?} is not a single word", line);
                prop_assert!(s.split(' ').any(|word| word == line));
            }
        }
    }
}

// Property: wrapping already-wrapped text changes nothing
proptest! {
    #[test]
    fn prop_wrap_is_stable(
        s in "[a-z]{1,10}( [a-z]{1,10}){0,8}(\n[a-z]{0,6}( [a-z]{1,6}){0,4}){0,3}",
        budget in 20.0f64..200.0,
    ) {
        let face = face();
        let once = wrap_lines(&s, budget, &face);
        let twice = wrap_lines(&join_with_breaks(&once), budget, &face);
        prop_assert_eq!(once, twice);
    }
}

// Property: words are never lost or altered by wrapping
proptest! {
    #[test]
    fn prop_wrap_keeps_every_word(
        s in "[a-z]{1,10}( [a-z]{1,10}){0,8}",
        budget in 20.0f64..200.0,
    ) {
        let lines = wrap_lines(&s, budget, &face());
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let original: Vec<&str> = s.split(' ').collect();
        prop_assert_eq!(rejoined, original);
    }
}

// Property: moving right along a line never moves the hit backwards
proptest! {
    #[test]
    fn prop_hit_test_is_monotonic_along_a_line(
        s in "[a-z ]{1,24}",
        a in -20.0f64..300.0,
        b in -20.0f64..300.0,
    ) {
        let face = face();
        let run = TextRun::new(s, &face);
        let y = face.em_size();
        let (left, right) = if a <= b { (a, b) } else { (b, a) };

        let hit_left = run.character_index_before(Point::new(left, y)).unwrap();
        let hit_right = run.character_index_before(Point::new(right, y)).unwrap();
        prop_assert!(hit_left <= hit_right, "{:?} > {:?}", hit_left, hit_right);
    }
}
