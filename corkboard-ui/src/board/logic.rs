//! Board pure logic functions - no RSX, no signals

use corkboard_types::Note;

pub const FONT_SCALE_MAX: f64 = 2.2;
pub const FONT_SCALE_MIN: f64 = 1.0;
const FONT_LEN_SMALL: usize = 10;
const FONT_LEN_LARGE: usize = 200;

/// Content length as the font sizer sees it: a newline consumes a full
/// visual line, so it weighs 10; every other character weighs 1.
pub fn weighted_len(content: &str) -> usize {
    content
        .chars()
        .map(|c| if c == '\n' { 10 } else { 1 })
        .sum()
}

/// Font scale in rem for a note's content: 2.2 up to weighted length
/// 10, 1.0 from 200, linearly interpolated in between.
pub fn font_scale(content: &str) -> f64 {
    let len = weighted_len(content);
    if len <= FONT_LEN_SMALL {
        return FONT_SCALE_MAX;
    }
    if len >= FONT_LEN_LARGE {
        return FONT_SCALE_MIN;
    }

    let span = (FONT_LEN_LARGE - FONT_LEN_SMALL) as f64;
    FONT_SCALE_MAX
        - ((len - FONT_LEN_SMALL) as f64 / span) * (FONT_SCALE_MAX - FONT_SCALE_MIN)
}

/// Visible subset for `query`: a whitespace-only query shows the whole
/// collection in order; otherwise case-insensitive containment against
/// the content or any tag name. Pure projection, re-derived per render.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return notes.iter().collect();
    }

    notes
        .iter()
        .filter(|note| {
            note.content.to_lowercase().contains(&query)
                || note
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

/// Whether a note shares at least one tag with the highlighted set.
pub fn shares_highlighted_tag(note: &Note, highlighted: &[String]) -> bool {
    !highlighted.is_empty() && note.tags.iter().any(|tag| highlighted.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, content: &str, tags: &[&str]) -> Note {
        Note {
            id,
            content: content.to_string(),
            x: 0.0,
            y: 0.0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn empty_content_gets_the_max_scale() {
        assert_eq!(font_scale(""), FONT_SCALE_MAX);
        assert_eq!(font_scale("short note"), FONT_SCALE_MAX);
    }

    #[test]
    fn long_content_gets_the_min_scale() {
        assert_eq!(font_scale(&"x".repeat(200)), FONT_SCALE_MIN);
        assert_eq!(font_scale(&"x".repeat(250)), FONT_SCALE_MIN);
    }

    #[test]
    fn scale_interpolates_linearly_between_the_bounds() {
        // Weighted length 105 sits exactly halfway through [10, 200].
        let mid = font_scale(&"x".repeat(105));
        assert!((mid - 1.6).abs() < 1e-9);
    }

    #[test]
    fn newlines_weigh_ten() {
        assert_eq!(weighted_len("ab\ncd"), 14);
        // Five visible chars read as short, but the newlines push the
        // weighted length past the small threshold.
        assert!(font_scale("ab\ncd\n\n") < FONT_SCALE_MAX);
    }

    #[test]
    fn scale_is_monotonically_non_increasing_and_bounded() {
        let mut previous = FONT_SCALE_MAX;
        for len in 0..=260 {
            let scale = font_scale(&"x".repeat(len));
            assert!(scale <= previous + 1e-12);
            assert!((FONT_SCALE_MIN..=FONT_SCALE_MAX).contains(&scale));
            previous = scale;
        }
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let notes = vec![note(1, "b", &[]), note(2, "a", &[])];
        let visible = filter_notes(&notes, "   ");
        assert_eq!(visible.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn query_matches_content_or_tags_case_insensitively() {
        let notes = vec![
            note(1, "buy milk", &["work"]),
            note(2, "call mom", &[]),
            note(3, "WORKshop notes", &[]),
        ];

        let visible = filter_notes(&notes, "work");
        assert_eq!(visible.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn highlight_requires_one_shared_tag() {
        let highlighted = vec!["a".to_string(), "b".to_string()];
        assert!(shares_highlighted_tag(&note(1, "", &["b"]), &highlighted));
        assert!(!shares_highlighted_tag(&note(2, "", &["c"]), &highlighted));
        assert!(!shares_highlighted_tag(&note(3, "", &["a"]), &[]));
    }
}
