//! Word wrapping, padding and truncation

use super::{DEFAULT_ELLIPSIS, WIDTH};

/// Horizontal alignment for `pad_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Length in characters
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn take_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Greedy word wrap
///
/// Each `\n`-separated line is wrapped on its own; blank lines survive as
/// empty strings. Words longer than `width` are hard-split. Empty input gives
/// zero lines. `width` defaults to the grid width.
#[must_use]
pub fn wrap_text(text: &str, width: Option<usize>) -> Vec<String> {
    let width = width.unwrap_or(WIDTH);
    if text.is_empty() || width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, out: &mut Vec<String>) {
    let start = out.len();
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = char_len(word);

        if word_len > width {
            if current_len > 0 {
                out.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                current = chunk.iter().collect();
                current_len = chunk.len();
                if current_len == width {
                    out.push(std::mem::take(&mut current));
                    current_len = 0;
                }
            }
            continue;
        }

        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if current_len > 0 {
        out.push(current);
    }
    if out.len() == start {
        out.push(String::new());
    }
}

/// Pad or truncate to exactly `width` characters
///
/// Longer text is cut (no ellipsis). Centering puts the odd space on the right.
#[must_use]
pub fn pad_text(text: &str, width: usize, align: Align) -> String {
    let len = char_len(text);
    if len >= width {
        return take_chars(text, width);
    }

    let remaining = width - len;
    let (left, right) = match align {
        Align::Left => (0, remaining),
        Align::Right => (remaining, 0),
        Align::Center => (remaining / 2, remaining - remaining / 2),
    };

    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Shorten to `max_length` characters ending in `...`
#[must_use]
pub fn truncate_text(text: &str, max_length: usize) -> String {
    truncate_with(text, max_length, DEFAULT_ELLIPSIS)
}

/// Shorten to `max_length` characters ending in `ellipsis`
///
/// The ellipsis itself is cut when it does not fit in `max_length`.
#[must_use]
pub fn truncate_with(text: &str, max_length: usize, ellipsis: &str) -> String {
    if char_len(text) <= max_length {
        return text.to_string();
    }

    let reserved = char_len(ellipsis).min(max_length);
    let mut out = take_chars(text, max_length - reserved);
    out.push_str(&take_chars(ellipsis, reserved));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_empty_is_zero_lines() {
        assert!(wrap_text("", None).is_empty());
        assert!(wrap_text("anything", Some(0)).is_empty());
    }

    #[test]
    fn wrap_packs_words_greedily() {
        let lines = wrap_text("the quick brown fox jumps", Some(10));
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn wrap_keeps_blank_lines() {
        let lines = wrap_text("first\n\nsecond", Some(20));
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        let lines = wrap_text("abcdefghij xy", Some(4));
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);

        let lines = wrap_text("a abcdefgh b", Some(4));
        assert_eq!(lines, vec!["a", "abcd", "efgh", "b"]);
    }

    #[test]
    fn wrap_continues_after_split_remainder() {
        let lines = wrap_text("abcdef g", Some(4));
        assert_eq!(lines, vec!["abcd", "ef g"]);
    }

    #[test]
    fn wrap_defaults_to_grid_width() {
        let text = "word ".repeat(30);
        for line in wrap_text(&text, None) {
            assert!(char_len(&line) <= WIDTH);
        }
    }

    #[test]
    fn wrap_preserves_non_space_characters() {
        let samples = [
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit",
            "supercalifragilisticexpialidocious is long",
            "  leading and   repeated   spaces\ttabs\nand lines  ",
            "£10 off! Über café",
        ];
        for sample in samples {
            for width in 1..=12 {
                let lines = wrap_text(sample, Some(width));
                assert!(lines.iter().all(|l| char_len(l) <= width), "{sample:?} @ {width}");
                let wrapped: String = lines.concat().chars().filter(|c| !c.is_whitespace()).collect();
                let original: String = sample.chars().filter(|c| !c.is_whitespace()).collect();
                assert_eq!(wrapped, original, "{sample:?} @ {width}");
            }
        }
    }

    #[test]
    fn pad_alignments() {
        assert_eq!(pad_text("ab", 5, Align::Left), "ab   ");
        assert_eq!(pad_text("ab", 5, Align::Right), "   ab");
        assert_eq!(pad_text("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad_text("abcdef", 3, Align::Center), "abc");
    }

    #[test]
    fn pad_is_idempotent() {
        for align in [Align::Left, Align::Right, Align::Center] {
            for text in ["", "x", "teletext", "a much longer line than the width"] {
                for width in [0, 1, 7, 40] {
                    let once = pad_text(text, width, align);
                    assert_eq!(char_len(&once), width);
                    assert_eq!(pad_text(&once, width, align), once);
                }
            }
        }
    }

    #[test]
    fn truncate_reserves_ellipsis() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Breaking news today", 10), "Breakin...");
        assert_eq!(char_len(&truncate_text("Breaking news today", 10)), 10);
    }

    #[test]
    fn truncate_smaller_than_ellipsis() {
        assert_eq!(truncate_text("abcdef", 2), "..");
        assert_eq!(truncate_with("abcdef", 4, "~"), "abc~");
        assert_eq!(truncate_with("abcdef", 0, "..."), "");
    }
}
