//! Chat bubble layout
//!
//! Pure text layout for the conversation panel: unicode-aware word wrapping
//! and bubble framing. Rendering proper (styles, placement, scrolling) lives
//! in `widget`; everything here is deterministic string math so it can be
//! unit-tested without a terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap a single line (no embedded newlines) to `width` columns.
///
/// Greedy word wrap; words wider than the limit are hard-broken. An empty
/// line stays a single empty line so blank lines in a message survive.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let (rest, rest_width) = hard_break(word, width, &mut out);
                current = rest;
                current_width = rest_width;
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let (rest, rest_width) = hard_break(word, width, &mut out);
                current = rest;
                current_width = rest_width;
            }
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

/// Break an over-long word into width-sized pieces, pushing all full pieces
/// and returning the trailing partial piece with its display width.
fn hard_break(word: &str, width: usize, out: &mut Vec<String>) -> (String, usize) {
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > width && !piece.is_empty() {
            out.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    (piece, piece_width)
}

/// Wrap a full message: embedded line breaks are kept verbatim, each segment
/// wrapped independently.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// A laid-out bubble body: wrapped lines plus the inner (text) width the
/// frame is sized to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub lines: Vec<String>,
    pub inner_width: usize,
}

impl Bubble {
    /// Total rendered width including the frame and padding columns.
    pub fn outer_width(&self) -> usize {
        self.inner_width + 4
    }

    /// Total rendered height including the frame rows.
    pub fn height(&self) -> usize {
        self.lines.len() + 2
    }
}

/// Lay out `text` into a bubble no wider than `max_inner` text columns.
pub fn layout_bubble(text: &str, max_inner: usize) -> Bubble {
    let lines = wrap_text(text, max_inner.max(1));
    let inner_width = lines.iter().map(|l| l.width()).max().unwrap_or(0).max(1);
    Bubble { lines, inner_width }
}

/// Render a bubble into framed rows (`╭─╮` / `│ … │` / `╰─╯`), each row
/// exactly `outer_width` columns wide.
pub fn bubble_rows(bubble: &Bubble) -> Vec<String> {
    let horizontal = "─".repeat(bubble.inner_width + 2);
    let mut rows = Vec::with_capacity(bubble.height());
    rows.push(format!("╭{horizontal}╮"));
    for line in &bubble.lines {
        let pad = " ".repeat(bubble.inner_width - line.width());
        rows.push(format!("│ {line}{pad} │"));
    }
    rows.push(format!("╰{horizontal}╯"));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_untouched() {
        assert_eq!(wrap_line("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_line("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn empty_line_survives() {
        assert_eq!(wrap_line("", 10), vec![""]);
    }

    #[test]
    fn overlong_word_is_hard_broken() {
        assert_eq!(wrap_line("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK glyph is two columns; three of them exceed a width of 5.
        let wrapped = wrap_line("你好世", 5);
        assert_eq!(wrapped, vec!["你好", "世"]);
    }

    #[test]
    fn embedded_newlines_are_verbatim() {
        assert_eq!(
            wrap_text("plan:\n- design\n- build", 20),
            vec!["plan:", "- design", "- build"]
        );
    }

    #[test]
    fn blank_interior_lines_are_kept() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn bubble_sizes_to_longest_line() {
        let bubble = layout_bubble("hi\nthere", 20);
        assert_eq!(bubble.inner_width, 5);
        assert_eq!(bubble.outer_width(), 9);
        assert_eq!(bubble.height(), 4);
    }

    #[test]
    fn bubble_rows_are_framed_and_padded() {
        let bubble = layout_bubble("hi\nthere", 20);
        let rows = bubble_rows(&bubble);
        assert_eq!(
            rows,
            vec!["╭───────╮", "│ hi    │", "│ there │", "╰───────╯"]
        );
    }

    #[test]
    fn bubble_rows_share_one_display_width() {
        let bubble = layout_bubble("wrap me somewhere", 8);
        for row in bubble_rows(&bubble) {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(row.width(), bubble.outer_width());
        }
    }

    #[test]
    fn minimum_inner_width_is_one_column() {
        let bubble = layout_bubble("", 10);
        assert_eq!(bubble.inner_width, 1);
        assert_eq!(bubble_rows(&bubble)[1], "│   │");
    }
}
