//! Auto-scroll math for the conversation panel
//!
//! The panel always keeps the newest content visible ("force bottom"): after
//! every state change the scroll offset is recomputed from the committed
//! content height, never carried over from a previous frame.

/// Offset of the first visible row when the panel is pinned to the bottom.
pub fn bottom_offset(content_rows: usize, view_rows: usize) -> usize {
    content_rows.saturating_sub(view_rows)
}

/// The rows of `rows` that are visible when pinned to the bottom.
pub fn visible_rows<T>(rows: &[T], view_rows: usize) -> &[T] {
    &rows[bottom_offset(rows.len(), view_rows)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_offset_when_content_fits() {
        assert_eq!(bottom_offset(5, 10), 0);
        assert_eq!(bottom_offset(10, 10), 0);
    }

    #[test]
    fn offset_hides_oldest_rows_when_overflowing() {
        assert_eq!(bottom_offset(14, 10), 4);
    }

    #[test]
    fn zero_height_viewport_hides_everything() {
        assert_eq!(bottom_offset(3, 0), 3);
        let rows = [1, 2, 3];
        assert!(visible_rows(&rows, 0).is_empty());
    }

    #[test]
    fn visible_rows_end_with_the_newest() {
        let rows = ["a", "b", "c", "d"];
        assert_eq!(visible_rows(&rows, 2), &["c", "d"]);
        assert_eq!(visible_rows(&rows, 10), &["a", "b", "c", "d"]);
    }
}
