//! Cursor movement and fixed-height scrolling for menu lists.
//!
//! The cursor clamps at both ends; it never wraps.

use core::ops::Range;

/// One row up, stopping at the first row.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// One row down if another of the `item_count` rows exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Indices visible in a list of `item_count` rows, `rows` at a time.
///
/// The window starts at the top until the cursor would fall off the bottom,
/// after which the selected row is pinned as the last visible row.
pub fn visible_range(selected: usize, item_count: usize, rows: usize) -> Range<usize> {
    let start = if rows > 0 && selected >= rows {
        selected + 1 - rows
    } else {
        0
    };
    let end = (start + rows).min(item_count);
    start..end.max(start)
}
