//! Scroll window arithmetic for the post list (pure).
//!
//! The list renders each post as a fixed-height card; the window is the
//! contiguous run of cards that fits under the pane chrome. The invariant
//! maintained here: `offset ≤ cursor < offset + visible_posts`.

/// Rows per post card: 3 content lines plus 2 border lines.
pub const POST_ROW_HEIGHT: usize = 5;

/// Rows consumed above the cards: control bar (3) plus list heading (4).
pub const LIST_CHROME_ROWS: usize = 7;

/// Chrome while searching: the search bar reserves 4 additional rows.
pub const SEARCH_CHROME_ROWS: usize = 11;

/// Number of post cards that fit in the list pane. Never less than 1, so
/// the cursor always has a row even in tiny terminals.
pub fn visible_posts(height: u16, searching: bool) -> usize {
    let chrome = if searching {
        SEARCH_CHROME_ROWS
    } else {
        LIST_CHROME_ROWS
    };
    ((height as usize).saturating_sub(chrome) / POST_ROW_HEIGHT).max(1)
}

/// Recompute the scroll offset so the window contains the cursor.
///
/// Backward movement snaps the offset straight to the cursor; forward
/// movement advances just far enough that the cursor becomes the last
/// visible row. A cursor already inside the window leaves it untouched.
pub fn scroll_into_view(cursor: usize, offset: usize, visible: usize) -> usize {
    if cursor < offset {
        cursor
    } else if cursor >= offset + visible {
        cursor + 1 - visible
    } else {
        offset
    }
}

// ===== Tests =====
