//! Pane focus and cursor/scroll tracking.

use crate::state::scroll;

// ===== Pane =====

/// Which pane has focus. Sum type - exactly one.
///
/// # State Transitions
///
/// - Sidebar → PostList → Preview → Sidebar (Tab, normal ring)
/// - Sidebar ⇄ PostList (Tab while the settings modal is open)
/// - Sidebar selections land focus in PostList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Navigation sidebar (Home / Explore / Settings entries).
    #[default]
    Sidebar,
    /// The post list (also hosts the settings modal and search input).
    PostList,
    /// Full post preview for the selected list entry.
    Preview,
}

// ===== NavigationState =====

/// Cursor, scroll, and viewport state for the three panes.
///
/// # Invariants
///
/// - `sidebar_cursor < sidebar item count` (callers pass the bound)
/// - `posts_cursor < active list length`, or 0 when the list is empty
/// - `posts_scroll ≤ posts_cursor < posts_scroll + visible count`
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// Pane that currently receives navigation input.
    pub active_pane: Pane,
    /// Selected sidebar entry index.
    pub sidebar_cursor: usize,
    /// Selected entry in the active post list (master or search results).
    pub posts_cursor: usize,
    /// First visible entry of the post list scroll window.
    pub posts_scroll: usize,
    /// Lines scrolled down inside the preview pane. No upper bound; the
    /// renderer clips against content length.
    pub preview_scroll: usize,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_pane: Pane::Sidebar,
            sidebar_cursor: 0,
            posts_cursor: 0,
            posts_scroll: 0,
            preview_scroll: 0,
            width: 80,
            height: 24,
        }
    }
}

impl NavigationState {
    /// Store new terminal dimensions. Resize has no other effect.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Reset list cursor and scroll to the top.
    pub fn reset_posts(&mut self) {
        self.posts_cursor = 0;
        self.posts_scroll = 0;
    }

    /// Move the sidebar cursor up by one, clamped at the first entry.
    pub fn sidebar_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    /// Move the sidebar cursor down by one, clamped at the last entry.
    pub fn sidebar_down(&mut self, item_count: usize) {
        if self.sidebar_cursor + 1 < item_count {
            self.sidebar_cursor += 1;
        }
    }

    /// Move the posts cursor up by one within the active list.
    ///
    /// Resets preview scroll and pulls the scroll window up if the cursor
    /// left it.
    pub fn posts_up(&mut self, visible: usize) {
        if self.posts_cursor == 0 {
            return;
        }
        self.posts_cursor -= 1;
        self.preview_scroll = 0;
        self.posts_scroll = scroll::scroll_into_view(self.posts_cursor, self.posts_scroll, visible);
    }

    /// Move the posts cursor down by one within the active list.
    ///
    /// Resets preview scroll and advances the scroll window if the cursor
    /// passed its bottom edge.
    pub fn posts_down(&mut self, list_len: usize, visible: usize) {
        if self.posts_cursor + 1 >= list_len {
            return;
        }
        self.posts_cursor += 1;
        self.preview_scroll = 0;
        self.posts_scroll = scroll::scroll_into_view(self.posts_cursor, self.posts_scroll, visible);
    }

    /// Scroll the preview up by one line, floored at 0.
    pub fn preview_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(1);
    }

    /// Scroll the preview down by one line. Unbounded; clipped at render.
    pub fn preview_down(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_add(1);
    }
}

// ===== Tests =====
