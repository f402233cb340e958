//! Application state and transitions.
//!
//! AppState is the root state type: the master post list plus the three
//! UI sub-states (navigation, search, settings) the key dispatch routes
//! events to. All transitions are pure mutations testable without a
//! terminal.

use crate::model::Post;
use crate::state::navigation::{NavigationState, Pane};
use crate::state::scroll;
use crate::state::search::SearchState;
use crate::state::settings::SettingsState;

// Sidebar entry indices, matching the order of `view::icons::sidebar_items`.
// Entries past these are placeholders and confirm to nothing.
const HOME_ENTRY: usize = 0;
const EXPLORE_ENTRY: usize = 1;
const SETTINGS_ENTRY: usize = 2;

/// Application state. Pure data, no side effects.
///
/// The post list is the domain model; everything else is UI state. Search
/// results index into `posts` rather than copying, so vote mutations are
/// visible in both the full and the filtered view.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master post list, in load order. Never reordered.
    posts: Vec<Post>,
    /// Sidebar display labels, provided once at construction.
    sidebar_items: Vec<String>,
    /// Pane focus, cursors, scroll offsets, viewport dimensions.
    pub nav: NavigationState,
    /// Search mode, query buffer, and result indices.
    pub search: SearchState,
    /// Settings modal and its two editable fields.
    pub settings: SettingsState,
}

impl AppState {
    /// Create initial state over a loaded post list.
    pub fn new(posts: Vec<Post>, sidebar_items: Vec<String>) -> Self {
        Self {
            posts,
            sidebar_items,
            nav: NavigationState::default(),
            search: SearchState::default(),
            settings: SettingsState::default(),
        }
    }

    // ===== Accessors =====

    /// The master post list.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Sidebar display labels.
    pub fn sidebar_items(&self) -> &[String] {
        &self.sidebar_items
    }

    /// Length of the list the post pane currently shows: search results
    /// while searching, the master list otherwise.
    pub fn active_len(&self) -> usize {
        if self.search.active {
            self.search.results.len()
        } else {
            self.posts.len()
        }
    }

    /// Resolve a position in the active list to a master-list index.
    pub fn master_index(&self, active_index: usize) -> Option<usize> {
        if self.search.active {
            self.search.results.get(active_index).copied()
        } else if active_index < self.posts.len() {
            Some(active_index)
        } else {
            None
        }
    }

    /// The post under the list cursor, if the active list is non-empty.
    pub fn selected_post(&self) -> Option<&Post> {
        self.master_index(self.nav.posts_cursor)
            .and_then(|index| self.posts.get(index))
    }

    /// Post displayed at a given active-list position.
    pub fn post_at(&self, active_index: usize) -> Option<&Post> {
        self.master_index(active_index)
            .and_then(|index| self.posts.get(index))
    }

    /// Whether a text buffer is currently receiving keystrokes: a settings
    /// field in edit mode, or the search query with the post list focused.
    /// This is the sole condition that suppresses quit-on-`q`.
    pub fn is_capturing_text(&self) -> bool {
        self.settings.editing.is_some()
            || (self.search.active && self.nav.active_pane == Pane::PostList)
    }

    /// Cards that fit in the list pane at the current viewport.
    pub fn visible_posts(&self) -> usize {
        scroll::visible_posts(self.nav.height, self.search.active)
    }

    // ===== Transitions =====

    /// Advance pane focus one step around the ring. The settings modal
    /// restricts the ring to Sidebar ⇄ PostList.
    pub fn cycle_pane(&mut self) {
        self.nav.active_pane = if self.settings.visible {
            match self.nav.active_pane {
                Pane::Sidebar => Pane::PostList,
                Pane::PostList | Pane::Preview => Pane::Sidebar,
            }
        } else {
            match self.nav.active_pane {
                Pane::Sidebar => Pane::PostList,
                Pane::PostList => Pane::Preview,
                Pane::Preview => Pane::Sidebar,
            }
        };
    }

    /// Toggle upvote on the selected post. Effective only from the preview
    /// pane with a valid selection; returns whether a vote was applied so
    /// the dispatcher can fall back to text input.
    pub fn upvote_selected(&mut self) -> bool {
        self.vote_selected(Post::toggle_upvote)
    }

    /// Toggle downvote on the selected post. Same guard as upvote.
    pub fn downvote_selected(&mut self) -> bool {
        self.vote_selected(Post::toggle_downvote)
    }

    fn vote_selected(&mut self, toggle: fn(&mut Post)) -> bool {
        if self.nav.active_pane != Pane::Preview {
            return false;
        }
        match self.master_index(self.nav.posts_cursor) {
            Some(index) => {
                toggle(&mut self.posts[index]);
                true
            }
            None => false,
        }
    }

    /// Confirm the current selection.
    ///
    /// Sidebar: activate the entry under the cursor and focus the post
    /// list. Post list with the settings modal open: toggle edit mode for
    /// the field under the settings cursor. Everything else: no-op.
    pub fn confirm(&mut self) {
        match self.nav.active_pane {
            Pane::Sidebar => self.confirm_sidebar_entry(),
            Pane::PostList if self.settings.visible => self.settings.toggle_edit(),
            _ => {}
        }
    }

    fn confirm_sidebar_entry(&mut self) {
        match self.nav.sidebar_cursor {
            HOME_ENTRY => {
                self.search.active = false;
                self.search.clear();
                self.settings.close();
                self.nav.reset_posts();
                self.nav.active_pane = Pane::PostList;
            }
            EXPLORE_ENTRY => {
                self.search.active = true;
                self.settings.close();
                self.nav.reset_posts();
                self.nav.active_pane = Pane::PostList;
            }
            SETTINGS_ENTRY => {
                self.settings.open();
                self.search.active = false;
                self.nav.active_pane = Pane::PostList;
            }
            // Placeholder entries activate nothing.
            _ => {}
        }
    }

    /// Cancel: leave field-edit mode if editing, else clear an active
    /// search. The search mode flag stays on; only query and results are
    /// emptied, and the cursor resets so the empty list holds its bounds.
    pub fn cancel(&mut self) {
        if self.settings.editing.is_some() {
            self.settings.stop_editing();
        } else if self.search.active {
            self.search.clear();
            self.nav.reset_posts();
        }
    }

    /// Move the focused cursor up by one.
    pub fn move_up(&mut self) {
        match self.nav.active_pane {
            Pane::Sidebar => self.nav.sidebar_up(),
            Pane::PostList if self.settings.visible => {
                if self.settings.editing.is_none() {
                    self.settings.cursor_up();
                }
            }
            Pane::PostList => {
                let visible = self.visible_posts();
                self.nav.posts_up(visible);
            }
            Pane::Preview => self.nav.preview_up(),
        }
    }

    /// Move the focused cursor down by one.
    pub fn move_down(&mut self) {
        match self.nav.active_pane {
            Pane::Sidebar => {
                let count = self.sidebar_items.len();
                self.nav.sidebar_down(count);
            }
            Pane::PostList if self.settings.visible => {
                if self.settings.editing.is_none() {
                    self.settings.cursor_down();
                }
            }
            Pane::PostList => {
                let len = self.active_len();
                let visible = self.visible_posts();
                self.nav.posts_down(len, visible);
            }
            Pane::Preview => self.nav.preview_down(),
        }
    }

    /// Route a printable character to the capturing buffer.
    ///
    /// Only printable ASCII (32..=126) is accepted. Search edits re-run
    /// the filter and reset cursor/scroll to the top; no-op when nothing
    /// is capturing input.
    pub fn insert_char(&mut self, ch: char) {
        if !matches!(ch, ' '..='~') {
            return;
        }
        if let Some(field) = self.settings.editing {
            self.settings.buffer_mut(field).push(ch);
        } else if self.search.active && self.nav.active_pane == Pane::PostList {
            self.search.query.push(ch);
            self.search.run(&self.posts);
            self.nav.reset_posts();
        }
    }

    /// Remove the last character of the capturing buffer. Empty buffers
    /// are a no-op; search erasures re-run the filter like inserts do.
    pub fn erase_char(&mut self) {
        if let Some(field) = self.settings.editing {
            self.settings.buffer_mut(field).pop();
        } else if self.search.active
            && self.nav.active_pane == Pane::PostList
            && self.search.query.pop().is_some()
        {
            self.search.run(&self.posts);
            self.nav.reset_posts();
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
