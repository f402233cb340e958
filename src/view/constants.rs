//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values. The list
//! pane values must stay in sync with the scroll arithmetic in
//! `state::scroll`, which assumes 3+4 chrome rows and 5-row cards.

/// Width of the sidebar pane in columns (border included).
pub const SIDEBAR_WIDTH: u16 = 22;

/// Height of the control hints bar at the bottom (border + content).
pub const CONTROL_BAR_HEIGHT: u16 = 3;

/// Rows of the list pane heading (border top + title + blank + border gap).
pub const LIST_HEADING_HEIGHT: u16 = 4;

/// Height of the search bar shown above the list while searching.
pub const SEARCH_BAR_HEIGHT: u16 = 4;

/// Rows per post card in the list (3 content lines + 2 border lines).
pub const POST_CARD_HEIGHT: u16 = 5;

/// Width percentage of the post list within the non-sidebar area.
pub const LIST_WIDTH_PERCENT: u16 = 45;
