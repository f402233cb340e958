//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! The root aggregate is decomposed into navigation, search, and settings
//! sub-states; `key_handler::handle_event` routes events to them.

pub mod app_state;
pub mod key_handler;
pub mod navigation;
pub mod scroll;
pub mod search;
pub mod settings;

// Re-export for convenience
pub use app_state::AppState;
pub use key_handler::{handle_event, AppEvent, Effect};
pub use navigation::{NavigationState, Pane};
pub use search::{filter_posts, SearchState};
pub use settings::{SettingsField, SettingsState};
