//! Domain model types (pure data, no UI concerns).

pub mod key_action;
pub mod post;

pub use key_action::KeyAction;
pub use post::{Post, VoteState};
