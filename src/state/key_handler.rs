//! Event dispatch (pure).
//!
//! The single entry point feeding terminal events into the state machine.
//! Dispatch is priority-ordered; an action whose guard is not met (a vote
//! outside the preview pane, quit while a buffer is capturing) falls back
//! to text input instead of being dropped.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ===== Events and effects =====

/// An external event fed into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

/// What the shell should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Keep running.
    None,
    /// Tear down the terminal and exit.
    Terminate,
}

// ===== Dispatch =====

/// Apply one event to the state. Every branch returns [`Effect::None`]
/// except quit.
pub fn handle_event(state: &mut AppState, event: AppEvent, bindings: &KeyBindings) -> Effect {
    match event {
        AppEvent::Resize(width, height) => {
            state.nav.set_viewport(width, height);
            Effect::None
        }
        AppEvent::Key(key) => handle_key(state, key, bindings),
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, bindings: &KeyBindings) -> Effect {
    // Ctrl+C always quits, even while a buffer is capturing input.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Effect::Terminate;
    }

    match bindings.get(key) {
        Some(KeyAction::Quit) => {
            if state.is_capturing_text() {
                // `q` is ordinary text while editing a field or typing a
                // search query.
                insert_key_char(state, key);
                Effect::None
            } else {
                Effect::Terminate
            }
        }
        Some(KeyAction::CyclePane) => {
            state.cycle_pane();
            Effect::None
        }
        Some(KeyAction::Upvote) => {
            if !state.upvote_selected() {
                insert_key_char(state, key);
            }
            Effect::None
        }
        Some(KeyAction::Downvote) => {
            if !state.downvote_selected() {
                insert_key_char(state, key);
            }
            Effect::None
        }
        Some(KeyAction::Confirm) => {
            state.confirm();
            Effect::None
        }
        Some(KeyAction::Cancel) => {
            state.cancel();
            Effect::None
        }
        Some(KeyAction::Erase) => {
            state.erase_char();
            Effect::None
        }
        Some(KeyAction::MoveUp) => {
            state.move_up();
            Effect::None
        }
        Some(KeyAction::MoveDown) => {
            state.move_down();
            Effect::None
        }
        None => {
            // Unbound key: route printable characters to the capturing
            // buffer, ignore everything else.
            insert_key_char(state, key);
            Effect::None
        }
    }
}

/// Feed the character of a key event to the text-input path, if it is one.
/// AppState::insert_char guards the printable range and capture mode.
fn insert_key_char(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return;
    }
    if let KeyCode::Char(ch) = key.code {
        state.insert_char(ch);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
