//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
///
/// Text input is deliberately NOT an action: printable characters that are
/// not bound to an action are routed to whichever text buffer is capturing
/// input (a settings field being edited, or the search query). An action
/// whose guard fails (e.g. `Upvote` outside the preview pane) also falls
/// back to text input, so searching for "rust" types the `u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the cursor of the focused pane up by one. Default: k/↑
    MoveUp,
    /// Move the cursor of the focused pane down by one. Default: j/↓
    MoveDown,
    /// Cycle pane focus: Sidebar → PostList → Preview → Sidebar.
    /// Preview is skipped while the settings modal is open. Default: Tab
    CyclePane,
    /// Activate the current selection (sidebar entry, or settings field
    /// edit toggle). Default: Enter
    Confirm,
    /// Leave field-edit mode, or clear the search query. Default: Esc
    Cancel,
    /// Delete the last character of the capturing text buffer.
    /// Default: Backspace
    Erase,
    /// Toggle upvote on the selected post (preview pane only). Default: u
    Upvote,
    /// Toggle downvote on the selected post (preview pane only). Default: d
    Downvote,
    /// Exit the application. Default: q/Ctrl+C
    Quit,
}
