//! Acceptance test harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a high-level API for simulating user
//! interactions and inspecting rendered frames.

use crate::model::Post;
use crate::state::{AppState, Effect};
use crate::view::{sidebar_items, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string, one line per row.
///
/// Empty trailing lines are removed to keep assertions readable.
#[allow(dead_code)]
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// A small fixed feed with known search behavior.
///
/// "rust" matches indices 0 and 2; "soup" matches index 1.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(
            "Why Rust borrow checking clicks eventually",
            "systems_sue",
            "programming",
            "It took three rewrites of the same linked list.",
            412,
        ),
        Post::new(
            "Grandma's tomato soup recipe",
            "ladle_luke",
            "cooking",
            "The secret is roasting the tomatoes first.",
            87,
        ),
        Post::new(
            "Rusty water heater - replace or repair?",
            "fixit_fran",
            "homeimprovement",
            "Fifteen years old and making noises.",
            23,
        ),
        Post::new(
            "Trail report: Eagle Ridge loop",
            "peakbagger",
            "hiking",
            "Snow-free above 2000m as of last weekend.",
            156,
        ),
    ]
}

/// Test harness for acceptance testing
pub struct FeedHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl FeedHarness {
    /// Build a harness over the standard sample feed at 80x24.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_posts_and_size(sample_posts(), 80, 24)
    }

    /// Build a harness over an arbitrary feed and terminal size.
    pub fn with_posts_and_size(posts: Vec<Post>, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("TestBackend terminal");
        let app_state = AppState::new(posts, sidebar_items());
        let app = TuiApp::new_for_test(terminal, app_state);

        Self { app, running: true }
    }

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g. Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let key_event = KeyEvent::new(key, mods);
        if self.app.handle_key_test(key_event) == Effect::Terminate {
            self.running = false;
        }

        !self.running
    }

    /// Send a sequence of keys, stopping early if the app quits.
    #[allow(dead_code)]
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text character by character.
    #[allow(dead_code)]
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Read-only access to the app state for assertions.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the buffer as a string.
    #[allow(dead_code)]
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed with TestBackend");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
