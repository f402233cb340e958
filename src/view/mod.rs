//! Terminal rendering and the event loop (impure shell).
//!
//! All domain logic lives in `state`; this module owns the terminal,
//! translates crossterm events into `AppEvent`s, and draws frames.

mod constants;
mod icons;
mod layout;
mod posts;
mod preview;
mod search_input;
mod settings;
mod sidebar;
mod styles;

pub use icons::sidebar_items;
pub use styles::{ColorConfig, PaneStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::Post;
use crate::state::{handle_event, AppEvent, AppState, Effect};
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PaneStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(posts: Vec<Post>, color: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut app_state = AppState::new(posts, icons::sidebar_items());

        // Seed the viewport so scroll math works before the first resize event
        match terminal.size() {
            Ok(size) if size.width > 0 && size.height > 0 => {
                app_state.nav.set_viewport(size.width, size.height);
            }
            _ => {
                app_state.nav.set_viewport(80, 24);
            }
        }

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PaneStyles::with_color_config(color),
        })
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal input and returns when the user quits
    /// (bound quit key or Ctrl+C). Redraws after every handled event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render so the screen has content before the first keypress
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    let effect =
                        handle_event(&mut self.app_state, AppEvent::Key(key), &self.key_bindings);
                    if effect == Effect::Terminate {
                        debug!("terminate requested, leaving event loop");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    handle_event(
                        &mut self.app_state,
                        AppEvent::Resize(width, height),
                        &self.key_bindings,
                    );
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Render a single frame from the current state
    fn draw(&mut self) -> Result<(), TuiError> {
        self.terminal
            .draw(|frame| layout::render_layout(frame, &self.app_state, &self.styles))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// These accessors exist so tests can drive the app without a real
// terminal. DO NOT use them in production code.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization; the caller supplies a TestBackend
    /// terminal and a pre-built AppState.
    pub(crate) fn new_for_test(terminal: Terminal<B>, mut app_state: AppState) -> Self {
        // Seed viewport from the backend so scroll math matches the frame
        match terminal.size() {
            Ok(size) if size.width > 0 && size.height > 0 => {
                app_state.nav.set_viewport(size.width, size.height);
            }
            _ => {
                app_state.nav.set_viewport(80, 24);
            }
        }

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PaneStyles::default(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Feed a single key event through the dispatcher (test-only accessor)
    ///
    /// Returns the resulting effect.
    pub(crate) fn handle_key_test(&mut self, key: crossterm::event::KeyEvent) -> Effect {
        handle_event(&mut self.app_state, AppEvent::Key(key), &self.key_bindings)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    ///
    /// Provides access to the backend for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application with the given posts
///
/// Handles terminal setup, runs the event loop, and restores the
/// terminal on exit even when the loop errors.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_posts(posts: Vec<Post>, color: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(posts, color)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
