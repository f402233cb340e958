//! Pane and vote styling configuration.

use crate::model::VoteState;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PaneStyles =====

/// Styling for pane borders, selections, and vote markers.
pub struct PaneStyles {
    focused_border: Style,
    unfocused_border: Style,
    selection: Style,
    upvoted: Style,
    downvoted: Style,
    neutral: Style,
    dim: Style,
}

impl PaneStyles {
    /// Create styles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles honoring a color configuration. With colors disabled
    /// the selection still inverts so the cursor stays visible.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Magenta),
                unfocused_border: Style::default().fg(Color::DarkGray),
                selection: Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                upvoted: Style::default().fg(Color::Green),
                downvoted: Style::default().fg(Color::Red),
                neutral: Style::default().fg(Color::Gray),
                dim: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                selection: Style::default().add_modifier(Modifier::REVERSED),
                upvoted: Style::default(),
                downvoted: Style::default(),
                neutral: Style::default(),
                dim: Style::default(),
            }
        }
    }

    /// Border style for a pane, depending on focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }

    /// Highlight for the row under the cursor.
    pub fn selection(&self) -> Style {
        self.selection
    }

    /// Style for a score given its vote state.
    pub fn vote(&self, vote: VoteState) -> Style {
        match vote {
            VoteState::Up => self.upvoted,
            VoteState::Down => self.downvoted,
            VoteState::Neutral => self.neutral,
        }
    }

    /// De-emphasized metadata text.
    pub fn dim(&self) -> Style {
        self.dim
    }
}

impl Default for PaneStyles {
    fn default() -> Self {
        Self::new()
    }
}
