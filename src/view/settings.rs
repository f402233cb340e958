//! Settings modal widget.
//!
//! Drawn in place of the post list when open. Two editable fields; the
//! client secret renders masked. The buffers are inert text, so masking
//! is purely cosmetic.

use crate::state::{SettingsField, SettingsState};
use crate::view::styles::PaneStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Settings modal with field cursor and edit-mode indicator.
pub struct SettingsPanel<'a> {
    settings: &'a SettingsState,
    focused: bool,
    styles: &'a PaneStyles,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(settings: &'a SettingsState, focused: bool, styles: &'a PaneStyles) -> Self {
        Self {
            settings,
            focused,
            styles,
        }
    }

    fn field_line(&self, field: SettingsField, label: &str, shown: String) -> Line<'a> {
        let editing = self.settings.editing == Some(field);
        let selected = self.settings.cursor == field;

        let marker = if editing {
            "» "
        } else if selected {
            "> "
        } else {
            "  "
        };
        // A block cursor marks the append position while editing.
        let value = if editing { format!("{shown}█") } else { shown };

        let value_span = if selected {
            Span::styled(value, self.styles.selection())
        } else {
            Span::raw(value)
        };

        Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(format!("{label:<14}"), self.styles.dim()),
            value_span,
        ])
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = if self.settings.editing.is_some() {
            "type to edit · enter/esc done"
        } else {
            "j/k select · enter edit · q quit"
        };

        let masked_secret = "*".repeat(self.settings.client_secret.chars().count());
        let lines = vec![
            self.field_line(
                SettingsField::ApiKey,
                "API key",
                self.settings.api_key.clone(),
            ),
            self.field_line(SettingsField::ClientSecret, "Client secret", masked_secret),
            Line::from(""),
            Line::from(Span::styled(hint.to_string(), self.styles.dim())),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Settings")
                .border_style(self.styles.border(self.focused)),
        );
        paragraph.render(area, buf);
    }
}
