//! Sidebar pane widget.

use crate::view::styles::PaneStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, StatefulWidget, Widget},
};

/// Sidebar navigation list with a highlighted cursor row.
pub struct Sidebar<'a> {
    items: &'a [String],
    cursor: usize,
    focused: bool,
    styles: &'a PaneStyles,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: &'a [String], cursor: usize, focused: bool, styles: &'a PaneStyles) -> Self {
        Self {
            items,
            cursor,
            focused,
            styles,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("reddix")
            .border_style(self.styles.border(self.focused));

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|label| ListItem::new(Line::from(label.as_str())))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.styles.selection());

        let mut list_state = ratatui::widgets::ListState::default();
        list_state.select(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
