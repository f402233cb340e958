//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar shown above the post list while search mode is on.
///
/// Input is append-only (no cursor movement within the query), so the
/// block cursor always sits at the end.
pub struct SearchInput<'a> {
    search: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self { search }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.search.active {
            return;
        }

        let spans = vec![
            Span::raw(self.search.query.clone()),
            Span::styled(
                " ",
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        let title = if self.search.query.is_empty() {
            "Search".to_string()
        } else {
            format!("Search ({} matches)", self.search.results.len())
        };

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(title));
        paragraph.render(area, buf);
    }
}
