//! Post list pane: fixed-height cards over the visible scroll window.

use crate::state::AppState;
use crate::view::constants::POST_CARD_HEIGHT;
use crate::view::styles::PaneStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the visible slice of the active list as bordered cards.
///
/// The window starts at `nav.posts_scroll`; the scroll handler guarantees
/// the cursor is inside it, so this only draws what fits.
pub fn render_post_cards(frame: &mut Frame, area: Rect, state: &AppState, styles: &PaneStyles) {
    let visible = state.visible_posts();
    let offset = state.nav.posts_scroll;
    let focused = state.nav.active_pane == crate::state::Pane::PostList;

    if state.active_len() == 0 {
        let placeholder = if state.search.active {
            "No matching posts. Type to search title, subreddit, or author."
        } else {
            "No posts loaded."
        };
        let paragraph = Paragraph::new(placeholder)
            .style(styles.dim())
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(paragraph, area);
        return;
    }

    for row in 0..visible {
        let active_index = offset + row;
        let Some(post) = state.post_at(active_index) else {
            break;
        };

        let card_top = area.y + (row as u16) * POST_CARD_HEIGHT;
        if card_top + POST_CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, card_top, area.width, POST_CARD_HEIGHT);

        let selected = active_index == state.nav.posts_cursor;
        let border_style = if selected {
            styles.border(focused)
        } else {
            styles.dim()
        };

        let title_style = if selected {
            styles.selection()
        } else {
            ratatui::style::Style::default()
        };

        let vote_marker = match post.vote {
            crate::model::VoteState::Up => "▲",
            crate::model::VoteState::Down => "▼",
            crate::model::VoteState::Neutral => "•",
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(truncate(&post.title, inner_width), title_style)),
            Line::from(Span::styled(
                truncate(
                    &format!("r/{} · u/{}", post.subreddit, post.author),
                    inner_width,
                ),
                styles.dim(),
            )),
            Line::from(Span::styled(
                format!("{vote_marker} {}", post.score),
                styles.vote(post.vote),
            )),
        ];

        let card = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(card, card_area);
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
