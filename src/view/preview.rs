//! Preview pane: full text of the selected post.

use crate::state::AppState;
use crate::view::styles::PaneStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the selected post's full content, scrolled by `preview_scroll`.
///
/// The scroll offset has no upper bound in state; `Paragraph::scroll`
/// simply shows blank space past the end of the content.
pub fn render_preview(frame: &mut Frame, area: Rect, state: &AppState, styles: &PaneStyles) {
    let focused = state.nav.active_pane == crate::state::Pane::Preview;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(styles.border(focused));

    let Some(post) = state.selected_post() else {
        let placeholder = Paragraph::new("Select a post to preview it.")
            .style(styles.dim())
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let vote_line = match post.vote {
        crate::model::VoteState::Up => format!("▲ {} (upvoted · u to undo)", post.score),
        crate::model::VoteState::Down => format!("▼ {} (downvoted · d to undo)", post.score),
        crate::model::VoteState::Neutral => format!("• {} (u upvote · d downvote)", post.score),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            ratatui::style::Style::default().add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("r/{} · u/{}", post.subreddit, post.author),
            styles.dim(),
        )),
        Line::from(Span::styled(vote_line, styles.vote(post.vote))),
        Line::from(""),
    ];
    for body_line in post.body.lines() {
        lines.push(Line::from(body_line.to_string()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.nav.preview_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
