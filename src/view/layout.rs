//! Three-pane layout rendering.
//!
//! Chrome row counts here must agree with `state::scroll`, which derives
//! the visible card count from the same numbers.

use crate::state::{AppState, Pane};
use crate::view::constants::{
    CONTROL_BAR_HEIGHT, LIST_HEADING_HEIGHT, LIST_WIDTH_PERCENT, SEARCH_BAR_HEIGHT, SIDEBAR_WIDTH,
};
use crate::view::styles::PaneStyles;
use crate::view::{posts, preview, search_input::SearchInput, settings::SettingsPanel, sidebar::Sidebar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the full frame: sidebar | post list | preview, control bar at
/// the bottom. The settings modal replaces the list column when open.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &PaneStyles) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CONTROL_BAR_HEIGHT),
        ])
        .split(frame.area());

    let content_area = vertical[0];
    let control_area = vertical[1];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Percentage(LIST_WIDTH_PERCENT),
            Constraint::Min(0),
        ])
        .split(content_area);

    let sidebar_widget = Sidebar::new(
        state.sidebar_items(),
        state.nav.sidebar_cursor,
        state.nav.active_pane == Pane::Sidebar,
        styles,
    );
    frame.render_widget(sidebar_widget, horizontal[0]);

    if state.settings.visible {
        let panel = SettingsPanel::new(
            &state.settings,
            state.nav.active_pane == Pane::PostList,
            styles,
        );
        frame.render_widget(panel, horizontal[1]);
    } else {
        render_list_column(frame, horizontal[1], state, styles);
    }

    preview::render_preview(frame, horizontal[2], state, styles);
    render_control_bar(frame, control_area, state, styles);
}

/// List column: heading, search bar while searching, then the cards.
fn render_list_column(frame: &mut Frame, area: Rect, state: &AppState, styles: &PaneStyles) {
    let constraints = if state.search.active {
        vec![
            Constraint::Length(LIST_HEADING_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
        ]
    } else {
        vec![Constraint::Length(LIST_HEADING_HEIGHT), Constraint::Min(0)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_heading(frame, chunks[0], state, styles);

    if state.search.active {
        frame.render_widget(SearchInput::new(&state.search), chunks[1]);
        posts::render_post_cards(frame, chunks[2], state, styles);
    } else {
        posts::render_post_cards(frame, chunks[1], state, styles);
    }
}

fn render_heading(frame: &mut Frame, area: Rect, state: &AppState, styles: &PaneStyles) {
    let focused = state.nav.active_pane == Pane::PostList;
    let summary = if state.search.active {
        format!("{} of {} posts", state.active_len(), state.posts().len())
    } else {
        format!("{} posts", state.posts().len())
    };

    let heading = Paragraph::new(Line::from(summary))
        .style(styles.dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Posts")
                .border_style(styles.border(focused)),
        );
    frame.render_widget(heading, area);
}

fn render_control_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &PaneStyles) {
    let hints = if state.settings.editing.is_some() {
        "type to edit · backspace delete · enter/esc done"
    } else if state.search.active && state.nav.active_pane == Pane::PostList {
        "type to search · j/k results · esc clear · tab panes"
    } else if state.settings.visible {
        "tab panes · j/k fields · enter edit · q quit"
    } else {
        "tab panes · j/k move · enter select · u/d vote · q quit"
    };

    let bar = Paragraph::new(Line::from(hints)).style(styles.dim()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border(false)),
    );
    frame.render_widget(bar, area);
}
