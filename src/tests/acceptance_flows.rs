//! Harness-based acceptance tests for the main user flows.
//!
//! Each test drives the app through the same key events a user would
//! press and asserts on resulting state and rendered frames.

use crate::model::VoteState;
use crate::state::{Pane, SettingsField};
use crate::test_harness::FeedHarness;
use crossterm::event::{KeyCode, KeyModifiers};

// ===== Quit =====

#[test]
fn q_from_idle_quits() {
    let mut harness = FeedHarness::new();
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}

#[test]
fn ctrl_c_quits_even_while_typing() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter); // Explore: search mode on
    harness.type_text("ru");
    assert!(harness.is_running(), "plain chars must not quit during search");
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn q_is_text_while_searching() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    assert!(!harness.send_key(KeyCode::Char('q')));
    assert_eq!(harness.state().search.query, "q");
}

// ===== Navigation and voting =====

#[test]
fn home_entry_focuses_post_list() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Enter);
    assert_eq!(harness.state().nav.active_pane, Pane::PostList);
    harness.send_key(KeyCode::Char('j'));
    assert_eq!(harness.state().nav.posts_cursor, 1);
    harness.send_key(KeyCode::Char('k'));
    assert_eq!(harness.state().nav.posts_cursor, 0);
}

#[test]
fn upvote_from_preview_adjusts_score_and_marker() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Enter); // Home
    harness.send_key(KeyCode::Tab); // PostList -> Preview
    assert_eq!(harness.state().nav.active_pane, Pane::Preview);

    harness.send_key(KeyCode::Char('u'));
    assert_eq!(harness.state().posts()[0].score, 413);
    assert_eq!(harness.state().posts()[0].vote, VoteState::Up);

    let frame = harness.render_to_string();
    assert!(frame.contains("▲ 413"), "preview should show the upvoted score:\n{frame}");

    harness.send_key(KeyCode::Char('u'));
    assert_eq!(harness.state().posts()[0].score, 412);
    assert_eq!(harness.state().posts()[0].vote, VoteState::Neutral);

    harness.send_key(KeyCode::Char('d'));
    assert_eq!(harness.state().posts()[0].score, 411);
    assert_eq!(harness.state().posts()[0].vote, VoteState::Down);
}

#[test]
fn vote_keys_outside_preview_do_not_vote() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Enter); // Home, focus PostList
    harness.send_key(KeyCode::Char('u'));
    assert_eq!(harness.state().posts()[0].score, 412);
    assert_eq!(harness.state().posts()[0].vote, VoteState::Neutral);
}

// ===== Search flow =====

#[test]
fn search_filters_and_navigates_results() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j')); // sidebar -> Explore
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().search.active);
    assert_eq!(harness.state().nav.active_pane, Pane::PostList);

    harness.type_text("rust");
    assert_eq!(harness.state().search.results, vec![0, 2]);

    // j moves through results; the selection resolves to the master list
    harness.send_key(KeyCode::Char('j'));
    assert_eq!(harness.state().nav.posts_cursor, 1);
    let selected = harness.state().selected_post().unwrap();
    assert!(selected.title.starts_with("Rusty water heater"));

    let frame = harness.render_to_string();
    assert!(frame.contains("Search (2 matches)"), "frame:\n{frame}");
    assert!(frame.contains("2 of 4 posts"), "frame:\n{frame}");
}

#[test]
fn backspace_and_esc_edit_the_query() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    harness.type_text("rust");

    harness.send_key(KeyCode::Backspace);
    assert_eq!(harness.state().search.query, "rus");
    assert_eq!(harness.state().search.results, vec![0, 2]);

    harness.send_key(KeyCode::Esc);
    assert!(harness.state().search.active, "esc clears the query, not the mode");
    assert_eq!(harness.state().search.query, "");
    assert!(harness.state().search.results.is_empty());
}

#[test]
fn empty_query_shows_no_results() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    assert_eq!(harness.state().active_len(), 0);

    let frame = harness.render_to_string();
    assert!(frame.contains("No matching posts"), "frame:\n{frame}");
}

#[test]
fn votes_made_through_results_stick_in_master_list() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    harness.type_text("rust");
    harness.send_key(KeyCode::Char('j')); // second result = master index 2
    harness.send_key(KeyCode::Tab); // -> Preview
    harness.send_key(KeyCode::Tab); // -> Sidebar
    harness.send_key(KeyCode::Tab); // -> PostList
    harness.send_key(KeyCode::Tab); // -> Preview again
    harness.send_key(KeyCode::Char('u'));

    assert_eq!(harness.state().posts()[2].score, 24);
    assert_eq!(harness.state().posts()[2].vote, VoteState::Up);
}

// ===== Settings flow =====

#[test]
fn settings_fields_edit_inline_and_persist() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j')); // sidebar -> Settings
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().settings.visible);

    harness.send_key(KeyCode::Char('j')); // field cursor -> ClientSecret
    assert_eq!(harness.state().settings.cursor, SettingsField::ClientSecret);

    harness.send_key(KeyCode::Enter); // edit mode
    harness.type_text("hunter2");
    assert_eq!(harness.state().settings.client_secret, "hunter2");

    let frame = harness.render_to_string();
    assert!(frame.contains("*******"), "secret must render masked:\n{frame}");
    assert!(!frame.contains("hunter2"), "secret must not render in clear:\n{frame}");

    harness.send_key(KeyCode::Enter); // leave edit mode, buffer kept
    assert_eq!(harness.state().settings.editing, None);
    assert_eq!(harness.state().settings.client_secret, "hunter2");
}

#[test]
fn q_quits_in_settings_field_selection() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().settings.visible);

    // Field selection (not editing) does not capture text
    assert!(harness.send_key(KeyCode::Char('q')));
}

#[test]
fn q_is_text_while_editing_a_field() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Enter); // edit ApiKey
    assert!(!harness.send_key(KeyCode::Char('q')));
    assert_eq!(harness.state().settings.api_key, "q");
}

#[test]
fn home_entry_closes_settings() {
    let mut harness = FeedHarness::new();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().settings.visible);

    harness.send_key(KeyCode::Tab); // restricted ring: PostList -> Sidebar
    assert_eq!(harness.state().nav.active_pane, Pane::Sidebar);
    harness.send_key(KeyCode::Char('k'));
    harness.send_key(KeyCode::Char('k'));
    harness.send_key(KeyCode::Enter); // Home
    assert!(!harness.state().settings.visible);
}

// ===== Rendering =====

#[test]
fn initial_frame_shows_all_three_panes() {
    let mut harness = FeedHarness::new();
    let frame = harness.render_to_string();
    assert!(frame.contains("Home"), "frame:\n{frame}");
    assert!(frame.contains("Explore"), "frame:\n{frame}");
    assert!(frame.contains("Settings"), "frame:\n{frame}");
    assert!(frame.contains("Preview"), "frame:\n{frame}");
    assert!(frame.contains("4 posts"), "frame:\n{frame}");
}

#[test]
fn tiny_terminal_still_renders() {
    let mut harness =
        FeedHarness::with_posts_and_size(crate::test_harness::sample_posts(), 30, 8);
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('j'));
    let frame = harness.render_to_string();
    assert!(!frame.is_empty());
}
