//! Feed post domain type and vote algebra.
//!
//! A post's identity (title, author, subreddit, body) is fixed at load
//! time; only the vote state and score mutate. Votes are mutually
//! exclusive and self-cancelling: toggling the active direction clears it,
//! toggling the opposite direction replaces it.

use serde::Deserialize;

// ===== VoteState =====

/// The viewer's vote on a post. Sum type - exactly one direction at a time.
///
/// # State Transitions
///
/// - `toggle_upvote`: Neutral → Up, Up → Neutral, Down → Up
/// - `toggle_downvote`: Neutral → Down, Down → Neutral, Up → Down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoteState {
    /// No vote cast.
    #[default]
    Neutral,
    /// Post is upvoted.
    Up,
    /// Post is downvoted.
    Down,
}

// ===== Post =====

/// A single feed post.
///
/// Deserialized from the sample-data JSON; `vote` always starts Neutral
/// and is never part of the wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Post headline shown in the list pane.
    pub title: String,
    /// Author username (without the `u/` prefix).
    pub author: String,
    /// Subreddit name (without the `r/` prefix).
    pub subreddit: String,
    /// Full body text shown in the preview pane.
    #[serde(default)]
    pub body: String,
    /// Net score. Adjusted in place by vote toggles.
    pub score: i32,
    /// The viewer's current vote on this post.
    #[serde(skip)]
    pub vote: VoteState,
}

impl Post {
    /// Construct a post with a neutral vote.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        subreddit: impl Into<String>,
        body: impl Into<String>,
        score: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            subreddit: subreddit.into(),
            body: body.into(),
            score,
            vote: VoteState::Neutral,
        }
    }

    /// Toggle the upvote, adjusting the score.
    ///
    /// An existing downvote is replaced (score swings by 2); an existing
    /// upvote is cleared. Two identical toggles cancel out exactly.
    pub fn toggle_upvote(&mut self) {
        let (vote, delta) = match self.vote {
            VoteState::Neutral => (VoteState::Up, 1),
            VoteState::Up => (VoteState::Neutral, -1),
            VoteState::Down => (VoteState::Up, 2),
        };
        self.vote = vote;
        self.score += delta;
    }

    /// Toggle the downvote, adjusting the score. Mirror of
    /// [`Post::toggle_upvote`].
    pub fn toggle_downvote(&mut self) {
        let (vote, delta) = match self.vote {
            VoteState::Neutral => (VoteState::Down, -1),
            VoteState::Down => (VoteState::Neutral, 1),
            VoteState::Up => (VoteState::Down, -2),
        };
        self.vote = vote;
        self.score += delta;
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new("rust tips", "ferris", "programming", "some body", 10)
    }

    #[test]
    fn new_post_starts_neutral() {
        let post = sample_post();
        assert_eq!(post.vote, VoteState::Neutral);
        assert_eq!(post.score, 10);
    }

    #[test]
    fn upvote_from_neutral_increments_score() {
        let mut post = sample_post();
        post.toggle_upvote();
        assert_eq!(post.vote, VoteState::Up);
        assert_eq!(post.score, 11);
    }

    #[test]
    fn double_upvote_returns_to_original() {
        let mut post = sample_post();
        post.toggle_upvote();
        post.toggle_upvote();
        assert_eq!(post.vote, VoteState::Neutral);
        assert_eq!(post.score, 10);
    }

    #[test]
    fn downvote_from_neutral_decrements_score() {
        let mut post = sample_post();
        post.toggle_downvote();
        assert_eq!(post.vote, VoteState::Down);
        assert_eq!(post.score, 9);
    }

    #[test]
    fn double_downvote_returns_to_original() {
        let mut post = sample_post();
        post.toggle_downvote();
        post.toggle_downvote();
        assert_eq!(post.vote, VoteState::Neutral);
        assert_eq!(post.score, 10);
    }

    #[test]
    fn upvote_then_downvote_leaves_only_downvote() {
        let mut post = sample_post();
        post.toggle_upvote();
        post.toggle_downvote();
        assert_eq!(post.vote, VoteState::Down);
        assert_eq!(post.score, 9, "net effect should equal a single downvote");
    }

    #[test]
    fn downvote_then_upvote_leaves_only_upvote() {
        let mut post = sample_post();
        post.toggle_downvote();
        post.toggle_upvote();
        assert_eq!(post.vote, VoteState::Up);
        assert_eq!(post.score, 11, "net effect should equal a single upvote");
    }

    #[test]
    fn vote_is_skipped_during_deserialization() {
        let json = r#"{"title":"t","author":"a","subreddit":"s","body":"b","score":5}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.vote, VoteState::Neutral);
        assert_eq!(post.score, 5);
    }

    #[test]
    fn body_defaults_to_empty_when_absent() {
        let json = r#"{"title":"t","author":"a","subreddit":"s","score":0}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.body.is_empty());
    }
}
