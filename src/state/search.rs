//! Search filter state and matching (pure).
//!
//! Results are indices into the master post list rather than copies, so a
//! vote toggled through the filtered view is the same mutation the full
//! list sees.

use crate::model::Post;

// ===== SearchState =====

/// Search mode state.
///
/// `active` means the search bar is shown and the post list displays
/// `results` instead of the master list. An empty query always has empty
/// results: search shows nothing until the user types, not everything.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Whether search mode is on (Explore entry selected).
    pub active: bool,
    /// Current query text, edited one key event at a time.
    pub query: String,
    /// Indices into the master list matching the query, in master order.
    pub results: Vec<usize>,
}

impl SearchState {
    /// Re-run the filter against the master list. Called synchronously on
    /// every query edit; the sample-scale list makes that cheap.
    pub fn run(&mut self, posts: &[Post]) {
        self.results = filter_posts(&self.query, posts);
    }

    /// Clear the query and results, keeping search mode itself on.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }
}

// ===== Filtering =====

/// Case-insensitive substring filter over title, subreddit, and author.
///
/// Returns indices into `posts` with the original order preserved. An
/// empty query yields no results.
pub fn filter_posts(query: &str, posts: &[Post]) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| {
            post.title.to_lowercase().contains(&needle)
                || post.subreddit.to_lowercase().contains(&needle)
                || post.author.to_lowercase().contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
