//! Post data sources.
//!
//! The only fallible collaborator in the application: loading the post
//! list, either from the embedded sample set or from a user-supplied JSON
//! file. Load failure is recovered at startup by substituting an empty
//! list; it is logged, never surfaced as a user-facing error.

use crate::model::Post;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Embedded sample feed used when no file is given on the command line.
const SAMPLE_POSTS: &str = include_str!("../../assets/sample_posts.json");

/// Errors that can occur while loading posts.
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read the posts file.
    #[error("Failed to read posts file at {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a valid JSON post array.
    #[error("Invalid posts JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Load the post list.
///
/// With `None`, parses the embedded sample set; with a path, reads and
/// parses that file. Posts keep their file order (the master list order
/// that search results preserve).
pub fn load_posts(path: Option<&Path>) -> Result<Vec<Post>, DataError> {
    match path {
        None => parse_posts(SAMPLE_POSTS),
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_posts(&contents)
        }
    }
}

/// Parse a JSON array of posts.
fn parse_posts(json: &str) -> Result<Vec<Post>, DataError> {
    Ok(serde_json::from_str(json)?)
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VoteState;

    #[test]
    fn embedded_samples_parse_successfully() {
        let posts = load_posts(None).expect("embedded sample posts must parse");
        assert!(!posts.is_empty(), "sample set should not be empty");
    }

    #[test]
    fn embedded_samples_start_with_neutral_votes() {
        let posts = load_posts(None).unwrap();
        assert!(posts.iter().all(|p| p.vote == VoteState::Neutral));
    }

    #[test]
    fn missing_file_returns_io_error() {
        let result = load_posts(Some(Path::new("/nonexistent/posts.json")));
        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn malformed_json_returns_invalid_json() {
        let dir = std::env::temp_dir().join("reddix_test_data_malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("posts.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = load_posts(Some(&path));
        assert!(matches!(result, Err(DataError::InvalidJson(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn valid_file_loads_in_order() {
        let dir = std::env::temp_dir().join("reddix_test_data_valid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("posts.json");
        std::fs::write(
            &path,
            r#"[{"title":"first","author":"a","subreddit":"s","score":1},
               {"title":"second","author":"b","subreddit":"s","score":2}]"#,
        )
        .unwrap();

        let posts = load_posts(Some(&path)).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "first");
        assert_eq!(posts[1].title, "second");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
