//! Core error types for search operations.
//!
//! All errors are explicit and typed - no panics allowed. Errors coming from a
//! neighbor source abort the whole run; the explorer never retries or skips.

use thiserror::Error;

use crate::node::NodeId;

/// Core error type for Wikidart operations.
#[derive(Debug, Error)]
pub enum Error {
    // Neighbor source errors
    #[error("failed to fetch page '{id}': {reason}")]
    Fetch { id: String, reason: String },

    #[error("failed to parse page '{id}': {reason}")]
    Parse { id: String, reason: String },

    // Tree errors
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("node '{value}' has already been expanded")]
    AlreadyExpanded { value: String },
}

impl Error {
    /// Create a fetch error for the page named `id`.
    pub fn fetch(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error for the page named `id`.
    pub fn parse(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_the_page() {
        let err = Error::fetch("Rust_(programming_language)", "connection refused");
        assert_eq!(
            err.to_string(),
            "failed to fetch page 'Rust_(programming_language)': connection refused"
        );
    }

    #[test]
    fn tree_errors_name_the_node() {
        let err = Error::AlreadyExpanded {
            value: "Ferris".to_string(),
        };
        assert!(err.to_string().contains("Ferris"));
        assert!(Error::UnknownNode(NodeId::from_index(7)).to_string().contains('7'));
    }
}
