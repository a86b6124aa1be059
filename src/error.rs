//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    /// The requested slug has no corresponding post file
    #[error("No post found for slug '{0}'")]
    MissingPost(String),

    /// A post file whose front-matter could not be turned into a `PostMeta`
    #[error("Malformed front-matter in {path:?}: {reason}")]
    MalformedFrontmatter { path: PathBuf, reason: String },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk posts directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ContentError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedFrontmatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means "nothing to show" rather than a broken site
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingPost(_))
    }
}
