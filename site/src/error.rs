//! Content loading errors.

use std::path::PathBuf;

/// Error type for loading and validating [`crate::types::SiteContent`].
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content file could not be read
    #[error("failed to read content file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Content is not valid TOML or doesn't match the schema
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
    /// Content parsed but breaks a page invariant
    #[error("invalid content at `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl ContentError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ContentError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
