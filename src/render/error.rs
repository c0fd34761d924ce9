use std::time::Duration;

use crate::store::StoreError;

/// Why a page could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("state stream failed")]
    Stream(#[source] StoreError),

    #[error("state stream completed without emitting a snapshot")]
    EmptyState,

    #[error("template assembly failed")]
    Template(#[from] TemplateError),

    #[error("no state snapshot within {0:?}")]
    Timeout(Duration),
}

impl RenderError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::Stream(_) => "stream",
            RenderError::EmptyState => "empty_state",
            RenderError::Template(_) => "template",
            RenderError::Timeout(_) => "timeout",
        }
    }
}

/// Template parsing and substitution failures.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unterminated tag at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty tag at byte {offset}")]
    EmptyTag { offset: usize },

    #[error("unknown template key `{0}`")]
    UnknownKey(String),

    #[error("failed to serialize state")]
    State(#[from] serde_json::Error),
}
