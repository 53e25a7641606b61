/// Result alias used throughout the crate.
pub type RetrospectResult<T> = Result<T, RetrospectError>;

/// Errors surfaced at the crate's outer edges.
///
/// The render path itself is best-effort: a missing or unreadable font degrades to the built-in
/// bitmap face and never produces an error.
#[derive(thiserror::Error, Debug)]
pub enum RetrospectError {
    /// Malformed questionnaire or poster configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Layout arithmetic produced an unusable result.
    #[error("layout error: {0}")]
    Layout(String),

    /// Rasterization or image encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RetrospectError {
    /// Build a [`RetrospectError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RetrospectError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`RetrospectError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RetrospectError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
