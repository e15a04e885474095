/// Convenience result type used across the crate.
pub type CreditsResult<T> = Result<T, CreditsError>;

/// Top-level error taxonomy used by the renderer and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum CreditsError {
    /// Invalid user-provided request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font files that could not be read or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while laying out or rasterizing text.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from the external video encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CreditsError {
    /// Build a [`CreditsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CreditsError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CreditsError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CreditsError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CreditsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
