/// Convenience result type used across the crate.
pub type BubbleResult<T> = Result<T, BubbleError>;

/// Top-level error taxonomy used by the compositing APIs.
#[derive(thiserror::Error, Debug)]
pub enum BubbleError {
    /// Caller bug: invalid shape parameters or orientation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unusable source image (empty, unsupported pixel layout, degenerate fit).
    #[error("input error: {0}")]
    Input(String),

    /// Failures while rasterizing or assembling output buffers.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BubbleError {
    /// Build a [`BubbleError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`BubbleError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`BubbleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
