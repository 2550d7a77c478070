/// Result alias used across the crate's fallible edges.
pub type GreetfxResult<T> = Result<T, GreetfxError>;

/// Error type for configuration, color parsing, animation tracks and raster output.
///
/// The simulation core itself is infallible; these errors only come from the edges.
#[derive(thiserror::Error, Debug)]
pub enum GreetfxError {
    /// Input violated a documented invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A keyframe track was malformed.
    #[error("animation error: {0}")]
    Animation(String),

    /// Scene configuration could not be loaded or applied.
    #[error("config error: {0}")]
    Config(String),

    /// A drawing surface or pixel buffer operation failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GreetfxError {
    /// Build a [`GreetfxError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GreetfxError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`GreetfxError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GreetfxError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GreetfxError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
