/// Result alias used across the crate.
pub type TreemapResult<T> = Result<T, TreemapError>;

/// Errors surfaced by parsing, layout, rendering and encoding.
#[derive(thiserror::Error, Debug)]
pub enum TreemapError {
    /// Malformed input, or a tree that could not be serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A block color that does not decode as `0xRRGGBB`.
    #[error("color error: {0}")]
    Color(String),

    /// The cancellation token fired before the operation finished.
    #[error("layout canceled")]
    Canceled,

    /// The renderer could not produce a frame.
    #[error("render error: {0}")]
    Render(String),

    /// The rendered frame could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else, usually I/O wrapped with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TreemapError {
    /// Build a [`TreemapError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TreemapError::Color`].
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`TreemapError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TreemapError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// True for [`TreemapError::Canceled`].
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}

impl From<serde_json::Error> for TreemapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
