/// Crate-wide result alias.
pub type GlowResult<T> = Result<T, GlowError>;

/// Error type for scene construction and output encoding.
#[derive(thiserror::Error, Debug)]
pub enum GlowError {
    /// Degenerate geometry or invalid configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while encoding or writing the output image.
    #[error("sink error: {0}")]
    Sink(String),

    /// Passthrough for errors from external collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowError {
    /// Build a [`GlowError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowError::Sink`].
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
