/// Convenience result type used across holemask.
pub type HoleMaskResult<T> = Result<T, HoleMaskError>;

/// Top-level error taxonomy used at the configuration and IO boundary.
///
/// The geometry core (parsing, rasterization, fill planning, stamping) never fails; malformed or
/// degenerate input degrades to an inert result instead.
#[derive(thiserror::Error, Debug)]
pub enum HoleMaskError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while driving a fill animation.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or encoder failures.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HoleMaskError {
    /// Build a [`HoleMaskError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HoleMaskError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HoleMaskError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`HoleMaskError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
