/// Convenience result type used across scrolly.
pub type ScrollyResult<T> = Result<T, ScrollyError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The tracking core itself is total: sampling, smoothing, and phase indexing
/// are defined for every input once clamped and never return errors. Errors
/// arise only at the edges, from invalid configuration, malformed content or
/// script files, and IO.
#[derive(thiserror::Error, Debug)]
pub enum ScrollyError {
    /// Invalid user-provided options, content, or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while running a scripted scroll simulation.
    #[error("simulation error: {0}")]
    Simulation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollyError {
    /// Build a [`ScrollyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollyError::Simulation`] value.
    pub fn simulation(msg: impl Into<String>) -> Self {
        Self::Simulation(msg.into())
    }

    /// Build a [`ScrollyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
