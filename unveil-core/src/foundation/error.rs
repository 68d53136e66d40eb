/// Convenience result type used across the engine.
pub type UnveilResult<T> = Result<T, UnveilError>;

/// Top-level error taxonomy for page construction and evaluation.
///
/// Runtime degradation (missing viewport, missing scroll provider, a shape
/// that cannot be sampled) is deliberately NOT represented here: those paths
/// fall back to visible content per the fail-open policy. Errors are reserved
/// for malformed models and wiring mistakes.
#[derive(thiserror::Error, Debug)]
pub enum UnveilError {
    /// Invalid user-provided page or section data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling animation expressions.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating page state for an instant.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnveilError {
    /// Build an [`UnveilError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`UnveilError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`UnveilError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build an [`UnveilError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
