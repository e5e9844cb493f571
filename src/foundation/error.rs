/// Convenience result type used across buzzclip.
pub type BuzzResult<T> = Result<T, BuzzError>;

/// Top-level error taxonomy used by generator and session APIs.
#[derive(thiserror::Error, Debug)]
pub enum BuzzError {
    /// Invalid clip configuration or render options. Raised before any generation begins.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Audio normalization would divide by a zero (or non-finite) peak.
    #[error("degenerate signal: {0}")]
    DegenerateSignal(String),

    /// Failures while handing frames or audio to a sink.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuzzError {
    /// Build a [`BuzzError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`BuzzError::DegenerateSignal`] value.
    pub fn degenerate_signal(msg: impl Into<String>) -> Self {
        Self::DegenerateSignal(msg.into())
    }

    /// Build a [`BuzzError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`BuzzError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
