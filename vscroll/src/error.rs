use thiserror::Error;

/// A size preset name that is not one of the five known presets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size preset '{0}', expected one of mini, small, medium, large, huge")]
pub struct ParseSizeError(pub String);

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

impl ConfigError {
    pub fn zero(field: &'static str) -> Self {
        Self::Zero { field }
    }
}
