//! Error types

use thiserror::Error;
use vscroll::{ConfigError, ParseSizeError};

/// A body height that cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHeightError {
    #[error("height '{0}' is out of range")]
    OutOfRange(String),
}

/// Errors raised while configuring components.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Size(#[from] ParseSizeError),
    #[error(transparent)]
    Height(#[from] ParseHeightError),
    #[error("invalid props: {0}")]
    Props(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
