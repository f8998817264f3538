use serde::Serialize;
use thiserror::Error;

/// Message returned to callers whenever the station feed cannot be used.
/// Feed-level detail is logged, never surfaced in the payload.
pub const API_ERROR_MESSAGE: &str = "Hubo un error al conectarse con la API. Inténtelo más tarde.";

pub const NO_RESULTS_MESSAGE: &str = "No se encontraron estaciones que cumplan los criterios.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Failure categories of a station search, one per payload error kind.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Caller input rejected before the feed was contacted.
    #[error("{0}")]
    Validation(String),

    /// The station feed was unreachable or returned something unusable.
    #[error("{}", API_ERROR_MESSAGE)]
    Feed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The search ran but no station satisfied the criteria.
    #[error("{}", NO_RESULTS_MESSAGE)]
    NoResults,

    #[error("Error inesperado: {0}")]
    Unexpected(String),
}

impl SearchError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::Feed { .. } => ErrorKind::ApiError,
            Self::NoResults => ErrorKind::NoResults,
            Self::Unexpected(_) => ErrorKind::UnexpectedError,
        }
    }
}

/// Wire name of each failure category in the `error` field of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ValidationError,
    ApiError,
    NoResults,
    UnexpectedError,
}
