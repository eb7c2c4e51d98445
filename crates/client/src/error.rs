//! Client error types.

use dheeto_core::ledger::LedgerError;
use dheeto_shared::AppError;
use thiserror::Error;

/// Errors returned by the ledger backend client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a failure envelope.
    #[error("Backend rejected request: {0}")]
    Api(String),

    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid envelope.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A success envelope was missing a field the endpoint promises.
    #[error("Response is missing {0}")]
    MissingField(&'static str),

    /// Fetched records failed validation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Client configuration is invalid.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Ledger(inner) => inner.into(),
            ClientError::Config(msg) => Self::Configuration(msg),
            other => Self::ExternalService(other.to_string()),
        }
    }
}
