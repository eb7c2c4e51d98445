//! Response envelopes returned by the ledger backend.
//!
//! Every endpoint answers `{ "success": bool, ... }`. A failure envelope
//! carries only a `message` and is the backend's sole error signal.

use dheeto_shared::types::{PageMeta, PageResponse};
use serde::Deserialize;

use crate::error::ClientError;

/// Raw response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload on success.
    pub data: Option<T>,
    /// Human-readable message (always present on failure).
    pub message: Option<String>,
    /// Pagination metadata for list endpoints.
    pub pagination: Option<PageMeta>,
}

impl<T> Envelope<T> {
    fn failure(self) -> Result<Self, ClientError> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Api(
                self.message
                    .unwrap_or_else(|| "request failed without a message".to_string()),
            ))
        }
    }

    /// Returns the payload, or the failure message as `ClientError::Api`.
    pub fn into_data(self) -> Result<T, ClientError> {
        self.failure()?.data.ok_or(ClientError::MissingField("data"))
    }

    /// Returns the success message (used by delete endpoints).
    pub fn into_message(self) -> Result<String, ClientError> {
        Ok(self.failure()?.message.unwrap_or_default())
    }
}

impl<T> Envelope<Vec<T>> {
    /// Returns a page of records with its metadata.
    pub fn into_page(self) -> Result<PageResponse<T>, ClientError> {
        let envelope = self.failure()?;
        let pagination = envelope
            .pagination
            .ok_or(ClientError::MissingField("pagination"))?;
        let data = envelope.data.ok_or(ClientError::MissingField("data"))?;
        Ok(PageResponse { data, pagination })
    }
}
