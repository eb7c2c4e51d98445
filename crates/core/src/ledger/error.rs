//! Ledger error types for validation and aggregation.
//!
//! Every aggregation entry point validates its records before summing them.
//! A malformed record is reported here and never counted as zero.

use dheeto_shared::AppError;
use dheeto_shared::types::{ItemId, LedgerId, PersonId};
use thiserror::Error;

/// Errors that can occur during ledger validation and aggregation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    // ========== Numeric Errors ==========
    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Transaction amount cannot be zero.
    #[error("Transaction amount cannot be zero")]
    ZeroAmount,

    /// Item weight cannot be negative.
    #[error("Weight cannot be negative")]
    NegativeWeight,

    /// Item purity cannot be negative.
    #[error("Purity cannot be negative")]
    NegativePurity,

    /// A numeric field could not be parsed.
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Name of the field being parsed.
        field: &'static str,
        /// The raw text that was rejected.
        value: String,
    },

    /// A running total left the representable decimal range.
    #[error("Total {0} overflowed")]
    Overflow(&'static str),

    /// A required field was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A name was empty after trimming.
    #[error("Name cannot be empty")]
    EmptyName,

    // ========== Variant Errors ==========
    /// Metal type is neither gold nor silver.
    #[error("Unknown metal type: {0:?}")]
    UnknownMetalType(String),

    /// Direction is neither gave nor received.
    #[error("Unknown transaction direction: {0:?}")]
    UnknownDirection(String),

    // ========== Record Consistency Errors ==========
    /// Item settlement flag and timestamp disagree.
    #[error("Item {item_id} has inconsistent settlement flag and timestamp")]
    SettlementMismatch {
        /// The offending item.
        item_id: ItemId,
    },

    /// A ledger passed for aggregation belongs to another person.
    #[error("Ledger {ledger_id} does not belong to person {expected}")]
    ForeignLedger {
        /// The offending ledger.
        ledger_id: LedgerId,
        /// The person being aggregated.
        expected: PersonId,
    },
}

impl LedgerError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeWeight => "NEGATIVE_WEIGHT",
            Self::NegativePurity => "NEGATIVE_PURITY",
            Self::InvalidNumber { .. } => "INVALID_NUMBER",
            Self::Overflow(_) => "OVERFLOW",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::EmptyName => "EMPTY_NAME",
            Self::UnknownMetalType(_) => "UNKNOWN_METAL_TYPE",
            Self::UnknownDirection(_) => "UNKNOWN_DIRECTION",
            Self::SettlementMismatch { .. } => "SETTLEMENT_MISMATCH",
            Self::ForeignLedger { .. } => "FOREIGN_LEDGER",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
