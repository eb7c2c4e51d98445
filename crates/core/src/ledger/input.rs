//! Validation of user-entered ledger data.
//!
//! Drafts hold raw form text. `validate` turns a draft into the typed payload
//! sent to the backend. Unparseable numbers and empty required fields become
//! errors. They are never replaced with zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::LedgerError;
use super::types::{Direction, MetalType};

/// Numeric fields accepted from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// Transaction amount.
    Amount,
    /// Item weight in tola.
    Weight,
    /// Item purity.
    Purity,
}

impl NumericField {
    /// Wire name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Weight => "weightInTola",
            Self::Purity => "purity",
        }
    }

    const fn negative_error(self) -> LedgerError {
        match self {
            Self::Amount => LedgerError::NegativeAmount,
            Self::Weight => LedgerError::NegativeWeight,
            Self::Purity => LedgerError::NegativePurity,
        }
    }
}

/// Parses a required, non-negative decimal field.
///
/// # Errors
///
/// - `MissingField` if `raw` is empty or whitespace
/// - `InvalidNumber` if `raw` is not a finite decimal (`"abc"`, `"NaN"`, `"1.2.3"`)
/// - `NegativeAmount` / `NegativeWeight` / `NegativePurity` if the value is below zero
pub fn parse_decimal_field(field: NumericField, raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField(field.name()));
    }

    let value = Decimal::from_str(trimmed).map_err(|_| LedgerError::InvalidNumber {
        field: field.name(),
        value: trimmed.to_string(),
    })?;

    if value < Decimal::ZERO {
        return Err(field.negative_error());
    }
    Ok(value)
}

fn required_name(raw: &str) -> Result<String, LedgerError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyName);
    }
    Ok(name.to_string())
}

fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Raw item form input.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    /// Item name.
    pub name: String,
    /// Metal type text (`gold` or `silver`).
    pub metal: String,
    /// Purity text. Optional: empty means zero.
    pub purity: String,
    /// Weight in tola text. Required.
    pub weight_in_tola: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Validated item payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    /// Item name.
    pub name: String,
    /// Metal type.
    #[serde(rename = "type")]
    pub metal: MetalType,
    /// Purity.
    #[serde(with = "rust_decimal::serde::float")]
    pub purity: Decimal,
    /// Weight in tola (zero allowed).
    #[serde(with = "rust_decimal::serde::float")]
    pub weight_in_tola: Decimal,
    /// Optional description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemDraft {
    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// Returns the first `LedgerError` found.
    pub fn validate(&self) -> Result<NewItem, LedgerError> {
        let name = required_name(&self.name)?;
        let metal = MetalType::from_str(&self.metal)?;
        let weight_in_tola = parse_decimal_field(NumericField::Weight, &self.weight_in_tola)?;
        let purity = if self.purity.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_decimal_field(NumericField::Purity, &self.purity)?
        };

        Ok(NewItem {
            name,
            metal,
            purity,
            weight_in_tola,
            description: optional_text(self.description.as_deref()),
        })
    }
}

/// Raw transaction form input.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Direction text (`gave` or `received`).
    pub direction: String,
    /// Amount text. Required and positive.
    pub amount: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Validated transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
    /// Direction of the movement.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Amount (strictly positive).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Optional description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TransactionDraft {
    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// Returns the first `LedgerError` found. A zero amount is `ZeroAmount`.
    pub fn validate(&self) -> Result<NewTransaction, LedgerError> {
        let direction = Direction::from_str(&self.direction)?;
        let amount = parse_decimal_field(NumericField::Amount, &self.amount)?;
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        Ok(NewTransaction {
            direction,
            amount,
            description: optional_text(self.description.as_deref()),
        })
    }
}

/// Raw person form input.
#[derive(Debug, Clone, Default)]
pub struct PersonDraft {
    /// Display name.
    pub name: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional description.
    pub description: Option<String>,
}

/// Validated person payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPerson {
    /// Display name.
    pub name: String,
    /// Optional phone number.
    #[serde(rename = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PersonDraft {
    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyName` if the name is blank.
    pub fn validate(&self) -> Result<NewPerson, LedgerError> {
        Ok(NewPerson {
            name: required_name(&self.name)?,
            phone: optional_text(self.phone.as_deref()),
            description: optional_text(self.description.as_deref()),
        })
    }
}
