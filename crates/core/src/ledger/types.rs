//! Ledger domain types.
//!
//! These mirror the records served by the ledger backend: a [`Person`] owns
//! [`Ledger`]s, and each ledger owns [`Item`]s and [`Transaction`]s. Field
//! names follow the backend's camelCase JSON.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use dheeto_shared::types::{ItemId, LedgerId, PersonId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Metal an item is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalType {
    /// Gold item.
    Gold,
    /// Silver item.
    Silver,
}

impl MetalType {
    /// Returns the wire name of the metal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }
}

impl std::fmt::Display for MetalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetalType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            _ => Err(LedgerError::UnknownMetalType(s.to_string())),
        }
    }
}

/// Direction of a cash movement, seen from the ledger owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money flowed from the ledger owner to the person.
    Gave,
    /// Money flowed from the person to the ledger owner.
    Received,
}

impl Direction {
    /// Returns the amount signed by direction (positive for received, negative for gave).
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Received => amount,
            Self::Gave => -amount,
        }
    }

    /// Returns the wire name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gave => "gave",
            Self::Received => "received",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gave" => Ok(Self::Gave),
            "received" => Ok(Self::Received),
            _ => Err(LedgerError::UnknownDirection(s.to_string())),
        }
    }
}

/// A contact whose lending and borrowing is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Backend-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: PersonId,
    /// Display name (non-empty).
    pub name: String,
    /// Optional phone number.
    #[serde(rename = "phoneNo", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional free-text description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
}

/// One lending/borrowing engagement ("dheeto") with a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Backend-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: LedgerId,
    /// The person this ledger belongs to.
    pub person_id: PersonId,
    /// Optional free-text description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Manually toggled settlement flag. Never derived from the balance.
    pub is_settled: bool,
    /// Items recorded in this ledger.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Cash movements recorded in this ledger.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Balance precomputed by the backend. Informational only.
    #[serde(rename = "dheetoBalance", default, skip_serializing_if = "Option::is_none")]
    pub reported_balance: Option<Decimal>,
    /// When the ledger was created.
    pub created_at: DateTime<Utc>,
    /// When the ledger was last modified.
    pub updated_at: DateTime<Utc>,
}

/// A physical gold or silver object recorded within a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Backend-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: ItemId,
    /// Item name (non-empty).
    pub name: String,
    /// Metal type.
    #[serde(rename = "type")]
    pub metal: MetalType,
    /// Purity, in whatever unit the caller records (percentage or carat).
    pub purity: Decimal,
    /// Weight in tola.
    pub weight_in_tola: Decimal,
    /// Optional free-text description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the item has been settled.
    #[serde(default)]
    pub is_settled: bool,
    /// When the item was settled. Present iff `is_settled`.
    #[serde(default)]
    pub settled_at: Option<DateTime<Utc>>,
    /// When the item was recorded.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Checks that the settlement flag and timestamp agree.
    pub fn check_settlement_pair(&self) -> Result<(), LedgerError> {
        if self.is_settled == self.settled_at.is_some() {
            Ok(())
        } else {
            Err(LedgerError::SettlementMismatch {
                item_id: self.id.clone(),
            })
        }
    }
}

/// A directional cash movement within a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Backend-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: TransactionId,
    /// Which way the money moved.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Amount moved (non-negative).
    pub amount: Decimal,
    /// Optional free-text description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns the signed amount (positive for received, negative for gave).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.direction.signed(self.amount)
    }
}
