//! Request bodies, query parameters and response records for the backend API.

use chrono::{DateTime, Utc};
use dheeto_core::ledger::{
    Direction, Item, Ledger, MetalType, NewItem, NewTransaction, Person, Transaction,
    set_item_settlement,
};
use dheeto_shared::types::{PageRequest, PersonId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A person as served by the backend, including its precomputed totals.
///
/// The totals are informational. Displayed figures come from
/// [`aggregate_person`](dheeto_core::ledger::aggregate_person).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// The stored person.
    #[serde(flatten)]
    pub person: Person,
    /// Backend-computed total balance.
    #[serde(default)]
    pub total_balance: Option<Decimal>,
    /// Backend-computed gold weight.
    #[serde(default)]
    pub total_gold: Option<Decimal>,
    /// Backend-computed silver weight.
    #[serde(default)]
    pub total_silver: Option<Decimal>,
    /// Backend-computed ledger count.
    #[serde(rename = "totalDheetosCount", default)]
    pub total_ledger_count: Option<u64>,
    /// Backend-computed unsettled ledger count.
    #[serde(rename = "unsettledDheetosCount", default)]
    pub unsettled_ledger_count: Option<u64>,
}

/// A ledger as served by the backend.
///
/// Endpoints may omit the `items` and `transactions` arrays. An omitted
/// array is kept as `None` here, distinct from an empty one, so it can be
/// loaded from its own endpoint before anything is aggregated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerRecord {
    /// Ledger fields. `items` and `transactions` are empty until completed.
    #[serde(flatten)]
    pub ledger: Ledger,
    /// Embedded items, if the response carried them.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    /// Embedded transactions, if the response carried them.
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

impl LedgerRecord {
    /// Whether both collections were embedded in the response.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.items.is_some() && self.transactions.is_some()
    }
}

impl From<Ledger> for LedgerRecord {
    fn from(ledger: Ledger) -> Self {
        Self {
            items: Some(ledger.items.clone()),
            transactions: Some(ledger.transactions.clone()),
            ledger,
        }
    }
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

/// Settlement filter for ledger lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SettledFilter {
    /// Settled and unsettled ledgers.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Only settled ledgers.
    #[serde(rename = "true")]
    Settled,
    /// Only unsettled ledgers.
    #[serde(rename = "false")]
    Unsettled,
}

impl From<Option<bool>> for SettledFilter {
    fn from(settled: Option<bool>) -> Self {
        match settled {
            None => Self::All,
            Some(true) => Self::Settled,
            Some(false) => Self::Unsettled,
        }
    }
}

/// Ledger sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LedgerSort {
    /// Creation time.
    CreatedAt,
    /// Last modification time.
    UpdatedAt,
}

/// Query for `GET /all-person`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonListQuery {
    /// Page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Whether fully settled persons are included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_settled: Option<bool>,
}

impl PersonListQuery {
    /// Lists one page with backend-default ordering.
    #[must_use]
    pub fn page(page: PageRequest) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            ..Self::default()
        }
    }
}

/// Query for `GET /search-person`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSearch {
    /// Name substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number substring.
    #[serde(rename = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Lower creation bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    /// Upper creation bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

/// Query for `GET /all-dheetos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerListQuery {
    /// Restrict to one person's ledgers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<PersonId>,
    /// Settlement filter.
    pub is_settled: SettledFilter,
    /// Page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<LedgerSort>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl LedgerListQuery {
    /// All ledgers of `person_id`, one page at a time.
    #[must_use]
    pub fn for_person(person_id: PersonId, page: PageRequest) -> Self {
        Self {
            person_id: Some(person_id),
            page: page.page,
            limit: page.limit,
            ..Self::default()
        }
    }
}

/// Query for `GET /search-dheetos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSearch {
    /// Restrict to one person's ledgers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<PersonId>,
    /// Settlement filter.
    pub is_settled: SettledFilter,
    /// Lower creation bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    /// Upper creation bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Description substring.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

/// Body for `PUT /person/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New phone number.
    #[serde(rename = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST /add-dheeto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLedger {
    /// Owner of the new ledger.
    pub person_id: PersonId,
    /// Optional description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Items seeded on creation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_items: Vec<NewItem>,
    /// Transactions seeded on creation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_transactions: Vec<NewTransaction>,
}

/// Body for `PUT /dheeto/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerUpdate {
    /// New description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New manual settlement flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_settled: Option<bool>,
}

impl LedgerUpdate {
    /// Update that only changes the settlement flag.
    #[must_use]
    pub fn settled(settled: bool) -> Self {
        Self {
            description: None,
            is_settled: Some(settled),
        }
    }
}

/// Body for `PUT /dheeto/{id}/item/{itemId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New metal type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metal: Option<MetalType>,
    /// New purity.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub purity: Option<Decimal>,
    /// New weight in tola.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight_in_tola: Option<Decimal>,
    /// New description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    settlement: Option<SettlementChange>,
}

/// Settlement flag and timestamp, always sent together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct SettlementChange {
    is_settled: bool,
    settled_at: Option<DateTime<Utc>>,
}

impl ItemUpdate {
    /// Update that settles or unsettles an item.
    ///
    /// Uses the same pairing as [`set_item_settlement`]: settling stamps
    /// `now`, unsettling sends an explicit `null` timestamp.
    #[must_use]
    pub fn settlement(item: &Item, settled: bool, now: DateTime<Utc>) -> Self {
        let updated = set_item_settlement(item.clone(), settled, now);
        Self {
            settlement: Some(SettlementChange {
                is_settled: updated.is_settled,
                settled_at: updated.settled_at,
            }),
            ..Self::default()
        }
    }

    /// Update built from a validated item draft.
    #[must_use]
    pub fn details(item: NewItem) -> Self {
        Self {
            name: Some(item.name),
            metal: Some(item.metal),
            purity: Some(item.purity),
            weight_in_tola: Some(item.weight_in_tola),
            description: item.description,
            settlement: None,
        }
    }

    /// The settlement change carried by this update, if any.
    #[must_use]
    pub fn settlement_change(&self) -> Option<(bool, Option<DateTime<Utc>>)> {
        self.settlement
            .as_ref()
            .map(|change| (change.is_settled, change.settled_at))
    }
}

/// Body for `PUT /dheeto/{id}/transaction/{transactionId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionUpdate {
    /// New direction.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// New amount.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// New description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<NewTransaction> for TransactionUpdate {
    fn from(tx: NewTransaction) -> Self {
        Self {
            direction: Some(tx.direction),
            amount: Some(tx.amount),
            description: tx.description,
        }
    }
}
