//! Ledger aggregation model.
//!
//! This module derives every displayed figure from raw ledger records:
//! - Cash totals and balance per ledger
//! - Item weight totals by metal and item settlement
//! - Per-ledger summary (stored settled flag passed through)
//! - Per-person roll-up across ledgers
//! - Validation of user-entered drafts
//!
//! Everything here is pure: no I/O and no shared state. Recompute from the
//! freshest records after any mutation; nothing is cached.

pub mod balance;
pub mod error;
pub mod input;
pub mod items;
pub mod person;
pub mod summary;
pub mod types;

#[cfg(test)]
mod balance_props;
#[cfg(test)]
mod person_props;

pub use balance::{CashTotals, compute_cash_totals, compute_ledger_balance};
pub use error::LedgerError;
pub use input::{
    ItemDraft, NewItem, NewPerson, NewTransaction, NumericField, PersonDraft, TransactionDraft,
    parse_decimal_field,
};
pub use items::{WeightTotals, compute_weight_totals, count_unsettled_items, set_item_settlement};
pub use person::{PersonSummary, aggregate_person, aggregate_person_checked};
pub use summary::{LedgerSummary, summarize_ledger};
pub use types::{Direction, Item, Ledger, MetalType, Person, Transaction};
