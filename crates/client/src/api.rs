//! The backend contract as a trait.

use async_trait::async_trait;
use dheeto_core::ledger::{Item, NewItem, NewPerson, NewTransaction, Transaction};
use dheeto_shared::types::{ItemId, LedgerId, PageResponse, PersonId, TransactionId};

use crate::error::ClientError;
use crate::models::{
    CreateLedger, ItemUpdate, LedgerListQuery, LedgerRecord, LedgerSearch, LedgerUpdate,
    PersonListQuery, PersonRecord, PersonSearch, PersonUpdate, TransactionUpdate,
};

/// Operations offered by the external ledger backend.
///
/// Item and transaction mutations return the owning ledger as updated by
/// the backend. Ledger responses may omit their items or transactions;
/// see [`LedgerRecord`]. Deletes return the backend's confirmation message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerApi: Send + Sync {
    // ========== Persons ==========
    /// `POST /add-person`
    async fn create_person(&self, person: &NewPerson) -> Result<PersonRecord, ClientError>;

    /// `GET /all-person`
    async fn fetch_persons(
        &self,
        query: &PersonListQuery,
    ) -> Result<PageResponse<PersonRecord>, ClientError>;

    /// `GET /search-person`
    async fn search_persons(
        &self,
        query: &PersonSearch,
    ) -> Result<PageResponse<PersonRecord>, ClientError>;

    /// `GET /person/{id}`
    async fn fetch_person(&self, id: &PersonId) -> Result<PersonRecord, ClientError>;

    /// `PUT /person/{id}`
    async fn update_person(
        &self,
        id: &PersonId,
        update: &PersonUpdate,
    ) -> Result<PersonRecord, ClientError>;

    /// `DELETE /person/{id}`. The backend also deletes the person's ledgers.
    async fn delete_person(&self, id: &PersonId) -> Result<String, ClientError>;

    // ========== Ledgers ==========
    /// `POST /add-dheeto`
    async fn create_ledger(&self, ledger: &CreateLedger) -> Result<LedgerRecord, ClientError>;

    /// `GET /dheeto/{id}`
    async fn fetch_ledger(&self, id: &LedgerId) -> Result<LedgerRecord, ClientError>;

    /// `GET /all-dheetos`
    async fn fetch_ledgers(
        &self,
        query: &LedgerListQuery,
    ) -> Result<PageResponse<LedgerRecord>, ClientError>;

    /// `GET /search-dheetos`
    async fn search_ledgers(
        &self,
        query: &LedgerSearch,
    ) -> Result<PageResponse<LedgerRecord>, ClientError>;

    /// `PUT /dheeto/{id}`
    async fn update_ledger(
        &self,
        id: &LedgerId,
        update: &LedgerUpdate,
    ) -> Result<LedgerRecord, ClientError>;

    /// `DELETE /dheeto/{id}`
    async fn delete_ledger(&self, id: &LedgerId) -> Result<String, ClientError>;

    // ========== Items ==========
    /// `POST /dheeto/{id}/add-item`
    async fn add_item(
        &self,
        ledger_id: &LedgerId,
        item: &NewItem,
    ) -> Result<LedgerRecord, ClientError>;

    /// `GET /dheeto/{id}/items`
    async fn fetch_items(&self, ledger_id: &LedgerId) -> Result<Vec<Item>, ClientError>;

    /// `PUT /dheeto/{id}/item/{itemId}`
    async fn update_item(
        &self,
        ledger_id: &LedgerId,
        item_id: &ItemId,
        update: &ItemUpdate,
    ) -> Result<LedgerRecord, ClientError>;

    /// `DELETE /dheeto/{id}/item/{itemId}`
    async fn delete_item(
        &self,
        ledger_id: &LedgerId,
        item_id: &ItemId,
    ) -> Result<String, ClientError>;

    // ========== Transactions ==========
    /// `GET /dheeto/{id}/transactions`
    async fn fetch_transactions(
        &self,
        ledger_id: &LedgerId,
    ) -> Result<Vec<Transaction>, ClientError>;

    /// `POST /dheeto/{id}/add-transaction`
    async fn add_transaction(
        &self,
        ledger_id: &LedgerId,
        transaction: &NewTransaction,
    ) -> Result<LedgerRecord, ClientError>;

    /// `PUT /dheeto/{id}/transaction/{transactionId}`
    async fn update_transaction(
        &self,
        ledger_id: &LedgerId,
        transaction_id: &TransactionId,
        update: &TransactionUpdate,
    ) -> Result<LedgerRecord, ClientError>;

    /// `DELETE /dheeto/{id}/transaction/{transactionId}`
    async fn delete_transaction(
        &self,
        ledger_id: &LedgerId,
        transaction_id: &TransactionId,
    ) -> Result<String, ClientError>;
}
