//! reqwest implementation of [`LedgerApi`].

use async_trait::async_trait;
use dheeto_core::ledger::{Item, NewItem, NewPerson, NewTransaction, Transaction};
use dheeto_shared::types::{ItemId, LedgerId, PageResponse, PersonId, TransactionId};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::LedgerApi;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::models::{
    CreateLedger, ItemUpdate, LedgerListQuery, LedgerRecord, LedgerSearch, LedgerUpdate,
    PersonListQuery, PersonRecord, PersonSearch, PersonUpdate, TransactionUpdate,
};

/// HTTP client for the ledger backend.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Builds a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is empty or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ClientError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "ledger backend unreachable");
            ClientError::Http(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "ledger backend responded");

        let envelope = decode_envelope::<T>(status, &body)?;
        if !envelope.success {
            warn!(
                %status,
                message = envelope.message.as_deref().unwrap_or_default(),
                "ledger backend returned failure envelope"
            );
        }
        Ok(envelope)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.client.get(self.url(path))).await?.into_data()
    }

    async fn delete(&self, path: &str) -> Result<String, ClientError> {
        self.send::<serde_json::Value>(self.client.delete(self.url(path)))
            .await?
            .into_message()
    }
}

/// Parses a response body into an envelope.
///
/// A body that is not an envelope is `ClientError::Api` naming the status
/// when the status is an error, and `ClientError::Decode` otherwise.
fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Envelope<T>, ClientError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(ClientError::Api(format!(
            "backend returned {status} without an envelope"
        ))),
        Err(e) => Err(ClientError::Decode(e)),
    }
}

#[async_trait]
impl LedgerApi for ApiClient {
    async fn create_person(&self, person: &NewPerson) -> Result<PersonRecord, ClientError> {
        self.send(self.client.post(self.url("/add-person")).json(person))
            .await?
            .into_data()
    }

    async fn fetch_persons(
        &self,
        query: &PersonListQuery,
    ) -> Result<PageResponse<PersonRecord>, ClientError> {
        self.send(self.client.get(self.url("/all-person")).query(query))
            .await?
            .into_page()
    }

    async fn search_persons(
        &self,
        query: &PersonSearch,
    ) -> Result<PageResponse<PersonRecord>, ClientError> {
        self.send(self.client.get(self.url("/search-person")).query(query))
            .await?
            .into_page()
    }

    async fn fetch_person(&self, id: &PersonId) -> Result<PersonRecord, ClientError> {
        self.get_data(&format!("/person/{id}")).await
    }

    async fn update_person(
        &self,
        id: &PersonId,
        update: &PersonUpdate,
    ) -> Result<PersonRecord, ClientError> {
        self.send(self.client.put(self.url(&format!("/person/{id}"))).json(update))
            .await?
            .into_data()
    }

    async fn delete_person(&self, id: &PersonId) -> Result<String, ClientError> {
        self.delete(&format!("/person/{id}")).await
    }

    async fn create_ledger(&self, ledger: &CreateLedger) -> Result<LedgerRecord, ClientError> {
        self.send(self.client.post(self.url("/add-dheeto")).json(ledger))
            .await?
            .into_data()
    }

    async fn fetch_ledger(&self, id: &LedgerId) -> Result<LedgerRecord, ClientError> {
        self.get_data(&format!("/dheeto/{id}")).await
    }

    async fn fetch_ledgers(
        &self,
        query: &LedgerListQuery,
    ) -> Result<PageResponse<LedgerRecord>, ClientError> {
        self.send(self.client.get(self.url("/all-dheetos")).query(query))
            .await?
            .into_page()
    }

    async fn search_ledgers(
        &self,
        query: &LedgerSearch,
    ) -> Result<PageResponse<LedgerRecord>, ClientError> {
        self.send(self.client.get(self.url("/search-dheetos")).query(query))
            .await?
            .into_page()
    }

    async fn update_ledger(
        &self,
        id: &LedgerId,
        update: &LedgerUpdate,
    ) -> Result<LedgerRecord, ClientError> {
        self.send(self.client.put(self.url(&format!("/dheeto/{id}"))).json(update))
            .await?
            .into_data()
    }

    async fn delete_ledger(&self, id: &LedgerId) -> Result<String, ClientError> {
        self.delete(&format!("/dheeto/{id}")).await
    }

    async fn add_item(
        &self,
        ledger_id: &LedgerId,
        item: &NewItem,
    ) -> Result<LedgerRecord, ClientError> {
        let url = self.url(&format!("/dheeto/{ledger_id}/add-item"));
        self.send(self.client.post(url).json(item)).await?.into_data()
    }

    async fn fetch_items(&self, ledger_id: &LedgerId) -> Result<Vec<Item>, ClientError> {
        self.get_data(&format!("/dheeto/{ledger_id}/items")).await
    }

    async fn update_item(
        &self,
        ledger_id: &LedgerId,
        item_id: &ItemId,
        update: &ItemUpdate,
    ) -> Result<LedgerRecord, ClientError> {
        let url = self.url(&format!("/dheeto/{ledger_id}/item/{item_id}"));
        self.send(self.client.put(url).json(update)).await?.into_data()
    }

    async fn delete_item(
        &self,
        ledger_id: &LedgerId,
        item_id: &ItemId,
    ) -> Result<String, ClientError> {
        self.delete(&format!("/dheeto/{ledger_id}/item/{item_id}"))
            .await
    }

    async fn fetch_transactions(
        &self,
        ledger_id: &LedgerId,
    ) -> Result<Vec<Transaction>, ClientError> {
        self.get_data(&format!("/dheeto/{ledger_id}/transactions"))
            .await
    }

    async fn add_transaction(
        &self,
        ledger_id: &LedgerId,
        transaction: &NewTransaction,
    ) -> Result<LedgerRecord, ClientError> {
        let url = self.url(&format!("/dheeto/{ledger_id}/add-transaction"));
        self.send(self.client.post(url).json(transaction))
            .await?
            .into_data()
    }

    async fn update_transaction(
        &self,
        ledger_id: &LedgerId,
        transaction_id: &TransactionId,
        update: &TransactionUpdate,
    ) -> Result<LedgerRecord, ClientError> {
        let url = self.url(&format!("/dheeto/{ledger_id}/transaction/{transaction_id}"));
        self.send(self.client.put(url).json(update)).await?.into_data()
    }

    async fn delete_transaction(
        &self,
        ledger_id: &LedgerId,
        transaction_id: &TransactionId,
    ) -> Result<String, ClientError> {
        self.delete(&format!("/dheeto/{ledger_id}/transaction/{transaction_id}"))
            .await
    }
}
