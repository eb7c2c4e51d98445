//! Locally computed views over backend data.
//!
//! The backend precomputes person totals, but every figure shown to a
//! user is recomputed here from raw items and transactions. A person
//! overview is only produced once *all* of the person's ledgers have been
//! fetched, each with its items and transactions; a failed page aborts the
//! whole overview.

use chrono::{DateTime, Utc};
use dheeto_core::ledger::{
    Item, Ledger, LedgerSummary, PersonSummary, aggregate_person_checked, summarize_ledger,
};
use dheeto_shared::types::{LedgerId, PageRequest, PersonId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::LedgerApi;
use crate::error::ClientError;
use crate::models::{ItemUpdate, LedgerListQuery, LedgerRecord, LedgerUpdate, PersonRecord};

/// A person with freshly computed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonOverview {
    /// The person as served by the backend.
    pub person: PersonRecord,
    /// Per-ledger summaries, in backend order.
    pub ledgers: Vec<LedgerSummary>,
    /// Totals across all ledgers.
    pub summary: PersonSummary,
}

/// Service computing overviews on top of a [`LedgerApi`].
#[derive(Debug, Clone)]
pub struct LedgerOverview<A> {
    api: A,
    page_size: u32,
}

impl<A: LedgerApi> LedgerOverview<A> {
    /// Creates the service. `page_size` is clamped to at least 1.
    #[must_use]
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
        }
    }

    /// The underlying API.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fills in the collections a ledger response omitted.
    ///
    /// Omitted items or transactions are loaded from their own endpoints.
    /// Collections the response embedded, even empty ones, are used as is.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if loading a missing collection fails.
    pub async fn complete_ledger(&self, record: LedgerRecord) -> Result<Ledger, ClientError> {
        let LedgerRecord {
            mut ledger,
            items,
            transactions,
        } = record;

        ledger.items = match items {
            Some(items) => items,
            None => {
                debug!(ledger_id = %ledger.id, "ledger response omitted items");
                self.api.fetch_items(&ledger.id).await?
            }
        };
        ledger.transactions = match transactions {
            Some(transactions) => transactions,
            None => {
                debug!(ledger_id = %ledger.id, "ledger response omitted transactions");
                self.api.fetch_transactions(&ledger.id).await?
            }
        };

        Ok(ledger)
    }

    /// Fetches every ledger of `person_id`, walking all pages.
    ///
    /// Each ledger is completed with [`complete_ledger`](Self::complete_ledger).
    ///
    /// # Errors
    ///
    /// Returns the first page or collection error, or `ClientError::Api` if
    /// the backend reports a next page that does not advance.
    pub async fn fetch_person_ledgers(
        &self,
        person_id: &PersonId,
    ) -> Result<Vec<Ledger>, ClientError> {
        let mut request = PageRequest::new(1, self.page_size);
        let mut records = Vec::new();

        loop {
            let query = LedgerListQuery::for_person(person_id.clone(), request);
            let page = self.api.fetch_ledgers(&query).await?;
            debug!(
                person_id = %person_id,
                page = request.page,
                records = page.data.len(),
                total_records = page.pagination.total_records,
                "fetched ledger page"
            );
            records.extend(page.data);

            match page.pagination.next_page() {
                Some(next) if next > request.page => {
                    request = PageRequest::new(next, self.page_size);
                }
                Some(next) => {
                    return Err(ClientError::Api(format!(
                        "pagination did not advance past page {} (next reported as {next})",
                        request.page
                    )));
                }
                None => break,
            }
        }

        let mut ledgers = Vec::with_capacity(records.len());
        for record in records {
            ledgers.push(self.complete_ledger(record).await?);
        }
        Ok(ledgers)
    }

    /// Builds the overview of one person from all of their ledgers.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if any fetch fails, and
    /// `ClientError::Ledger` if a ledger belongs to another person or
    /// fails validation.
    pub async fn person_overview(
        &self,
        person_id: &PersonId,
    ) -> Result<PersonOverview, ClientError> {
        let person = self.api.fetch_person(person_id).await?;
        let ledgers = self.fetch_person_ledgers(person_id).await?;

        let summary = aggregate_person_checked(person_id, &ledgers)?;
        let ledger_summaries = ledgers
            .iter()
            .map(summarize_ledger)
            .collect::<Result<Vec<_>, _>>()?;

        report_person_drift(&person, &summary);
        info!(
            person_id = %person_id,
            ledgers = summary.ledger_count,
            unsettled = summary.unsettled_ledger_count,
            "person overview computed"
        );

        Ok(PersonOverview {
            person,
            ledgers: ledger_summaries,
            summary,
        })
    }

    /// Fetches one ledger, completes it and summarizes it.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if a fetch fails or the ledger is invalid.
    pub async fn ledger_overview(
        &self,
        ledger_id: &LedgerId,
    ) -> Result<(Ledger, LedgerSummary), ClientError> {
        let record = self.api.fetch_ledger(ledger_id).await?;
        let ledger = self.complete_ledger(record).await?;
        let summary = summarize_ledger(&ledger)?;

        if let Some(reported) = ledger.reported_balance
            && reported != summary.balance
        {
            warn!(
                ledger_id = %ledger_id,
                %reported,
                computed = %summary.balance,
                "backend ledger balance differs from computed balance"
            );
        }

        Ok((ledger, summary))
    }

    /// Flips an item's settlement state, stamping `now` when settling.
    ///
    /// Returns the updated ledger, completed.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the update fails.
    pub async fn toggle_item_settlement(
        &self,
        ledger_id: &LedgerId,
        item: &Item,
        now: DateTime<Utc>,
    ) -> Result<Ledger, ClientError> {
        let update = ItemUpdate::settlement(item, !item.is_settled, now);
        debug!(
            ledger_id = %ledger_id,
            item_id = %item.id,
            settled = !item.is_settled,
            "toggling item settlement"
        );
        let record = self.api.update_item(ledger_id, &item.id, &update).await?;
        self.complete_ledger(record).await
    }

    /// Sets the manual settlement flag of a ledger.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the update fails.
    pub async fn set_ledger_settled(
        &self,
        ledger_id: &LedgerId,
        settled: bool,
    ) -> Result<Ledger, ClientError> {
        let record = self
            .api
            .update_ledger(ledger_id, &LedgerUpdate::settled(settled))
            .await?;
        self.complete_ledger(record).await
    }
}

fn report_person_drift(person: &PersonRecord, summary: &PersonSummary) {
    let id = &person.person.id;
    let checks: [(&str, Option<Decimal>, Decimal); 3] = [
        ("totalBalance", person.total_balance, summary.total_balance),
        ("totalGold", person.total_gold, summary.total_gold),
        ("totalSilver", person.total_silver, summary.total_silver),
    ];
    for (field, reported, computed) in checks {
        if let Some(reported) = reported
            && reported != computed
        {
            warn!(
                person_id = %id,
                field,
                %reported,
                %computed,
                "backend total differs from computed total"
            );
        }
    }

    let counts = [
        ("totalDheetosCount", person.total_ledger_count, summary.ledger_count),
        (
            "unsettledDheetosCount",
            person.unsettled_ledger_count,
            summary.unsettled_ledger_count,
        ),
    ];
    for (field, reported, computed) in counts {
        if let Some(reported) = reported
            && usize::try_from(reported).ok() != Some(computed)
        {
            warn!(
                person_id = %id,
                field,
                reported,
                computed,
                "backend count differs from computed count"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockLedgerApi;
    use chrono::TimeZone;
    use dheeto_core::ledger::{Direction, LedgerError, MetalType, Person, Transaction};
    use dheeto_shared::types::{ItemId, PageMeta, PageResponse, TransactionId};
    use rust_decimal_macros::dec;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn record(id: &str) -> PersonRecord {
        PersonRecord {
            person: Person {
                id: PersonId::new(id),
                name: "Ram".into(),
                phone: None,
                description: None,
                created_at: at(),
            },
            total_balance: Some(dec!(200)),
            total_gold: None,
            total_silver: None,
            total_ledger_count: Some(2),
            unsettled_ledger_count: Some(1),
        }
    }

    fn item(metal: MetalType, weight: Decimal, settled: bool) -> Item {
        Item {
            id: ItemId::new("i1"),
            name: "Ring".into(),
            metal,
            purity: dec!(22),
            weight_in_tola: weight,
            description: None,
            is_settled: settled,
            settled_at: settled.then(at),
            created_at: at(),
        }
    }

    fn transaction(direction: Direction, amount: Decimal) -> Transaction {
        Transaction {
            id: TransactionId::new("t1"),
            direction,
            amount,
            description: None,
            created_at: at(),
        }
    }

    fn ledger(
        id: &str,
        person: &str,
        is_settled: bool,
        items: Vec<Item>,
        transactions: Vec<Transaction>,
    ) -> Ledger {
        Ledger {
            id: LedgerId::new(id),
            person_id: PersonId::new(person),
            description: None,
            is_settled,
            items,
            transactions,
            reported_balance: None,
            created_at: at(),
            updated_at: at(),
        }
    }

    fn page(data: Vec<Ledger>, current: u32, limit: u32, total: u64) -> PageResponse<LedgerRecord> {
        PageResponse {
            data: data.into_iter().map(LedgerRecord::from).collect(),
            pagination: PageMeta::from_counts(current, limit, total),
        }
    }

    fn bare(ledger: Ledger) -> LedgerRecord {
        LedgerRecord {
            ledger,
            items: None,
            transactions: None,
        }
    }

    #[tokio::test]
    async fn test_person_overview_walks_every_page() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_person()
            .times(1)
            .returning(|id| Ok(record(id.as_str())));
        api.expect_fetch_ledgers()
            .withf(|q| q.page == 1 && q.limit == 1 && q.person_id == Some(PersonId::new("p1")))
            .times(1)
            .returning(|_| {
                Ok(page(
                    vec![ledger(
                        "d1",
                        "p1",
                        false,
                        vec![item(MetalType::Gold, dec!(2.0), false)],
                        vec![transaction(Direction::Received, dec!(500))],
                    )],
                    1,
                    1,
                    2,
                ))
            });
        api.expect_fetch_ledgers()
            .withf(|q| q.page == 2)
            .times(1)
            .returning(|_| {
                Ok(page(
                    vec![ledger(
                        "d2",
                        "p1",
                        true,
                        vec![item(MetalType::Silver, dec!(1.5), true)],
                        vec![transaction(Direction::Gave, dec!(300))],
                    )],
                    2,
                    1,
                    2,
                ))
            });

        let overview = LedgerOverview::new(api, 1)
            .person_overview(&PersonId::new("p1"))
            .await
            .unwrap();

        assert_eq!(overview.ledgers.len(), 2);
        assert_eq!(overview.summary.total_balance, dec!(200));
        assert_eq!(overview.summary.total_gold, dec!(2.0));
        assert_eq!(overview.summary.total_silver, dec!(1.5));
        assert_eq!(overview.summary.unsettled_ledger_count, 1);
        assert_eq!(overview.summary.ledger_count, 2);
        assert_eq!(overview.ledgers[1].balance, dec!(-300));
    }

    #[tokio::test]
    async fn test_failed_page_aborts_overview() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_person()
            .returning(|id| Ok(record(id.as_str())));
        api.expect_fetch_ledgers()
            .withf(|q| q.page == 1)
            .returning(|_| Ok(page(vec![ledger("d1", "p1", false, vec![], vec![])], 1, 1, 2)));
        api.expect_fetch_ledgers()
            .withf(|q| q.page == 2)
            .returning(|_| Err(ClientError::Api("Server error".into())));

        let result = LedgerOverview::new(api, 1)
            .person_overview(&PersonId::new("p1"))
            .await;

        assert!(matches!(result, Err(ClientError::Api(msg)) if msg == "Server error"));
    }

    #[tokio::test]
    async fn test_foreign_ledger_rejected() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_person()
            .returning(|id| Ok(record(id.as_str())));
        api.expect_fetch_ledgers()
            .returning(|_| Ok(page(vec![ledger("d9", "p2", false, vec![], vec![])], 1, 50, 1)));

        let result = LedgerOverview::new(api, 50)
            .person_overview(&PersonId::new("p1"))
            .await;

        assert!(matches!(
            result,
            Err(ClientError::Ledger(LedgerError::ForeignLedger { .. }))
        ));
    }

    #[tokio::test]
    async fn test_stalled_pagination_is_an_error() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_ledgers().times(1).returning(|_| {
            let mut response = page(vec![], 1, 1, 3);
            response.pagination.current_page = 0;
            Ok(response)
        });

        let result = LedgerOverview::new(api, 1)
            .fetch_person_ledgers(&PersonId::new("p1"))
            .await;

        assert!(matches!(result, Err(ClientError::Api(_))));
    }

    #[tokio::test]
    async fn test_ledger_overview() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_ledger().returning(|id| {
            let mut l = ledger(
                id.as_str(),
                "p1",
                false,
                vec![item(MetalType::Gold, dec!(0.5), false)],
                vec![
                    transaction(Direction::Gave, dec!(500)),
                    transaction(Direction::Received, dec!(1200)),
                    transaction(Direction::Gave, dec!(200)),
                ],
            );
            l.reported_balance = Some(dec!(500));
            Ok(l.into())
        });

        let (ledger, summary) = LedgerOverview::new(api, 50)
            .ledger_overview(&LedgerId::new("d1"))
            .await
            .unwrap();

        assert_eq!(ledger.id.as_str(), "d1");
        assert_eq!(summary.balance, dec!(500));
        assert_eq!(summary.total_gave, dec!(700));
        assert_eq!(summary.total_received, dec!(1200));
        assert_eq!(summary.total_gold_weight, dec!(0.5));
        assert_eq!(summary.unsettled_item_count, 1);
    }

    #[tokio::test]
    async fn test_ledger_overview_loads_omitted_collections() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_ledger()
            .returning(|id| Ok(bare(ledger(id.as_str(), "p1", false, vec![], vec![]))));
        api.expect_fetch_items()
            .withf(|id| id.as_str() == "d1")
            .times(1)
            .returning(|_| Ok(vec![item(MetalType::Silver, dec!(4), false)]));
        api.expect_fetch_transactions()
            .withf(|id| id.as_str() == "d1")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    transaction(Direction::Gave, dec!(300)),
                    transaction(Direction::Received, dec!(100)),
                ])
            });

        let (ledger, summary) = LedgerOverview::new(api, 50)
            .ledger_overview(&LedgerId::new("d1"))
            .await
            .unwrap();

        assert_eq!(ledger.items.len(), 1);
        assert_eq!(ledger.transactions.len(), 2);
        assert_eq!(summary.balance, dec!(-200));
        assert_eq!(summary.total_silver_weight, dec!(4));
    }

    #[tokio::test]
    async fn test_embedded_empty_collections_are_not_refetched() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_items().never();
        api.expect_fetch_transactions().never();

        let record = LedgerRecord::from(ledger("d1", "p1", false, vec![], vec![]));
        let ledger = LedgerOverview::new(api, 50)
            .complete_ledger(record)
            .await
            .unwrap();
        assert!(ledger.items.is_empty());
        assert!(ledger.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_failed_collection_fetch_aborts_person_overview() {
        let mut api = MockLedgerApi::new();
        api.expect_fetch_person()
            .returning(|id| Ok(record(id.as_str())));
        api.expect_fetch_ledgers().returning(|_| {
            let mut response = page(vec![], 1, 50, 1);
            response
                .data
                .push(bare(ledger("d1", "p1", false, vec![], vec![])));
            Ok(response)
        });
        api.expect_fetch_items()
            .returning(|_| Err(ClientError::Api("Server error".into())));

        let result = LedgerOverview::new(api, 50)
            .person_overview(&PersonId::new("p1"))
            .await;

        assert!(matches!(result, Err(ClientError::Api(msg)) if msg == "Server error"));
    }

    #[tokio::test]
    async fn test_toggle_item_settlement_settles_unsettled_item() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut api = MockLedgerApi::new();
        api.expect_update_item()
            .withf(move |ledger_id, item_id, update| {
                ledger_id.as_str() == "d1"
                    && item_id.as_str() == "i1"
                    && update.settlement_change() == Some((true, Some(now)))
            })
            .times(1)
            .returning(|_, _, _| Ok(ledger("d1", "p1", false, vec![], vec![]).into()));

        let target = item(MetalType::Gold, dec!(1), false);
        LedgerOverview::new(api, 50)
            .toggle_item_settlement(&LedgerId::new("d1"), &target, now)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_toggle_item_settlement_clears_timestamp() {
        let mut api = MockLedgerApi::new();
        api.expect_update_item()
            .withf(|_, _, update| update.settlement_change() == Some((false, None)))
            .times(1)
            .returning(|_, _, _| Ok(ledger("d1", "p1", false, vec![], vec![]).into()));

        let target = item(MetalType::Gold, dec!(1), true);
        LedgerOverview::new(api, 50)
            .toggle_item_settlement(&LedgerId::new("d1"), &target, at())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_set_ledger_settled() {
        let mut api = MockLedgerApi::new();
        api.expect_update_ledger()
            .withf(|id, update| id.as_str() == "d1" && update.is_settled == Some(true))
            .times(1)
            .returning(|id, _| Ok(ledger(id.as_str(), "p1", true, vec![], vec![]).into()));

        let updated = LedgerOverview::new(api, 50)
            .set_ledger_settled(&LedgerId::new("d1"), true)
            .await
            .unwrap();
        assert!(updated.is_settled);
    }
}
