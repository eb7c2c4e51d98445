//! Dheeto CLI
//!
//! Prints person and ledger totals computed locally from backend records.

mod cli;

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dheeto_client::models::{LedgerSearch, PersonListQuery, SettledFilter};
use dheeto_client::{ApiClient, ClientConfig, LedgerApi, LedgerOverview, PersonOverview};
use dheeto_core::ledger::{Ledger, LedgerSummary, summarize_ledger};
use dheeto_shared::types::{ItemId, LedgerId, PageRequest, PersonId};
use dheeto_shared::{AppConfig, AppError, AppResult};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dheeto=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), "command failed");
            eprintln!("error [{}]: {err}", err.error_code());
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(command: Commands) -> AppResult<()> {
    // Load configuration
    let config = AppConfig::load()?;
    let client_config = ClientConfig::from(&config.api);
    let page_size = client_config.page_size;
    let client = ApiClient::new(&client_config)?;
    info!(base_url = %client.base_url(), "using ledger backend");

    let overview = LedgerOverview::new(client, page_size);

    match command {
        Commands::Persons { page } => {
            let query = PersonListQuery::page(PageRequest::new(page, page_size));
            let persons = overview.api().fetch_persons(&query).await?;
            for record in &persons.data {
                println!(
                    "{}\t{}\tbalance {}\tgold {}\tsilver {}",
                    record.person.id,
                    record.person.name,
                    display_or_dash(record.total_balance),
                    display_or_dash(record.total_gold),
                    display_or_dash(record.total_silver),
                );
            }
            let meta = persons.pagination;
            println!(
                "page {}/{} ({} persons)",
                meta.current_page, meta.total_pages, meta.total_records
            );
        }
        Commands::Person { id } => {
            let person = overview.person_overview(&PersonId::new(id)).await?;
            print_person(&person);
        }
        Commands::Ledger { id } => {
            let (ledger, summary) = overview.ledger_overview(&LedgerId::new(id)).await?;
            print_ledger(&ledger, &summary);
        }
        Commands::SearchLedgers {
            person,
            settled,
            desc,
        } => {
            let query = LedgerSearch {
                person_id: person.map(PersonId::new),
                is_settled: SettledFilter::from(settled),
                description: desc,
                page: 1,
                limit: page_size,
                ..LedgerSearch::default()
            };
            let found = overview.api().search_ledgers(&query).await?;
            let total = found.pagination.total_records;
            for record in found.data {
                let ledger = overview.complete_ledger(record).await?;
                let summary = summarize_ledger(&ledger)?;
                println!(
                    "{}\t{}\tbalance {}\t{}",
                    ledger.id,
                    ledger.description.as_deref().unwrap_or("-"),
                    summary.balance,
                    settled_label(summary.is_settled),
                );
            }
            println!("{total} ledgers found");
        }
        Commands::SettleLedger { id, unsettle } => {
            let ledger = overview
                .set_ledger_settled(&LedgerId::new(id), !unsettle)
                .await?;
            println!("{} is now {}", ledger.id, settled_label(ledger.is_settled));
        }
        Commands::ToggleItem { ledger, item } => {
            let ledger_id = LedgerId::new(ledger);
            let item_id = ItemId::new(item);
            let (current, _) = overview.ledger_overview(&ledger_id).await?;
            let target = current
                .items
                .iter()
                .find(|candidate| candidate.id == item_id)
                .ok_or_else(|| {
                    AppError::NotFound(format!("item {item_id} in ledger {ledger_id}"))
                })?;
            let updated = overview
                .toggle_item_settlement(&ledger_id, target, Utc::now())
                .await?;
            let summary = summarize_ledger(&updated)?;
            print_ledger(&updated, &summary);
        }
    }

    Ok(())
}

fn print_person(overview: &PersonOverview) {
    let person = &overview.person.person;
    let summary = &overview.summary;
    println!("{} ({})", person.name, person.id);
    if let Some(phone) = &person.phone {
        println!("phone: {phone}");
    }
    println!("balance: {}", summary.total_balance);
    println!(
        "gold: {} tola, silver: {} tola",
        summary.total_gold, summary.total_silver
    );
    println!(
        "ledgers: {} ({} unsettled)",
        summary.ledger_count, summary.unsettled_ledger_count
    );
    for ledger in &overview.ledgers {
        println!(
            "  {}\tbalance {}\tgold {}\tsilver {}\t{}",
            ledger.ledger_id,
            ledger.balance,
            ledger.total_gold_weight,
            ledger.total_silver_weight,
            settled_label(ledger.is_settled),
        );
    }
}

fn print_ledger(ledger: &Ledger, summary: &LedgerSummary) {
    println!(
        "{} ({})",
        ledger.description.as_deref().unwrap_or("ledger"),
        ledger.id
    );
    println!("owner: {}", ledger.person_id);
    println!(
        "gave: {}, received: {}, balance: {}",
        summary.total_gave, summary.total_received, summary.balance
    );
    println!(
        "gold: {} tola, silver: {} tola",
        summary.total_gold_weight, summary.total_silver_weight
    );
    println!(
        "{}, {} unsettled items",
        settled_label(summary.is_settled),
        summary.unsettled_item_count
    );
    for item in &ledger.items {
        println!(
            "  item {}\t{}\t{}\t{} tola\t{}",
            item.id,
            item.name,
            item.metal,
            item.weight_in_tola,
            settled_label(item.is_settled),
        );
    }
    for tx in &ledger.transactions {
        println!(
            "  tx {}\t{}\t{}\t{}",
            tx.id,
            tx.direction,
            tx.amount,
            tx.created_at.format("%Y-%m-%d")
        );
    }
}

fn settled_label(settled: bool) -> &'static str {
    if settled { "settled" } else { "unsettled" }
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
