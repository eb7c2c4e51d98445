//! HTTP client for the Dheeto ledger backend.
//!
//! - [`LedgerApi`]: the backend contract as an async trait
//! - [`ApiClient`]: its reqwest implementation
//! - [`LedgerOverview`]: person and ledger views computed locally from
//!   raw backend records

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod overview;

pub use api::LedgerApi;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ApiClient;
pub use overview::{LedgerOverview, PersonOverview};
