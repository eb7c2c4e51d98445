//! Core business logic for Dheeto.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Balance, weight, settlement and per-person aggregation

pub mod ledger;
