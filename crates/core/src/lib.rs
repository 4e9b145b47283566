//! Core business logic for ShopLedger.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached through the `EntryStore` trait, implemented by the db crate.
//!
//! # Modules
//!
//! - `calendar` - Business-day windows in the configured timezone
//! - `ledger` - Entry lifecycle, access policy and projections
//! - `reports` - Daily, range, summary and per-user aggregations

pub mod calendar;
pub mod ledger;
pub mod reports;
